use super::reader::Reader;
use super::{put_point, put_u32};
use crate::cfg::{COUNT_BYTES, VERTEX_BYTES};
use crate::error::FormatError;
use crate::types::Point;

/// Decode `[u32 N][N × (f32 x, f32 y)]` into points, widened to `f64`.
///
/// Fails with "too short" when the count is missing and with "length mismatch"
/// when the remainder is not exactly `8N` bytes (trailing bytes included).
pub fn decode_point_set(bytes: &[u8]) -> Result<Vec<Point>, FormatError> {
    let mut r = Reader::new(bytes);
    let n = r
        .u32()
        .ok_or(FormatError::too_short("point count missing"))? as usize;
    // u64 arithmetic: a hostile count must not overflow on 32-bit targets.
    if r.remaining() as u64 != n as u64 * VERTEX_BYTES as u64 {
        return Err(FormatError::length_mismatch(
            "point block does not match declared count",
        ));
    }
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        points.push(
            r.point()
                .ok_or(FormatError::too_short("point block truncated"))?,
        );
    }
    Ok(points)
}

/// Encode points in the ingestion format; inverse of `decode_point_set` up to `f32` rounding.
pub fn encode_point_set(points: &[Point]) -> Vec<u8> {
    let mut out = Vec::with_capacity(COUNT_BYTES + points.len() * VERTEX_BYTES);
    put_u32(&mut out, points.len() as u32);
    for p in points {
        put_point(&mut out, p);
    }
    out
}
