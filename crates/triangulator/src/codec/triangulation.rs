use super::reader::Reader;
use super::{put_point, put_u32};
use crate::cfg::{COUNT_BYTES, TRIANGLE_BYTES, VERTEX_BYTES};
use crate::error::FormatError;
use crate::types::{Triangle, Triangulation};

/// Encode a triangulation. The output is exactly `t.encoded_len()` bytes.
pub fn encode_triangulation(t: &Triangulation) -> Vec<u8> {
    let mut out = Vec::with_capacity(t.encoded_len());
    put_u32(&mut out, t.vertices.len() as u32);
    for v in &t.vertices {
        put_point(&mut out, v);
    }
    put_u32(&mut out, t.triangles.len() as u32);
    for tri in &t.triangles {
        for &i in tri {
            put_u32(&mut out, i);
        }
    }
    out
}

/// Decode a triangulation payload.
///
/// Checks, in order:
/// 1. at least 4 bytes for `V` ("too short");
/// 2. at least `4 + 8V + 4` bytes for the vertex block and `T` ("too short");
/// 3. total length exactly `4 + 8V + 4 + 12T` ("length mismatch").
///
/// Triangle indices are returned as read; they are not checked against `V`.
pub fn decode_triangulation(bytes: &[u8]) -> Result<Triangulation, FormatError> {
    let mut r = Reader::new(bytes);
    let v = r
        .u32()
        .ok_or(FormatError::too_short("vertex count missing"))? as usize;
    if (r.remaining() as u64) < v as u64 * VERTEX_BYTES as u64 + COUNT_BYTES as u64 {
        return Err(FormatError::too_short(
            "vertex block or triangle count missing",
        ));
    }
    let mut vertices = Vec::with_capacity(v);
    for _ in 0..v {
        vertices.push(
            r.point()
                .ok_or(FormatError::too_short("vertex block truncated"))?,
        );
    }
    let t = r
        .u32()
        .ok_or(FormatError::too_short("triangle count missing"))? as usize;
    if r.remaining() as u64 != t as u64 * TRIANGLE_BYTES as u64 {
        return Err(FormatError::length_mismatch(
            "triangle block does not match declared count",
        ));
    }
    let mut triangles: Vec<Triangle> = Vec::with_capacity(t);
    for _ in 0..t {
        triangles.push(
            r.triangle()
                .ok_or(FormatError::length_mismatch("triangle block truncated"))?,
        );
    }
    Ok(Triangulation::new(vertices, triangles))
}
