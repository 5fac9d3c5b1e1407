//! Wire codec: point-set ingestion and triangulation payloads.
//!
//! All integers are little-endian `u32`, all coordinates little-endian IEEE-754
//! `f32`. Decoding is purely structural: lengths are checked, values are not
//! (no finiteness checks, no triangle index bounds).
//!
//! Point set:      `[u32 N][N × (f32 x, f32 y)]`
//! Triangulation:  `[u32 V][V × (f32 x, f32 y)][u32 T][T × (u32 i, u32 j, u32 k)]`

mod point_set;
mod reader;
mod triangulation;

pub use point_set::{decode_point_set, encode_point_set};
pub use triangulation::{decode_triangulation, encode_triangulation};

use crate::types::Point;

#[inline]
fn put_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

/// Narrow to `f32`; the precision loss is part of the format.
#[inline]
fn put_point(out: &mut Vec<u8>, p: &Point) {
    out.extend_from_slice(&(p.x as f32).to_le_bytes());
    out.extend_from_slice(&(p.y as f32).to_le_bytes());
}
