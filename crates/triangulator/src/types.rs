//! Value types shared by the engine and the codec.

use crate::cfg::{COUNT_BYTES, TRIANGLE_BYTES, VERTEX_BYTES};
use nalgebra::Vector2;

/// A 2D point with `f64` coordinates (narrowed to `f32` on the wire).
pub type Point = Vector2<f64>;

/// Index triple into a vertex list.
pub type Triangle = [u32; 3];

/// Vertex list plus triangle list, as produced by `geometry::compute`.
///
/// Invariants (by construction in `compute`, not enforced by `decode_triangulation`):
/// - Vertices are pairwise distinct at dedup time.
/// - Every triangle holds three distinct indices in `0..vertices.len()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    pub vertices: Vec<Point>,
    pub triangles: Vec<Triangle>,
}

impl Triangulation {
    pub fn new(vertices: Vec<Point>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// True for the collinear outcome: vertices but no triangles.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Exact size of the encoded payload: `4 + 8V + 4 + 12T`.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        COUNT_BYTES
            + self.vertices.len() * VERTEX_BYTES
            + COUNT_BYTES
            + self.triangles.len() * TRIANGLE_BYTES
    }

    pub fn into_parts(self) -> (Vec<Point>, Vec<Triangle>) {
        (self.vertices, self.triangles)
    }
}
