//! Geometry engine: dedup, degenerate-case detection, fan triangulation.
//!
//! Contract
//! - Dedup is exact and order-preserving; near-duplicates that differ by float
//!   noise stay separate vertices.
//! - Collinearity uses an absolute tolerance on the doubled signed area against the
//!   line through the first two vertices. Very large or very small coordinates can
//!   be misclassified; that behavior is kept as-is.
//! - The fan `(0, i, i+1)` is a deterministic stand-in for a real triangulator. It can
//!   produce overlapping or inverted triangles for non-star-shaped inputs, and the
//!   index pattern is part of the wire contract.
//! - Coordinates are not checked for finiteness; NaN and infinities pass through.

mod fan;
mod predicates;

pub use fan::fan_triangles;
pub use predicates::{area2, dedup_points, is_collinear};

use crate::cfg::{COLLINEAR_EPS, MIN_VERTICES};
use crate::error::TriangulationError;
use crate::types::{Point, Triangulation};

/// Triangulate a point set.
///
/// Pre: none; any sequence (duplicates and non-finite values included) is accepted.
/// Post: `vertices` is the deduplicated input; `triangles` is empty when the set is
/// collinear and the fan anchored at vertex 0 otherwise (`vertices.len() - 2` triangles).
pub fn compute(points: &[Point]) -> Result<Triangulation, TriangulationError> {
    let vertices = dedup_points(points);
    if vertices.len() < MIN_VERTICES {
        tracing::debug!(
            input = points.len(),
            unique = vertices.len(),
            "rejecting point set below minimum"
        );
        return Err(TriangulationError::InsufficientPoints {
            unique: vertices.len(),
        });
    }
    if is_collinear(&vertices, COLLINEAR_EPS) {
        tracing::debug!(unique = vertices.len(), "collinear point set, no triangles");
        return Ok(Triangulation::new(vertices, Vec::new()));
    }
    let triangles = fan_triangles(vertices.len());
    tracing::debug!(
        input = points.len(),
        unique = vertices.len(),
        triangles = triangles.len(),
        "fan triangulation"
    );
    Ok(Triangulation::new(vertices, triangles))
}

/// `compute` over raw `(x, y)` pairs.
pub fn compute_pairs(points: &[(f64, f64)]) -> Result<Triangulation, TriangulationError> {
    let pts: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    compute(&pts)
}

#[cfg(test)]
mod tests;
