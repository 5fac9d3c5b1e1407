//! Fixed constants for classification and the wire layout.
//!
//! Policy
//! - These are part of the observable contract. Both the dedup rule (exact
//!   equality) and the collinearity tolerance (absolute, not scale-relative) are
//!   sensitive to coordinate magnitude; changing either alters outputs for
//!   existing inputs, so they are not runtime-configurable.

/// Minimum number of unique points needed before a triangulation is attempted.
pub const MIN_VERTICES: usize = 3;
/// Absolute bound on the doubled signed area below which a point counts as on the line.
pub const COLLINEAR_EPS: f64 = 1e-12;

/// Size of a little-endian `u32` count field.
pub const COUNT_BYTES: usize = 4;
/// Size of one vertex on the wire: two `f32` coordinates.
pub const VERTEX_BYTES: usize = 8;
/// Size of one triangle on the wire: three `u32` indices.
pub const TRIANGLE_BYTES: usize = 12;
