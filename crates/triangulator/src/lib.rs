//! Point-set triangulation kernel and its binary wire codec.
//!
//! Layout
//! - `geometry`: dedup, collinearity classification, fan triangulation.
//! - `codec`: little-endian point-set ingestion and triangulation payloads.
//! - `pipeline`: bytes in, bytes out (decode → compute → encode).
//! - `sample`: seeded point clouds for benches, stress tests and the CLI.
//!
//! Every operation is a pure function over its inputs. Nothing here holds state
//! between calls, so callers may invoke it from any number of threads without
//! synchronization.

pub mod cfg;
pub mod codec;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod sample;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use codec::{decode_point_set, decode_triangulation, encode_point_set, encode_triangulation};
pub use error::{Error, FormatError, FormatErrorKind, TriangulationError};
pub use geometry::{compute, compute_pairs};
pub use pipeline::triangulate_point_set;
pub use types::{Point, Triangle, Triangulation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::codec::{
        decode_point_set, decode_triangulation, encode_point_set, encode_triangulation,
    };
    pub use crate::error::{Error, FormatError, FormatErrorKind, TriangulationError};
    pub use crate::geometry::{compute, compute_pairs, dedup_points, fan_triangles, is_collinear};
    pub use crate::sample::{draw_point_cloud, Bounds2, PointCloudCfg, ReplayToken};
    pub use crate::types::{Point, Triangle, Triangulation};
}
