//! Error types for the geometry engine and the wire codec.
//!
//! Both kinds are terminal: nothing in this crate retries. The transport layer is
//! expected to map them to distinct client-facing codes; see `Error::is_format`.

use crate::cfg::MIN_VERTICES;
use std::fmt;

/// Failure of `geometry::compute`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TriangulationError {
    /// Fewer than `MIN_VERTICES` points remain after dedup.
    #[error("at least {} unique points are required for triangulation (got {unique})", MIN_VERTICES)]
    InsufficientPoints { unique: usize },
}

/// Which structural check a payload failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Not enough bytes to read a declared count (or the block in front of it).
    TooShort,
    /// Declared counts imply a total length the buffer does not have.
    LengthMismatch,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatErrorKind::TooShort => write!(f, "too short"),
            FormatErrorKind::LengthMismatch => write!(f, "length mismatch"),
        }
    }
}

/// Structural decode failure of a point-set or triangulation payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct FormatError {
    pub kind: FormatErrorKind,
    pub detail: &'static str,
}

impl FormatError {
    pub(crate) fn too_short(detail: &'static str) -> Self {
        Self {
            kind: FormatErrorKind::TooShort,
            detail,
        }
    }

    pub(crate) fn length_mismatch(detail: &'static str) -> Self {
        Self {
            kind: FormatErrorKind::LengthMismatch,
            detail,
        }
    }
}

/// Either failure of the bytes-to-bytes pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
}

impl Error {
    /// Malformed input bytes (a client error in transport terms).
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Well-formed input that does not hold enough unique points.
    pub fn is_insufficient(&self) -> bool {
        matches!(
            self,
            Error::Triangulation(TriangulationError::InsufficientPoints { .. })
        )
    }
}
