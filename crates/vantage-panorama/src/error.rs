//! Error types for the panorama crate.

use thiserror::Error;

/// Errors that can occur when constructing panorama inputs.
///
/// These are construction-time validation failures: an invalid input
/// aborts the whole computation at the boundary. Precondition
/// violations inside the numeric search (non-bracketing refinement,
/// out-of-range pixel access) panic instead, since they are
/// programming errors.
#[derive(Debug, Error, PartialEq)]
pub enum PanoramaError {
    /// Profile length or maximum viewing distance must be positive.
    #[error("length must be positive, got {0}")]
    InvalidLength(f64),

    /// An azimuth was outside the canonical range [0, 2π).
    #[error("azimuth {0} is not canonical")]
    NonCanonicalAzimuth(f64),

    /// Horizontal field of view must lie in (0, 2π].
    #[error("field of view {0} outside (0, 2π]")]
    InvalidFieldOfView(f64),

    /// Panorama must be at least 2 samples wide and 1 tall.
    #[error("invalid panorama size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}
