//! The discrete elevation model interface.

use crate::{CompositeDem, Result};
use std::f64::consts::PI;
use std::sync::Arc;
use vantage_geo::Interval2D;

/// Samples per degree of the raster grid convention (1 arc-second
/// spacing; a 1°×1° tile carries 3601 samples per side, sharing its
/// edge rows and columns with its neighbors).
pub const SAMPLES_PER_DEGREE: i32 = 3600;

/// Samples per radian, for converting radian coordinates to fractional
/// sample indices.
pub const SAMPLES_PER_RADIAN: f64 = SAMPLES_PER_DEGREE as f64 * 180.0 / PI;

/// A discrete elevation model: a rectangular extent of integer sample
/// indices in arc-second units, and an elevation for each of them.
///
/// Index (x, y) corresponds to longitude `x / 3600` degrees and
/// latitude `y / 3600` degrees. Implementations are read-only and safe
/// for concurrent sampling.
pub trait DiscreteElevationModel: Send + Sync {
    /// Extent of the model, in arc-second sample indices.
    fn extent(&self) -> Interval2D;

    /// Elevation in meters of the sample at index (`x`, `y`).
    ///
    /// # Panics
    ///
    /// Implementations panic when the index lies outside [`extent`]
    /// (a programming error; callers check containment first).
    ///
    /// [`extent`]: DiscreteElevationModel::extent
    fn elevation_sample(&self, x: i32, y: i32) -> f64;
}

/// Union of two discrete models, defined once for every implementation.
///
/// Fails unless the two extents are unionable (exactly overlapping or
/// sharing a full edge).
pub fn union(
    left: Arc<dyn DiscreteElevationModel>,
    right: Arc<dyn DiscreteElevationModel>,
) -> Result<CompositeDem> {
    CompositeDem::union(left, right)
}
