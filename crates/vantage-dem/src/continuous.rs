//! Continuous elevation queries over a discrete model.

use crate::model::{DiscreteElevationModel, SAMPLES_PER_RADIAN};
use std::sync::Arc;
use vantage_geo::math::{bilerp, sq};
use vantage_geo::{distance, GeoPoint};

/// Ground distance in meters between two adjacent samples along a
/// meridian (one arc-second).
const INTER_SAMPLE_DISTANCE: f64 = distance::EARTH_RADIUS / SAMPLES_PER_RADIAN;

/// A continuous elevation surface obtained by bilinear interpolation
/// of a discrete model.
///
/// Neighbors falling outside the discrete extent read as elevation
/// zero. This silently biases elevations and slopes within one sample
/// of the dataset edge; it is a documented approximation, kept so that
/// queries near the edge degrade instead of failing.
#[derive(Clone)]
pub struct ContinuousElevationModel {
    dem: Arc<dyn DiscreteElevationModel>,
}

impl ContinuousElevationModel {
    /// Wraps the given discrete model.
    pub fn new(dem: Arc<dyn DiscreteElevationModel>) -> Self {
        Self { dem }
    }

    /// Elevation in meters at `p`, bilinearly interpolated between the
    /// four enclosing discrete samples.
    pub fn elevation_at(&self, p: &GeoPoint) -> f64 {
        self.interpolate_at(p, |x, y| self.raw_sample(x, y))
    }

    /// Slope at `p` in radians, 0 for horizontal ground.
    ///
    /// Each of the four enclosing samples first gets a slope surrogate
    /// computed from its two forward neighbors, and the surrogates are
    /// then bilinearly interpolated. This interpolates a derived
    /// quantity rather than differentiating the interpolated surface.
    pub fn slope_at(&self, p: &GeoPoint) -> f64 {
        self.interpolate_at(p, |x, y| self.slope_sample(x, y))
    }

    /// Bilinear interpolation of a per-sample quantity at `p`.
    fn interpolate_at<F>(&self, p: &GeoPoint, sample: F) -> f64
    where
        F: Fn(i32, i32) -> f64,
    {
        let xf = p.longitude() * SAMPLES_PER_RADIAN;
        let yf = p.latitude() * SAMPLES_PER_RADIAN;
        let xi = xf.floor();
        let yi = yf.floor();
        let x = xi as i32;
        let y = yi as i32;
        bilerp(
            sample(x, y),
            sample(x + 1, y),
            sample(x, y + 1),
            sample(x + 1, y + 1),
            xf - xi,
            yf - yi,
        )
    }

    /// Discrete sample with zero fallback outside the extent.
    fn raw_sample(&self, x: i32, y: i32) -> f64 {
        if self.dem.extent().contains(x, y) {
            self.dem.elevation_sample(x, y)
        } else {
            0.0
        }
    }

    /// Slope surrogate of the sample at (`x`, `y`), from the elevation
    /// deltas toward its east and north neighbors.
    fn slope_sample(&self, x: i32, y: i32) -> f64 {
        let e = self.raw_sample(x, y);
        let dz_a = self.raw_sample(x + 1, y) - e;
        let dz_b = self.raw_sample(x, y + 1) - e;
        (INTER_SAMPLE_DISTANCE
            / (sq(dz_a) + sq(dz_b) + sq(INTER_SAMPLE_DISTANCE)).sqrt())
        .acos()
    }
}

impl std::fmt::Debug for ContinuousElevationModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContinuousElevationModel")
            .field("extent", &self.dem.extent())
            .finish_non_exhaustive()
    }
}
