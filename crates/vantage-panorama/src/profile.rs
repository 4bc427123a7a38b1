//! Great-circle terrain profiles.

use crate::{PanoramaError, Result};
use std::f64::consts::{PI, TAU};
use vantage_dem::ContinuousElevationModel;
use vantage_geo::math::{floor_mod, lerp};
use vantage_geo::{azimuth, distance, GeoPoint};

/// Arc distance in meters between two precomputed profile points.
/// Linear interpolation of longitude and latitude over one step is
/// well within the raster's resolution.
const STEP: f64 = 4096.0;

/// Terrain samples along a great circle starting at an origin point
/// and following an initial bearing.
///
/// Positions are precomputed at a fixed arc step with the closed-form
/// spherical destination formula; queries in between interpolate
/// linearly. Elevation and slope queries delegate to the wrapped
/// continuous model at the interpolated position.
#[derive(Debug, Clone)]
pub struct ElevationProfile {
    model: ContinuousElevationModel,
    length: f64,
    /// (longitude, latitude) at arc distances 0, STEP, 2·STEP, ...
    points: Vec<(f64, f64)>,
}

impl ElevationProfile {
    /// Builds the profile of `model` from `origin` along the canonical
    /// `azimuth`, covering arc distances `[0, length]` in meters.
    ///
    /// Fails when `azimuth` is not canonical or `length` is not
    /// positive.
    pub fn new(
        model: ContinuousElevationModel,
        origin: &GeoPoint,
        azimuth: f64,
        length: f64,
    ) -> Result<Self> {
        if !azimuth::is_canonical(azimuth) {
            return Err(PanoramaError::NonCanonicalAzimuth(azimuth));
        }
        if !(length > 0.0) {
            return Err(PanoramaError::InvalidLength(length));
        }

        // Fixed trigonometric state, computed once for the whole walk.
        let lat0 = origin.latitude();
        let lon0 = origin.longitude();
        let (sin_lat0, cos_lat0) = lat0.sin_cos();
        let (sin_az, cos_az) = azimuth.sin_cos();

        let count = (length / STEP).ceil() as usize + 2;
        let mut points = Vec::with_capacity(count);
        for i in 0..count {
            let delta = distance::to_radians(i as f64 * STEP);
            let (sin_d, cos_d) = delta.sin_cos();
            let lat = (sin_lat0 * cos_d + cos_lat0 * sin_d * cos_az).asin();
            let lon = lon0
                + (sin_az * sin_d * cos_lat0).atan2(cos_d - sin_lat0 * lat.sin());
            // Wrap into [-π, π]
            let lon = floor_mod(lon + PI, TAU) - PI;
            points.push((lon, lat));
        }

        Ok(Self {
            model,
            length,
            points,
        })
    }

    /// Length of the profile in meters.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Position of the profile point at arc distance `x` meters,
    /// linearly interpolated between the bracketing precomputed
    /// points.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside `[0, length]`.
    pub fn position_at(&self, x: f64) -> GeoPoint {
        assert!(
            (0.0..=self.length).contains(&x),
            "position {x} outside the profile domain [0, {}]",
            self.length
        );
        let t = x / STEP;
        let i = t.floor() as usize;
        let frac = t - i as f64;
        let (lon0, lat0) = self.points[i];
        let (lon1, lat1) = self.points[i + 1];
        GeoPoint::new(lerp(lon0, lon1, frac), lerp(lat0, lat1, frac))
    }

    /// Terrain elevation in meters at arc distance `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside `[0, length]`.
    pub fn elevation_at(&self, x: f64) -> f64 {
        self.model.elevation_at(&self.position_at(x))
    }

    /// Terrain slope in radians at arc distance `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside `[0, length]`.
    pub fn slope_at(&self, x: f64) -> f64 {
        self.model.slope_at(&self.position_at(x))
    }
}
