//! Panorama viewport parameters.

use crate::{PanoramaError, Result};
use std::f64::consts::TAU;
use vantage_geo::math::angular_distance;
use vantage_geo::{azimuth, GeoPoint};

/// Immutable description of a panorama viewport: where the observer
/// stands, where they look, how wide, how far, and the output size.
///
/// Pixels are square: the vertical field of view follows from the
/// horizontal one and the width/height ratio. Pixel (0, 0) is the top
/// left corner, x grows east along the azimuth sweep and y grows
/// downward (toward lower altitudes).
#[derive(Debug, Clone, PartialEq)]
pub struct PanoramaParameters {
    observer: GeoPoint,
    observer_elevation: f64,
    center_azimuth: f64,
    horizontal_field_of_view: f64,
    max_distance: f64,
    width: usize,
    height: usize,
}

impl PanoramaParameters {
    /// Creates a validated parameter set.
    ///
    /// `center_azimuth` must be canonical, `horizontal_field_of_view`
    /// in (0, 2π], `max_distance` positive, `width` at least 2 and
    /// `height` at least 1.
    pub fn new(
        observer: GeoPoint,
        observer_elevation: f64,
        center_azimuth: f64,
        horizontal_field_of_view: f64,
        max_distance: f64,
        width: usize,
        height: usize,
    ) -> Result<Self> {
        if !azimuth::is_canonical(center_azimuth) {
            return Err(PanoramaError::NonCanonicalAzimuth(center_azimuth));
        }
        if !(horizontal_field_of_view > 0.0 && horizontal_field_of_view <= TAU) {
            return Err(PanoramaError::InvalidFieldOfView(horizontal_field_of_view));
        }
        if !(max_distance > 0.0) {
            return Err(PanoramaError::InvalidLength(max_distance));
        }
        if width < 2 || height < 1 {
            return Err(PanoramaError::InvalidSize { width, height });
        }
        Ok(Self {
            observer,
            observer_elevation,
            center_azimuth,
            horizontal_field_of_view,
            max_distance,
            width,
            height,
        })
    }

    /// Observer position.
    #[inline]
    pub fn observer(&self) -> GeoPoint {
        self.observer
    }

    /// Observer elevation in meters.
    #[inline]
    pub fn observer_elevation(&self) -> f64 {
        self.observer_elevation
    }

    /// Canonical azimuth of the central column.
    #[inline]
    pub fn center_azimuth(&self) -> f64 {
        self.center_azimuth
    }

    /// Horizontal field of view in radians.
    #[inline]
    pub fn horizontal_field_of_view(&self) -> f64 {
        self.horizontal_field_of_view
    }

    /// Vertical field of view in radians, derived from the square-pixel
    /// assumption.
    #[inline]
    pub fn vertical_field_of_view(&self) -> f64 {
        self.delta() * (self.height - 1) as f64
    }

    /// Maximum viewing distance in meters.
    #[inline]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Width of the panorama in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the panorama in samples.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Angle covered by one pixel step, identical on both axes.
    #[inline]
    fn delta(&self) -> f64 {
        self.horizontal_field_of_view / (self.width - 1) as f64
    }

    /// Azimuth of the (possibly fractional) column `x`, canonical.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside `[0, width - 1]`.
    pub fn azimuth_for_x(&self, x: f64) -> f64 {
        assert!(
            (0.0..=(self.width - 1) as f64).contains(&x),
            "column {x} outside the panorama"
        );
        azimuth::canonicalize(
            self.center_azimuth - self.horizontal_field_of_view / 2.0 + x * self.delta(),
        )
    }

    /// Fractional column index looking toward the canonical azimuth
    /// `a`.
    ///
    /// # Panics
    ///
    /// Panics if `a` is more than half the field of view away from the
    /// center azimuth.
    pub fn x_for_azimuth(&self, a: f64) -> f64 {
        let offset = angular_distance(self.center_azimuth, a);
        assert!(
            offset.abs() <= self.horizontal_field_of_view / 2.0,
            "azimuth {a} outside the field of view"
        );
        (self.width - 1) as f64 / 2.0 + offset / self.delta()
    }

    /// Altitude angle of the (possibly fractional) row `y`; row 0 is
    /// the highest.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside `[0, height - 1]`.
    pub fn altitude_for_y(&self, y: f64) -> f64 {
        assert!(
            (0.0..=(self.height - 1) as f64).contains(&y),
            "row {y} outside the panorama"
        );
        self.vertical_field_of_view() / 2.0 - y * self.delta()
    }

    /// Fractional row index looking at altitude angle `a`.
    ///
    /// # Panics
    ///
    /// Panics if `a` is outside the vertical field of view.
    pub fn y_for_altitude(&self, a: f64) -> f64 {
        let half = self.vertical_field_of_view() / 2.0;
        assert!(a.abs() <= half, "altitude {a} outside the field of view");
        (half - a) / self.delta()
    }

    /// Row-major linear index of the sample at (`x`, `y`).
    pub(crate) fn linear_sample_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}
