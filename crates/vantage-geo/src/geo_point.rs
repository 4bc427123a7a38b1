//! Geographic points on the spherical Earth model.

use crate::math::haversin;
use crate::{azimuth, distance};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// An immutable point on the Earth's surface, stored as (longitude,
/// latitude) in radians.
///
/// Longitude is positive east, latitude positive north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Creates a point from a longitude in [-π, π] and a latitude in
    /// [-π/2, π/2], both in radians.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside its valid range. Callers
    /// holding unvalidated external input must canonicalize before
    /// constructing a point.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        assert!(
            (-PI..=PI).contains(&longitude),
            "longitude {longitude} out of range [-π, π]"
        );
        assert!(
            (-FRAC_PI_2..=FRAC_PI_2).contains(&latitude),
            "latitude {latitude} out of range [-π/2, π/2]"
        );
        Self {
            longitude,
            latitude,
        }
    }

    /// Longitude in radians, positive east.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in radians, positive north.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Great-circle distance in meters to `other`, computed with the
    /// haversine formula on a sphere of radius [`distance::EARTH_RADIUS`].
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let h = haversin(self.latitude - other.latitude)
            + self.latitude.cos() * other.latitude.cos() * haversin(self.longitude - other.longitude);
        distance::to_meters(2.0 * h.sqrt().asin())
    }

    /// Initial bearing from this point toward `other`, as a canonical
    /// azimuth in [0, 2π).
    pub fn azimuth_to(&self, other: &GeoPoint) -> f64 {
        let d_lon = other.longitude - self.longitude;
        let y = d_lon.sin() * other.latitude.cos();
        let x = self.latitude.cos() * other.latitude.sin()
            - self.latitude.sin() * other.latitude.cos() * d_lon.cos();
        azimuth::canonicalize(y.atan2(x))
    }
}

impl fmt::Display for GeoPoint {
    /// Formats the point as `(lon,lat)` in decimal degrees with four
    /// decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4},{:.4})",
            self.longitude.to_degrees(),
            self.latitude.to_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn from_degrees(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon.to_radians(), lat.to_radians())
    }

    #[test]
    fn test_distance_zero_for_identical_points() {
        let p = from_degrees(7.6543, 46.5432);
        assert_relative_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = from_degrees(6.631, 46.521); // Lausanne
        let b = from_degrees(37.623, 55.753); // Moscow
        assert_relative_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_distance_known_pairs() {
        // Lausanne to Moscow is about 2367 km; tolerate 0.5%
        let lausanne = from_degrees(6.631, 46.521);
        let moscow = from_degrees(37.623, 55.753);
        let d = lausanne.distance_to(&moscow);
        assert!((d - 2_367_000.0).abs() / 2_367_000.0 < 0.005, "d = {d}");

        // Seattle to Portland is about 233 km
        let seattle = from_degrees(-122.3321, 47.6062);
        let portland = from_degrees(-122.6784, 45.5152);
        let d = seattle.distance_to(&portland);
        assert!((d - 233_000.0).abs() < 5_000.0, "d = {d}");
    }

    #[test]
    fn test_azimuth_known_pair() {
        // Lausanne to Moscow: initial bearing about 52.95°
        let lausanne = from_degrees(6.631, 46.521);
        let moscow = from_degrees(37.623, 55.753);
        let az = lausanne.azimuth_to(&moscow).to_degrees();
        assert!((az - 52.95).abs() < 0.5, "azimuth = {az}");
    }

    #[test]
    fn test_azimuth_due_north_and_east() {
        let origin = from_degrees(0.0, 0.0);
        let north = from_degrees(0.0, 10.0);
        let east = from_degrees(10.0, 0.0);
        assert_relative_eq!(origin.azimuth_to(&north), 0.0, epsilon = 1e-9);
        assert_relative_eq!(
            origin.azimuth_to(&east),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-9
        );
    }

    #[test]
    #[should_panic(expected = "latitude")]
    fn test_new_rejects_invalid_latitude() {
        GeoPoint::new(0.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "longitude")]
    fn test_new_rejects_invalid_longitude() {
        GeoPoint::new(4.0, 0.0);
    }

    #[test]
    fn test_display_in_degrees() {
        let p = from_degrees(-7.6543, 54.3210);
        assert_eq!(p.to_string(), "(-7.6543,54.3210)");
    }
}
