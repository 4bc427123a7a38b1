//! Conversions between ground distances in meters and angles at the
//! center of the spherical Earth model.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Converts a ground distance in meters to the corresponding angle in
/// radians at the Earth's center.
#[inline]
pub fn to_radians(meters: f64) -> f64 {
    meters / EARTH_RADIUS
}

/// Converts an angle in radians at the Earth's center to the
/// corresponding ground distance in meters.
#[inline]
pub fn to_meters(radians: f64) -> f64 {
    radians * EARTH_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    #[test]
    fn test_round_trip() {
        assert_relative_eq!(to_meters(to_radians(123_456.0)), 123_456.0);
    }

    #[test]
    fn test_full_circumference() {
        assert_relative_eq!(to_meters(TAU), TAU * EARTH_RADIUS);
        // One arc-second of latitude is about 30.9 m
        let arcsec = (1.0 / 3600.0_f64).to_radians();
        assert_relative_eq!(to_meters(arcsec), 30.887, epsilon = 1e-3);
    }
}
