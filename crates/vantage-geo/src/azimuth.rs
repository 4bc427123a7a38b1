//! Compass azimuth helpers.
//!
//! Azimuths are compass bearings in radians: 0 is north, values grow
//! clockwise, and the canonical range is [0, 2π).

use crate::math::floor_mod;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Returns true iff `azimuth` lies in the canonical range [0, 2π).
#[inline]
pub fn is_canonical(azimuth: f64) -> bool {
    (0.0..TAU).contains(&azimuth)
}

/// Reduces `azimuth` to the canonical range [0, 2π).
#[inline]
pub fn canonicalize(azimuth: f64) -> f64 {
    let a = floor_mod(azimuth, TAU);
    // floor_mod rounds up to exactly 2π for tiny negative inputs
    if a == TAU {
        0.0
    } else {
        a
    }
}

/// Converts a canonical compass bearing (clockwise from north) into a
/// mathematical angle (counterclockwise from east), canonical in
/// [0, 2π).
///
/// # Panics
///
/// Panics if `azimuth` is not canonical.
pub fn to_math(azimuth: f64) -> f64 {
    assert!(is_canonical(azimuth), "azimuth {azimuth} is not canonical");
    canonicalize(FRAC_PI_2 - azimuth)
}

/// Converts a canonical mathematical angle (counterclockwise from east)
/// into a compass bearing (clockwise from north), canonical in [0, 2π).
///
/// # Panics
///
/// Panics if `angle` is not canonical.
pub fn from_math(angle: f64) -> f64 {
    assert!(is_canonical(angle), "angle {angle} is not canonical");
    canonicalize(FRAC_PI_2 - angle)
}

/// Returns the name of the octant (N, NE, E, ...) containing the given
/// canonical azimuth. Each octant is centered on its cardinal or
/// intercardinal direction and spans π/4.
///
/// # Panics
///
/// Panics if `azimuth` is not canonical.
pub fn to_octant_string(azimuth: f64) -> &'static str {
    assert!(is_canonical(azimuth), "azimuth {azimuth} is not canonical");
    const OCTANTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let octant = (azimuth / (TAU / 8.0) + 0.5).floor() as usize % 8;
    OCTANTS[octant]
}
