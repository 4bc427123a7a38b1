//! Scalar math helpers: interpolation and the two root-finding
//! primitives used by the visibility search.

use std::f64::consts::{PI, TAU};

/// Square of `x`.
#[inline]
pub fn sq(x: f64) -> f64 {
    x * x
}

/// Floored modulus: the remainder of `x / y` with the sign of `y`.
#[inline]
pub fn floor_mod(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// Haversine of `x`: sin²(x / 2).
#[inline]
pub fn haversin(x: f64) -> f64 {
    sq((x / 2.0).sin())
}

/// Signed shortest angular difference from `a1` to `a2`, in (-π, π].
#[inline]
pub fn angular_distance(a1: f64, a2: f64) -> f64 {
    PI - floor_mod(PI - (a2 - a1), TAU)
}

/// Linear interpolation between `y0` (at 0) and `y1` (at 1).
#[inline]
pub fn lerp(y0: f64, y1: f64, x: f64) -> f64 {
    y0 + (y1 - y0) * x
}

/// Bilinear interpolation of the unit square spanned by `z00`, `z10`,
/// `z01` and `z11`, evaluated at (`x`, `y`) with both in [0, 1].
#[inline]
pub fn bilerp(z00: f64, z10: f64, z01: f64, z11: f64, x: f64, y: f64) -> f64 {
    let south = lerp(z00, z10, x);
    let north = lerp(z01, z11, x);
    lerp(south, north, y)
}

/// Scans `[min_x, max_x]` forward in steps of `dx` and returns the left
/// edge of the first step over which `f` changes sign, or
/// `f64::INFINITY` if no sign change is found.
///
/// This is a coarse bracketing pass: a root inside a step where `f`
/// oscillates back across zero without changing sign at the edges will
/// be missed. Callers choose `dx` small enough for their function.
pub fn first_interval_containing_root<F>(f: F, min_x: f64, max_x: f64, dx: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut x = min_x;
    let mut fx = f(x);
    while x + dx <= max_x {
        let f_next = f(x + dx);
        if fx * f_next <= 0.0 {
            return x;
        }
        x += dx;
        fx = f_next;
    }
    f64::INFINITY
}

/// Refines a root of `f` known to lie in `[x1, x2]` by bisection until
/// the bracketing interval is no wider than `epsilon`, then returns its
/// lower bound.
///
/// # Panics
///
/// Panics if `f` has the same sign at both ends of the interval: calling
/// this on a non-bracketing interval is a programming error, not a
/// recoverable condition.
pub fn improve_root<F>(f: F, mut x1: f64, mut x2: f64, epsilon: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut f1 = f(x1);
    let f2 = f(x2);
    assert!(
        f1 * f2 <= 0.0,
        "interval [{x1}, {x2}] does not bracket a root"
    );
    while x2 - x1 > epsilon {
        let xm = (x1 + x2) / 2.0;
        let fm = f(xm);
        if f1 * fm <= 0.0 {
            x2 = xm;
        } else {
            x1 = xm;
            f1 = fm;
        }
    }
    x1
}
