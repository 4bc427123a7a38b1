//! # vantage-geo
//!
//! Spherical geometry kernel for the Vantage panorama engine.
//!
//! This crate provides the value types and numeric primitives everything
//! else is built on:
//!
//! - [`GeoPoint`]: a (longitude, latitude) pair in radians with
//!   great-circle distance and initial-bearing computations,
//! - [`azimuth`]: canonicalization and conversion helpers for compass
//!   bearings,
//! - [`distance`]: meters/radians conversions on the spherical Earth model,
//! - [`math`]: interpolation and root-finding primitives used by the
//!   ray-marching visibility search,
//! - [`Interval1D`] / [`Interval2D`]: closed integer ranges and
//!   axis-aligned index rectangles describing elevation raster extents.
//!
//! All angles are radians unless a function name says otherwise.

pub mod azimuth;
pub mod distance;
mod error;
mod geo_point;
mod interval;
pub mod math;

pub use error::GeoError;
pub use geo_point::GeoPoint;
pub use interval::{Interval1D, Interval2D};

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeoError>;
