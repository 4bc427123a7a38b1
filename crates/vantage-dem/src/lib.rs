//! # vantage-dem
//!
//! Elevation models over 1-arc-second raster tiles.
//!
//! The discrete side of the crate is a family of models indexed in
//! integer arc-second units:
//!
//! - [`HgtTile`]: a memory-mapped 1°×1° binary tile (`N46E007.hgt`
//!   naming, 3601×3601 big-endian i16 samples, north row first),
//! - [`CompositeDem`]: the exact union of two models with unionable
//!   extents,
//! - [`AggregateDem`]: a lazily-opened rectangular grid of whole-degree
//!   tiles under one directory,
//! - [`ZOrderTile`]: the same tile domain with samples stored along a
//!   bit-interleaved space-filling curve, plus the offline
//!   [`zorder::convert`] producing such files.
//!
//! [`ContinuousElevationModel`] wraps any discrete model and answers
//! elevation and slope queries at arbitrary [`GeoPoint`]s by bilinear
//! interpolation.
//!
//! ## Example
//!
//! ```no_run
//! use vantage_dem::{ContinuousElevationModel, HgtTile};
//! use vantage_geo::GeoPoint;
//! use std::sync::Arc;
//!
//! let tile = HgtTile::open("dem_data/N46E007.hgt")?;
//! let model = ContinuousElevationModel::new(Arc::new(tile));
//! let p = GeoPoint::new(7.65_f64.to_radians(), 46.54_f64.to_radians());
//! println!("elevation: {:.1} m", model.elevation_at(&p));
//! # Ok::<(), vantage_dem::DemError>(())
//! ```
//!
//! [`GeoPoint`]: vantage_geo::GeoPoint

mod aggregate;
mod composite;
mod continuous;
mod error;
mod hgt;
mod model;
pub mod zorder;

pub use aggregate::AggregateDem;
pub use composite::CompositeDem;
pub use continuous::ContinuousElevationModel;
pub use error::DemError;
pub use hgt::{HgtTile, TILE_SIDE};
pub use model::{union, DiscreteElevationModel, SAMPLES_PER_DEGREE, SAMPLES_PER_RADIAN};
pub use zorder::ZOrderTile;

/// Result type for elevation model operations.
pub type Result<T> = std::result::Result<T, DemError>;
