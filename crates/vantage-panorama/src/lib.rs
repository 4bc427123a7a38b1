//! # vantage-panorama
//!
//! Visibility panoramas computed by ray marching over terrain.
//!
//! A [`PanoramaComputer`] owns a continuous elevation model and, for a
//! given set of [`PanoramaParameters`] (observer position and
//! elevation, viewing direction, field of view, range and output
//! size), produces a [`Panorama`]: for every pixel, the distance to
//! the first terrain point intercepting the sight ray, along with that
//! point's position, elevation and slope. Pixels whose ray escapes
//! above the horizon keep an infinite distance (sky).
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vantage_dem::{ContinuousElevationModel, HgtTile};
//! use vantage_geo::GeoPoint;
//! use vantage_panorama::{PanoramaComputer, PanoramaParameters};
//!
//! let tile = HgtTile::open("dem_data/N46E007.hgt")?;
//! let model = ContinuousElevationModel::new(Arc::new(tile));
//! let observer = GeoPoint::new(7.65_f64.to_radians(), 46.73_f64.to_radians());
//! let parameters = PanoramaParameters::new(
//!     observer,
//!     1380.0,                    // observer elevation, meters
//!     162.0_f64.to_radians(),    // center azimuth
//!     27.0_f64.to_radians(),     // horizontal field of view
//!     300_000.0,                 // maximum distance, meters
//!     500,                       // width
//!     200,                       // height
//! )?;
//! let panorama = PanoramaComputer::new(model).compute_parallel(&parameters)?;
//! println!("center distance: {} m", panorama.distance_at(250, 100));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod computer;
mod error;
mod panorama;
mod parameters;
mod profile;

pub use computer::PanoramaComputer;
pub use error::PanoramaError;
pub use panorama::{Panorama, PanoramaBuilder};
pub use parameters::PanoramaParameters;
pub use profile::ElevationProfile;

/// Result type for panorama operations.
pub type Result<T> = std::result::Result<T, PanoramaError>;
