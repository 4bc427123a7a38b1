//! The ray-marching panorama computer.

use crate::{ElevationProfile, Panorama, PanoramaBuilder, PanoramaParameters, Result};
use rayon::prelude::*;
use std::time::Instant;
use vantage_dem::ContinuousElevationModel;
use vantage_geo::distance::EARTH_RADIUS;
use vantage_geo::math::{first_interval_containing_root, improve_root, sq};

/// Step of the coarse bracketing scan along a ray, meters.
const SEARCH_STEP: f64 = 64.0;

/// Width to which a bracketing interval is bisected, meters.
const REFINE_TOLERANCE: f64 = 4.0;

/// Empirical atmospheric refraction coefficient. The ray/ground
/// equation drops the terrain by `(1 - K)·d²/(2R)`: full Earth
/// curvature, partially compensated by rays bending down with the
/// density gradient.
const REFRACTION_COEFFICIENT: f64 = 0.13;

/// Computes visibility panoramas by marching sight rays against a
/// continuous elevation model.
#[derive(Debug, Clone)]
pub struct PanoramaComputer {
    model: ContinuousElevationModel,
}

/// Ground hit of a single ray within a column.
struct RayHit {
    y: usize,
    distance: f32,
    longitude: f32,
    latitude: f32,
    elevation: f32,
    slope: f32,
}

impl PanoramaComputer {
    /// Creates a computer over the given model.
    pub fn new(model: ContinuousElevationModel) -> Self {
        Self { model }
    }

    /// Computes the panorama column by column, left to right.
    pub fn compute(&self, parameters: &PanoramaParameters) -> Result<Panorama> {
        let start = Instant::now();
        let mut builder = PanoramaBuilder::new(parameters.clone());
        for x in 0..parameters.width() {
            let hits = self.compute_column(parameters, x)?;
            write_column(&mut builder, x, &hits);
        }
        log::debug!(
            "computed {}x{} panorama in {:.1?}",
            parameters.width(),
            parameters.height(),
            start.elapsed()
        );
        Ok(builder.build())
    }

    /// Computes the panorama with columns distributed over the rayon
    /// thread pool.
    ///
    /// Columns are independent: each worker owns its profile and
    /// carried search bound, and the read-only elevation model is
    /// shared. Results are written into the builder sequentially, so
    /// the output is identical to [`compute`](Self::compute).
    pub fn compute_parallel(&self, parameters: &PanoramaParameters) -> Result<Panorama> {
        let start = Instant::now();
        let columns = (0..parameters.width())
            .into_par_iter()
            .map(|x| self.compute_column(parameters, x))
            .collect::<Result<Vec<_>>>()?;
        let mut builder = PanoramaBuilder::new(parameters.clone());
        for (x, hits) in columns.iter().enumerate() {
            write_column(&mut builder, x, hits);
        }
        log::debug!(
            "computed {}x{} panorama in parallel in {:.1?}",
            parameters.width(),
            parameters.height(),
            start.elapsed()
        );
        Ok(builder.build())
    }

    /// Marches every ray of column `x`, bottom row first.
    ///
    /// The ground intersection found for a row is carried as the
    /// search lower bound of the row above it: a higher sight line
    /// cannot meet the ground closer than a lower one. When a ray
    /// finds no intersection before the maximum distance, neither can
    /// any ray above it, and the rest of the column stays sky.
    fn compute_column(&self, parameters: &PanoramaParameters, x: usize) -> Result<Vec<RayHit>> {
        let azimuth = parameters.azimuth_for_x(x as f64);
        let profile = ElevationProfile::new(
            self.model.clone(),
            &parameters.observer(),
            azimuth,
            parameters.max_distance(),
        )?;
        let ray0 = parameters.observer_elevation();
        let max_distance = parameters.max_distance();

        let mut hits = Vec::new();
        let mut lower_bound = 0.0;
        for y in (0..parameters.height()).rev() {
            let altitude = parameters.altitude_for_y(y as f64);
            let ray_slope = altitude.tan();
            let f = |d: f64| {
                ray0 + d * ray_slope - profile.elevation_at(d)
                    - (1.0 - REFRACTION_COEFFICIENT) * sq(d) / (2.0 * EARTH_RADIUS)
            };

            let bracket = first_interval_containing_root(&f, lower_bound, max_distance, SEARCH_STEP);
            if bracket == f64::INFINITY {
                // Sky from here on up.
                break;
            }
            let d = improve_root(&f, bracket, bracket + SEARCH_STEP, REFINE_TOLERANCE);
            let position = profile.position_at(d);
            hits.push(RayHit {
                y,
                distance: (d / altitude.cos()) as f32,
                longitude: position.longitude() as f32,
                latitude: position.latitude() as f32,
                elevation: profile.elevation_at(d) as f32,
                slope: profile.slope_at(d) as f32,
            });
            lower_bound = bracket;
        }
        Ok(hits)
    }
}

fn write_column(builder: &mut PanoramaBuilder, x: usize, hits: &[RayHit]) {
    for hit in hits {
        builder
            .set_distance_at(x, hit.y, hit.distance)
            .set_longitude_at(x, hit.y, hit.longitude)
            .set_latitude_at(x, hit.y, hit.latitude)
            .set_elevation_at(x, hit.y, hit.elevation)
            .set_slope_at(x, hit.y, hit.slope);
    }
}
