//! Lazy aggregate over a rectangular grid of whole-degree tiles.

use crate::hgt::{tile_name, HgtTile};
use crate::model::SAMPLES_PER_DEGREE;
use crate::{DemError, DiscreteElevationModel, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use vantage_geo::{Interval1D, Interval2D};

/// A discrete model covering a rectangle of whole-degree tiles stored
/// as individual files in one directory.
///
/// Construction verifies that every covering tile file exists with the
/// right size, but maps nothing; each tile is mapped on its first
/// sample and kept until the model is dropped. A panorama touches a
/// bounded set of tiles, so no eviction is needed.
pub struct AggregateDem {
    dir: PathBuf,
    /// Southwest corner of the covered rectangle, in whole degrees.
    sw_lat_deg: i32,
    sw_lon_deg: i32,
    /// Covered width and height, in whole degrees.
    width_deg: i32,
    height_deg: i32,
    extent: Interval2D,
    tiles: RwLock<HashMap<(i32, i32), Arc<HgtTile>>>,
}

impl AggregateDem {
    /// Creates an aggregate over the `width_deg` × `height_deg` degree
    /// rectangle whose southwest corner is (`sw_lat_deg`, `sw_lon_deg`),
    /// reading tiles from `dir`.
    ///
    /// Fails if any covering tile file is missing or has the wrong
    /// size.
    ///
    /// # Panics
    ///
    /// Panics if the degree rectangle is empty.
    pub fn open<P: AsRef<Path>>(
        dir: P,
        sw_lat_deg: i32,
        sw_lon_deg: i32,
        width_deg: i32,
        height_deg: i32,
    ) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        assert!(
            width_deg > 0 && height_deg > 0,
            "degenerate degree rectangle {width_deg}x{height_deg}"
        );

        // Validate the whole grid up front: a missing tile is a
        // configuration error, and must not surface mid-computation.
        let expected = (crate::hgt::TILE_SIDE * crate::hgt::TILE_SIDE * 2) as u64;
        for lat in sw_lat_deg..sw_lat_deg + height_deg {
            for lon in sw_lon_deg..sw_lon_deg + width_deg {
                let name = tile_name(lat, lon, "hgt");
                let path = dir.join(&name);
                let actual = std::fs::metadata(&path)
                    .map_err(|_| DemError::MissingTile {
                        name: name.clone(),
                        dir: dir.display().to_string(),
                    })?
                    .len();
                if actual != expected {
                    return Err(DemError::InvalidTileSize {
                        path: path.display().to_string(),
                        expected,
                        actual,
                    });
                }
            }
        }

        let sw_x = sw_lon_deg * SAMPLES_PER_DEGREE;
        let sw_y = sw_lat_deg * SAMPLES_PER_DEGREE;
        let extent = Interval2D::new(
            Interval1D::new(sw_x, sw_x + width_deg * SAMPLES_PER_DEGREE),
            Interval1D::new(sw_y, sw_y + height_deg * SAMPLES_PER_DEGREE),
        );
        log::debug!(
            "aggregate model over {}x{} tiles at ({}, {}) in {}",
            width_deg,
            height_deg,
            sw_lat_deg,
            sw_lon_deg,
            dir.display()
        );
        Ok(Self {
            dir,
            sw_lat_deg,
            sw_lon_deg,
            width_deg,
            height_deg,
            extent,
            tiles: RwLock::new(HashMap::new()),
        })
    }

    /// Southwest degree corner of the tile covering sample index
    /// (`x`, `y`). Boundary rows and columns shared between neighbors
    /// resolve to the more south-westerly tile still inside the grid.
    fn covering_tile(&self, x: i32, y: i32) -> (i32, i32) {
        let col = ((x - self.sw_lon_deg * SAMPLES_PER_DEGREE) / SAMPLES_PER_DEGREE)
            .min(self.width_deg - 1);
        let row = ((y - self.sw_lat_deg * SAMPLES_PER_DEGREE) / SAMPLES_PER_DEGREE)
            .min(self.height_deg - 1);
        (self.sw_lat_deg + row, self.sw_lon_deg + col)
    }

    fn tile(&self, lat_deg: i32, lon_deg: i32) -> Arc<HgtTile> {
        if let Some(tile) = self.tiles.read().expect("tile map poisoned").get(&(lat_deg, lon_deg)) {
            return Arc::clone(tile);
        }
        let mut tiles = self.tiles.write().expect("tile map poisoned");
        // Double check: another thread may have mapped it meanwhile.
        if let Some(tile) = tiles.get(&(lat_deg, lon_deg)) {
            return Arc::clone(tile);
        }
        let path = self.dir.join(tile_name(lat_deg, lon_deg, "hgt"));
        // Existence and size were validated at construction; failure
        // here means the file changed under us.
        let tile = Arc::new(
            HgtTile::open(&path)
                .unwrap_or_else(|e| panic!("tile {} vanished after validation: {e}", path.display())),
        );
        tiles.insert((lat_deg, lon_deg), Arc::clone(&tile));
        tile
    }
}

impl DiscreteElevationModel for AggregateDem {
    fn extent(&self) -> Interval2D {
        self.extent
    }

    fn elevation_sample(&self, x: i32, y: i32) -> f64 {
        assert!(
            self.extent.contains(x, y),
            "sample index ({x}, {y}) outside the aggregate extent"
        );
        let (lat_deg, lon_deg) = self.covering_tile(x, y);
        self.tile(lat_deg, lon_deg).elevation_sample(x, y)
    }
}

impl std::fmt::Debug for AggregateDem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregateDem")
            .field("dir", &self.dir)
            .field("extent", &self.extent)
            .finish_non_exhaustive()
    }
}
