//! Memory-mapped 1°×1° binary elevation tiles.

use crate::model::SAMPLES_PER_DEGREE;
use crate::{DemError, DiscreteElevationModel, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use vantage_geo::{Interval1D, Interval2D};

/// Samples per side of a 1°×1° tile (one row and column of overlap is
/// shared with each neighbor).
pub const TILE_SIDE: usize = SAMPLES_PER_DEGREE as usize + 1;

/// Exact byte length of a tile file: 3601² big-endian i16 samples.
const TILE_BYTES: u64 = (TILE_SIDE * TILE_SIDE * 2) as u64;

/// A 1°×1° elevation tile backed by a read-only memory mapping of its
/// file.
///
/// The filename names the tile's southwest corner: a hemisphere letter
/// (`N`/`S`) and two latitude digits, then a hemisphere letter
/// (`E`/`W`) and three longitude digits, then the `.hgt` extension
/// (for example `N46E007.hgt`). Samples are signed 16-bit big-endian
/// meters, row-major starting at the north edge, west to east within a
/// row.
///
/// The mapping is released when the tile is dropped.
#[derive(Debug)]
pub struct HgtTile {
    map: Mmap,
    extent: Interval2D,
    sw_x: i32,
    sw_y: i32,
}

impl HgtTile {
    /// Opens and memory-maps the tile at `path`.
    ///
    /// Fails if the filename does not follow the naming convention or
    /// the file does not have exactly 2×3601×3601 bytes.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| DemError::InvalidFilename(path.display().to_string()))?;
        let (sw_lat, sw_lon) = parse_sw_corner(name, "hgt")?;

        let file = File::open(path)?;
        let actual = file.metadata()?.len();
        if actual != TILE_BYTES {
            return Err(DemError::InvalidTileSize {
                path: path.display().to_string(),
                expected: TILE_BYTES,
                actual,
            });
        }
        // Safety: the mapping is read-only and the file is treated as
        // immutable for the lifetime of the tile.
        let map = unsafe { Mmap::map(&file)? };

        let sw_x = sw_lon * SAMPLES_PER_DEGREE;
        let sw_y = sw_lat * SAMPLES_PER_DEGREE;
        log::debug!("mapped tile {name} ({TILE_BYTES} bytes, sw index ({sw_x}, {sw_y}))");
        Ok(Self {
            map,
            extent: degree_extent(sw_x, sw_y),
            sw_x,
            sw_y,
        })
    }
}

impl DiscreteElevationModel for HgtTile {
    fn extent(&self) -> Interval2D {
        self.extent
    }

    fn elevation_sample(&self, x: i32, y: i32) -> f64 {
        assert!(
            self.extent.contains(x, y),
            "sample index ({x}, {y}) outside tile extent"
        );
        let col = (x - self.sw_x) as usize;
        let row = (SAMPLES_PER_DEGREE - (y - self.sw_y)) as usize;
        let offset = 2 * (row * TILE_SIDE + col);
        i16::from_be_bytes([self.map[offset], self.map[offset + 1]]) as f64
    }
}

/// Extent of a 1°×1° tile whose southwest corner has sample index
/// (`sw_x`, `sw_y`).
pub(crate) fn degree_extent(sw_x: i32, sw_y: i32) -> Interval2D {
    Interval2D::new(
        Interval1D::new(sw_x, sw_x + SAMPLES_PER_DEGREE),
        Interval1D::new(sw_y, sw_y + SAMPLES_PER_DEGREE),
    )
}

/// Builds the canonical tile filename for a southwest corner in whole
/// degrees, e.g. (46, 7) → `N46E007.hgt`.
pub(crate) fn tile_name(sw_lat_deg: i32, sw_lon_deg: i32, extension: &str) -> String {
    format!(
        "{}{:02}{}{:03}.{extension}",
        if sw_lat_deg >= 0 { 'N' } else { 'S' },
        sw_lat_deg.abs(),
        if sw_lon_deg >= 0 { 'E' } else { 'W' },
        sw_lon_deg.abs(),
    )
}

/// Parses a tile filename into the (latitude, longitude) of its
/// southwest corner in whole degrees.
pub(crate) fn parse_sw_corner(name: &str, extension: &str) -> Result<(i32, i32)> {
    let invalid = || DemError::InvalidFilename(name.to_string());

    let stem = name
        .strip_suffix(extension)
        .and_then(|s| s.strip_suffix('.'))
        .ok_or_else(invalid)?;
    let bytes = stem.as_bytes();
    if bytes.len() != 7 {
        return Err(invalid());
    }

    let lat_sign = match bytes[0] {
        b'N' => 1,
        b'S' => -1,
        _ => return Err(invalid()),
    };
    let lon_sign = match bytes[3] {
        b'E' => 1,
        b'W' => -1,
        _ => return Err(invalid()),
    };
    let lat: i32 = stem[1..3].parse().map_err(|_| invalid())?;
    let lon: i32 = stem[4..7].parse().map_err(|_| invalid())?;
    if lat > 90 || lon > 180 {
        return Err(invalid());
    }
    Ok((lat_sign * lat, lon_sign * lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sw_corner() {
        assert_eq!(parse_sw_corner("N46E007.hgt", "hgt").unwrap(), (46, 7));
        assert_eq!(parse_sw_corner("S33W070.hgt", "hgt").unwrap(), (-33, -70));
        assert_eq!(parse_sw_corner("N00E000.hgt", "hgt").unwrap(), (0, 0));
    }

    #[test]
    fn test_parse_sw_corner_rejects_malformed_names() {
        for name in [
            "X46E007.hgt",
            "N46X007.hgt",
            "N4E007.hgt",
            "N46E07.hgt",
            "N46E007.tif",
            "N46E007",
            "N99E200.hgt",
            "random.hgt",
        ] {
            assert!(
                parse_sw_corner(name, "hgt").is_err(),
                "{name} should not parse"
            );
        }
    }

    #[test]
    fn test_tile_name_round_trips() {
        for corner in [(46, 7), (-33, -70), (0, 0), (89, 179)] {
            let name = tile_name(corner.0, corner.1, "hgt");
            assert_eq!(parse_sw_corner(&name, "hgt").unwrap(), corner);
        }
    }

    #[test]
    fn test_degree_extent_spans_one_degree_inclusive() {
        let e = degree_extent(7 * 3600, 46 * 3600);
        assert!(e.contains(7 * 3600, 46 * 3600));
        assert!(e.contains(8 * 3600, 47 * 3600));
        assert!(!e.contains(8 * 3600 + 1, 46 * 3600));
        assert_eq!(e.size(), 3601 * 3601);
    }
}
