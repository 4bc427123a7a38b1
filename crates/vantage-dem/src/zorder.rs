//! Curve-ordered tile storage.
//!
//! A [`ZOrderTile`] covers the same 1°×1° domain as an
//! [`HgtTile`](crate::HgtTile), but stores each sample at the Morton
//! (bit-interleaved Z-order) offset of its tile-local (column, row)
//! pair. Nearby samples land in nearby file pages, which pays off when
//! a terrain profile walks the raster diagonally.
//!
//! 3601 is not a power of two, so the storage domain is padded to
//! 4096×4096; offsets stay a pure bit interleave and the filler is
//! never addressed by in-extent queries. Files use the same corner
//! naming as plain tiles with a `zhgt` extension, and are produced
//! offline by [`convert`].

use crate::hgt::{degree_extent, parse_sw_corner, tile_name};
use crate::model::SAMPLES_PER_DEGREE;
use crate::{DemError, DiscreteElevationModel, Result, TILE_SIDE};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use vantage_geo::Interval2D;

/// Side of the padded Morton domain (next power of two above 3601).
const GRID_SIDE: u32 = 4096;

/// Exact byte length of a curve-ordered tile file.
const TILE_BYTES: u64 = (GRID_SIDE as u64) * (GRID_SIDE as u64) * 2;

/// Filename extension of curve-ordered tiles.
pub const EXTENSION: &str = "zhgt";

/// Spreads the low 16 bits of `v` into the even bit positions.
#[inline]
fn spread_bits(v: u32) -> u32 {
    let mut v = v & 0xFFFF;
    v = (v | (v << 8)) & 0x00FF_00FF;
    v = (v | (v << 4)) & 0x0F0F_0F0F;
    v = (v | (v << 2)) & 0x3333_3333;
    v = (v | (v << 1)) & 0x5555_5555;
    v
}

/// Collapses the even bit positions of `v` back into the low 16 bits.
#[inline]
fn compact_bits(v: u32) -> u32 {
    let mut v = v & 0x5555_5555;
    v = (v | (v >> 1)) & 0x3333_3333;
    v = (v | (v >> 2)) & 0x0F0F_0F0F;
    v = (v | (v >> 4)) & 0x00FF_00FF;
    v = (v | (v >> 8)) & 0x0000_FFFF;
    v
}

/// Morton index of (`x`, `y`): the bits of `x` interleaved into the
/// even positions and the bits of `y` into the odd ones.
#[inline]
pub fn interleave(x: u32, y: u32) -> u32 {
    spread_bits(x) | (spread_bits(y) << 1)
}

/// Inverse of [`interleave`].
#[inline]
pub fn deinterleave(index: u32) -> (u32, u32) {
    (compact_bits(index), compact_bits(index >> 1))
}

/// A 1°×1° tile whose samples are stored along the Z-order curve.
#[derive(Debug)]
pub struct ZOrderTile {
    map: Mmap,
    extent: Interval2D,
    sw_x: i32,
    sw_y: i32,
}

impl ZOrderTile {
    /// Opens and memory-maps the curve-ordered tile at `path`.
    ///
    /// Fails if the filename does not follow the corner naming
    /// convention with the `zhgt` extension, or the file does not have
    /// exactly 2×4096×4096 bytes.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| DemError::InvalidFilename(path.display().to_string()))?;
        let (sw_lat, sw_lon) = parse_sw_corner(name, EXTENSION)?;

        let file = File::open(path)?;
        let actual = file.metadata()?.len();
        if actual != TILE_BYTES {
            return Err(DemError::InvalidTileSize {
                path: path.display().to_string(),
                expected: TILE_BYTES,
                actual,
            });
        }
        // Safety: read-only mapping of a file treated as immutable.
        let map = unsafe { Mmap::map(&file)? };

        let sw_x = sw_lon * SAMPLES_PER_DEGREE;
        let sw_y = sw_lat * SAMPLES_PER_DEGREE;
        Ok(Self {
            map,
            extent: degree_extent(sw_x, sw_y),
            sw_x,
            sw_y,
        })
    }
}

impl DiscreteElevationModel for ZOrderTile {
    fn extent(&self) -> Interval2D {
        self.extent
    }

    fn elevation_sample(&self, x: i32, y: i32) -> f64 {
        assert!(
            self.extent.contains(x, y),
            "sample index ({x}, {y}) outside tile extent"
        );
        let col = (x - self.sw_x) as u32;
        let row = (SAMPLES_PER_DEGREE - (y - self.sw_y)) as u32;
        let offset = 2 * interleave(col, row) as usize;
        i16::from_be_bytes([self.map[offset], self.map[offset + 1]]) as f64
    }
}

/// Writes the curve-ordered rendition of a 1°×1° model into `dir`,
/// returning the path of the written file.
///
/// `src` must cover exactly one tile (a 3601×3601 extent aligned on
/// whole degrees). The converter walks the file in storage order:
/// each Morton index is decoded back to a (column, row) pair, and
/// indices decoding outside the tile emit zero filler.
pub fn convert<P: AsRef<Path>>(src: &dyn DiscreteElevationModel, dir: P) -> Result<std::path::PathBuf> {
    let extent = src.extent();
    let sw_x = extent.ix().from();
    let sw_y = extent.iy().from();
    assert!(
        extent.ix().size() == TILE_SIDE as i64
            && extent.iy().size() == TILE_SIDE as i64
            && sw_x % SAMPLES_PER_DEGREE == 0
            && sw_y % SAMPLES_PER_DEGREE == 0,
        "source model is not a single whole-degree tile"
    );

    let name = tile_name(
        sw_y / SAMPLES_PER_DEGREE,
        sw_x / SAMPLES_PER_DEGREE,
        EXTENSION,
    );
    let path = dir.as_ref().join(&name);
    let mut out = BufWriter::new(File::create(&path)?);
    for index in 0..GRID_SIDE * GRID_SIDE {
        let (col, row) = deinterleave(index);
        let sample = if col < TILE_SIDE as u32 && row < TILE_SIDE as u32 {
            let x = sw_x + col as i32;
            let y = sw_y + SAMPLES_PER_DEGREE - row as i32;
            src.elevation_sample(x, y) as i16
        } else {
            0
        };
        out.write_all(&sample.to_be_bytes())?;
    }
    out.flush()?;
    log::debug!("converted tile to curve order: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleave_small_values() {
        assert_eq!(interleave(0, 0), 0);
        assert_eq!(interleave(1, 0), 1);
        assert_eq!(interleave(0, 1), 2);
        assert_eq!(interleave(1, 1), 3);
        assert_eq!(interleave(2, 0), 4);
        assert_eq!(interleave(3, 5), 0b100111);
    }

    #[test]
    fn test_interleave_round_trips() {
        for &(x, y) in &[(0, 0), (1, 2), (3600, 3600), (4095, 4095), (1234, 567)] {
            assert_eq!(deinterleave(interleave(x, y)), (x, y));
        }
    }

    #[test]
    fn test_interleave_is_injective_on_a_block() {
        let mut seen = std::collections::HashSet::new();
        for x in 0..32 {
            for y in 0..32 {
                assert!(seen.insert(interleave(x, y)));
            }
        }
    }
}
