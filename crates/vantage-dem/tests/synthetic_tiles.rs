//! Integration tests over synthetic on-disk tiles.
//!
//! Every tile here is generated into a temporary directory, so these
//! tests need no real elevation data.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vantage_dem::{zorder, AggregateDem, DiscreteElevationModel, HgtTile, ZOrderTile, TILE_SIDE};

const SPD: i32 = vantage_dem::SAMPLES_PER_DEGREE;

/// Writes a synthetic tile whose sample at file position (row, col)
/// (north row first) is `f(row, col)`.
fn write_tile(dir: &Path, name: &str, f: impl Fn(usize, usize) -> i16) -> PathBuf {
    let path = dir.join(name);
    let mut out = BufWriter::new(File::create(&path).unwrap());
    for row in 0..TILE_SIDE {
        for col in 0..TILE_SIDE {
            out.write_all(&f(row, col).to_be_bytes()).unwrap();
        }
    }
    out.flush().unwrap();
    path
}

/// Value encoding the (row, col) position, asymmetric in the two axes
/// so that any addressing mistake shows up.
fn gradient(row: usize, col: usize) -> i16 {
    ((row % 128) * 128 + col % 128) as i16
}

#[test]
fn test_constant_tile_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tile(dir.path(), "N46E007.hgt", |_, _| 543);
    let tile = HgtTile::open(&path).unwrap();

    let extent = tile.extent();
    assert_eq!(extent.ix().from(), 7 * SPD);
    assert_eq!(extent.ix().to(), 8 * SPD);
    assert_eq!(extent.iy().from(), 46 * SPD);
    assert_eq!(extent.iy().to(), 47 * SPD);

    // Every in-extent sample reads the constant back
    for x in (7 * SPD..=8 * SPD).step_by(453) {
        for y in (46 * SPD..=47 * SPD).step_by(453) {
            assert_eq!(tile.elevation_sample(x, y), 543.0);
        }
    }
    // Including all four corners
    assert_eq!(tile.elevation_sample(7 * SPD, 46 * SPD), 543.0);
    assert_eq!(tile.elevation_sample(8 * SPD, 47 * SPD), 543.0);
}

#[test]
fn test_tile_addressing_is_north_row_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tile(dir.path(), "N46E007.hgt", gradient);
    let tile = HgtTile::open(&path).unwrap();

    // The first value of the file is the northwest corner
    assert_eq!(
        tile.elevation_sample(7 * SPD, 47 * SPD),
        gradient(0, 0) as f64
    );
    // The last value is the southeast corner
    assert_eq!(
        tile.elevation_sample(8 * SPD, 46 * SPD),
        gradient(3600, 3600) as f64
    );
    // A mid-tile spot check
    assert_eq!(
        tile.elevation_sample(7 * SPD + 25, 46 * SPD + 100),
        gradient(3600 - 100, 25) as f64
    );
}

#[test]
fn test_southern_western_hemisphere_tile() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tile(dir.path(), "S33W070.hgt", |_, _| -12);
    let tile = HgtTile::open(&path).unwrap();
    let extent = tile.extent();
    assert_eq!(extent.ix().from(), -70 * SPD);
    assert_eq!(extent.iy().from(), -33 * SPD);
    assert_eq!(tile.elevation_sample(-70 * SPD + 1800, -33 * SPD + 1800), -12.0);
}

#[test]
fn test_truncated_tile_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("N46E007.hgt");
    std::fs::write(&path, vec![0u8; 1000]).unwrap();
    let err = HgtTile::open(&path).unwrap_err();
    assert!(err.to_string().contains("invalid tile size"), "{err}");
}

#[test]
fn test_misnamed_tile_rejected() {
    // The name is parsed before the file is even opened
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tile_46_7.hgt");
    std::fs::write(&path, [0u8; 2]).unwrap();
    assert!(HgtTile::open(&path).is_err());
}

#[test]
fn test_aggregate_dispatches_across_degree_boundary() {
    let dir = tempfile::tempdir().unwrap();
    write_tile(dir.path(), "N46E007.hgt", |_, _| 100);
    write_tile(dir.path(), "N46E008.hgt", |_, _| 200);
    let dem = AggregateDem::open(dir.path(), 46, 7, 2, 1).unwrap();

    assert_eq!(dem.extent().ix().from(), 7 * SPD);
    assert_eq!(dem.extent().ix().to(), 9 * SPD);

    assert_eq!(dem.elevation_sample(7 * SPD + 1800, 46 * SPD + 1800), 100.0);
    assert_eq!(dem.elevation_sample(8 * SPD + 1800, 46 * SPD + 1800), 200.0);
    // The western edge of the grid still resolves to the west tile
    assert_eq!(dem.elevation_sample(7 * SPD, 46 * SPD), 100.0);
    // The far eastern edge resolves to the east tile
    assert_eq!(dem.elevation_sample(9 * SPD, 47 * SPD), 200.0);
}

#[test]
fn test_aggregate_requires_every_tile() {
    let dir = tempfile::tempdir().unwrap();
    write_tile(dir.path(), "N46E007.hgt", |_, _| 0);
    // N46E008.hgt is missing
    let err = AggregateDem::open(dir.path(), 46, 7, 2, 1).unwrap_err();
    assert!(err.to_string().contains("missing tile"), "{err}");
}

#[test]
fn test_zorder_conversion_preserves_samples() {
    let dir = tempfile::tempdir().unwrap();
    let src_path = write_tile(dir.path(), "N46E007.hgt", gradient);
    let src = HgtTile::open(&src_path).unwrap();

    let out = zorder::convert(&src, dir.path()).unwrap();
    assert_eq!(out.file_name().unwrap(), "N46E007.zhgt");
    let curve = ZOrderTile::open(&out).unwrap();

    assert_eq!(curve.extent(), src.extent());
    for x in (7 * SPD..=8 * SPD).step_by(301) {
        for y in (46 * SPD..=47 * SPD).step_by(301) {
            assert_eq!(
                curve.elevation_sample(x, y),
                src.elevation_sample(x, y),
                "mismatch at ({x}, {y})"
            );
        }
    }
    // Corners too
    assert_eq!(
        curve.elevation_sample(8 * SPD, 47 * SPD),
        src.elevation_sample(8 * SPD, 47 * SPD)
    );
}

#[test]
fn test_union_of_two_file_tiles() {
    let dir = tempfile::tempdir().unwrap();
    let west = HgtTile::open(write_tile(dir.path(), "N46E007.hgt", |_, _| 1)).unwrap();
    let east = HgtTile::open(write_tile(dir.path(), "N46E008.hgt", |_, _| 2)).unwrap();
    let both = vantage_dem::union(Arc::new(west), Arc::new(east)).unwrap();

    assert_eq!(both.elevation_sample(7 * SPD + 100, 46 * SPD + 100), 1.0);
    assert_eq!(both.elevation_sample(8 * SPD + 100, 46 * SPD + 100), 2.0);
}
