//! End-to-end computation tests on synthetic terrain.

use std::sync::Arc;
use vantage_dem::{ContinuousElevationModel, DiscreteElevationModel, SAMPLES_PER_DEGREE};
use vantage_geo::{distance::EARTH_RADIUS, GeoPoint, Interval1D, Interval2D};
use vantage_panorama::{PanoramaComputer, PanoramaParameters};

/// Sea-level plane covering a generous chunk of the globe.
struct FlatDem;

impl DiscreteElevationModel for FlatDem {
    fn extent(&self) -> Interval2D {
        Interval2D::new(
            Interval1D::new(-90 * SAMPLES_PER_DEGREE, 90 * SAMPLES_PER_DEGREE),
            Interval1D::new(-80 * SAMPLES_PER_DEGREE, 80 * SAMPLES_PER_DEGREE),
        )
    }

    fn elevation_sample(&self, _x: i32, _y: i32) -> f64 {
        0.0
    }
}

/// A plateau of the given elevation, sea level elsewhere.
struct PlateauDem {
    plateau: Interval2D,
    elevation: f64,
}

impl DiscreteElevationModel for PlateauDem {
    fn extent(&self) -> Interval2D {
        FlatDem.extent()
    }

    fn elevation_sample(&self, x: i32, y: i32) -> f64 {
        if self.plateau.contains(x, y) {
            self.elevation
        } else {
            0.0
        }
    }
}

fn flat_model() -> ContinuousElevationModel {
    ContinuousElevationModel::new(Arc::new(FlatDem))
}

fn observer() -> GeoPoint {
    GeoPoint::new(6.5_f64.to_radians(), 46.5_f64.to_radians())
}

#[test]
fn test_horizon_distance_on_flat_ground() {
    // Observer 2000 m above a flat terrain, looking horizontally:
    // the ray/ground equation f(d) = h - (1-k)·d²/(2R) crosses zero
    // at √(2hR/(1-k)) ≈ 171.1 km for k = 0.13.
    let h = 2000.0;
    let expected = (2.0 * h * EARTH_RADIUS / (1.0 - 0.13)).sqrt();

    // height 1 puts the single row exactly at altitude 0
    let parameters = PanoramaParameters::new(
        observer(),
        h,
        0.0,
        0.02,
        300_000.0,
        3,
        1,
    )
    .unwrap();
    let panorama = PanoramaComputer::new(flat_model())
        .compute(&parameters)
        .unwrap();

    for x in 0..3 {
        let d = panorama.distance_at(x, 0) as f64;
        assert!(
            (d - expected).abs() <= 64.0 + 4.0,
            "column {x}: distance {d}, expected {expected}"
        );
    }
}

#[test]
fn test_rows_above_horizon_are_sky() {
    // Three rows around altitude 0: the lower two hit the ground
    // before 200 km, the top one (+0.01 rad) would only meet the
    // curved ground near 259 km and must stay at infinity.
    let parameters = PanoramaParameters::new(
        observer(),
        2000.0,
        0.0,
        0.2,
        200_000.0,
        21,
        3,
    )
    .unwrap();
    let panorama = PanoramaComputer::new(flat_model())
        .compute(&parameters)
        .unwrap();

    for x in 0..21 {
        // Bottom row (y = 2, lowest altitude) sees the ground
        assert!(panorama.distance_at(x, 2).is_finite());
        // Top row (y = 0, highest altitude) is sky
        assert_eq!(panorama.distance_at(x, 0), f32::INFINITY);
    }
}

#[test]
fn test_sky_pixels_keep_infinite_distance_everywhere() {
    // Observer below a terrain of elevation 0 would see ground in every
    // direction; observer far above it with steep upward rays sees none.
    let parameters = PanoramaParameters::new(
        observer(),
        5000.0,
        0.0,
        0.5,
        50_000.0,
        11,
        5,
    )
    .unwrap();
    let panorama = PanoramaComputer::new(flat_model())
        .compute(&parameters)
        .unwrap();
    // Highest row looks up at ~0.1 rad; no flat terrain within 50 km
    // can intercept it from 5000 m up.
    for x in 0..11 {
        assert_eq!(panorama.distance_at(x, 0), f32::INFINITY);
    }
}

#[test]
fn test_plateau_blocks_the_view() {
    // A 3000 m plateau 20-30 km north of the observer. Horizontal rays
    // looking north must hit its south face at roughly 20 km.
    let spd = SAMPLES_PER_DEGREE;
    let north_20km = 46.5 + 20_000.0 / 111_000.0; // ≈ 0.18° north
    let north_30km = 46.5 + 30_000.0 / 111_000.0;
    let plateau = Interval2D::new(
        Interval1D::new(6 * spd, 7 * spd),
        Interval1D::new(
            (north_20km * spd as f64) as i32,
            (north_30km * spd as f64) as i32,
        ),
    );
    let model = ContinuousElevationModel::new(Arc::new(PlateauDem {
        plateau,
        elevation: 3000.0,
    }));

    let parameters = PanoramaParameters::new(
        observer(),
        500.0,
        0.0, // looking north
        0.05,
        100_000.0,
        5,
        1,
    )
    .unwrap();
    let panorama = PanoramaComputer::new(model).compute(&parameters).unwrap();

    let d = panorama.distance_at(2, 0);
    assert!(d.is_finite());
    assert!(
        (15_000.0..25_000.0).contains(&(d as f64)),
        "expected a hit near 20 km, got {d}"
    );
    // The hit lands on the south face: elevation between plain and
    // summit, and a near-vertical slope.
    let e = panorama.elevation_at(2, 0);
    assert!((0.0..=3000.0).contains(&e), "face elevation {e}");
    assert!(panorama.slope_at(2, 0) > 1.0);
}

#[test]
fn test_parallel_equals_sequential() {
    let spd = SAMPLES_PER_DEGREE;
    let plateau = Interval2D::new(
        Interval1D::new(6 * spd, 7 * spd),
        Interval1D::new((46.7 * spd as f64) as i32, (46.8 * spd as f64) as i32),
    );
    let model = ContinuousElevationModel::new(Arc::new(PlateauDem {
        plateau,
        elevation: 2500.0,
    }));
    let parameters = PanoramaParameters::new(
        observer(),
        1000.0,
        0.0,
        0.6,
        150_000.0,
        40,
        15,
    )
    .unwrap();

    let computer = PanoramaComputer::new(model);
    let sequential = computer.compute(&parameters).unwrap();
    let parallel = computer.compute_parallel(&parameters).unwrap();

    for y in 0..15 {
        for x in 0..40 {
            assert_eq!(
                sequential.distance_at(x, y),
                parallel.distance_at(x, y),
                "distance mismatch at ({x}, {y})"
            );
            assert_eq!(
                sequential.elevation_at(x, y),
                parallel.elevation_at(x, y),
                "elevation mismatch at ({x}, {y})"
            );
            assert_eq!(
                sequential.slope_at(x, y),
                parallel.slope_at(x, y),
                "slope mismatch at ({x}, {y})"
            );
        }
    }
}
