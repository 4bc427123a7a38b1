//! The panorama grid and its builder.

use crate::PanoramaParameters;

/// An immutable, fully computed panorama.
///
/// Five parallel row-major grids hold, per pixel, the slant distance
/// to the first terrain point along the sight ray and that point's
/// longitude, latitude, elevation and slope. Pixels whose ray never
/// meets the ground keep the infinite distance sentinel (sky); their
/// other channels are unspecified.
#[derive(Debug, Clone)]
pub struct Panorama {
    parameters: PanoramaParameters,
    distance: Box<[f32]>,
    longitude: Box<[f32]>,
    latitude: Box<[f32]>,
    elevation: Box<[f32]>,
    slope: Box<[f32]>,
}

impl Panorama {
    /// The parameters this panorama was computed for.
    #[inline]
    pub fn parameters(&self) -> &PanoramaParameters {
        &self.parameters
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.parameters.width() && y < self.parameters.height(),
            "sample index ({x}, {y}) outside the panorama"
        );
        self.parameters.linear_sample_index(x, y)
    }

    /// Slant distance in meters at (`x`, `y`), `f32::INFINITY` for sky.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range (as do the other accessors).
    pub fn distance_at(&self, x: usize, y: usize) -> f32 {
        self.distance[self.index(x, y)]
    }

    /// Longitude in radians of the terrain point at (`x`, `y`).
    pub fn longitude_at(&self, x: usize, y: usize) -> f32 {
        self.longitude[self.index(x, y)]
    }

    /// Latitude in radians of the terrain point at (`x`, `y`).
    pub fn latitude_at(&self, x: usize, y: usize) -> f32 {
        self.latitude[self.index(x, y)]
    }

    /// Elevation in meters of the terrain point at (`x`, `y`).
    pub fn elevation_at(&self, x: usize, y: usize) -> f32 {
        self.elevation[self.index(x, y)]
    }

    /// Slope in radians of the terrain at (`x`, `y`).
    pub fn slope_at(&self, x: usize, y: usize) -> f32 {
        self.slope[self.index(x, y)]
    }
}

/// One-shot builder for [`Panorama`].
///
/// Arrays start pre-sized with the infinite distance sentinel.
/// `build` consumes the builder, so mutation after building (or
/// building twice) is rejected at compile time.
#[derive(Debug)]
pub struct PanoramaBuilder {
    parameters: PanoramaParameters,
    distance: Vec<f32>,
    longitude: Vec<f32>,
    latitude: Vec<f32>,
    elevation: Vec<f32>,
    slope: Vec<f32>,
}

impl PanoramaBuilder {
    /// Creates a builder for the given parameters, every distance
    /// initialized to `f32::INFINITY` and every other channel to 0.
    pub fn new(parameters: PanoramaParameters) -> Self {
        let size = parameters.width() * parameters.height();
        Self {
            parameters,
            distance: vec![f32::INFINITY; size],
            longitude: vec![0.0; size],
            latitude: vec![0.0; size],
            elevation: vec![0.0; size],
            slope: vec![0.0; size],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.parameters.width() && y < self.parameters.height(),
            "sample index ({x}, {y}) outside the panorama"
        );
        self.parameters.linear_sample_index(x, y)
    }

    /// Sets the slant distance at (`x`, `y`).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range (as do the other setters).
    pub fn set_distance_at(&mut self, x: usize, y: usize, distance: f32) -> &mut Self {
        let i = self.index(x, y);
        self.distance[i] = distance;
        self
    }

    /// Sets the terrain point longitude (radians) at (`x`, `y`).
    pub fn set_longitude_at(&mut self, x: usize, y: usize, longitude: f32) -> &mut Self {
        let i = self.index(x, y);
        self.longitude[i] = longitude;
        self
    }

    /// Sets the terrain point latitude (radians) at (`x`, `y`).
    pub fn set_latitude_at(&mut self, x: usize, y: usize, latitude: f32) -> &mut Self {
        let i = self.index(x, y);
        self.latitude[i] = latitude;
        self
    }

    /// Sets the terrain point elevation (meters) at (`x`, `y`).
    pub fn set_elevation_at(&mut self, x: usize, y: usize, elevation: f32) -> &mut Self {
        let i = self.index(x, y);
        self.elevation[i] = elevation;
        self
    }

    /// Sets the terrain slope (radians) at (`x`, `y`).
    pub fn set_slope_at(&mut self, x: usize, y: usize, slope: f32) -> &mut Self {
        let i = self.index(x, y);
        self.slope[i] = slope;
        self
    }

    /// Finalizes the panorama, consuming the builder.
    pub fn build(self) -> Panorama {
        Panorama {
            parameters: self.parameters,
            distance: self.distance.into_boxed_slice(),
            longitude: self.longitude.into_boxed_slice(),
            latitude: self.latitude.into_boxed_slice(),
            elevation: self.elevation.into_boxed_slice(),
            slope: self.slope.into_boxed_slice(),
        }
    }
}
