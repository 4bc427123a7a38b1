//! Error types for the elevation model crate.

use thiserror::Error;

/// Errors that can occur when constructing elevation models.
///
/// Tile data is local and deterministic, so every failure here is a
/// configuration error: nothing is retried and no partial recovery of
/// a corrupt tile is attempted.
#[derive(Debug, Error)]
pub enum DemError {
    /// I/O error opening or mapping a tile file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tile filename does not follow the hemisphere+degrees convention.
    #[error("invalid tile filename: {0}")]
    InvalidFilename(String),

    /// Tile file has the wrong byte length for its format.
    #[error("invalid tile size for {path}: expected {expected} bytes, found {actual}")]
    InvalidTileSize {
        /// Offending file.
        path: String,
        /// Required byte length.
        expected: u64,
        /// Actual byte length.
        actual: u64,
    },

    /// A tile required by an aggregate model is missing from its
    /// directory.
    #[error("missing tile {name} in {dir}")]
    MissingTile {
        /// Expected tile filename.
        name: String,
        /// Directory searched.
        dir: String,
    },

    /// Two model extents cannot be unioned exactly.
    #[error(transparent)]
    NotUnionable(#[from] vantage_geo::GeoError),
}
