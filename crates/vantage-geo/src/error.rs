//! Error types for the geometry crate.

use thiserror::Error;

/// Errors that can occur when working with geometric value types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeoError {
    /// Two intervals cannot be unioned without changing the covered set.
    ///
    /// The union of two intervals (or index rectangles) is only defined
    /// when it covers exactly the same samples as the two operands
    /// together, with no gap and no padding.
    #[error("intervals are not unionable: {0}")]
    NotUnionable(String),
}
