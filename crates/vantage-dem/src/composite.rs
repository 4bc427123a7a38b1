//! Exact union of two discrete elevation models.

use crate::{DiscreteElevationModel, Result};
use std::sync::Arc;
use vantage_geo::Interval2D;

/// The union of two discrete elevation models with unionable extents.
///
/// Sampling dispatches to whichever child's extent contains the index;
/// the shared edge (if any) is served by the left child.
pub struct CompositeDem {
    left: Arc<dyn DiscreteElevationModel>,
    right: Arc<dyn DiscreteElevationModel>,
    extent: Interval2D,
}

impl CompositeDem {
    /// Creates the union of `left` and `right`.
    ///
    /// Fails when the two extents cannot be unioned exactly (they must
    /// overlap or share a full edge).
    pub fn union(
        left: Arc<dyn DiscreteElevationModel>,
        right: Arc<dyn DiscreteElevationModel>,
    ) -> Result<Self> {
        let extent = left.extent().union(&right.extent())?;
        Ok(Self {
            left,
            right,
            extent,
        })
    }
}

impl DiscreteElevationModel for CompositeDem {
    fn extent(&self) -> Interval2D {
        self.extent
    }

    fn elevation_sample(&self, x: i32, y: i32) -> f64 {
        if self.left.extent().contains(x, y) {
            self.left.elevation_sample(x, y)
        } else if self.right.extent().contains(x, y) {
            self.right.elevation_sample(x, y)
        } else {
            panic!("sample index ({x}, {y}) outside the composite extent");
        }
    }
}

impl std::fmt::Debug for CompositeDem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeDem")
            .field("extent", &self.extent)
            .finish_non_exhaustive()
    }
}
