//! Closed integer intervals and axis-aligned index rectangles.
//!
//! These describe elevation raster extents in arc-second sample units.
//! The union of two extents is only defined when it is exact: the
//! result must cover precisely the samples of the two operands, with
//! no gap and no padding. Callers treat a failed union as a
//! construction error, never as something to snap or pad around.

use crate::{GeoError, Result};

/// An immutable closed integer range `[from, to]` with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval1D {
    from: i32,
    to: i32,
}

impl Interval1D {
    /// Creates the interval `[from, to]`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    pub fn new(from: i32, to: i32) -> Self {
        assert!(from <= to, "invalid interval: from {from} > to {to}");
        Self { from, to }
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn from(&self) -> i32 {
        self.from
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn to(&self) -> i32 {
        self.to
    }

    /// Returns true iff `v` lies in the interval.
    #[inline]
    pub fn contains(&self, v: i32) -> bool {
        self.from <= v && v <= self.to
    }

    /// Number of integers in the interval.
    #[inline]
    pub fn size(&self) -> i64 {
        (self.to - self.from) as i64 + 1
    }

    /// Number of integers in the intersection with `other` (0 when the
    /// intervals are disjoint).
    pub fn size_of_intersection_with(&self, other: &Interval1D) -> i64 {
        let lo = self.from.max(other.from);
        let hi = self.to.min(other.to);
        ((hi - lo) as i64 + 1).max(0)
    }

    /// Smallest interval containing both `self` and `other`.
    pub fn bounding_union(&self, other: &Interval1D) -> Interval1D {
        Interval1D::new(self.from.min(other.from), self.to.max(other.to))
    }

    /// Returns true iff the union of the two intervals is itself an
    /// interval, i.e. the bounding union covers exactly the integers of
    /// the two operands.
    pub fn is_unionable_with(&self, other: &Interval1D) -> bool {
        self.size() + other.size() - self.size_of_intersection_with(other)
            == self.bounding_union(other).size()
    }

    /// Union of the two intervals.
    ///
    /// Fails when the intervals are neither overlapping nor adjacent,
    /// since their union would then not be an interval.
    pub fn union(&self, other: &Interval1D) -> Result<Interval1D> {
        if !self.is_unionable_with(other) {
            return Err(GeoError::NotUnionable(format!(
                "[{}, {}] and [{}, {}]",
                self.from, self.to, other.from, other.to
            )));
        }
        Ok(self.bounding_union(other))
    }
}

/// An axis-aligned rectangle of raster indices, the cartesian product
/// of an x interval and a y interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval2D {
    ix: Interval1D,
    iy: Interval1D,
}

impl Interval2D {
    /// Creates the rectangle `ix` × `iy`.
    pub fn new(ix: Interval1D, iy: Interval1D) -> Self {
        Self { ix, iy }
    }

    /// Range of x indices.
    #[inline]
    pub fn ix(&self) -> Interval1D {
        self.ix
    }

    /// Range of y indices.
    #[inline]
    pub fn iy(&self) -> Interval1D {
        self.iy
    }

    /// Returns true iff (`x`, `y`) lies in the rectangle.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.ix.contains(x) && self.iy.contains(y)
    }

    /// Number of index pairs in the rectangle.
    #[inline]
    pub fn size(&self) -> i64 {
        self.ix.size() * self.iy.size()
    }

    /// Number of index pairs in the intersection with `other`.
    pub fn size_of_intersection_with(&self, other: &Interval2D) -> i64 {
        self.ix.size_of_intersection_with(&other.ix) * self.iy.size_of_intersection_with(&other.iy)
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn bounding_union(&self, other: &Interval2D) -> Interval2D {
        Interval2D::new(
            self.ix.bounding_union(&other.ix),
            self.iy.bounding_union(&other.iy),
        )
    }

    /// Returns true iff the bounding rectangle covers exactly the index
    /// pairs of the two operands.
    ///
    /// This area-equality test is exact only when the two rectangles
    /// share a full edge, which is the only case the elevation model
    /// layer ever unions; general rectangle pairs can satisfy it
    /// spuriously. The limited behavior is intentional.
    pub fn is_unionable_with(&self, other: &Interval2D) -> bool {
        self.size() + other.size() - self.size_of_intersection_with(other)
            == self.bounding_union(other).size()
    }

    /// Union of the two rectangles; fails when they are not unionable.
    pub fn union(&self, other: &Interval2D) -> Result<Interval2D> {
        if !self.is_unionable_with(other) {
            return Err(GeoError::NotUnionable(format!(
                "{:?} and {:?}",
                self, other
            )));
        }
        Ok(self.bounding_union(other))
    }
}
