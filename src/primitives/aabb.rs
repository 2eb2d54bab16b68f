//! Axis-aligned bounding box over integer coordinates.

use super::Point2;
use num_traits::PrimInt;

/// A 2D axis-aligned bounding box with inclusive corners.
///
/// Both `min` and `max` are part of the box, so a box built from a single
/// point contains exactly that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb2<C> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<C>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<C>,
}

impl<C: PrimInt> Aabb2<C> {
    /// Creates a new box from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<C>, max: Point2<C>) -> Self {
        Self { min, max }
    }

    /// Creates a box from two arbitrary corners.
    ///
    /// Correctly handles corners in any orientation.
    #[inline]
    pub fn from_corners(a: Point2<C>, b: Point2<C>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a box containing a single point.
    #[inline]
    pub fn from_point(p: Point2<C>) -> Self {
        Self { min: p, max: p }
    }

    /// Returns a new box expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<C>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the union of two boxes (smallest box containing both).
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Returns `true` if this box contains the given point (boundary included).
    #[inline]
    pub fn contains_point(self, p: Point2<C>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if this box intersects another box (touching counts).
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

impl<C: PrimInt + Into<i64>> Aabb2<C> {
    /// Returns `max.x - min.x`, widened so the full i16 span cannot overflow.
    #[inline]
    pub fn width(self) -> i64 {
        self.max.x.into() - self.min.x.into()
    }

    /// Returns `max.y - min.y`, widened so the full i16 span cannot overflow.
    #[inline]
    pub fn height(self) -> i64 {
        self.max.y.into() - self.min.y.into()
    }
}
