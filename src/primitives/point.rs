//! 2D integer point type.

use num_traits::PrimInt;

/// A 2D point with integer x and y coordinates.
///
/// Generic over primitive integer types; the triangulation engine uses
/// `Point2<i16>`. The derived ordering is lexicographic (x first, then y),
/// which is the sort order the engine relies on to keep coincident points
/// in contiguous index runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2<C> {
    pub x: C,
    pub y: C,
}

impl<C: PrimInt> Point2<C> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: C, y: C) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: C::zero(),
            y: C::zero(),
        }
    }
}
