//! Shared cell geometry for the uniform grid indices.

use crate::primitives::{Aabb2, Point2};

/// Cell geometry of a uniform grid over a fixed bounding box.
///
/// The frame is sized once, from the final bounding box and an estimate of
/// how many elements will be stored; the extent never changes afterwards.
/// Points outside the box clamp to the border cells, so queries that
/// overhang the box are safe (they just touch edge cells).
#[derive(Debug, Clone)]
pub struct GridFrame {
    bounds: Aabb2<i16>,
    nx: usize,
    ny: usize,
}

/// Hard cap on cells per axis. Inputs are at most a few tens of thousands
/// of elements, so anything beyond this just wastes memory.
const MAX_CELLS_PER_AXIS: f64 = 256.0;

impl GridFrame {
    /// Sizes a grid over `bounds` for roughly `estimate` elements,
    /// targeting a small constant number of elements per cell and
    /// splitting cells between the axes in proportion to the box aspect.
    pub fn new(bounds: Aabb2<i16>, estimate: usize) -> Self {
        let cells = (estimate as f64 / 2.0).max(1.0);
        let w = (bounds.width() + 1) as f64;
        let h = (bounds.height() + 1) as f64;

        let nx = (cells * w / h).sqrt().round().clamp(1.0, MAX_CELLS_PER_AXIS);
        let ny = (cells / nx).round().clamp(1.0, MAX_CELLS_PER_AXIS);

        Self {
            bounds,
            nx: nx as usize,
            ny: ny as usize,
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny
    }

    #[inline]
    fn cell_x(&self, x: i16) -> usize {
        let w = self.bounds.width() + 1;
        let dx = i64::from(x) - i64::from(self.bounds.min.x);
        (dx * self.nx as i64 / w).clamp(0, self.nx as i64 - 1) as usize
    }

    #[inline]
    fn cell_y(&self, y: i16) -> usize {
        let h = self.bounds.height() + 1;
        let dy = i64::from(y) - i64::from(self.bounds.min.y);
        (dy * self.ny as i64 / h).clamp(0, self.ny as i64 - 1) as usize
    }

    /// Flat cell index of the cell containing `p`.
    #[inline]
    pub fn cell_of(&self, p: Point2<i16>) -> usize {
        self.cell_y(p.y) * self.nx + self.cell_x(p.x)
    }

    /// Iterates the flat indices of every cell touched by `rect`.
    pub fn cover(&self, rect: Aabb2<i16>) -> impl Iterator<Item = usize> + '_ {
        let x0 = self.cell_x(rect.min.x);
        let x1 = self.cell_x(rect.max.x);
        let y0 = self.cell_y(rect.min.y);
        let y1 = self.cell_y(rect.max.y);

        (y0..=y1).flat_map(move |cy| (x0..=x1).map(move |cx| cy * self.nx + cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> GridFrame {
        GridFrame::new(
            Aabb2::new(Point2::new(0, 0), Point2::new(99, 99)),
            32,
        )
    }

    #[test]
    fn test_autosize_bounds() {
        let f = frame();
        assert!(f.cell_count() >= 1);
        assert!(f.nx <= 256 && f.ny <= 256);
    }

    #[test]
    fn test_degenerate_box() {
        let f = GridFrame::new(Aabb2::from_point(Point2::new(5, 5)), 0);
        assert_eq!(f.cell_count(), 1);
        assert_eq!(f.cell_of(Point2::new(5, 5)), 0);
    }

    #[test]
    fn test_out_of_bounds_clamps() {
        let f = frame();
        // Far outside points land in border cells rather than panicking.
        let lo = f.cell_of(Point2::new(i16::MIN, i16::MIN));
        let hi = f.cell_of(Point2::new(i16::MAX, i16::MAX));
        assert_eq!(lo, 0);
        assert_eq!(hi, f.cell_count() - 1);
    }

    #[test]
    fn test_cover_is_superset_of_contained_points() {
        let f = frame();
        let rect = Aabb2::new(Point2::new(10, 10), Point2::new(30, 20));
        let cells: Vec<usize> = f.cover(rect).collect();
        for x in 10..=30i16 {
            for y in 10..=20i16 {
                assert!(cells.contains(&f.cell_of(Point2::new(x, y))));
            }
        }
    }
}
