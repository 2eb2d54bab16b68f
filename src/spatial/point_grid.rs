//! Uniform grid index over points.

use super::grid::GridFrame;
use crate::primitives::{Aabb2, Point2};

/// A uniform grid index mapping point locations to grid cells.
///
/// Only presence matters, so entries carry no payload. Queries yield every
/// point stored in a cell touched by the query rectangle, which is a
/// superset of the points actually inside it; the caller re-tests exact
/// containment.
///
/// The grid is sized once from the final bounding box; insertion is
/// append-only and entries are never removed.
#[derive(Debug)]
pub struct PointGrid {
    frame: GridFrame,
    cells: Vec<Vec<Point2<i16>>>,
}

impl PointGrid {
    /// Creates a grid over `bounds` sized for roughly `estimate` points.
    pub fn new(bounds: Aabb2<i16>, estimate: usize) -> Self {
        let frame = GridFrame::new(bounds, estimate);
        let cells = vec![Vec::new(); frame.cell_count()];
        Self { frame, cells }
    }

    /// Adds a point. Points outside the original bounds clamp to the
    /// border cells.
    pub fn add(&mut self, p: Point2<i16>) {
        let cell = self.frame.cell_of(p);
        self.cells[cell].push(p);
    }

    /// Iterates every stored point whose cell is touched by `rect`.
    ///
    /// Yields stored entries, not just the ones inside `rect`.
    pub fn query(&self, rect: Aabb2<i16>) -> impl Iterator<Item = Point2<i16>> + '_ {
        self.frame
            .cover(rect)
            .flat_map(move |cell| self.cells[cell].iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i16, y: i16) -> Point2<i16> {
        Point2::new(x, y)
    }

    #[test]
    fn test_query_finds_contained_points() {
        let bounds = Aabb2::new(p(0, 0), p(100, 100));
        let mut grid = PointGrid::new(bounds, 8);
        grid.add(p(10, 10));
        grid.add(p(50, 50));
        grid.add(p(90, 90));

        let hits: Vec<_> = grid.query(Aabb2::new(p(0, 0), p(60, 60))).collect();
        assert!(hits.contains(&p(10, 10)));
        assert!(hits.contains(&p(50, 50)));
    }

    #[test]
    fn test_query_yields_superset() {
        // A point outside the query rect but in a touched cell may appear;
        // what matters is that re-testing containment filters it out.
        let bounds = Aabb2::new(p(0, 0), p(100, 100));
        let mut grid = PointGrid::new(bounds, 2);
        grid.add(p(99, 99));

        let rect = Aabb2::new(p(0, 0), p(10, 10));
        let inside: Vec<_> = grid
            .query(rect)
            .filter(|&q| rect.contains_point(q))
            .collect();
        assert!(inside.is_empty());
    }

    #[test]
    fn test_coincident_points_all_stored() {
        let bounds = Aabb2::new(p(0, 0), p(10, 10));
        let mut grid = PointGrid::new(bounds, 4);
        grid.add(p(5, 5));
        grid.add(p(5, 5));

        let hits = grid.query(Aabb2::from_point(p(5, 5))).count();
        assert_eq!(hits, 2);
    }
}
