//! Uniform grid index over axis-aligned boxes.

use super::grid::GridFrame;
use crate::primitives::Aabb2;

/// An entry in a [`BoxGrid`]: a bounding box plus the sign of the diagonal
/// it stands for.
///
/// A box alone is ambiguous between the two diagonals of the rectangle;
/// `slope_up` disambiguates. `true` means the segment runs from the box's
/// lower-left to its upper-right corner, `false` from upper-left to
/// lower-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxEntry {
    pub bounds: Aabb2<i16>,
    pub slope_up: bool,
}

/// A uniform grid index over axis-aligned boxes.
///
/// Each entry is stored under every cell its box covers, so a query may
/// yield the same entry more than once. The one consumer here rejects a
/// candidate on the first hit, so deduplication is deliberately skipped.
///
/// The grid is sized once from the final bounding box; insertion is
/// append-only and entries are never removed.
#[derive(Debug)]
pub struct BoxGrid {
    frame: GridFrame,
    cells: Vec<Vec<BoxEntry>>,
}

impl BoxGrid {
    /// Creates a grid over `bounds` sized for roughly `estimate` boxes.
    pub fn new(bounds: Aabb2<i16>, estimate: usize) -> Self {
        let frame = GridFrame::new(bounds, estimate);
        let cells = vec![Vec::new(); frame.cell_count()];
        Self { frame, cells }
    }

    /// Adds a box with its diagonal sign.
    pub fn add(&mut self, bounds: Aabb2<i16>, slope_up: bool) {
        let entry = BoxEntry { bounds, slope_up };
        let Self { frame, cells } = self;
        for cell in frame.cover(bounds) {
            cells[cell].push(entry);
        }
    }

    /// Iterates every entry stored under a cell touched by `rect`.
    ///
    /// Entries spanning several cells can be yielded once per touched
    /// cell.
    pub fn query(&self, rect: Aabb2<i16>) -> impl Iterator<Item = BoxEntry> + '_ {
        self.frame
            .cover(rect)
            .flat_map(move |cell| self.cells[cell].iter().copied())
    }
}
