//! Linked-ring vertex store.
//!
//! Vertices live in one growable array and name each other by array index,
//! so the doubly-linked rings need no pointers and no ownership cycles.
//! Deletion is a tombstone: the record stays in place with self-loop
//! neighbors and a `Deleted` state, and its position remains readable.

use crate::primitives::Point2;

/// Scan state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VertState {
    /// Not yet examined since the last mutation near it.
    Dirty,
    /// Classified as a reflex interior angle; never a valid ear pivot.
    Reflex,
    /// Spliced out of its ring. Neighbors are self-loops.
    Deleted,
}

/// One ring vertex: position, neighbor links, scan state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Vert {
    pub pos: Point2<i16>,
    pub next: usize,
    pub prev: usize,
    pub state: VertState,
}

/// The vertex arena. Every ring in flight lives here; a vertex's index is
/// its identity for the whole triangulation.
///
/// Invariant: for every non-deleted vertex `v`,
/// `next(prev(v)) == v` and `prev(next(v)) == v`.
#[derive(Debug, Default)]
pub(crate) struct Ring {
    verts: Vec<Vert>,
}

impl Ring {
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Appends a vertex with explicit neighbor links; returns its index.
    pub fn push(&mut self, pos: Point2<i16>, prev: usize, next: usize) -> usize {
        self.verts.push(Vert {
            pos,
            next,
            prev,
            state: VertState::Dirty,
        });
        self.verts.len() - 1
    }

    /// Appends a copy of vertex `i` (position, links, and state); returns
    /// the new index.
    pub fn push_copy(&mut self, i: usize) -> usize {
        let v = self.verts[i];
        self.verts.push(v);
        self.verts.len() - 1
    }

    #[inline]
    pub fn pos(&self, i: usize) -> Point2<i16> {
        self.verts[i].pos
    }

    #[inline]
    pub fn next(&self, i: usize) -> usize {
        self.verts[i].next
    }

    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        self.verts[i].prev
    }

    #[inline]
    pub fn state(&self, i: usize) -> VertState {
        self.verts[i].state
    }

    #[inline]
    pub fn is_deleted(&self, i: usize) -> bool {
        self.verts[i].state == VertState::Deleted
    }

    #[inline]
    pub fn set_next(&mut self, i: usize, next: usize) {
        self.verts[i].next = next;
    }

    #[inline]
    pub fn set_prev(&mut self, i: usize, prev: usize) {
        self.verts[i].prev = prev;
    }

    /// Makes `b` follow `a` in ring order.
    #[inline]
    pub fn link(&mut self, a: usize, b: usize) {
        self.verts[a].next = b;
        self.verts[b].prev = a;
    }

    /// Tombstones vertex `i`: `Deleted` state, self-loop neighbors. The
    /// position stays readable.
    pub fn mark_deleted(&mut self, i: usize) {
        let v = &mut self.verts[i];
        v.state = VertState::Deleted;
        v.next = i;
        v.prev = i;
    }

    /// Returns the maximal contiguous index interval `[begin, end)` of
    /// vertices sharing `i`'s position. Meaningful after sorting, which
    /// packs coincident vertices into runs.
    pub fn coincident_range(&self, i: usize) -> (usize, usize) {
        let p = self.verts[i].pos;
        let mut begin = i;
        while begin > 0 && self.verts[begin - 1].pos == p {
            begin -= 1;
        }
        let mut end = i + 1;
        while end < self.verts.len() && self.verts[end].pos == p {
            end += 1;
        }
        (begin, end)
    }

    /// Sorts the vertices lexicographically by position and rewrites every
    /// neighbor link through the permutation. Returns the old-to-new index
    /// map so the caller can rewrite its own vertex references.
    ///
    /// The sort is stable, so equal positions keep their relative order
    /// and reruns on identical input produce identical layouts. Duplicate
    /// positions are kept; the clipping logic handles them through
    /// coincident ranges.
    pub fn sort_and_remap(&mut self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.verts.len()).collect();
        order.sort_by_key(|&i| self.verts[i].pos);

        let mut old_to_new = vec![0usize; self.verts.len()];
        for (new_i, &old_i) in order.iter().enumerate() {
            old_to_new[old_i] = new_i;
        }

        let mut sorted: Vec<Vert> = order.iter().map(|&i| self.verts[i]).collect();
        for v in &mut sorted {
            v.next = old_to_new[v.next];
            v.prev = old_to_new[v.prev];
        }
        self.verts = sorted;

        old_to_new
    }

    /// Full-ring link check: every live vertex is its neighbors' neighbor.
    #[cfg(test)]
    pub fn links_valid(&self) -> bool {
        self.verts.iter().enumerate().all(|(i, v)| {
            v.state == VertState::Deleted
                || (self.verts[v.prev].next == i && self.verts[v.next].prev == i)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i16, y: i16) -> Point2<i16> {
        Point2::new(x, y)
    }

    /// Builds a closed ring from positions, linked in order.
    fn ring_of(points: &[Point2<i16>]) -> Ring {
        let mut ring = Ring::default();
        let n = points.len();
        for (i, &pos) in points.iter().enumerate() {
            ring.push(pos, (i + n - 1) % n, (i + 1) % n);
        }
        ring
    }

    #[test]
    fn test_ring_links() {
        let ring = ring_of(&[p(0, 0), p(10, 0), p(10, 10)]);
        assert!(ring.links_valid());
        assert_eq!(ring.next(2), 0);
        assert_eq!(ring.prev(0), 2);
    }

    #[test]
    fn test_mark_deleted_self_loops() {
        let mut ring = ring_of(&[p(0, 0), p(10, 0), p(10, 10)]);
        ring.link(0, 2);
        ring.mark_deleted(1);

        assert!(ring.is_deleted(1));
        assert_eq!(ring.next(1), 1);
        assert_eq!(ring.prev(1), 1);
        // The tombstone's position is still readable.
        assert_eq!(ring.pos(1), p(10, 0));
        assert!(ring.links_valid());
    }

    #[test]
    fn test_coincident_range() {
        let mut ring = Ring::default();
        for (i, &pos) in [p(0, 0), p(5, 5), p(5, 5), p(5, 5), p(9, 0)].iter().enumerate() {
            ring.push(pos, i, i);
        }

        assert_eq!(ring.coincident_range(2), (1, 4));
        assert_eq!(ring.coincident_range(1), (1, 4));
        assert_eq!(ring.coincident_range(0), (0, 1));
        assert_eq!(ring.coincident_range(4), (4, 5));
    }

    #[test]
    fn test_sort_and_remap_preserves_links() {
        // Ring in scrambled position order: (10,0) -> (0,0) -> (5,5)
        let mut ring = ring_of(&[p(10, 0), p(0, 0), p(5, 5)]);
        let old_to_new = ring.sort_and_remap();

        // Sorted positions are lexicographic.
        assert_eq!(ring.pos(0), p(0, 0));
        assert_eq!(ring.pos(1), p(5, 5));
        assert_eq!(ring.pos(2), p(10, 0));

        // Ring order is untouched, only the names changed.
        assert!(ring.links_valid());
        let start = old_to_new[0];
        assert_eq!(ring.pos(start), p(10, 0));
        assert_eq!(ring.pos(ring.next(start)), p(0, 0));
        assert_eq!(ring.pos(ring.next(ring.next(start))), p(5, 5));
    }

    #[test]
    fn test_sort_is_stable_for_coincident() {
        let mut ring = Ring::default();
        for (i, &pos) in [p(5, 5), p(0, 0), p(5, 5)].iter().enumerate() {
            ring.push(pos, i, i);
        }
        let old_to_new = ring.sort_and_remap();

        // The two (5,5) records keep their relative order.
        assert!(old_to_new[0] < old_to_new[2]);
        assert_eq!(old_to_new[1], 0);
    }
}
