//! Joining separate paths into one ring with zero-area bridges.
//!
//! A bridge is a pair of coincident edges connecting a vertex on a
//! not-yet-joined path to a vertex on the already-joined master ring.
//! Afterward a single ear-clipping pass handles holes and islands without
//! any topological analysis.

use super::TriState;
use crate::predicates::{segment_vs_line, LineCross};
use crate::primitives::{Aabb2, Point2};
use crate::ring::Ring;
use crate::spatial::BoxGrid;

/// Connects every input path into one ring. Paths are processed in order
/// of their leftmost vertex; each bridge runs from a path's leftmost
/// vertex to an earlier (weakly left) vertex of the master ring that it
/// can reach without crossing an indexed edge.
pub(crate) fn join_paths(ts: &mut TriState) {
    if ts.paths.len() <= 1 {
        return;
    }

    ts.paths.sort_by_key(|p| p.leftmost);

    let mut edges = BoxGrid::new(ts.bbox, ts.ring.len());
    for i in 0..ts.ring.len() {
        add_edge(&mut edges, ts.ring.pos(i), ts.ring.pos(ts.ring.next(i)));
    }

    for pi in 1..ts.paths.len() {
        let v1 = ts.paths[pi].leftmost;
        if v1 == 0 {
            // Coincident with the very first vertex; nothing to bridge.
            continue;
        }

        let v2 = find_bridge_target(&ts.ring, v1, &edges);
        splice_bridge(&mut ts.ring, v1, v2);
        add_edge(&mut edges, ts.ring.pos(v1), ts.ring.pos(v2));
    }
}

/// Finds a bridge target for `v1`: the nearest preceding vertex index
/// whose connecting segment does not cross any indexed edge. Because
/// vertices are sorted and `v1` is its path's leftmost vertex, every
/// candidate lies weakly left of `v1` and every edge it could hit is
/// already in the index.
fn find_bridge_target(ring: &Ring, v1: usize, edges: &BoxGrid) -> usize {
    debug_assert!(v1 > 0);
    for i in (0..v1).rev() {
        if !any_edge_intersects(ring, v1, i, edges) {
            return i;
        }
    }

    // Malformed input. Join to the nearest candidate and keep going; a
    // crossing bridge beats aborting the whole triangulation.
    log::warn!(
        "no crossing-free bridge target for vertex {}; joining to {}",
        v1,
        v1 - 1
    );
    v1 - 1
}

/// Returns `true` if any indexed edge touches the open interior of the
/// segment `(a, b)`.
///
/// The candidate must strictly cross the indexed edge's line while the
/// indexed edge touches or crosses the candidate's line. The asymmetry
/// keeps shared-endpoint contacts out of the verdict while still
/// rejecting genuine intersections.
fn any_edge_intersects(ring: &Ring, a: usize, b: usize, edges: &BoxGrid) -> bool {
    let ev0 = ring.pos(a);
    let ev1 = ring.pos(b);
    let bound = Aabb2::from_corners(ev0, ev1);

    edges.query(bound).any(|entry| {
        let (mut e0, mut e1) = (entry.bounds.min, entry.bounds.max);
        if !entry.slope_up {
            std::mem::swap(&mut e0.y, &mut e1.y);
        }

        segment_vs_line(ev0, ev1, e0, e1) == LineCross::Cross
            && segment_vs_line(e0, e1, ev0, ev1) != LineCross::Clear
    })
}

/// Stores one ring edge in the index as its bounding box plus the sign of
/// the diagonal the segment occupies.
fn add_edge(edges: &mut BoxGrid, v0: Point2<i16>, v1: Point2<i16>) {
    let slope_up =
        (i32::from(v1.x) - i32::from(v0.x)) * (i32::from(v1.y) - i32::from(v0.y)) > 0;
    edges.add(Aabb2::from_corners(v0, v1), slope_up);
}

/// Splices a bridge between `v1` and `v2` by appending one coincident copy
/// of each and rewiring so the ring runs through the zero-width gap:
///
/// ```text
///   >---v2----->            >---v2 n2-->
///                    to          v\ \^
///   <----v1-----<          <---v1  n1---<
/// ```
///
/// (`v1`/`n1` and `v2`/`n2` are coincident; the gap is exaggerated.)
fn splice_bridge(ring: &mut Ring, v1: usize, v2: usize) {
    let n1 = ring.push_copy(v1);
    let n2 = ring.push_copy(v2);

    ring.set_prev(v1, v2);
    ring.set_next(v2, v1);
    ring.set_next(n1, n2);
    ring.set_prev(n2, n1);
    let n1p = ring.prev(n1);
    ring.set_next(n1p, n1);
    let n2n = ring.next(n2);
    ring.set_prev(n2n, n2);

    for v in [v1, v2, n1, n2] {
        debug_assert_eq!(ring.next(ring.prev(v)), v);
        debug_assert_eq!(ring.prev(ring.next(v)), v);
    }
}
