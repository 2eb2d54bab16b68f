//! The ear-finding and clipping scan.
//!
//! A dirty cursor walks vertex indices from 0 upward; every successful
//! clip rewinds it to the earliest index it touched, extended left across
//! that index's coincident run so clusters are re-examined as a unit. The
//! scan ends when the cursor leaves the array without finding an ear,
//! leaving at most zero-area residue unemitted.

use super::trace::{centroid, Trace};
use super::TriState;
use crate::predicates::{in_cone, point_in_triangle, turn};
use crate::primitives::{Aabb2, Point2};
use crate::ring::VertState;

/// Clips ears until none remain (or the trace budget halts the run).
pub(crate) fn clip_all(ts: &mut TriState, mut trace: Option<&mut Trace>) {
    while find_and_clip(ts, &mut trace) {
        if let Some(t) = trace.as_deref_mut() {
            if t.note_clip() {
                t.dump_ring(&ts.ring);
                return;
            }
            t.clear_markers();
        }
    }
}

/// Advances the dirty cursor until one ear is clipped. Returns `false`
/// when the cursor exits the vertex array with nothing left to clip.
fn find_and_clip(ts: &mut TriState, trace: &mut Option<&mut Trace>) -> bool {
    while ts.next_dirty < ts.ring.len() {
        let vi1 = ts.next_dirty;
        let vi0 = ts.ring.prev(vi1);
        ts.next_dirty += 1;

        if ts.ring.is_deleted(vi1) {
            continue;
        }
        debug_assert!(!ts.ring.is_deleted(vi0));
        if vi0 == vi1 {
            // Fully collapsed remnant; nothing to do with it.
            continue;
        }

        if let Some(vi2) = find_ear(ts, vi0, vi1, trace) {
            clip(ts, vi0, vi1, vi2);
            return true;
        }
    }
    false
}

/// Looks for the apex of a valid ear on the edge `vi0 -> vi1`: the
/// sharpest left turn among the outgoing edges of `vi1`'s coincident
/// cluster, unblocked by incoming edges, not degenerate on both sides, and
/// containing no reflex vertex.
fn find_ear(
    ts: &TriState,
    vi0: usize,
    vi1: usize,
    trace: &mut Option<&mut Trace>,
) -> Option<usize> {
    let ring = &ts.ring;
    debug_assert_ne!(vi0, vi1);
    debug_assert!(!ring.is_deleted(vi1));

    let p0 = ring.pos(vi0);
    let p1 = ring.pos(vi1);

    if p0 == p1 {
        // Zero-length edge. Treat it like an ear to get rid of it.
        return Some(ring.next(vi1));
    }

    if ring.state(vi1) == VertState::Reflex {
        return None;
    }

    let (begin, end) = ring.coincident_range(vi1);

    // Pick the innermost outgoing edge that makes a strict left turn.
    let mut best: Option<usize> = None;
    for i in begin..end {
        let v = ring.next(i);
        if ring.is_deleted(v) {
            continue;
        }
        if turn(p0, p1, ring.pos(v)).is_ccw() {
            best = match best {
                Some(cur) if !in_cone(ring.pos(v), p0, p1, ring.pos(cur)) => Some(cur),
                _ => Some(v),
            };
        }
    }
    let vi2 = best?;
    let p2 = ring.pos(vi2);

    // An incoming edge inside the wedge would be cut by this ear.
    for i in begin..end {
        let v = ring.prev(i);
        if ring.is_deleted(v) {
            continue;
        }
        let u = ring.pos(v);
        if u != p0 && u != p2 && turn(p0, p1, u).is_ccw() && in_cone(u, p0, p1, p2) {
            if let Some(t) = trace.as_deref_mut() {
                t.mark_edge_blocked(centroid(p0, p1, p2));
            }
            return None;
        }
    }

    // Count coincident traffic along both ear sides; if each side nets
    // below one the "ear" is a zero-area fin.
    let mut valence0 = 0i32;
    let mut valence1 = 0i32;
    for i in begin..end {
        let v_in = ring.prev(i);
        if ring.is_deleted(v_in) {
            continue;
        }
        let u_in = ring.pos(v_in);
        if u_in == p2 {
            valence1 -= 1;
        } else if u_in == p0 {
            valence0 += 1;
        }
        let u_out = ring.pos(ring.next(i));
        if u_out == p2 {
            valence1 += 1;
        } else if u_out == p0 {
            valence0 -= 1;
        }
    }
    if valence0 < 1 && valence1 < 1 {
        if let Some(t) = trace.as_deref_mut() {
            t.mark_valence_failed(centroid(p0, p1, p2));
        }
        return None;
    }

    if any_reflex_in_triangle(ts, p0, p1, p2) {
        if let Some(t) = trace.as_deref_mut() {
            t.mark_reflex_hit(centroid(p0, p1, p2));
        }
        return None;
    }

    Some(vi2)
}

/// Returns `true` if any indexed reflex vertex touches the closed triangle
/// `(p0, p1, p2)`, not counting points coincident with its corners.
///
/// Deleted vertices keep their index entries, so a stale hit is possible;
/// the corner exclusion is what keeps that from rejecting valid ears.
fn any_reflex_in_triangle(
    ts: &TriState,
    p0: Point2<i16>,
    p1: Point2<i16>,
    p2: Point2<i16>,
) -> bool {
    let bound = Aabb2::from_point(p0)
        .expand_to_include(p1)
        .expand_to_include(p2);

    ts.reflex.query(bound).any(|p| {
        p != p0
            && p != p1
            && p != p2
            && bound.contains_point(p)
            && point_in_triangle(p, p0, p1, p2)
    })
}

/// Splices the ear `(vi0, vi1, vi2)` out of the ring, rewinds the cursor,
/// and emits the triangle when its three indices are distinct.
fn clip(ts: &mut TriState, vi0: usize, vi1: usize, vi2: usize) {
    let ring = &mut ts.ring;
    debug_assert_eq!(ring.next(vi0), vi1);
    debug_assert_eq!(ring.prev(vi1), vi0);

    let vi2p = ring.prev(vi2);
    if vi2p != vi1 {
        // The apex lives in another coincident cluster; pull the ring
        // through it before cutting.
        let vi1n = ring.next(vi1);
        ring.link(vi2p, vi1n);
        ring.link(vi1, vi2);
    }

    ring.mark_deleted(vi1);
    ring.link(vi0, vi2);

    debug_assert_eq!(ring.next(ring.prev(vi0)), vi0);
    debug_assert_eq!(ring.prev(ring.next(vi0)), vi0);
    debug_assert_eq!(ring.next(ring.prev(vi2)), vi2);
    debug_assert_eq!(ring.prev(ring.next(vi2)), vi2);

    let mut rewound = ts.next_dirty.min(vi0).min(vi1).min(vi2);
    while rewound > 0 && ring.pos(rewound - 1) == ring.pos(rewound) {
        rewound -= 1;
    }
    ts.next_dirty = rewound;

    if vi0 != vi1 && vi0 != vi2 && vi1 != vi2 {
        let (a, b, c) = (ring.pos(vi0), ring.pos(vi1), ring.pos(vi2));
        ts.out.extend_from_slice(&[a.x, a.y, b.x, b.y, c.x, c.y]);
    }
}
