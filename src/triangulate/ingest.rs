//! Path ingestion and reflex classification.

use super::TriState;
use crate::predicates::turn;
use crate::primitives::{Aabb2, Point2};
use crate::ring::Ring;
use crate::spatial::PointGrid;

/// Per-path bookkeeping used while ingesting and joining.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathInfo {
    /// First vertex index of the path as ingested. Stale after sorting.
    pub begin: usize,
    /// One past the last vertex index as ingested. Stale after sorting.
    pub end: usize,
    /// Index of the path's lexicographically smallest vertex. Kept current
    /// through every remap.
    pub leftmost: usize,
}

/// Pulls the input paths into a fresh triangulation state: vertices linked
/// into closed rings, per-path leftmost vertices, the overall bounding
/// box, and the reflex point index. Returns `None` when the input has no
/// vertices at all.
pub(crate) fn build<'a>(out: &'a mut Vec<i16>, paths: &[&[i16]]) -> Option<TriState<'a>> {
    let mut ring = Ring::default();
    let mut infos: Vec<PathInfo> = Vec::with_capacity(paths.len());
    let mut bbox: Option<Aabb2<i16>> = None;

    for path in paths {
        debug_assert!(path.len() % 2 == 0, "paths interleave x/y pairs");
        if path.len() < 2 {
            continue;
        }

        let begin = ring.len();
        let count = path.len() / 2;
        let mut leftmost = begin;
        let mut prev = begin + count - 1;

        for pair in path.chunks_exact(2) {
            let pos = Point2::new(pair[0], pair[1]);
            let i = ring.len();
            ring.push(pos, prev, i + 1);
            prev = i;

            bbox = Some(match bbox {
                Some(b) => b.expand_to_include(pos),
                None => Aabb2::from_point(pos),
            });
            if pos < ring.pos(leftmost) {
                leftmost = i;
            }
        }

        // Close the ring: the last vertex wraps to the first.
        ring.set_next(ring.len() - 1, begin);

        infos.push(PathInfo {
            begin,
            end: ring.len(),
            leftmost,
        });
    }

    let bbox = bbox?;

    let mut reflex = PointGrid::new(bbox, ring.len() / 2);
    for info in &infos {
        classify_path(&ring, info, &mut reflex);
    }

    Some(TriState {
        ring,
        paths: infos,
        bbox,
        reflex,
        next_dirty: 0,
        out,
    })
}

/// Walks every consecutive vertex triple of one ingested path and records
/// reflex (or straight) apices in the point index. Entries are never
/// removed afterwards; the interior test at clip time re-checks exact
/// containment and skips points coincident with a candidate triangle's
/// corners.
fn classify_path(ring: &Ring, info: &PathInfo, reflex: &mut PointGrid) {
    if info.end - info.begin <= 2 {
        return;
    }

    let mut l = info.end - 2;
    let mut k = info.end - 1;
    for j in info.begin..info.end {
        if !turn(ring.pos(l), ring.pos(k), ring.pos(j)).is_ccw() {
            reflex.add(ring.pos(k));
        }
        l = k;
        k = j;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_links_closed_rings() {
        let mut out = Vec::new();
        let ts = build(&mut out, &[&[0, 0, 10, 0, 10, 10], &[20, 0, 30, 0, 30, 10]]).unwrap();

        assert_eq!(ts.ring.len(), 6);
        assert!(ts.ring.links_valid());
        // Each path closes onto itself.
        assert_eq!(ts.ring.next(2), 0);
        assert_eq!(ts.ring.prev(0), 2);
        assert_eq!(ts.ring.next(5), 3);
        assert_eq!(ts.ring.prev(3), 5);
    }

    #[test]
    fn test_build_tracks_leftmost_and_bbox() {
        let mut out = Vec::new();
        let ts = build(&mut out, &[&[10, 0, -5, 3, 8, -7]]).unwrap();

        assert_eq!(ts.paths.len(), 1);
        assert_eq!(ts.ring.pos(ts.paths[0].leftmost), Point2::new(-5, 3));
        assert_eq!(ts.bbox.min, Point2::new(-5, -7));
        assert_eq!(ts.bbox.max, Point2::new(10, 3));
    }

    #[test]
    fn test_build_skips_empty_paths() {
        let mut out = Vec::new();
        let ts = build(&mut out, &[&[], &[0, 0, 10, 0, 10, 10], &[]]).unwrap();

        assert_eq!(ts.paths.len(), 1);
        assert_eq!(ts.ring.len(), 3);
    }

    #[test]
    fn test_build_empty_input() {
        let mut out = Vec::new();
        assert!(build(&mut out, &[]).is_none());
        assert!(build(&mut out, &[&[]]).is_none());
    }

    #[test]
    fn test_reflex_classification() {
        // Concave L: exactly one reflex corner, at (1, 1).
        let mut out = Vec::new();
        let ts = build(&mut out, &[&[0, 0, 2, 0, 2, 1, 1, 1, 1, 2, 0, 2]]).unwrap();

        let hits: Vec<_> = ts
            .reflex
            .query(Aabb2::new(Point2::new(0, 0), Point2::new(2, 2)))
            .collect();
        assert_eq!(hits, vec![Point2::new(1, 1)]);
    }

    #[test]
    fn test_straight_angles_classified_reflex() {
        // A collinear midpoint counts as reflex-or-straight and lands in
        // the index.
        let mut out = Vec::new();
        let ts = build(&mut out, &[&[0, 0, 5, 0, 10, 0, 10, 10]]).unwrap();

        let hits: Vec<_> = ts
            .reflex
            .query(Aabb2::from_point(Point2::new(5, 0)))
            .filter(|&p| p == Point2::new(5, 0))
            .collect();
        assert_eq!(hits.len(), 1);
    }
}
