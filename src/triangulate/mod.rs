//! Constrained triangulation of integer polygonal regions.
//!
//! Given one or more closed paths over the signed 16-bit grid, produces a
//! triangle list covering the interior implied by the paths without any
//! triangle crossing an input edge.
//!
//! # Algorithm
//!
//! Ear clipping, robust to coincident vertices. Input paths are fused into
//! a single ring with zero-area bridges, vertices are kept sorted so
//! coincident points form contiguous runs, and each candidate ear is
//! checked against a grid index of reflex vertices. All orientation tests
//! are exact 64-bit integer determinants; no floating point is involved.
//!
//! The engine degrades instead of failing: zero-length edges are clipped
//! as trivial ears, unclippable residue is left out of the output, and
//! malformed inputs produce a best-effort triangulation.
//!
//! # Example
//!
//! ```
//! use tessera::triangulate;
//!
//! // A unit square, counter-clockwise.
//! let square: &[i16] = &[0, 0, 100, 0, 100, 100, 0, 100];
//!
//! let mut triangles = Vec::new();
//! triangulate(&mut triangles, &[square]);
//!
//! // Two triangles, three (x, y) pairs each.
//! assert_eq!(triangles.len(), 12);
//! ```

mod clip;
mod ingest;
mod join;
mod trace;

use crate::primitives::Aabb2;
use crate::ring::Ring;
use crate::spatial::PointGrid;
use ingest::PathInfo;
use trace::Trace;

/// All state of one triangulation call. Created at entry, mutated through
/// joining and clipping, dropped on return; the engine keeps nothing
/// process-wide.
pub(crate) struct TriState<'a> {
    pub ring: Ring,
    pub paths: Vec<PathInfo>,
    pub bbox: Aabb2<i16>,
    /// Reflex vertex positions. Frozen after ingest; entries are never
    /// removed, even when their vertex is clipped away.
    pub reflex: PointGrid,
    /// The dirty cursor driving the clipping scan.
    pub next_dirty: usize,
    pub out: &'a mut Vec<i16>,
}

impl TriState<'_> {
    /// Sorts vertices lexicographically and rewrites everything that
    /// names a vertex by index: neighbor links and per-path leftmost
    /// pointers.
    pub(crate) fn sort_and_remap(&mut self) {
        let old_to_new = self.ring.sort_and_remap();
        for path in &mut self.paths {
            path.leftmost = old_to_new[path.leftmost];
        }
    }
}

/// Triangulates the region bounded by `paths`, appending `6 * T` values
/// (`T` triangles, three `(x, y)` pairs each) to `output`.
///
/// Each path is an even-length sequence of interleaved x/y coordinates and
/// closes implicitly from its last vertex back to its first. Outer
/// boundaries wind counter-clockwise and holes clockwise; with multiple
/// paths, holes and islands are connected through zero-area bridges before
/// clipping. Triangle winding follows the input, so counter-clockwise
/// input yields counter-clockwise triangles.
///
/// The caller is responsible for the constraints in [`validate_paths`]:
/// this function does not report errors, it produces the best
/// triangulation it can.
///
/// [`validate_paths`]: crate::validate_paths
pub fn triangulate(output: &mut Vec<i16>, paths: &[&[i16]]) {
    run(output, paths, None);
}

/// Like [`triangulate`], but stops after `halt_after_clips` successful
/// clips and appends a description of the mid-run state to `trace_out` as
/// flat `(x0, y0, x1, y1)` segments: the live ring (both links per
/// vertex), plus small glyphs at the centroid of each candidate ear
/// rejected since the previous clip. A square marks an edge-blocked
/// candidate, an X a valence failure, a plus a contained reflex vertex.
///
/// Passing `halt_after_clips == 0` never halts; `trace_out` then ends up
/// holding the glyphs of the final (unsuccessful) scan.
pub fn triangulate_traced(
    output: &mut Vec<i16>,
    paths: &[&[i16]],
    halt_after_clips: u32,
    trace_out: &mut Vec<i16>,
) {
    let mut trace = Trace::new(halt_after_clips, trace_out);
    run(output, paths, Some(&mut trace));
}

fn run(output: &mut Vec<i16>, paths: &[&[i16]], trace: Option<&mut Trace>) {
    let Some(mut ts) = ingest::build(output, paths) else {
        return;
    };

    ts.sort_and_remap();
    if ts.paths.len() > 1 {
        join::join_paths(&mut ts);
        ts.sort_and_remap();
    }

    let coord_estimate = 6 * ts.ring.len();
    ts.out.reserve(coord_estimate);

    clip::clip_all(&mut ts, trace);
}
