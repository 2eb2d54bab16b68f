//! Mid-run state capture for visualizing the clipping scan.
//!
//! The engine itself has no I/O; a consumer that wants to watch the
//! algorithm passes a clip budget and a buffer. Rejected ear candidates
//! leave small glyphs at their triangle centroid (one shape per rejection
//! class), and when the budget runs out the whole live ring is dumped as
//! line segments for rendering.

use crate::primitives::Point2;
use crate::ring::Ring;

/// Half-extent of the rejection glyphs, in input coordinate units.
const GLYPH: i16 = 200;

/// A clip countdown plus the buffer that receives segments and glyphs.
///
/// All output is appended as flat `(x0, y0, x1, y1)` line segments.
pub(crate) struct Trace<'a> {
    countdown: u32,
    out: &'a mut Vec<i16>,
}

impl<'a> Trace<'a> {
    /// `halt_after_clips == 0` disables halting; markers still accumulate.
    pub fn new(halt_after_clips: u32, out: &'a mut Vec<i16>) -> Self {
        Self {
            countdown: halt_after_clips,
            out,
        }
    }

    /// Counts one successful clip. Returns `true` when the budget is
    /// exhausted and the run should stop for inspection.
    pub fn note_clip(&mut self) -> bool {
        if self.countdown > 0 {
            self.countdown -= 1;
            if self.countdown == 0 {
                return true;
            }
        }
        false
    }

    /// Drops the glyphs accumulated since the previous clip.
    pub fn clear_markers(&mut self) {
        self.out.clear();
    }

    /// Dumps every live vertex's outgoing and incoming edge.
    pub fn dump_ring(&mut self, ring: &Ring) {
        for i in 0..ring.len() {
            if ring.is_deleted(i) {
                continue;
            }
            let v = ring.pos(i);
            self.segment(v, ring.pos(ring.next(i)));
            self.segment(v, ring.pos(ring.prev(i)));
        }
    }

    /// Square glyph: the candidate was blocked by an incoming edge.
    pub fn mark_edge_blocked(&mut self, c: Point2<i16>) {
        let (x0, y0) = (c.x.saturating_sub(GLYPH), c.y.saturating_sub(GLYPH));
        let (x1, y1) = (c.x.saturating_add(GLYPH), c.y.saturating_add(GLYPH));
        self.raw_segment(x0, y0, x1, y0);
        self.raw_segment(x1, y0, x1, y1);
        self.raw_segment(x1, y1, x0, y1);
        self.raw_segment(x0, y1, x0, y0);
    }

    /// X glyph: the candidate failed the valence rule.
    pub fn mark_valence_failed(&mut self, c: Point2<i16>) {
        let (x0, y0) = (c.x.saturating_sub(GLYPH), c.y.saturating_sub(GLYPH));
        let (x1, y1) = (c.x.saturating_add(GLYPH), c.y.saturating_add(GLYPH));
        self.raw_segment(x0, y0, x1, y1);
        self.raw_segment(x0, y1, x1, y0);
    }

    /// Plus glyph: the candidate contained a reflex vertex.
    pub fn mark_reflex_hit(&mut self, c: Point2<i16>) {
        self.raw_segment(c.x, c.y.saturating_sub(GLYPH), c.x, c.y.saturating_add(GLYPH));
        self.raw_segment(c.x.saturating_sub(GLYPH), c.y, c.x.saturating_add(GLYPH), c.y);
    }

    fn segment(&mut self, a: Point2<i16>, b: Point2<i16>) {
        self.raw_segment(a.x, a.y, b.x, b.y);
    }

    fn raw_segment(&mut self, x0: i16, y0: i16, x1: i16, y1: i16) {
        self.out.extend_from_slice(&[x0, y0, x1, y1]);
    }
}

/// Centroid of a candidate triangle, for glyph placement.
pub(crate) fn centroid(a: Point2<i16>, b: Point2<i16>, c: Point2<i16>) -> Point2<i16> {
    let x = (i32::from(a.x) + i32::from(b.x) + i32::from(c.x)) / 3;
    let y = (i32::from(a.y) + i32::from(b.y) + i32::from(c.y)) / 3;
    Point2::new(x as i16, y as i16)
}
