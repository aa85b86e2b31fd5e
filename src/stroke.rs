// Stroke input gating and stroke painting.
//
// The pen is a two-state machine. A press lands only if it is near the
// letter; while drawing, each movement is accepted or dropped on the same
// test. Dropped movements change nothing at all, so the stroke leaves a
// visible gap where the hand strayed and resumes from the last accepted
// point when it returns. Lifting the pen (or leaving the board) always
// returns to idle.

use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::mask::GlyphMask;
use crate::types::{Point, Rgb};

/// One painted line between two consecutive accepted input points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

enum PenState {
    Idle,
    Drawing { last: Point }, // the last *accepted* point
}

/// The drawing/not-drawing state machine.
pub struct Pen {
    state: PenState,
}

impl Pen {
    pub fn new() -> Self {
        Self {
            state: PenState::Idle,
        }
    }

    /// Press at `p`. Enters drawing only when `p` is near the letter;
    /// otherwise the press is absorbed with no effect. Returns whether
    /// the pen is now drawing.
    pub fn press(&mut self, p: Point, mask: &GlyphMask, tolerance: i32) -> bool {
        if let PenState::Idle = self.state {
            if mask.near(p, tolerance) {
                self.state = PenState::Drawing { last: p };
            }
        }
        matches!(self.state, PenState::Drawing { .. })
    }

    /// Movement to `q`. While drawing, an accepted movement yields the
    /// segment to paint and advances the pen; a rejected one is dropped
    /// silently. Movements while idle do nothing.
    pub fn movement(&mut self, q: Point, mask: &GlyphMask, tolerance: i32) -> Option<Segment> {
        let PenState::Drawing { last } = &mut self.state else {
            return None;
        };
        if !mask.near(q, tolerance) {
            return None;
        }
        let segment = Segment { from: *last, to: q };
        *last = q;
        Some(segment)
    }

    /// Release / leave / cancel: unconditionally back to idle.
    pub fn lift(&mut self) {
        self.state = PenState::Idle;
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, PenState::Drawing { .. })
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new()
    }
}

/// Paint one accepted segment with round caps and joins, so consecutive
/// short segments read as a continuous hand-drawn stroke.
pub fn paint_segment(pixmap: &mut Pixmap, segment: &Segment, color: Rgb, width: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(segment.from.x, segment.from.y);
    pb.line_to(segment.to.x, segment.to.y);
    let Some(path) = pb.finish() else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(color.to_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}
