// The non-interactive guide the learner traces over.
// Visual: a white board with the letter as a pale gray fill plus a dashed
// outline, large and centered. Repainting it in full is also how the board
// is cleared.

use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Pixmap, Stroke, StrokeDash, Transform};

use crate::font::PlacedGlyph;

// Styling of the guide presentation. The fill must stay unobtrusive (the
// learner draws over it); the dashed outline gives the boundary cue.
const FILL_ALPHA: u8 = 20; // ≈ 8% black over white
const OUTLINE_ALPHA: u8 = 38; // ≈ 15% black
const OUTLINE_WIDTH: f32 = 3.0;
const DASH_ON_OFF: f32 = 8.0;

/// Fully repaint the surface: background, faded letter fill, dashed outline.
/// Idempotent; painting twice yields identical pixels.
pub fn paint(pixmap: &mut Pixmap, placed: &PlacedGlyph) {
    pixmap.fill(tiny_skia::Color::WHITE);

    let Some(path) = placed.path() else {
        return; // blank letter: an empty white board
    };

    let mut fill = Paint::default();
    fill.set_color_rgba8(0, 0, 0, FILL_ALPHA);
    fill.anti_alias = true;
    pixmap.fill_path(path, &fill, FillRule::Winding, Transform::identity(), None);

    let mut outline = Paint::default();
    outline.set_color_rgba8(0, 0, 0, OUTLINE_ALPHA);
    outline.anti_alias = true;
    let stroke = Stroke {
        width: OUTLINE_WIDTH,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        dash: StrokeDash::new(vec![DASH_ON_OFF, DASH_ON_OFF], 0.0),
        ..Stroke::default()
    };
    pixmap.stroke_path(path, &outline, &stroke, Transform::identity(), None);
}
