// End-to-end behavior of the tracing surface, driven through its public
// API with a synthetic outliner so no installed font is needed.

use std::cell::Cell;
use std::rc::Rc;

use girva::catalog::{SWAR, VYANJAN};
use girva::font::{GlyphOutliner, PlacedGlyph};
use girva::{
    guide, DisplayMetrics, Error, GlyphMask, Point, PointerEvent, PointerInput, Rgb, SurfaceConfig,
    SystemFonts, TracingSurface,
};
use tiny_skia::{Path, PathBuilder, Pixmap};

/// Synthetic letter shapes: "▭" is a wide thin bar, anything else a full
/// square block. Whitespace produces no ink, like an unrenderable letter.
struct ShapeOutliner;

impl GlyphOutliner for ShapeOutliner {
    fn outline(&self, text: &str, px_size: f32) -> Result<Option<Path>, Error> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let height = if text == "▭" { px_size / 5.0 } else { px_size };
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.line_to(px_size, 0.0);
        pb.line_to(px_size, height);
        pb.line_to(0.0, height);
        pb.close();
        Ok(pb.finish())
    }
}

const ORANGE: Rgb = Rgb::new(0xf9, 0x73, 0x16);

fn board(glyph: &str) -> TracingSurface {
    TracingSurface::new(Box::new(ShapeOutliner), glyph, ORANGE, SurfaceConfig::default()).unwrap()
}

/// Identity view: canvas displayed at its intrinsic size.
fn flat_view() -> DisplayMetrics {
    DisplayMetrics::fullscreen(320.0, 320.0)
}

fn mouse(x: f32, y: f32) -> PointerInput {
    PointerInput::Mouse { x, y }
}

// With the default config the square block spans 60..260 on both axes.
const CENTER: (f32, f32) = (160.0, 160.0);
const FAR_CORNER: (f32, f32) = (2.0, 2.0);

#[test]
fn mask_is_a_nonempty_subset_of_the_guide_fill() {
    let config = SurfaceConfig::default();
    let placed = PlacedGlyph::build(&ShapeOutliner, "◼", &config).unwrap();
    let mask = GlyphMask::build(&placed, config.width, config.height).unwrap();
    assert!(mask.any());

    let mut pixmap = Pixmap::new(config.width, config.height).unwrap();
    guide::paint(&mut pixmap, &placed);

    // Every hit-testable pixel carries visible guide ink.
    for y in 0..config.height as i32 {
        for x in 0..config.width as i32 {
            if mask.occupied(x, y) {
                let pixel = pixmap.pixels()[(y * config.width as i32 + x) as usize];
                assert!(pixel.red() < 255, "occupied pixel ({x},{y}) shows no guide");
            }
        }
    }
}

#[test]
fn scenario_press_trace_release_at_the_letter_center() {
    let mut surface = board("◼");
    let view = flat_view();
    let centroid = surface.glyph_centroid().unwrap();
    let pristine = surface.pixmap().data().to_vec();

    surface.handle_pointer(PointerEvent::Down(mouse(centroid.x, centroid.y)), &view);
    assert!(surface.is_drawing());

    surface.handle_pointer(
        PointerEvent::Move(mouse(centroid.x + 5.0, centroid.y + 5.0)),
        &view,
    );
    assert_ne!(
        surface.pixmap().data(),
        pristine.as_slice(),
        "accepted movement must paint a segment"
    );

    surface.handle_pointer(PointerEvent::Up, &view);
    assert!(!surface.is_drawing());
}

#[test]
fn scenario_press_far_from_the_letter_is_absorbed() {
    let mut surface = board("◼");
    let view = flat_view();
    let pristine = surface.pixmap().data().to_vec();

    surface.handle_pointer(PointerEvent::Down(mouse(FAR_CORNER.0, FAR_CORNER.1)), &view);
    assert!(!surface.is_drawing());

    // Moves after the absorbed press paint nothing, even over the letter.
    surface.handle_pointer(PointerEvent::Move(mouse(CENTER.0, CENTER.1)), &view);
    surface.handle_pointer(PointerEvent::Move(mouse(100.0, 100.0)), &view);
    assert_eq!(surface.pixmap().data(), pristine.as_slice());
}

#[test]
fn straying_off_the_letter_paints_nothing_until_it_returns() {
    let mut surface = board("◼");
    let view = flat_view();

    surface.handle_pointer(PointerEvent::Down(mouse(CENTER.0, CENTER.1)), &view);
    let after_press = surface.pixmap().data().to_vec();

    // Off-letter movement: no paint, no state change.
    surface.handle_pointer(PointerEvent::Move(mouse(FAR_CORNER.0, FAR_CORNER.1)), &view);
    assert_eq!(surface.pixmap().data(), after_press.as_slice());
    assert!(surface.is_drawing());

    // Returning movement resumes painting.
    surface.handle_pointer(PointerEvent::Move(mouse(150.0, 150.0)), &view);
    assert_ne!(surface.pixmap().data(), after_press.as_slice());
}

#[test]
fn clear_mid_stroke_restores_the_pristine_guide_and_keeps_the_mask() {
    let mut surface = board("◼");
    let view = flat_view();
    let pristine = surface.pixmap().data().to_vec();
    let probe = Point::new(CENTER.0, CENTER.1);
    assert!(surface.near_glyph(probe));

    surface.handle_pointer(PointerEvent::Down(mouse(CENTER.0, CENTER.1)), &view);
    surface.handle_pointer(PointerEvent::Move(mouse(170.0, 170.0)), &view);
    assert!(surface.is_drawing());

    surface.clear();
    assert_eq!(surface.pixmap().data(), pristine.as_slice());
    assert!(!surface.is_drawing());
    assert!(surface.near_glyph(probe), "clear must not touch the mask");
}

#[test]
fn drawing_after_clear_behaves_like_a_fresh_mount() {
    let mut surface = board("◼");
    let view = flat_view();

    let trace = |surface: &mut TracingSurface| {
        surface.handle_pointer(PointerEvent::Down(mouse(100.0, 160.0)), &view);
        surface.handle_pointer(PointerEvent::Move(mouse(220.0, 160.0)), &view);
        surface.handle_pointer(PointerEvent::Up, &view);
    };

    trace(&mut surface);
    let first_pass = surface.pixmap().data().to_vec();

    surface.clear();
    trace(&mut surface);
    assert_eq!(surface.pixmap().data(), first_pass.as_slice());
}

#[test]
fn switching_letters_rebuilds_the_mask() {
    let mut surface = board("◼");
    // Occupied under the block, 40 px above the bar's ink: outside tolerance.
    let probe = Point::new(160.0, 100.0);
    assert!(surface.near_glyph(probe));

    surface.set_glyph("▭").unwrap();
    assert!(!surface.near_glyph(probe));

    // And back again.
    surface.set_glyph("◼").unwrap();
    assert!(surface.near_glyph(probe));
}

#[test]
fn blank_letter_disables_drawing_everywhere() {
    let mut surface = board("◼");
    surface.set_glyph(" ").unwrap();
    let view = flat_view();
    let pristine = surface.pixmap().data().to_vec();

    surface.handle_pointer(PointerEvent::Down(mouse(CENTER.0, CENTER.1)), &view);
    assert!(!surface.is_drawing());
    surface.handle_pointer(PointerEvent::Move(mouse(150.0, 150.0)), &view);
    assert_eq!(surface.pixmap().data(), pristine.as_slice());
}

#[test]
fn client_coordinates_pass_through_the_displayed_rect() {
    let mut surface = board("◼");
    // Board displayed doubled: client (320, 320) lands on canvas (160, 160).
    let view = DisplayMetrics::fullscreen(640.0, 640.0);

    surface.handle_pointer(PointerEvent::Down(mouse(320.0, 320.0)), &view);
    assert!(surface.is_drawing());
    surface.handle_pointer(PointerEvent::Up, &view);

    // The same client point under an identity view is the canvas corner,
    // far from the letter.
    surface.handle_pointer(PointerEvent::Down(mouse(4.0, 4.0)), &flat_view());
    assert!(!surface.is_drawing());
}

#[test]
fn color_changes_apply_to_the_next_segment_only() {
    let mut surface = board("◼");
    let view = flat_view();
    let green = Rgb::new(0x22, 0xc5, 0x5e);

    // One orange stroke along the center row.
    surface.handle_pointer(PointerEvent::Down(mouse(100.0, 160.0)), &view);
    surface.handle_pointer(PointerEvent::Move(mouse(140.0, 160.0)), &view);
    surface.handle_pointer(PointerEvent::Up, &view);

    surface.set_color(green);

    // A separate green stroke lower down.
    surface.handle_pointer(PointerEvent::Down(mouse(100.0, 200.0)), &view);
    surface.handle_pointer(PointerEvent::Move(mouse(140.0, 200.0)), &view);
    surface.handle_pointer(PointerEvent::Up, &view);

    let pixel_at = |surface: &TracingSurface, x: u32, y: u32| {
        let p = surface.pixmap().pixels()[(y * 320 + x) as usize];
        Rgb::new(p.red(), p.green(), p.blue())
    };
    assert_eq!(pixel_at(&surface, 120, 160), ORANGE, "existing stroke kept its color");
    assert_eq!(pixel_at(&surface, 120, 200), green);
}

#[test]
fn every_catalog_letter_produces_ink_with_a_real_font() {
    // Machines without a Devanagari face skip the assertion body.
    let Ok(fonts) = SystemFonts::locate() else {
        return;
    };
    let config = SurfaceConfig::default();
    for entry in SWAR.iter().chain(VYANJAN.iter()) {
        let placed = PlacedGlyph::build(&fonts, entry.letter, &config).unwrap();
        let mask = GlyphMask::build(&placed, config.width, config.height).unwrap();
        assert!(mask.any(), "letter {} produced no ink", entry.letter);
    }
}

#[test]
fn completion_hook_is_stored_but_never_invoked() {
    let mut surface = board("◼");
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    surface.set_on_complete(Box::new(move || flag.set(true)));
    assert!(surface.has_completion_hook());

    // Trace a full stroke across the letter; the hook stays silent.
    let view = flat_view();
    surface.handle_pointer(PointerEvent::Down(mouse(70.0, 160.0)), &view);
    for x in (80..=250).step_by(10) {
        surface.handle_pointer(PointerEvent::Move(mouse(x as f32, 160.0)), &view);
    }
    surface.handle_pointer(PointerEvent::Up, &view);
    assert!(!fired.get());
}
