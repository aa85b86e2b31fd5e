// What you SEE now:
// • A board with one Marathi letter, large and faded, with a dashed outline.
// • Hold Left Mouse near the letter: you trace over it; strokes that stray
//   off the letter are dropped (the line gaps, then resumes on the letter).
// • ←/→ previous/next letter, Tab switches स्वर/व्यंजन, 1–6 pick a color,
//   C clears the board, ESC quits.
//
// Optional font override: first CLI argument or GIRVA_FONT, a path to a
// .ttf with Devanagari coverage. Otherwise the system fonts are searched.

use std::path::PathBuf;

use girva::catalog::{Letter, PALETTE, SWAR, VYANJAN};
use girva::error::Error;
use girva::{DisplayMetrics, PointerEvent, PointerInput, SurfaceConfig, SystemFonts, TracingSurface};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Scale, Window, WindowOptions};
use tracing_subscriber::EnvFilter;

/// The window shows the 320×320 board doubled, so the client→canvas
/// transform in the input layer does real work.
const WINDOW_SCALE: f32 = 2.0;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    /* --- Font + surface setup ---
       Visual: nothing yet; this decides which face draws the letters. */
    let fonts = match font_override() {
        Some(path) => SystemFonts::from_file(&path)?,
        None => SystemFonts::locate()?,
    };

    let config = SurfaceConfig::default();
    let mut show_vyanjan = false; // false: स्वर page, true: व्यंजन page
    let mut section: &[Letter] = &SWAR;
    let mut index = 0usize;
    let mut color_index = 0usize;

    let mut surface = TracingSurface::new(
        Box::new(fonts),
        section[index].letter,
        PALETTE[color_index].rgb,
        config,
    )?;

    /* --- Window ---
       Visual: the board appears, doubled in size for comfortable tracing. */
    let mut window = Window::new(
        &title(&section[index], PALETTE[color_index].name),
        config.width as usize,
        config.height as usize,
        WindowOptions {
            scale: Scale::X2,
            ..WindowOptions::default()
        },
    )
    .map_err(|e| Error::WindowInit(e.to_string()))?;

    // Mouse samples arrive in display pixels; the surface maps them back.
    let view = DisplayMetrics::fullscreen(
        config.width as f32 * WINDOW_SCALE,
        config.height as f32 * WINDOW_SCALE,
    );

    /* --- Reusable present buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = vec![0u32; (config.width * config.height) as usize];

    // Edge detection for synthesizing down/up events from button state.
    let mut was_down = false;
    let mut was_inside = false;

    /* ------------------------------ Main loop ------------------------------ */
    while window.is_open() && !window.is_key_down(Key::Escape) {
        /* 1) Letter paging and section toggle. */
        let mut letter_changed = false;
        if window.is_key_pressed(Key::Right, KeyRepeat::No) {
            index = (index + 1) % section.len();
            letter_changed = true;
        }
        if window.is_key_pressed(Key::Left, KeyRepeat::No) {
            index = (index + section.len() - 1) % section.len();
            letter_changed = true;
        }
        if window.is_key_pressed(Key::Tab, KeyRepeat::No) {
            show_vyanjan = !show_vyanjan;
            section = if show_vyanjan { &VYANJAN } else { &SWAR };
            index = 0;
            letter_changed = true;
        }
        if letter_changed {
            surface.set_glyph(section[index].letter)?;
        }

        /* 2) Palette keys 1–6.
           Visual: the next stroke comes out in the chosen color. */
        const COLOR_KEYS: [Key; 6] = [
            Key::Key1,
            Key::Key2,
            Key::Key3,
            Key::Key4,
            Key::Key5,
            Key::Key6,
        ];
        let mut color_changed = false;
        for (i, key) in COLOR_KEYS.iter().enumerate() {
            if window.is_key_pressed(*key, KeyRepeat::No) {
                color_index = i;
                surface.set_color(PALETTE[color_index].rgb);
                color_changed = true;
            }
        }

        /* 3) Clear.
           Visual: strokes vanish, the pristine guide letter remains. */
        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            surface.clear();
        }

        if letter_changed || color_changed {
            window.set_title(&title(&section[index], PALETTE[color_index].name));
        }

        /* 4) Pointer events, synthesized from mouse state edges. */
        let down = window.get_mouse_down(MouseButton::Left);
        match window.get_unscaled_mouse_pos(MouseMode::Discard) {
            Some((x, y)) => {
                let input = PointerInput::Mouse { x, y };
                if down && !was_down {
                    surface.handle_pointer(PointerEvent::Down(input), &view);
                } else if down {
                    surface.handle_pointer(PointerEvent::Move(input), &view);
                } else if was_down {
                    surface.handle_pointer(PointerEvent::Up, &view);
                }
                was_inside = true;
            }
            None => {
                // Mouse left the board mid-stroke: the pen lifts.
                if was_inside {
                    surface.handle_pointer(PointerEvent::Leave, &view);
                }
                was_inside = false;
            }
        }
        was_down = down;

        /* 5) Present the board. */
        surface.present_into(&mut screen);
        window
            .update_with_buffer(&screen, config.width as usize, config.height as usize)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
    }

    Ok(())
}

fn font_override() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GIRVA_FONT").ok())
        .map(PathBuf::from)
}

fn title(letter: &Letter, color_name: &str) -> String {
    format!(
        "अक्षर गिरवा — {} ({}) • {} ({}) — रंग: {}",
        letter.letter, letter.pronunciation, letter.example, letter.meaning, color_name
    )
}
