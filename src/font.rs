// Glyph production: one display letter in, one centered outline path out.
//
// A Devanagari display letter is not always a single glyph ("क्ष", "अं"),
// so the text is shaped first and the resulting glyphs are appended into a
// single path. The same placed path later feeds both the visible guide and
// the invisible hit mask, so the two can never drift apart.

use std::path::Path as FsPath;

use tiny_skia::{Path, PathBuilder, Transform};
use ttf_parser::{GlyphId, OutlineBuilder};

use crate::error::Error;
use crate::types::SurfaceConfig;

/// Coverage probe: a face that cannot map this letter is useless here.
const SAMPLE_LETTER: char = 'अ';

/// Family names tried first, in order, before falling back to a full scan.
const PREFERRED_FAMILIES: [&str; 4] = [
    "Noto Sans Devanagari",
    "Lohit Devanagari",
    "Mangal",
    "Noto Serif Devanagari",
];

/// Produces an outline for a display letter at a given em size in pixels.
///
/// The returned path is in pixel units, y-down, at an arbitrary offset;
/// callers recenter it from its bounds. `None` means the letter produced
/// no ink (empty input, or the face has no glyphs for it); the surface
/// then degrades to an all-false mask rather than failing.
pub trait GlyphOutliner {
    fn outline(&self, text: &str, px_size: f32) -> Result<Option<Path>, Error>;
}

/// A font face picked from the system database (or an explicit file),
/// owning its bytes so shaping and outlining can re-parse on demand.
pub struct SystemFonts {
    data: Vec<u8>,
    index: u32,
    family: String,
}

impl SystemFonts {
    /// Load the system font database and pick a bold Devanagari-capable face.
    pub fn locate() -> Result<Self, Error> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self::pick(&db)
    }

    /// Use an explicit font file instead of the system database.
    pub fn from_file(path: &FsPath) -> Result<Self, Error> {
        let mut db = fontdb::Database::new();
        db.load_font_file(path)
            .map_err(|e| Error::FontNotFound(format!("{}: {e}", path.display())))?;
        Self::pick(&db)
    }

    /// The family name of the chosen face.
    pub fn family(&self) -> &str {
        &self.family
    }

    fn pick(db: &fontdb::Database) -> Result<Self, Error> {
        // Preferred families first, bold like the board's guide lettering.
        for family in PREFERRED_FAMILIES {
            let query = fontdb::Query {
                families: &[fontdb::Family::Name(family)],
                weight: fontdb::Weight::BOLD,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            };
            if let Some(id) = db.query(&query) {
                if let Some(fonts) = Self::take(db, id) {
                    if fonts.covers(SAMPLE_LETTER) {
                        tracing::info!(family = %fonts.family, "selected preferred font");
                        return Ok(fonts);
                    }
                }
            }
        }

        // Fall back: scan every installed face for Devanagari coverage.
        for info in db.faces() {
            if let Some(fonts) = Self::take(db, info.id) {
                if fonts.covers(SAMPLE_LETTER) {
                    tracing::info!(family = %fonts.family, "selected fallback font");
                    return Ok(fonts);
                }
            }
        }

        Err(Error::FontNotFound(
            "no installed face covers Devanagari".into(),
        ))
    }

    fn take(db: &fontdb::Database, id: fontdb::ID) -> Option<Self> {
        let family = db
            .face(id)
            .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_default();
        db.with_face_data(id, |data, index| Self {
            data: data.to_vec(),
            index,
            family: family.clone(),
        })
    }

    fn covers(&self, c: char) -> bool {
        ttf_parser::Face::parse(&self.data, self.index)
            .map(|face| face.glyph_index(c).is_some())
            .unwrap_or(false)
    }
}

impl GlyphOutliner for SystemFonts {
    fn outline(&self, text: &str, px_size: f32) -> Result<Option<Path>, Error> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        // Two parses of the same bytes: rustybuzz for shaping, ttf-parser
        // for outlines. The types never cross between the two crates.
        let shaper = rustybuzz::Face::from_slice(&self.data, self.index)
            .ok_or_else(|| Error::FontParse(format!("{}: shaper rejected face", self.family)))?;
        let face = ttf_parser::Face::parse(&self.data, self.index)
            .map_err(|e| Error::FontParse(format!("{}: {e}", self.family)))?;

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();
        let shaped = rustybuzz::shape(&shaper, &[], buffer);

        let infos = shaped.glyph_infos();
        let positions = shaped.glyph_positions();

        // Everything mapped to .notdef: the face cannot render this letter.
        if infos.iter().all(|info| info.glyph_id == 0) {
            return Ok(None);
        }

        // Append every shaped glyph at its pen position, in font units (y-up).
        let mut pen = OutlinePen::new();
        let (mut cursor_x, mut cursor_y) = (0.0f32, 0.0f32);
        for (info, pos) in infos.iter().zip(positions) {
            pen.offset_x = cursor_x + pos.x_offset as f32;
            pen.offset_y = cursor_y + pos.y_offset as f32;
            // Blank glyphs (spaces, pure marks without ink) add no contours.
            let _ = face.outline_glyph(GlyphId(info.glyph_id as u16), &mut pen);
            cursor_x += pos.x_advance as f32;
            cursor_y += pos.y_advance as f32;
        }

        let Some(path) = pen.builder.finish() else {
            return Ok(None); // only blank glyphs (spaces) produced
        };

        // Font units (y-up) -> pixels (y-down), scaled to the em size.
        let scale = px_size / face.units_per_em() as f32;
        Ok(path.transform(Transform::from_scale(scale, -scale)))
    }
}

/// Converts ttf-parser outline callbacks into one growing tiny-skia path,
/// shifting each glyph to its pen position.
struct OutlinePen {
    builder: PathBuilder,
    offset_x: f32,
    offset_y: f32,
}

impl OutlinePen {
    fn new() -> Self {
        Self {
            builder: PathBuilder::new(),
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl OutlineBuilder for OutlinePen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x + self.offset_x, y + self.offset_y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x + self.offset_x, y + self.offset_y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            x1 + self.offset_x,
            y1 + self.offset_y,
            x + self.offset_x,
            y + self.offset_y,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            x1 + self.offset_x,
            y1 + self.offset_y,
            x2 + self.offset_x,
            y2 + self.offset_y,
            x + self.offset_x,
            y + self.offset_y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// One letter's outline, sized for a canvas and centered on it.
///
/// Built once per letter change; both the guide painter and the mask
/// builder consume this same path.
pub struct PlacedGlyph {
    path: Option<Path>,
}

impl PlacedGlyph {
    pub fn build(
        outliner: &dyn GlyphOutliner,
        text: &str,
        config: &SurfaceConfig,
    ) -> Result<Self, Error> {
        let Some(raw) = outliner.outline(text, config.font_px())? else {
            return Ok(Self { path: None });
        };

        // Center the ink box on the canvas.
        let bounds = raw.bounds();
        let dx = config.width as f32 / 2.0 - (bounds.x() + bounds.width() / 2.0);
        let dy = config.height as f32 / 2.0 - (bounds.y() + bounds.height() / 2.0);
        let path = raw.transform(Transform::from_translate(dx, dy));

        Ok(Self { path })
    }

    /// Placeholder for a letter that produced no ink.
    pub fn blank() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }
}
