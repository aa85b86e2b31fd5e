// The tracing surface itself: owns the pixel board, the letter's placed
// outline, the hit mask and the pen, and wires pointer input to paint.
//
// Lifecycle: a letter arrives -> outline placed, mask rebuilt, guide
// repainted, pen reset. The learner then traces; clearing repaints the
// guide and keeps the mask (same letter). Nothing is persisted.

use tiny_skia::Pixmap;

use crate::error::Error;
use crate::font::{GlyphOutliner, PlacedGlyph};
use crate::guide;
use crate::input::{DisplayMetrics, PointerEvent};
use crate::mask::GlyphMask;
use crate::stroke::{self, Pen};
use crate::types::{Point, Rgb, SurfaceConfig};

pub struct TracingSurface {
    config: SurfaceConfig,
    outliner: Box<dyn GlyphOutliner>,
    glyph: String,
    placed: PlacedGlyph,
    mask: GlyphMask,
    pixmap: Pixmap, // the board everyone sees: guide + accepted strokes
    pen: Pen,
    color: Rgb,
    // Reserved hook for "the learner finished tracing". No completion
    // criterion is defined, so nothing invokes it yet.
    on_complete: Option<Box<dyn FnMut()>>,
}

impl TracingSurface {
    pub fn new(
        outliner: Box<dyn GlyphOutliner>,
        glyph: &str,
        initial_color: Rgb,
        config: SurfaceConfig,
    ) -> Result<Self, Error> {
        let pixmap = Pixmap::new(config.width, config.height)
            .ok_or_else(|| Error::Raster(format!("board {}x{}", config.width, config.height)))?;
        let mut surface = Self {
            config,
            outliner,
            glyph: String::new(),
            placed: PlacedGlyph::blank(),
            mask: GlyphMask::empty(config.width, config.height),
            pixmap,
            pen: Pen::new(),
            color: initial_color,
            on_complete: None,
        };
        surface.set_glyph(glyph)?;
        Ok(surface)
    }

    /// Switch to a new letter: rebuild the placed outline and the mask,
    /// repaint the guide, reset the pen.
    pub fn set_glyph(&mut self, glyph: &str) -> Result<(), Error> {
        self.placed = PlacedGlyph::build(self.outliner.as_ref(), glyph, &self.config)?;
        self.mask = GlyphMask::build(&self.placed, self.config.width, self.config.height)?;
        self.glyph = glyph.to_string();
        self.pen.lift();
        guide::paint(&mut self.pixmap, &self.placed);
        tracing::debug!(glyph, has_ink = self.mask.any(), "letter changed");
        Ok(())
    }

    /// Change the stroke color. Takes effect on the next accepted segment;
    /// already-painted strokes keep their color.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Discard all strokes and restore the pristine guide. The mask is kept
    /// (same letter); the pen returns to idle.
    pub fn clear(&mut self) {
        self.pen.lift();
        guide::paint(&mut self.pixmap, &self.placed);
        tracing::debug!(glyph = %self.glyph, "board cleared");
    }

    /// Feed one pointer event through the client→canvas transform and the
    /// pen. Accepted movements paint immediately.
    pub fn handle_pointer(&mut self, event: PointerEvent, view: &DisplayMetrics) {
        match event {
            PointerEvent::Down(input) => {
                let p = view.to_canvas(&input, self.config.width, self.config.height);
                if self.pen.press(p, &self.mask, self.config.tolerance_px) {
                    tracing::debug!(x = p.x, y = p.y, "stroke started");
                }
            }
            PointerEvent::Move(input) => {
                let q = view.to_canvas(&input, self.config.width, self.config.height);
                if let Some(segment) = self.pen.movement(q, &self.mask, self.config.tolerance_px) {
                    stroke::paint_segment(
                        &mut self.pixmap,
                        &segment,
                        self.color,
                        self.config.stroke_width,
                    );
                }
            }
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::Cancel => self.pen.lift(),
        }
    }

    /// Register the reserved completion hook. Stored but never invoked:
    /// what "finished tracing" means is an open product decision.
    pub fn set_on_complete(&mut self, hook: Box<dyn FnMut()>) {
        self.on_complete = Some(hook);
    }

    /// Whether a completion hook has been registered.
    pub fn has_completion_hook(&self) -> bool {
        self.on_complete.is_some()
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn is_drawing(&self) -> bool {
        self.pen.is_drawing()
    }

    /// The board pixels (guide + strokes).
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Hit-test a canvas-space point the same way the pen does.
    pub fn near_glyph(&self, p: Point) -> bool {
        self.mask.near(p, self.config.tolerance_px)
    }

    /// Centroid of the letter's ink, if it has any.
    pub fn glyph_centroid(&self) -> Option<Point> {
        self.mask.centroid()
    }

    /// Pack the board as 0x00RRGGBB pixels for minifb presentation.
    /// `out` must hold width*height entries.
    pub fn present_into(&self, out: &mut [u32]) {
        // The board is always opaque, so premultiplied channels are the
        // straight channels.
        for (slot, pixel) in out.iter_mut().zip(self.pixmap.pixels()) {
            *slot = Rgb::new(pixel.red(), pixel.green(), pixel.blue()).to_u32();
        }
    }
}
