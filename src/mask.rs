// Per-pixel occupancy for hit-testing, derived from the placed letter path.
// Never displayed; the visible guide is painted separately from the same path.

use tiny_skia::{FillRule, Paint, Pixmap, Transform};

use crate::error::Error;
use crate::font::PlacedGlyph;
use crate::types::Point;

/// Boolean occupancy map covering the same dimensions as the drawing surface.
///
/// Built fresh whenever the letter changes; never partially updated. A blank
/// letter yields an all-false mask, which simply disables drawing everywhere.
pub struct GlyphMask {
    width: u32,
    height: u32,
    occupied: Vec<bool>, // length = width * height, row-major
}

impl GlyphMask {
    /// Rasterize the placed path into occupancy.
    ///
    /// The scratch raster is drawn without antialiasing so occupancy is a
    /// crisp boolean, then discarded after the alpha read-back.
    pub fn build(placed: &PlacedGlyph, width: u32, height: u32) -> Result<Self, Error> {
        let mut mask = Self::empty(width, height);
        let Some(path) = placed.path() else {
            return Ok(mask);
        };

        let mut scratch = Pixmap::new(width, height)
            .ok_or_else(|| Error::Raster(format!("mask raster {width}x{height}")))?;
        let mut paint = Paint::default();
        paint.set_color(tiny_skia::Color::WHITE);
        paint.anti_alias = false;
        scratch.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);

        for (slot, pixel) in mask.occupied.iter_mut().zip(scratch.pixels()) {
            *slot = pixel.alpha() > 0;
        }
        Ok(mask)
    }

    /// All-false mask of the given size.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            occupied: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Occupancy at one pixel; out-of-range is false, never a fault.
    pub fn occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.occupied[y as usize * self.width as usize + x as usize]
    }

    /// Lenient hit test: true if any pixel of the square neighborhood with
    /// the given radius around `p` is occupied. An exact-pixel test would be
    /// unusably strict for a learner's hand.
    pub fn near(&self, p: Point, tolerance: i32) -> bool {
        let cx = p.x.round() as i32;
        let cy = p.y.round() as i32;
        for y in (cy - tolerance)..=(cy + tolerance) {
            for x in (cx - tolerance)..=(cx + tolerance) {
                if self.occupied(x, y) {
                    return true;
                }
            }
        }
        false
    }

    /// True if the mask has any ink at all.
    pub fn any(&self) -> bool {
        self.occupied.iter().any(|&o| o)
    }

    /// Mean position of all occupied pixels, if any.
    pub fn centroid(&self) -> Option<Point> {
        let (mut sum_x, mut sum_y, mut count) = (0.0f64, 0.0f64, 0u64);
        for y in 0..self.height {
            for x in 0..self.width {
                if self.occupied[(y * self.width + x) as usize] {
                    sum_x += x as f64;
                    sum_y += y as f64;
                    count += 1;
                }
            }
        }
        (count > 0).then(|| Point::new((sum_x / count as f64) as f32, (sum_y / count as f64) as f32))
    }
}
