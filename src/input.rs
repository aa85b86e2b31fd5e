// Pointer boundary: raw mouse/touch events are normalized here, and client
// coordinates are mapped into canvas pixel space. Everything past this
// module sees canvas-space points only.

use crate::types::Point;

/// A raw pointer sample in client (display) coordinates.
///
/// Mouse and touch arrive with different shapes upstream; by the time they
/// reach this type they are just a position tagged with their origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Mouse { x: f32, y: f32 },
    Touch { x: f32, y: f32 },
}

impl PointerInput {
    /// Normalize a touch list: only the first (primary) touch is honored,
    /// secondary touches are ignored.
    pub fn primary_touch(touches: &[(f32, f32)]) -> Option<Self> {
        touches.first().map(|&(x, y)| Self::Touch { x, y })
    }

    pub fn client_xy(&self) -> (f32, f32) {
        match *self {
            Self::Mouse { x, y } | Self::Touch { x, y } => (x, y),
        }
    }
}

/// One gesture-stream event, already normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(PointerInput),
    Move(PointerInput),
    Up,
    Leave,
    Cancel,
}

/// Where and how large the canvas is *displayed*, in client coordinates.
///
/// The canvas raster has its own intrinsic size; when it is shown scaled
/// (responsive layout, window scaling, device pixel ratio) input must be
/// mapped back through the displayed rectangle.
#[derive(Clone, Copy, Debug)]
pub struct DisplayMetrics {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayMetrics {
    /// Display rectangle at the client origin, e.g. a window whose entire
    /// client area is the board.
    pub fn fullscreen(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Map a client-space sample into canvas pixel space.
    pub fn to_canvas(&self, input: &PointerInput, canvas_width: u32, canvas_height: u32) -> Point {
        let (cx, cy) = input.client_xy();
        let scale_x = canvas_width as f32 / self.width;
        let scale_y = canvas_height as f32 / self.height;
        Point::new((cx - self.left) * scale_x, (cy - self.top) * scale_y)
    }
}
