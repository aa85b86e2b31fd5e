//! girva: a Marathi letter-tracing practice board (अक्षर गिरवा).
//!
//! A learner picks a letter, sees it large and faded with a dashed outline,
//! and traces over it. Input that strays off the letter is dropped, so the
//! stroke can only land on (or near) the glyph itself:
//!
//! - [`font`]: shape one display letter into a single centered outline path
//! - [`mask`]: rasterize that path into a per-pixel hit mask
//! - [`guide`]: paint the faded fill + dashed outline the learner traces
//! - [`stroke`]: the pen state machine and round-cap segment painting
//! - [`input`]: mouse/touch normalization and client→canvas scaling
//! - [`surface`]: the composition root tying the above together
//! - [`catalog`]: the स्वर/व्यंजन letter tables and the color palette

pub mod catalog;
pub mod error;
pub mod font;
pub mod guide;
pub mod input;
pub mod mask;
pub mod stroke;
pub mod surface;
pub mod types;

pub use error::Error;
pub use font::{GlyphOutliner, PlacedGlyph, SystemFonts};
pub use input::{DisplayMetrics, PointerEvent, PointerInput};
pub use mask::GlyphMask;
pub use stroke::{Pen, Segment};
pub use surface::TracingSurface;
pub use types::{Point, Rgb, SurfaceConfig};
