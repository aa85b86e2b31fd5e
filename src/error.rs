// One error type for the whole crate.
// Every variant states *where* things went wrong.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("window update error: {0}")]
    WindowUpdate(String), // Pushing the pixel buffer to the window failed

    #[error("no usable font: {0}")]
    FontNotFound(String), // No installed face covers Devanagari

    #[error("font parse error: {0}")]
    FontParse(String), // Face bytes exist but could not be parsed

    #[error("raster error: {0}")]
    Raster(String), // Allocating a pixel surface failed (zero-sized canvas)
}
