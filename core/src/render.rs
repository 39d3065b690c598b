use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::color::Color;
use crate::errors::EncodeError;

/// Swatches are a fixed 32x32 canvas.
pub const SWATCH_SIZE: u32 = 32;

/// Content type of the encoded output.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Fill a [`SWATCH_SIZE`]-square canvas with a single color.
///
/// Deterministic: the same color always yields pixel-identical rasters.
pub fn solid(color: Color) -> RgbaImage {
    RgbaImage::from_pixel(SWATCH_SIZE, SWATCH_SIZE, Rgba(color.channels()))
}

/// Encode a raster to PNG bytes in memory.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| EncodeError::Png {
            reason: e.to_string(),
        })?;
    Ok(buf)
}
