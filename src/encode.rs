//! Image Encoder - canvas to PNG bytes
//!
//! Encoders sit behind a trait so the pipeline can be driven with a stand-in.

use image::codecs::png;
use image::{ExtendedColorType, ImageEncoder as _};
use thiserror::Error;

use crate::gradient::Canvas;

/// First eight bytes of every PNG stream.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("PNG codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("Unsupported raster: {0}")]
    Unsupported(String),
}

/// Serializes a canvas into an image byte stream.
pub trait CanvasEncoder: Send + Sync {
    fn name(&self) -> &'static str;
    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, EncodingError>;
}

/// PNG encoder backed by the `image` codec. 8-bit RGBA, default compression.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl CanvasEncoder for PngEncoder {
    fn name(&self) -> &'static str {
        "png"
    }

    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, EncodingError> {
        let (width, height) = canvas.dimensions();
        let mut buf = Vec::with_capacity(canvas.as_raw().len() / 4);
        png::PngEncoder::new(&mut buf).write_image(
            canvas.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(buf)
    }
}
