//! PNG encoder - assembles complete PNG byte streams from rasters.
//!
//! Output is a minimal, strictly conforming stream: the eight-byte
//! signature, an IHDR, a single IDAT holding the zlib-compressed
//! scanlines, and an IEND trailer. Every scanline uses filter type 0
//! (None), so the encoded bytes are a pure function of the input
//! pixels and the deflater.

use crate::png::chunk::write_chunk;
use crate::png::compress::{CompressError, Compressor, MinizCompressor};
use crate::raster::{PixelLayout, RasterImage};
use std::sync::Arc;
use thiserror::Error;

/// Eight-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Errors raised while encoding a raster to PNG.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The scanline buffer could not be allocated.
    #[error("out of memory assembling {requested} scanline bytes")]
    OutOfMemory { requested: usize },
    /// The compressor failed to produce a zlib stream.
    #[error("IDAT compression failed")]
    CompressionFailed(#[from] CompressError),
}

/// PNG encoder configuration.
///
/// Holds the injected compression capability; everything else about
/// the output is fixed (8-bit depth, no interlace, filter 0).
#[derive(Clone)]
pub struct PngEncoder {
    compressor: Arc<dyn Compressor>,
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PngEncoder {
    /// Create an encoder with the default deflater.
    pub fn new() -> Self {
        Self {
            compressor: Arc::new(MinizCompressor),
        }
    }

    /// Replace the compression capability.
    pub fn with_compressor(mut self, compressor: Arc<dyn Compressor>) -> Self {
        self.compressor = compressor;
        self
    }

    /// Encode `image` into a complete PNG byte stream.
    ///
    /// # Returns
    ///
    /// The full file contents, signature through IEND.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::OutOfMemory`] if the scanline buffer
    /// cannot be allocated, or [`EncodeError::CompressionFailed`] if
    /// the deflater rejects the stream.
    pub fn encode(&self, image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
        let raw = filtered_scanlines(image)?;
        let idat = self.compressor.compress(&raw)?;

        let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 12 + 13 + 12 + idat.len() + 12);
        out.extend_from_slice(&PNG_SIGNATURE);
        write_chunk(&mut out, *b"IHDR", &ihdr_payload(image));
        write_chunk(&mut out, *b"IDAT", &idat);
        write_chunk(&mut out, *b"IEND", &[]);
        Ok(out)
    }
}

/// Build the 13-byte IHDR payload.
fn ihdr_payload(image: &RasterImage) -> [u8; 13] {
    let mut payload = [0u8; 13];
    payload[0..4].copy_from_slice(&image.width().to_be_bytes());
    payload[4..8].copy_from_slice(&image.height().to_be_bytes());
    payload[8] = 8; // bit depth
    payload[9] = color_type(image.layout());
    // compression method, filter method, interlace method stay 0
    payload
}

fn color_type(layout: PixelLayout) -> u8 {
    match layout {
        PixelLayout::Gray8 => 0,
        PixelLayout::Rgb8 => 2,
        PixelLayout::Rgba8 => 6,
    }
}

/// Serialize the raster into the pre-compression scanline stream, one
/// filter-type byte (0, None) before each row.
fn filtered_scanlines(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    let stride = image.width() as usize * image.layout().channels();
    let total = image.height() as usize * (stride + 1);

    let mut raw = Vec::new();
    raw.try_reserve_exact(total)
        .map_err(|_| EncodeError::OutOfMemory { requested: total })?;

    for y in 0..image.height() as usize {
        raw.push(0);
        raw.extend_from_slice(&image.pixels()[y * stride..(y + 1) * stride]);
    }
    Ok(raw)
}
