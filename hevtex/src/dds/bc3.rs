//! BC3/DXT5 block decompression.
//!
//! A BC3 block is 16 bytes:
//! - 8 bytes: BC4-style interpolated alpha
//! - 8 bytes: a BC1 color block
//!
//! As with BC2, the color half runs through the unmodified BC1 routine
//! and the alpha channel is then replaced with the interpolated values.

use crate::dds::bc1::Bc1Decoder;
use crate::dds::bc4::Bc4Decoder;

/// BC3 block decoder.
pub struct Bc3Decoder;

impl Bc3Decoder {
    /// Decompress a 16-byte block into 16 RGBA pixels in row-major order.
    pub fn decode_block(block: &[u8; 16]) -> [[u8; 4]; 16] {
        let mut alpha_block = [0u8; 8];
        alpha_block.copy_from_slice(&block[0..8]);
        let alpha = Bc4Decoder::decode_block(&alpha_block);

        let mut color_block = [0u8; 8];
        color_block.copy_from_slice(&block[8..16]);
        let mut pixels = Bc1Decoder::decode_block(&color_block);

        for (pixel, a) in pixels.iter_mut().zip(alpha) {
            pixel[3] = a;
        }
        pixels
    }
}
