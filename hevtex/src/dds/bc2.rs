//! BC2/DXT3 block decompression.
//!
//! A BC2 block is 16 bytes:
//! - 8 bytes: 16 explicit 4-bit alpha values, packed little-endian
//! - 8 bytes: a BC1 color block
//!
//! The color half goes through the unmodified BC1 routine, endpoint
//! ordering branch and all, and the explicit alpha then overwrites
//! whatever alpha that produced.

use crate::dds::bc1::Bc1Decoder;
use crate::dds::conversion::nibble_to_alpha8;

/// BC2 block decoder.
pub struct Bc2Decoder;

impl Bc2Decoder {
    /// Decompress a 16-byte block into 16 RGBA pixels in row-major order.
    pub fn decode_block(block: &[u8; 16]) -> [[u8; 4]; 16] {
        let mut color_block = [0u8; 8];
        color_block.copy_from_slice(&block[8..16]);
        let mut pixels = Bc1Decoder::decode_block(&color_block);

        let mut alpha_block = [0u8; 8];
        alpha_block.copy_from_slice(&block[0..8]);
        let alpha = Self::decode_alpha(&alpha_block);

        for (pixel, a) in pixels.iter_mut().zip(alpha) {
            pixel[3] = a;
        }
        pixels
    }

    /// Unpack 16 explicit 4-bit alpha samples and expand them to 8 bits.
    fn decode_alpha(alpha_block: &[u8; 8]) -> [u8; 16] {
        let bits = u64::from_le_bytes(*alpha_block);
        let mut alpha = [0u8; 16];
        for (i, a) in alpha.iter_mut().enumerate() {
            *a = nibble_to_alpha8((bits >> (4 * i)) as u8);
        }
        alpha
    }
}
