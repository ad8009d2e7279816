//! BC1/DXT1 block decompression.
//!
//! A BC1 block packs a 4×4 pixel tile into 8 bytes:
//! - 2 bytes: color0 (RGB565, little-endian)
//! - 2 bytes: color1 (RGB565, little-endian)
//! - 4 bytes: 16 2-bit palette indices (one per pixel)
//!
//! The palette depends on the raw 16-bit endpoint ordering:
//! - color0 > color1: 4 opaque colors, entries 2 and 3 interpolated
//!   at 1/3 and 2/3
//! - otherwise: 3 colors plus transparent black, entry 2 is the
//!   midpoint and entry 3 is (0,0,0,0)
//!
//! BC2 and BC3 reuse this exact routine for their color half, endpoint
//! branch included.

use crate::dds::conversion::rgb565_to_rgb888;

/// BC1 block decoder.
pub struct Bc1Decoder;

impl Bc1Decoder {
    /// Decompress an 8-byte block into 16 RGBA pixels in row-major order.
    pub fn decode_block(block: &[u8; 8]) -> [[u8; 4]; 16] {
        let c0 = u16::from_le_bytes([block[0], block[1]]);
        let c1 = u16::from_le_bytes([block[2], block[3]]);
        let palette = Self::build_palette(c0, c1);

        let indices = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

        let mut pixels = [[0u8; 4]; 16];
        for (i, pixel) in pixels.iter_mut().enumerate() {
            let idx = ((indices >> (2 * i)) & 0x3) as usize;
            *pixel = palette[idx];
        }
        pixels
    }

    /// Build the 4-entry RGBA palette from the two packed endpoints.
    fn build_palette(c0: u16, c1: u16) -> [[u8; 4]; 4] {
        let [r0, g0, b0] = rgb565_to_rgb888(c0);
        let [r1, g1, b1] = rgb565_to_rgb888(c1);

        let mut palette = [[0u8; 4]; 4];
        palette[0] = [r0, g0, b0, 255];
        palette[1] = [r1, g1, b1, 255];

        if c0 > c1 {
            // 4-color block
            palette[2] = [
                ((2 * r0 as u16 + r1 as u16) / 3) as u8,
                ((2 * g0 as u16 + g1 as u16) / 3) as u8,
                ((2 * b0 as u16 + b1 as u16) / 3) as u8,
                255,
            ];
            palette[3] = [
                ((r0 as u16 + 2 * r1 as u16) / 3) as u8,
                ((g0 as u16 + 2 * g1 as u16) / 3) as u8,
                ((b0 as u16 + 2 * b1 as u16) / 3) as u8,
                255,
            ];
        } else {
            // 3-color block + transparent
            palette[2] = [
                ((r0 as u16 + r1 as u16) / 2) as u8,
                ((g0 as u16 + g1 as u16) / 2) as u8,
                ((b0 as u16 + b1 as u16) / 2) as u8,
                255,
            ];
            palette[3] = [0, 0, 0, 0];
        }
        palette
    }
}
