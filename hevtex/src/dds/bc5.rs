//! BC5 block decompression.
//!
//! A BC5 block is 16 bytes holding two independent BC4 channels:
//! - bytes 0-7: X channel
//! - bytes 8-15: Y channel
//!
//! The two channels are treated as a tangent-space normal map. Each
//! sample is mapped to [-1, 1], the Z component is reconstructed from
//! the unit-length constraint, and all three are remapped to 0..255 as
//! an RGB pixel. Out-of-gamut X/Y pairs clamp Z to 0.

use crate::dds::bc4::Bc4Decoder;

/// BC5 block decoder.
pub struct Bc5Decoder;

impl Bc5Decoder {
    /// Decompress a 16-byte block into 16 RGB pixels in row-major order.
    pub fn decode_block(block: &[u8; 16]) -> [[u8; 3]; 16] {
        let mut x_block = [0u8; 8];
        x_block.copy_from_slice(&block[0..8]);
        let xs = Bc4Decoder::decode_block(&x_block);

        let mut y_block = [0u8; 8];
        y_block.copy_from_slice(&block[8..16]);
        let ys = Bc4Decoder::decode_block(&y_block);

        let mut pixels = [[0u8; 3]; 16];
        for (i, pixel) in pixels.iter_mut().enumerate() {
            let nx = xs[i] as f64 / 255.0 * 2.0 - 1.0;
            let ny = ys[i] as f64 / 255.0 * 2.0 - 1.0;
            let nz2 = 1.0 - nx * nx - ny * ny;
            let nz = if nz2 > 0.0 { nz2.sqrt() } else { 0.0 };

            *pixel = [Self::to_unorm8(nx), Self::to_unorm8(ny), Self::to_unorm8(nz)];
        }
        pixels
    }

    /// Remap a [-1, 1] component to 0..255 with round-half-up.
    fn to_unorm8(v: f64) -> u8 {
        ((v * 0.5 + 0.5) * 255.0 + 0.5) as u8
    }
}
