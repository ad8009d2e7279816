//! BC4 block decompression.
//!
//! A BC4 block packs 16 single-channel samples into 8 bytes:
//! - byte 0: endpoint r0
//! - byte 1: endpoint r1
//! - bytes 2-7: 48-bit little-endian field of 16 3-bit palette indices
//!
//! The 8-entry palette depends on the endpoint ordering:
//! - r0 > r1: six interpolated entries between r0 and r1
//! - r0 <= r1: four interpolated entries, then fixed 0 and 255
//!
//! BC3 reuses this routine for its alpha half and BC5 for each of its
//! two channels.

/// BC4 block decoder.
pub struct Bc4Decoder;

impl Bc4Decoder {
    /// Decompress an 8-byte block into 16 samples in row-major order.
    pub fn decode_block(block: &[u8; 8]) -> [u8; 16] {
        let palette = Self::build_palette(block[0], block[1]);

        let mut bits = 0u64;
        for (i, &byte) in block[2..8].iter().enumerate() {
            bits |= (byte as u64) << (8 * i);
        }

        let mut samples = [0u8; 16];
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = palette[((bits >> (3 * i)) & 0x7) as usize];
        }
        samples
    }

    /// Build the 8-entry palette from the two endpoints.
    fn build_palette(r0: u8, r1: u8) -> [u8; 8] {
        let e0 = r0 as u16;
        let e1 = r1 as u16;

        if r0 > r1 {
            [
                r0,
                r1,
                ((6 * e0 + e1 + 3) / 7) as u8,
                ((5 * e0 + 2 * e1 + 3) / 7) as u8,
                ((4 * e0 + 3 * e1 + 3) / 7) as u8,
                ((3 * e0 + 4 * e1 + 3) / 7) as u8,
                ((2 * e0 + 5 * e1 + 3) / 7) as u8,
                ((e0 + 6 * e1 + 3) / 7) as u8,
            ]
        } else {
            [
                r0,
                r1,
                ((4 * e0 + e1 + 2) / 5) as u8,
                ((3 * e0 + 2 * e1 + 2) / 5) as u8,
                ((2 * e0 + 3 * e1 + 2) / 5) as u8,
                ((e0 + 4 * e1 + 2) / 5) as u8,
                0,
                255,
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pack 16 3-bit indices into the block's 48-bit little-endian field.
    fn pack_indices(indices: [u8; 16]) -> [u8; 6] {
        let mut bits = 0u64;
        for (i, &idx) in indices.iter().enumerate() {
            bits |= ((idx & 0x7) as u64) << (3 * i);
        }
        let le = bits.to_le_bytes();
        [le[0], le[1], le[2], le[3], le[4], le[5]]
    }

    fn block_bytes(r0: u8, r1: u8, indices: [u8; 16]) -> [u8; 8] {
        let idx = pack_indices(indices);
        [r0, r1, idx[0], idx[1], idx[2], idx[3], idx[4], idx[5]]
    }

    #[test]
    fn test_seven_step_palette() {
        // r0 > r1: (w0*255 + w1*0 + 3) / 7 for the interpolated entries
        let indices = [0, 1, 2, 3, 4, 5, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0];
        let block = block_bytes(255, 0, indices);
        let samples = Bc4Decoder::decode_block(&block);
        assert_eq!(&samples[0..8], &[255, 0, 219, 182, 146, 109, 73, 36]);
    }

    #[test]
    fn test_five_step_palette_with_fixed_extremes() {
        // r0 <= r1: four interpolated entries then hard 0 and 255
        let indices = [0, 1, 2, 3, 4, 5, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0];
        let block = block_bytes(0, 255, indices);
        let samples = Bc4Decoder::decode_block(&block);
        assert_eq!(&samples[0..8], &[0, 255, 51, 102, 153, 204, 0, 255]);
    }

    #[test]
    fn test_palette_entry_two_formula() {
        // (6*255 + 0 + 3) / 7 = 219
        let block = block_bytes(255, 0, [2; 16]);
        let samples = Bc4Decoder::decode_block(&block);
        assert_eq!(samples, [219; 16]);
    }

    #[test]
    fn test_equal_endpoints_use_five_step_branch() {
        let block = block_bytes(100, 100, [0, 1, 2, 3, 4, 5, 6, 7, 6, 7, 6, 7, 6, 7, 6, 7]);
        let samples = Bc4Decoder::decode_block(&block);
        // Interpolated entries collapse to the endpoint, extremes stay fixed
        assert_eq!(&samples[0..8], &[100, 100, 100, 100, 100, 100, 0, 255]);
    }

    #[test]
    fn test_index_field_is_little_endian() {
        // Lowest 3 bits of byte 2 select pixel 0; 10 <= 20 puts the
        // palette in the five-step branch where entry 7 is fixed 255
        let raw = [10, 20, 0b0000_0111, 0, 0, 0, 0, 0];
        let samples = Bc4Decoder::decode_block(&raw);
        assert_eq!(samples[0], 255, "pixel 0 index 7 selects fixed max");
        assert_eq!(samples[1], 10, "pixel 1 index 0 selects r0");
    }

    #[test]
    fn test_index_spanning_byte_boundary() {
        // Pixel 2 uses bits 6..9 of the field, crossing bytes 2 and 3
        let mut indices = [0u8; 16];
        indices[2] = 0b101;
        let block = block_bytes(200, 100, indices);
        let samples = Bc4Decoder::decode_block(&block);
        // palette[5] = (3*200 + 4*100 + 3) / 7 = 143
        assert_eq!(samples[2], 143);
    }
}
