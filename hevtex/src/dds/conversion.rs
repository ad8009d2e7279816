//! Color conversion utilities for BC decompression.

/// Expand an RGB565 (16-bit packed) color to RGB888 (8-bit per channel).
///
/// RGB565 format:
/// - Bits 15-11: Red (5 bits)
/// - Bits 10-5: Green (6 bits)
/// - Bits 4-0: Blue (5 bits)
///
/// Each channel is scaled with `(component * 255 + max/2) / max` so the
/// extremes map exactly to 0 and 255.
pub fn rgb565_to_rgb888(color: u16) -> [u8; 3] {
    let r5 = (color >> 11) & 0x1F;
    let g6 = (color >> 5) & 0x3F;
    let b5 = color & 0x1F;

    [
        ((r5 as u32 * 255 + 15) / 31) as u8,
        ((g6 as u32 * 255 + 31) / 63) as u8,
        ((b5 as u32 * 255 + 15) / 31) as u8,
    ]
}

/// Expand a 4-bit alpha sample to 8 bits.
///
/// Multiplying by 17 maps 0x0..0xF onto 0..255 exactly (0x11 * n).
pub fn nibble_to_alpha8(nibble: u8) -> u8 {
    (nibble & 0xF) * 17
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_black() {
        assert_eq!(rgb565_to_rgb888(0x0000), [0, 0, 0]);
    }

    #[test]
    fn test_rgb565_white() {
        assert_eq!(rgb565_to_rgb888(0xFFFF), [255, 255, 255]);
    }

    #[test]
    fn test_rgb565_red() {
        // 11111 000000 00000
        assert_eq!(rgb565_to_rgb888(0xF800), [255, 0, 0]);
    }

    #[test]
    fn test_rgb565_green() {
        // 00000 111111 00000
        assert_eq!(rgb565_to_rgb888(0x07E0), [0, 255, 0]);
    }

    #[test]
    fn test_rgb565_blue() {
        // 00000 000000 11111
        assert_eq!(rgb565_to_rgb888(0x001F), [0, 0, 255]);
    }

    #[test]
    fn test_rgb565_rounding() {
        // r5 = 16: (16*255 + 15) / 31 = 4095 / 31 = 132
        let color = (16u16 << 11) | (32 << 5) | 16;
        let [r, g, b] = rgb565_to_rgb888(color);
        assert_eq!(r, 132);
        // g6 = 32: (32*255 + 31) / 63 = 8191 / 63 = 130
        assert_eq!(g, 130);
        assert_eq!(b, 132);
    }

    #[test]
    fn test_rgb565_monotonic_red() {
        let mut prev = 0u8;
        for r5 in 0..32u16 {
            let [r, _, _] = rgb565_to_rgb888(r5 << 11);
            assert!(r >= prev, "red channel must be monotonic in r5");
            prev = r;
        }
        assert_eq!(prev, 255);
    }

    #[test]
    fn test_nibble_to_alpha8_extremes() {
        assert_eq!(nibble_to_alpha8(0x0), 0);
        assert_eq!(nibble_to_alpha8(0xF), 255);
    }

    #[test]
    fn test_nibble_to_alpha8_all_values() {
        for n in 0..16u8 {
            assert_eq!(nibble_to_alpha8(n), n * 17);
        }
    }

    #[test]
    fn test_nibble_to_alpha8_masks_high_bits() {
        assert_eq!(nibble_to_alpha8(0xF7), 7 * 17);
    }
}
