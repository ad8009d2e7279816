//! BC7 block decoding capability.
//!
//! BC7 mode search and unpacking is a large problem in its own right,
//! so the engine consumes it through a trait. The opaque-magenta
//! fallback for failed blocks is part of that trait's contract: a
//! failure never propagates past the block, it becomes a visual
//! marker instead.

use thiserror::Error;

/// Pixel substituted for every pixel of a block whose decode failed.
pub const BC7_FALLBACK_PIXEL: [u8; 4] = [255, 0, 255, 255];

/// A BC7 block failed to decode.
///
/// Never surfaced to callers of the engine; always resolved locally
/// via [`BC7_FALLBACK_PIXEL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("BC7 block decode failed")]
pub struct DecodeFailure;

/// Pluggable BC7 block decoder.
pub trait Bc7BlockDecoder: Send + Sync {
    /// Decode a 16-byte block into 16 RGBA pixels in row-major order.
    fn decode_block(&self, block: &[u8; 16]) -> Result<[[u8; 4]; 16], DecodeFailure>;

    /// Decode a block, substituting opaque magenta on failure.
    ///
    /// Provided here so every implementation carries the same fallback
    /// behavior.
    fn decode_block_or_fallback(&self, block: &[u8; 16]) -> [[u8; 4]; 16] {
        self.decode_block(block)
            .unwrap_or([BC7_FALLBACK_PIXEL; 16])
    }
}

/// Default decoder backed by the `bcdec_rs` port of bcdec.
#[derive(Debug, Clone, Copy, Default)]
pub struct BcdecDecoder;

impl Bc7BlockDecoder for BcdecDecoder {
    fn decode_block(&self, block: &[u8; 16]) -> Result<[[u8; 4]; 16], DecodeFailure> {
        // 4 rows of 4 RGBA pixels, 16-byte row pitch
        let mut flat = [0u8; 4 * 4 * 4];
        bcdec_rs::bc7(block, &mut flat, 4 * 4);

        let mut pixels = [[0u8; 4]; 16];
        for (i, pixel) in pixels.iter_mut().enumerate() {
            pixel.copy_from_slice(&flat[i * 4..i * 4 + 4]);
        }
        Ok(pixels)
    }
}
