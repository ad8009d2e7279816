//! Block-grid decoding into raster images.
//!
//! The decoder walks the block grid row-major, decompresses each block
//! with the pure per-format routines, and writes the 4×4 tile into the
//! output raster. Blocks straddling the right or bottom edge are
//! decoded in full and the out-of-bounds sub-pixels are discarded, so
//! dimensions need not be multiples of 4.

use crate::dds::bc1::Bc1Decoder;
use crate::dds::bc2::Bc2Decoder;
use crate::dds::bc3::Bc3Decoder;
use crate::dds::bc4::Bc4Decoder;
use crate::dds::bc5::Bc5Decoder;
use crate::dds::bc7::{Bc7BlockDecoder, BcdecDecoder};
use crate::dds::header::CompressedTexture;
use crate::dds::types::TextureFormat;
use crate::raster::RasterImage;
use std::sync::Arc;

/// Decoder for parsed DDS textures.
///
/// Holds the injected BC7 capability; every other format decodes via
/// pure functions with no shared state, so one decoder can be used
/// from many threads at once.
#[derive(Clone)]
pub struct DdsDecoder {
    bc7: Arc<dyn Bc7BlockDecoder>,
}

impl Default for DdsDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DdsDecoder {
    /// Create a decoder with the default BC7 capability.
    pub fn new() -> Self {
        Self {
            bc7: Arc::new(BcdecDecoder),
        }
    }

    /// Replace the BC7 decode capability.
    pub fn with_bc7_decoder(mut self, bc7: Arc<dyn Bc7BlockDecoder>) -> Self {
        self.bc7 = bc7;
        self
    }

    /// Decode every block of `texture` into a freshly allocated raster.
    ///
    /// The channel layout follows the format: BC4 produces grayscale,
    /// BC5 produces RGB, everything else RGBA.
    pub fn decode(&self, texture: &CompressedTexture<'_>) -> RasterImage {
        let mut image = RasterImage::new(texture.width, texture.height, texture.format.layout());
        let blocks_x = texture.blocks_x();
        let blocks_y = texture.blocks_y();
        let block_size = texture.format.block_size();

        for by in 0..blocks_y {
            for bx in 0..blocks_x {
                let offset = (by as u64 * blocks_x as u64 + bx as u64) as usize * block_size;
                let raw = &texture.blocks[offset..offset + block_size];

                match texture.format {
                    TextureFormat::Bc1 => {
                        let pixels = Bc1Decoder::decode_block(&block8(raw));
                        blit_block(&mut image, bx, by, &pixels);
                    }
                    TextureFormat::Bc2 => {
                        let pixels = Bc2Decoder::decode_block(&block16(raw));
                        blit_block(&mut image, bx, by, &pixels);
                    }
                    TextureFormat::Bc3 => {
                        let pixels = Bc3Decoder::decode_block(&block16(raw));
                        blit_block(&mut image, bx, by, &pixels);
                    }
                    TextureFormat::Bc4 => {
                        let samples = Bc4Decoder::decode_block(&block8(raw));
                        blit_block(&mut image, bx, by, &samples.map(|s| [s]));
                    }
                    TextureFormat::Bc5 => {
                        let pixels = Bc5Decoder::decode_block(&block16(raw));
                        blit_block(&mut image, bx, by, &pixels);
                    }
                    TextureFormat::Bc7 => {
                        let pixels = self.bc7.decode_block_or_fallback(&block16(raw));
                        blit_block(&mut image, bx, by, &pixels);
                    }
                }
            }
        }
        image
    }
}

/// Write one decoded 4×4 tile at block coordinate (bx, by), skipping
/// sub-pixels outside the image bounds.
fn blit_block<const C: usize>(image: &mut RasterImage, bx: u32, by: u32, block: &[[u8; C]; 16]) {
    let width = image.width();
    let height = image.height();
    let pixels = image.pixels_mut();

    for py in 0..4u32 {
        for px in 0..4u32 {
            let x = bx * 4 + px;
            let y = by * 4 + py;
            if x >= width || y >= height {
                continue;
            }
            let dst = (y as usize * width as usize + x as usize) * C;
            pixels[dst..dst + C].copy_from_slice(&block[(py * 4 + px) as usize]);
        }
    }
}

fn block8(raw: &[u8]) -> [u8; 8] {
    let mut block = [0u8; 8];
    block.copy_from_slice(raw);
    block
}

fn block16(raw: &[u8]) -> [u8; 16] {
    let mut block = [0u8; 16];
    block.copy_from_slice(raw);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dds::bc7::DecodeFailure;
    use crate::raster::PixelLayout;

    /// Solid-color BC1 block: equal endpoints put the decoder in
    /// 3-color mode and index 0 selects the endpoint, opaque.
    fn solid_bc1(color: u16) -> [u8; 8] {
        let c = color.to_le_bytes();
        [c[0], c[1], c[0], c[1], 0, 0, 0, 0]
    }

    /// Solid-value BC4 block.
    fn solid_bc4(value: u8) -> [u8; 8] {
        [value, value, 0, 0, 0, 0, 0, 0]
    }

    fn pixel(image: &RasterImage, x: u32, y: u32) -> &[u8] {
        let c = image.layout().channels();
        let at = (y as usize * image.width() as usize + x as usize) * c;
        &image.pixels()[at..at + c]
    }

    #[test]
    fn test_six_by_six_clips_boundary_blocks() {
        // 2x2 block grid over a 6x6 image: blocks on the right and
        // bottom edge hang over by two pixels
        let mut blocks = Vec::new();
        blocks.extend_from_slice(&solid_bc1(0xF800)); // red
        blocks.extend_from_slice(&solid_bc1(0x07E0)); // green
        blocks.extend_from_slice(&solid_bc1(0x001F)); // blue
        blocks.extend_from_slice(&solid_bc1(0xFFFF)); // white

        let texture = CompressedTexture {
            width: 6,
            height: 6,
            format: TextureFormat::Bc1,
            blocks: &blocks,
        };
        let image = DdsDecoder::new().decode(&texture);

        assert_eq!(image.pixels().len(), 6 * 6 * 4);

        // Every in-bounds pixel was written: solid BC1 blocks are opaque,
        // and the buffer started zeroed
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(pixel(&image, x, y)[3], 255, "pixel ({}, {})", x, y);
            }
        }

        assert_eq!(pixel(&image, 0, 0), &[255, 0, 0, 255]);
        assert_eq!(pixel(&image, 3, 3), &[255, 0, 0, 255]);
        assert_eq!(pixel(&image, 4, 0), &[0, 255, 0, 255]);
        assert_eq!(pixel(&image, 5, 3), &[0, 255, 0, 255]);
        assert_eq!(pixel(&image, 0, 4), &[0, 0, 255, 255]);
        assert_eq!(pixel(&image, 3, 5), &[0, 0, 255, 255]);
        assert_eq!(pixel(&image, 4, 4), &[255, 255, 255, 255]);
        assert_eq!(pixel(&image, 5, 5), &[255, 255, 255, 255]);
    }

    #[test]
    fn test_bc4_grayscale_assembly() {
        let mut blocks = Vec::new();
        blocks.extend_from_slice(&solid_bc4(10));
        blocks.extend_from_slice(&solid_bc4(20));
        blocks.extend_from_slice(&solid_bc4(30));
        blocks.extend_from_slice(&solid_bc4(40));

        let texture = CompressedTexture {
            width: 8,
            height: 8,
            format: TextureFormat::Bc4,
            blocks: &blocks,
        };
        let image = DdsDecoder::new().decode(&texture);

        assert_eq!(image.layout(), PixelLayout::Gray8);
        assert_eq!(image.pixels().len(), 64);
        assert_eq!(pixel(&image, 0, 0), &[10]);
        assert_eq!(pixel(&image, 7, 0), &[20]);
        assert_eq!(pixel(&image, 0, 7), &[30]);
        assert_eq!(pixel(&image, 7, 7), &[40]);
    }

    #[test]
    fn test_bc5_three_channel_layout() {
        let texture = CompressedTexture {
            width: 4,
            height: 4,
            format: TextureFormat::Bc5,
            blocks: &[0u8; 16],
        };
        let image = DdsDecoder::new().decode(&texture);

        assert_eq!(image.layout(), PixelLayout::Rgb8);
        assert_eq!(image.pixels().len(), 4 * 4 * 3);
        // Zero samples decode to (-1, -1) with clamped Z
        assert_eq!(pixel(&image, 0, 0), &[0, 0, 128]);
    }

    #[test]
    fn test_bc7_failure_paints_magenta() {
        struct AlwaysFails;
        impl Bc7BlockDecoder for AlwaysFails {
            fn decode_block(&self, _block: &[u8; 16]) -> Result<[[u8; 4]; 16], DecodeFailure> {
                Err(DecodeFailure)
            }
        }

        let texture = CompressedTexture {
            width: 4,
            height: 4,
            format: TextureFormat::Bc7,
            blocks: &[0u8; 16],
        };
        let image = DdsDecoder::new()
            .with_bc7_decoder(Arc::new(AlwaysFails))
            .decode(&texture);

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(pixel(&image, x, y), &[255, 0, 255, 255]);
            }
        }
    }

    #[test]
    fn test_single_column_strip() {
        // 2x7 image: one block column, two block rows, heavy clipping
        let mut blocks = Vec::new();
        blocks.extend_from_slice(&solid_bc1(0xF800));
        blocks.extend_from_slice(&solid_bc1(0x001F));

        let texture = CompressedTexture {
            width: 2,
            height: 7,
            format: TextureFormat::Bc1,
            blocks: &blocks,
        };
        let image = DdsDecoder::new().decode(&texture);

        assert_eq!(image.pixels().len(), 2 * 7 * 4);
        assert_eq!(pixel(&image, 1, 0), &[255, 0, 0, 255]);
        assert_eq!(pixel(&image, 0, 3), &[255, 0, 0, 255]);
        assert_eq!(pixel(&image, 0, 4), &[0, 0, 255, 255]);
        assert_eq!(pixel(&image, 1, 6), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_decoder_is_shareable_across_threads() {
        let decoder = DdsDecoder::new();
        let blocks: Vec<u8> = solid_bc1(0xFFFF).to_vec();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let decoder = decoder.clone();
                let blocks = &blocks;
                scope.spawn(move || {
                    let texture = CompressedTexture {
                        width: 4,
                        height: 4,
                        format: TextureFormat::Bc1,
                        blocks,
                    };
                    let image = decoder.decode(&texture);
                    assert_eq!(image.pixels()[0], 255);
                });
            }
        });
    }
}
