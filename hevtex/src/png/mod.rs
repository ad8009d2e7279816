//! PNG encoding with hand-built chunk framing.
//!
//! The writer depends on no image library. Chunks, CRCs, and the IHDR
//! are assembled byte by byte; only the DEFLATE step goes through a
//! third-party deflater, behind the [`Compressor`] seam.
//!
//! # Example
//!
//! ```
//! use hevtex::png::PngEncoder;
//! use hevtex::raster::{PixelLayout, RasterImage};
//!
//! let image = RasterImage::new(4, 4, PixelLayout::Rgba8);
//! let png = PngEncoder::new().encode(&image).unwrap();
//! assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
//! ```

mod chunk;
mod compress;
mod encoder;

// Public API
pub use compress::{CompressError, Compressor, MinizCompressor, COMPRESSION_LEVEL};
pub use encoder::{EncodeError, PngEncoder, PNG_SIGNATURE};

// Re-export for consumers framing their own chunks
pub use chunk::{crc32, write_chunk};
