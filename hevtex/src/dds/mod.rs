//! DDS (DirectX Surface) texture decoding.
//!
//! This module parses DX10-style DDS containers and decompresses their
//! block-compressed payloads into plain 8-bit raster images.
//!
//! # Features
//!
//! - **BC1/DXT1**: RGB with 1-bit punch-through alpha
//! - **BC2/DXT3**: RGB with explicit 4-bit alpha
//! - **BC3/DXT5**: RGB with interpolated 8-bit alpha
//! - **BC4**: Single-channel grayscale
//! - **BC5**: Two-channel normal maps, reconstructed to RGB
//! - **BC7**: High-quality RGBA via a pluggable block decoder
//!
//! # Example
//!
//! ```no_run
//! use hevtex::dds::{parse_texture, DdsDecoder};
//!
//! let bytes = std::fs::read("texture.dds").unwrap();
//! let texture = parse_texture(&bytes).unwrap();
//! let image = DdsDecoder::new().decode(&texture);
//! println!("{}x{} {}", image.width(), image.height(), texture.format);
//! ```
//!
//! # Format Details
//!
//! | Format | Block size | Output layout |
//! |--------|------------|---------------|
//! | BC1    | 8 bytes    | RGBA          |
//! | BC2    | 16 bytes   | RGBA          |
//! | BC3    | 16 bytes   | RGBA          |
//! | BC4    | 8 bytes    | Grayscale     |
//! | BC5    | 16 bytes   | RGB           |
//! | BC7    | 16 bytes   | RGBA          |
//!
//! Only DX10 extension-header containers are accepted; legacy fourCC
//! containers ("DXT1", "DXT5", ...) are rejected with
//! [`FormatError::UnsupportedContainer`]. Arithmetic matches the
//! Direct3D reference expansion exactly, so decoded bytes are
//! reproducible across platforms.

mod bc1;
mod bc2;
mod bc3;
mod bc4;
mod bc5;
mod bc7;
mod conversion;
mod decoder;
mod header;
mod types;

// Public API
pub use decoder::DdsDecoder;
pub use header::{parse_texture, CompressedTexture};
pub use types::{DdsHeader, DdsPixelFormat, Dx10Header, FormatError, TextureFormat};

// BC7 decode seam, replaceable for testing
pub use bc7::{Bc7BlockDecoder, BcdecDecoder, DecodeFailure, BC7_FALLBACK_PIXEL};
