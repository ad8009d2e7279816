//! DDS container types and error definitions.

use crate::raster::PixelLayout;
use std::fmt;
use thiserror::Error;

/// Block-compressed texture format, identified by the DXGI format code
/// in the DX10 extension header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// BC1/DXT1 (8-byte blocks, RGB + 1-bit alpha)
    Bc1,
    /// BC2/DXT3 (16-byte blocks, explicit 4-bit alpha)
    Bc2,
    /// BC3/DXT5 (16-byte blocks, interpolated alpha)
    Bc3,
    /// BC4 (8-byte blocks, single channel)
    Bc4,
    /// BC5 (16-byte blocks, two channels, normal maps)
    Bc5,
    /// BC7 (16-byte blocks, high-quality RGBA)
    Bc7,
}

impl TextureFormat {
    /// Map a DXGI format code to a supported texture format.
    ///
    /// Returns `None` for any code outside the six supported UNORM formats.
    pub fn from_dxgi(code: u32) -> Option<Self> {
        match code {
            DXGI_FORMAT_BC1_UNORM => Some(TextureFormat::Bc1),
            DXGI_FORMAT_BC2_UNORM => Some(TextureFormat::Bc2),
            DXGI_FORMAT_BC3_UNORM => Some(TextureFormat::Bc3),
            DXGI_FORMAT_BC4_UNORM => Some(TextureFormat::Bc4),
            DXGI_FORMAT_BC5_UNORM => Some(TextureFormat::Bc5),
            DXGI_FORMAT_BC7_UNORM => Some(TextureFormat::Bc7),
            _ => None,
        }
    }

    /// DXGI format code for this format.
    pub fn dxgi_code(self) -> u32 {
        match self {
            TextureFormat::Bc1 => DXGI_FORMAT_BC1_UNORM,
            TextureFormat::Bc2 => DXGI_FORMAT_BC2_UNORM,
            TextureFormat::Bc3 => DXGI_FORMAT_BC3_UNORM,
            TextureFormat::Bc4 => DXGI_FORMAT_BC4_UNORM,
            TextureFormat::Bc5 => DXGI_FORMAT_BC5_UNORM,
            TextureFormat::Bc7 => DXGI_FORMAT_BC7_UNORM,
        }
    }

    /// Compressed size of one 4×4 block in bytes.
    pub fn block_size(self) -> usize {
        match self {
            TextureFormat::Bc1 | TextureFormat::Bc4 => 8,
            _ => 16,
        }
    }

    /// Channel layout of the decoded raster for this format.
    pub fn layout(self) -> PixelLayout {
        match self {
            TextureFormat::Bc4 => PixelLayout::Gray8,
            TextureFormat::Bc5 => PixelLayout::Rgb8,
            _ => PixelLayout::Rgba8,
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureFormat::Bc1 => write!(f, "BC1"),
            TextureFormat::Bc2 => write!(f, "BC2"),
            TextureFormat::Bc3 => write!(f, "BC3"),
            TextureFormat::Bc4 => write!(f, "BC4"),
            TextureFormat::Bc5 => write!(f, "BC5"),
            TextureFormat::Bc7 => write!(f, "BC7"),
        }
    }
}

/// Errors raised while validating and reading a DDS container.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Missing or wrong magic value at the start of the file.
    #[error("not a DDS container")]
    NotContainer,
    /// Valid DDS, but the pixel format does not carry a DX10 extension header.
    #[error("non-DX10 DDS container unsupported")]
    UnsupportedContainer,
    /// DXGI format code outside the supported set.
    #[error("unsupported DXGI format {0} (BC1=71, BC2=74, BC3=77, BC4=80, BC5=83, BC7=98)")]
    UnsupportedFormat(u32),
    /// Width or height of zero.
    #[error("image width or height is zero")]
    ZeroDimension,
    /// Fewer payload bytes than the block grid requires.
    #[error("truncated block data: need {expected} bytes, have {actual}")]
    Truncated { expected: u64, actual: u64 },
}

/// DDS file header (124 bytes, immediately after the 4-byte magic).
///
/// Based on the Microsoft DDS specification:
/// https://docs.microsoft.com/en-us/windows/win32/direct3ddds/dds-header
#[derive(Debug, Clone)]
pub struct DdsHeader {
    /// Size of structure (124 bytes)
    pub size: u32,
    /// Flags indicating which fields are valid
    pub flags: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Surface width in pixels
    pub width: u32,
    /// Pitch or linear size
    pub pitch_or_linear_size: u32,
    /// Depth for volume textures
    pub depth: u32,
    /// Number of mipmap levels
    pub mipmap_count: u32,
    /// Reserved
    pub reserved1: [u32; 11],
    /// Pixel format structure (32 bytes)
    pub pixel_format: DdsPixelFormat,
    /// Surface complexity capabilities
    pub caps: u32,
    /// Additional capabilities
    pub caps2: u32,
    /// Unused
    pub caps3: u32,
    /// Unused
    pub caps4: u32,
    /// Unused
    pub reserved2: u32,
}

/// DDS pixel format structure (32 bytes).
#[derive(Debug, Clone)]
pub struct DdsPixelFormat {
    /// Size of structure (32 bytes)
    pub size: u32,
    /// Pixel format flags
    pub flags: u32,
    /// FourCC code ("DX10" for extension-header files)
    pub fourcc: [u8; 4],
    /// RGB bit count
    pub rgb_bit_count: u32,
    /// Red bit mask
    pub r_bit_mask: u32,
    /// Green bit mask
    pub g_bit_mask: u32,
    /// Blue bit mask
    pub b_bit_mask: u32,
    /// Alpha bit mask
    pub a_bit_mask: u32,
}

/// DX10 extension header (20 bytes, follows the DDS header when the
/// pixel format fourCC is "DX10").
#[derive(Debug, Clone)]
pub struct Dx10Header {
    /// DXGI format code
    pub dxgi_format: u32,
    /// Resource dimension (2 = 1D, 3 = 2D, 4 = 3D)
    pub resource_dimension: u32,
    /// Miscellaneous flags (cubemap etc.)
    pub misc_flag: u32,
    /// Array size (1 for plain 2D textures)
    pub array_size: u32,
    /// Alpha mode flags
    pub misc_flags2: u32,
}

// =============================================================================
// DDS Format Constants
// =============================================================================
//
// Defined per the Microsoft DDS specification:
// https://docs.microsoft.com/en-us/windows/win32/direct3ddds/dds-header

/// Magic value "DDS " as a little-endian u32.
pub const DDS_MAGIC: u32 = 0x2053_4444;

/// FourCC marking a DX10 extension header.
pub const FOURCC_DX10: [u8; 4] = *b"DX10";

/// Size of the DDS header in bytes (excluding magic).
pub const DDS_HEADER_SIZE: usize = 124;

/// Size of the DX10 extension header in bytes.
pub const DX10_HEADER_SIZE: usize = 20;

/// File offset of the first compressed block (magic + header + extension).
pub const DDS_DATA_OFFSET: usize = 4 + DDS_HEADER_SIZE + DX10_HEADER_SIZE;

// DDS header flags (DDSD_*)
pub const DDSD_CAPS: u32 = 0x1;
pub const DDSD_HEIGHT: u32 = 0x2;
pub const DDSD_WIDTH: u32 = 0x4;
pub const DDSD_PIXELFORMAT: u32 = 0x1000;
pub const DDSD_LINEARSIZE: u32 = 0x80000;

// DDS pixel format flags (DDPF_*)
pub const DDPF_FOURCC: u32 = 0x4;

// DDS caps flags (DDSCAPS_*)
pub const DDSCAPS_TEXTURE: u32 = 0x1000;

// DXGI format codes (DXGI_FORMAT_*)
pub const DXGI_FORMAT_BC1_UNORM: u32 = 71;
pub const DXGI_FORMAT_BC2_UNORM: u32 = 74;
pub const DXGI_FORMAT_BC3_UNORM: u32 = 77;
pub const DXGI_FORMAT_BC4_UNORM: u32 = 80;
pub const DXGI_FORMAT_BC5_UNORM: u32 = 83;
pub const DXGI_FORMAT_BC7_UNORM: u32 = 98;

/// DX10 resource dimension for 2D textures.
pub const DDS_DIMENSION_TEXTURE2D: u32 = 3;
