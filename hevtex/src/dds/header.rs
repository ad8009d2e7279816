//! DDS container parsing.
//!
//! A supported file is laid out as:
//!
//! ```text
//! offset 0    magic "DDS " (0x20534444 little-endian)
//! offset 4    DDS header, 124 bytes
//!   +8        height
//!   +12       width
//!   +72       pixel format, 32 bytes (fourCC at +80 must be "DX10")
//! offset 128  DX10 extension header, 20 bytes (DXGI format code first)
//! offset 148  compressed block data, row-major block order
//! ```
//!
//! Every field is decoded from an explicit little-endian byte cursor
//! rather than overlaying a packed struct, so no platform padding or
//! alignment assumptions leak in.

use crate::dds::types::{
    DdsHeader, DdsPixelFormat, Dx10Header, FormatError, TextureFormat, DDS_DATA_OFFSET,
    DDS_HEADER_SIZE, DDS_MAGIC, DX10_HEADER_SIZE, FOURCC_DX10,
};

/// One parsed container: dimensions, format, and a borrowed view of the
/// level-0 block payload.
///
/// Any bytes past the level-0 blocks (mipmap tails) are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedTexture<'a> {
    /// Image width in pixels (nonzero)
    pub width: u32,
    /// Image height in pixels (nonzero)
    pub height: u32,
    /// Block compression format
    pub format: TextureFormat,
    /// Exactly `block_count() * format.block_size()` bytes
    pub blocks: &'a [u8],
}

impl CompressedTexture<'_> {
    /// Number of blocks per row.
    pub fn blocks_x(&self) -> u32 {
        self.width.div_ceil(4)
    }

    /// Number of block rows.
    pub fn blocks_y(&self) -> u32 {
        self.height.div_ceil(4)
    }

    /// Total block count for the level-0 image.
    pub fn block_count(&self) -> u64 {
        self.blocks_x() as u64 * self.blocks_y() as u64
    }
}

/// Validate a DDS byte stream and borrow its block payload.
///
/// # Errors
///
/// - [`FormatError::NotContainer`] if the magic is missing or wrong
/// - [`FormatError::Truncated`] if the headers or block data are short
/// - [`FormatError::UnsupportedContainer`] without a DX10 fourCC
/// - [`FormatError::ZeroDimension`] if either dimension is 0
/// - [`FormatError::UnsupportedFormat`] for DXGI codes outside the
///   six supported values
pub fn parse_texture(bytes: &[u8]) -> Result<CompressedTexture<'_>, FormatError> {
    if bytes.len() < 4 {
        return Err(FormatError::NotContainer);
    }
    let magic = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    if magic != DDS_MAGIC {
        return Err(FormatError::NotContainer);
    }

    if bytes.len() < DDS_DATA_OFFSET {
        return Err(FormatError::Truncated {
            expected: DDS_DATA_OFFSET as u64,
            actual: bytes.len() as u64,
        });
    }

    let header = DdsHeader::from_bytes(&bytes[4..4 + DDS_HEADER_SIZE]);
    if header.pixel_format.fourcc != FOURCC_DX10 {
        return Err(FormatError::UnsupportedContainer);
    }

    let dx10 = Dx10Header::from_bytes(&bytes[4 + DDS_HEADER_SIZE..DDS_DATA_OFFSET]);

    if header.width == 0 || header.height == 0 {
        return Err(FormatError::ZeroDimension);
    }

    let format = TextureFormat::from_dxgi(dx10.dxgi_format)
        .ok_or(FormatError::UnsupportedFormat(dx10.dxgi_format))?;

    let blocks_x = header.width.div_ceil(4) as u64;
    let blocks_y = header.height.div_ceil(4) as u64;
    let needed = blocks_x * blocks_y * format.block_size() as u64;
    let available = (bytes.len() - DDS_DATA_OFFSET) as u64;
    if available < needed {
        return Err(FormatError::Truncated {
            expected: needed,
            actual: available,
        });
    }

    Ok(CompressedTexture {
        width: header.width,
        height: header.height,
        format,
        blocks: &bytes[DDS_DATA_OFFSET..DDS_DATA_OFFSET + needed as usize],
    })
}

impl DdsHeader {
    /// Decode the 124-byte header.
    ///
    /// The slice must hold at least [`DDS_HEADER_SIZE`] bytes starting at
    /// the field after the magic.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut cursor = LeCursor::new(bytes);
        let size = cursor.u32();
        let flags = cursor.u32();
        let height = cursor.u32();
        let width = cursor.u32();
        let pitch_or_linear_size = cursor.u32();
        let depth = cursor.u32();
        let mipmap_count = cursor.u32();
        let mut reserved1 = [0u32; 11];
        for slot in reserved1.iter_mut() {
            *slot = cursor.u32();
        }
        let pixel_format = DdsPixelFormat {
            size: cursor.u32(),
            flags: cursor.u32(),
            fourcc: cursor.fourcc(),
            rgb_bit_count: cursor.u32(),
            r_bit_mask: cursor.u32(),
            g_bit_mask: cursor.u32(),
            b_bit_mask: cursor.u32(),
            a_bit_mask: cursor.u32(),
        };
        Self {
            size,
            flags,
            height,
            width,
            pitch_or_linear_size,
            depth,
            mipmap_count,
            reserved1,
            pixel_format,
            caps: cursor.u32(),
            caps2: cursor.u32(),
            caps3: cursor.u32(),
            caps4: cursor.u32(),
            reserved2: cursor.u32(),
        }
    }
}

impl Dx10Header {
    /// Decode the 20-byte DX10 extension header.
    ///
    /// The slice must hold at least [`DX10_HEADER_SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut cursor = LeCursor::new(bytes);
        Self {
            dxgi_format: cursor.u32(),
            resource_dimension: cursor.u32(),
            misc_flag: cursor.u32(),
            array_size: cursor.u32(),
            misc_flags2: cursor.u32(),
        }
    }
}

/// Sequential little-endian field reader.
struct LeCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> LeCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn u32(&mut self) -> u32 {
        let b = &self.bytes[self.pos..self.pos + 4];
        self.pos += 4;
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    fn fourcc(&mut self) -> [u8; 4] {
        let b = &self.bytes[self.pos..self.pos + 4];
        self.pos += 4;
        [b[0], b[1], b[2], b[3]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dds::test_util::build_dds;
    use crate::dds::types::{DXGI_FORMAT_BC1_UNORM, DXGI_FORMAT_BC4_UNORM};

    #[test]
    fn test_parse_valid_bc1() {
        let bytes = build_dds(8, 8, DXGI_FORMAT_BC1_UNORM, &[0u8; 4 * 8]);
        let texture = parse_texture(&bytes).unwrap();
        assert_eq!(texture.width, 8);
        assert_eq!(texture.height, 8);
        assert_eq!(texture.format, TextureFormat::Bc1);
        assert_eq!(texture.blocks.len(), 4 * 8);
        assert_eq!(texture.blocks_x(), 2);
        assert_eq!(texture.blocks_y(), 2);
        assert_eq!(texture.block_count(), 4);
    }

    #[test]
    fn test_parse_reads_fields_at_documented_offsets() {
        let mut bytes = build_dds(16, 4, DXGI_FORMAT_BC4_UNORM, &[0u8; 4 * 8]);
        // height at offset 12, width at offset 16, DXGI code at offset 128
        assert_eq!(u32::from_le_bytes(bytes[12..16].try_into().unwrap()), 4);
        assert_eq!(u32::from_le_bytes(bytes[16..20].try_into().unwrap()), 16);
        assert_eq!(&bytes[84..88], b"DX10");
        assert_eq!(
            u32::from_le_bytes(bytes[128..132].try_into().unwrap()),
            DXGI_FORMAT_BC4_UNORM
        );

        // Patching height through the raw offset must be visible after parse
        bytes[12..16].copy_from_slice(&3u32.to_le_bytes());
        let texture = parse_texture(&bytes).unwrap();
        assert_eq!(texture.height, 3);
        assert_eq!(texture.width, 16);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_texture(&[]), Err(FormatError::NotContainer));
    }

    #[test]
    fn test_parse_bad_magic() {
        let mut bytes = build_dds(4, 4, DXGI_FORMAT_BC1_UNORM, &[0u8; 8]);
        bytes[0] = b'X';
        assert_eq!(parse_texture(&bytes), Err(FormatError::NotContainer));
    }

    #[test]
    fn test_parse_short_header() {
        let bytes = build_dds(4, 4, DXGI_FORMAT_BC1_UNORM, &[0u8; 8]);
        assert_eq!(
            parse_texture(&bytes[..100]),
            Err(FormatError::Truncated {
                expected: 148,
                actual: 100
            })
        );
    }

    #[test]
    fn test_parse_legacy_fourcc_rejected() {
        let mut bytes = build_dds(4, 4, DXGI_FORMAT_BC1_UNORM, &[0u8; 8]);
        bytes[84..88].copy_from_slice(b"DXT1");
        assert_eq!(parse_texture(&bytes), Err(FormatError::UnsupportedContainer));
    }

    #[test]
    fn test_parse_zero_dimension() {
        let bytes = build_dds(0, 4, DXGI_FORMAT_BC1_UNORM, &[]);
        assert_eq!(parse_texture(&bytes), Err(FormatError::ZeroDimension));

        let bytes = build_dds(4, 0, DXGI_FORMAT_BC1_UNORM, &[]);
        assert_eq!(parse_texture(&bytes), Err(FormatError::ZeroDimension));
    }

    #[test]
    fn test_parse_unsupported_dxgi_code() {
        // 72 is BC1_UNORM_SRGB, deliberately outside the supported set
        let bytes = build_dds(4, 4, 72, &[0u8; 8]);
        assert_eq!(parse_texture(&bytes), Err(FormatError::UnsupportedFormat(72)));
    }

    #[test]
    fn test_parse_truncated_block_data() {
        // 8x8 BC1 needs 4 blocks of 8 bytes; give it 3
        let bytes = build_dds(8, 8, DXGI_FORMAT_BC1_UNORM, &[0u8; 24]);
        assert_eq!(
            parse_texture(&bytes),
            Err(FormatError::Truncated {
                expected: 32,
                actual: 24
            })
        );
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        // 4x4 BC1 needs one 8-byte block; append a fake mipmap tail
        let mut payload = vec![0xABu8; 8];
        payload.extend_from_slice(&[0xCD; 10]);
        let bytes = build_dds(4, 4, DXGI_FORMAT_BC1_UNORM, &payload);
        let texture = parse_texture(&bytes).unwrap();
        assert_eq!(texture.blocks.len(), 8);
        assert!(texture.blocks.iter().all(|&b| b == 0xAB));
    }

    #[test]
    fn test_parse_non_multiple_of_four_grid() {
        let bytes = build_dds(6, 6, DXGI_FORMAT_BC1_UNORM, &[0u8; 4 * 8]);
        let texture = parse_texture(&bytes).unwrap();
        assert_eq!(texture.blocks_x(), 2);
        assert_eq!(texture.blocks_y(), 2);
    }

    #[test]
    fn test_dds_header_round_trip_fields() {
        let bytes = build_dds(32, 16, DXGI_FORMAT_BC1_UNORM, &[0u8; 32 * 8]);
        let header = DdsHeader::from_bytes(&bytes[4..128]);
        assert_eq!(header.size, 124);
        assert_eq!(header.width, 32);
        assert_eq!(header.height, 16);
        assert_eq!(header.pixel_format.size, 32);
        assert_eq!(header.pixel_format.fourcc, *b"DX10");

        let dx10 = Dx10Header::from_bytes(&bytes[128..148]);
        assert_eq!(dx10.dxgi_format, DXGI_FORMAT_BC1_UNORM);
        assert_eq!(dx10.array_size, 1);
    }
}
