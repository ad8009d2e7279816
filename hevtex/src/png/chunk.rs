//! PNG chunk framing and CRC-32.
//!
//! Every PNG chunk is a big-endian u32 payload length, a four-byte
//! type code, the payload, and a CRC-32 over the type and payload
//! (not the length). The CRC is the ISO 3309 reflected variant with
//! polynomial 0xEDB88320, the same one zlib and PNG specify.

use std::sync::OnceLock;

static CRC_TABLE: OnceLock<[u32; 256]> = OnceLock::new();

fn crc_table() -> &'static [u32; 256] {
    CRC_TABLE.get_or_init(|| {
        let mut table = [0u32; 256];
        for (n, entry) in table.iter_mut().enumerate() {
            let mut c = n as u32;
            for _ in 0..8 {
                c = if c & 1 != 0 {
                    0xEDB8_8320 ^ (c >> 1)
                } else {
                    c >> 1
                };
            }
            *entry = c;
        }
        table
    })
}

fn crc32_update(crc: u32, bytes: &[u8]) -> u32 {
    let table = crc_table();
    let mut c = crc;
    for &byte in bytes {
        c = table[((c ^ byte as u32) & 0xFF) as usize] ^ (c >> 8);
    }
    c
}

/// CRC-32 of `bytes` as PNG computes it for chunk trailers.
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32_update(0xFFFF_FFFF, bytes) ^ 0xFFFF_FFFF
}

/// Append one complete chunk to `out`.
///
/// Frames `payload` with the big-endian length, `chunk_type`, and the
/// CRC-32 of type plus payload.
pub fn write_chunk(out: &mut Vec<u8>, chunk_type: [u8; 4], payload: &[u8]) {
    debug_assert!(payload.len() <= u32::MAX as usize);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(&chunk_type);
    out.extend_from_slice(payload);
    let crc = crc32_update(crc32_update(0xFFFF_FFFF, &chunk_type), payload) ^ 0xFFFF_FFFF;
    out.extend_from_slice(&crc.to_be_bytes());
}
