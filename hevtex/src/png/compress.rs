//! DEFLATE capability for IDAT payloads.

use miniz_oxide::deflate::compress_to_vec_zlib;
use thiserror::Error;

/// Compression level passed to the deflater (0 fastest, 9 smallest).
pub const COMPRESSION_LEVEL: u8 = 9;

/// Failure to produce a zlib stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("zlib compression failed")]
pub struct CompressError;

/// Zlib stream producer for IDAT payloads.
///
/// The PNG encoder goes through this seam instead of calling a
/// deflater directly, so tests can substitute failing or canned
/// implementations.
pub trait Compressor: Send + Sync {
    /// Compress `bytes` into a complete zlib stream (header, DEFLATE
    /// data, Adler-32 trailer).
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, CompressError>;
}

/// [`Compressor`] backed by miniz_oxide at [`COMPRESSION_LEVEL`].
///
/// One-shot, in-memory, and deterministic for a given input.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinizCompressor;

impl Compressor for MinizCompressor {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, CompressError> {
        Ok(compress_to_vec_zlib(bytes, COMPRESSION_LEVEL))
    }
}
