//! Single-file conversion pipeline.
//!
//! One [`ConversionPipeline`] instance serves the whole process: it
//! holds the DDS decoder and PNG encoder and converts files on
//! whatever thread calls it. All state is immutable after
//! construction, so workers share it through a plain clone.

use crate::dds::{parse_texture, DdsDecoder, TextureFormat};
use crate::error::{ConvertError, IoError};
use crate::png::PngEncoder;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

/// One unit of work: a source DDS path and its PNG destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// DDS file to read
    pub source: PathBuf,
    /// PNG file to write
    pub dest: PathBuf,
}

impl ConversionJob {
    /// Create a job with explicit source and destination paths.
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }

    /// Create a job writing next to the source with a `.png` extension.
    pub fn for_source(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let dest = source.with_extension("png");
        Self { source, dest }
    }
}

/// Summary of one successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Decoded image width in pixels
    pub width: u32,
    /// Decoded image height in pixels
    pub height: u32,
    /// Block compression format of the source
    pub format: TextureFormat,
    /// Size of the written PNG in bytes
    pub png_bytes: usize,
}

/// Decode-encode pipeline shared by all workers.
#[derive(Clone, Default)]
pub struct ConversionPipeline {
    decoder: DdsDecoder,
    encoder: PngEncoder,
}

impl ConversionPipeline {
    /// Create a pipeline with the default decoder and encoder.
    pub fn new() -> Self {
        Self {
            decoder: DdsDecoder::new(),
            encoder: PngEncoder::new(),
        }
    }

    /// Replace the DDS decoder.
    pub fn with_decoder(mut self, decoder: DdsDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Replace the PNG encoder.
    pub fn with_encoder(mut self, encoder: PngEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Convert one DDS file into a PNG file on disk.
    ///
    /// # Returns
    ///
    /// A [`ConversionReport`] describing the decoded image and the
    /// written file.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] if the source cannot be read, is not a
    /// supported DDS container, fails to encode, or the destination
    /// cannot be written.
    pub fn convert_file(&self, job: &ConversionJob) -> Result<ConversionReport, ConvertError> {
        let mut bytes = Vec::new();
        File::open(&job.source)
            .map_err(|source| IoError::OpenFailed {
                path: job.source.clone(),
                source,
            })?
            .read_to_end(&mut bytes)
            .map_err(|source| IoError::ReadFailed {
                path: job.source.clone(),
                source,
            })?;

        let texture = parse_texture(&bytes)?;
        debug!(
            source = %job.source.display(),
            format = %texture.format,
            width = texture.width,
            height = texture.height,
            "Decoding texture"
        );

        let image = self.decoder.decode(&texture);
        let png = self.encoder.encode(&image)?;

        std::fs::write(&job.dest, &png).map_err(|source| IoError::WriteFailed {
            path: job.dest.clone(),
            source,
        })?;

        info!(
            source = %job.source.display(),
            dest = %job.dest.display(),
            bytes = png.len(),
            "Converted"
        );

        Ok(ConversionReport {
            width: texture.width,
            height: texture.height,
            format: texture.format,
            png_bytes: png.len(),
        })
    }
}
