//! Error types for file conversion.
//!
//! Errors are categorized by pipeline stage. Format and encode errors
//! carry no path context of their own; [`ConvertError`] pairs them
//! with the file being converted at the call site that knows it.

use crate::dds::FormatError;
use crate::png::EncodeError;
use std::path::PathBuf;
use thiserror::Error;

/// File system failures, tagged with the operation and the path it
/// was applied to.
#[derive(Debug, Error)]
pub enum IoError {
    /// The input file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file could not be read
    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    /// Path of the file the failed operation targeted.
    pub fn path(&self) -> &PathBuf {
        match self {
            IoError::OpenFailed { path, .. }
            | IoError::ReadFailed { path, .. }
            | IoError::WriteFailed { path, .. } => path,
        }
    }
}

/// Any failure while converting one DDS file to PNG.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input is not a convertible DDS container
    #[error("invalid texture: {0}")]
    Format(#[from] FormatError),

    /// Reading the input or writing the output failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// PNG assembly failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = IoError::OpenFailed {
            path: PathBuf::from("/tmp/missing.dds"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/missing.dds"), "{}", message);
        assert!(message.starts_with("failed to open"), "{}", message);
    }

    #[test]
    fn test_io_error_path_accessor() {
        let err = IoError::WriteFailed {
            path: PathBuf::from("out.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.path(), &PathBuf::from("out.png"));
    }

    #[test]
    fn test_convert_error_wraps_format() {
        let err = ConvertError::from(FormatError::NotContainer);
        assert_eq!(err.to_string(), "invalid texture: not a DDS container");
    }

    #[test]
    fn test_convert_error_io_is_transparent() {
        let err = ConvertError::from(IoError::ReadFailed {
            path: PathBuf::from("a.dds"),
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"),
        });
        assert_eq!(err.to_string(), "failed to read a.dds: eof");
    }
}
