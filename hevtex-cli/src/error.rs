//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use hevtex::error::ConvertError;
use std::fmt;
use std::path::PathBuf;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Input path does not exist
    PathMissing(PathBuf),
    /// Invalid command-line arguments
    Config(String),
    /// Conversion of a single file failed
    Convert(ConvertError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        if let CliError::Config(_) = self {
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  hevtex <file.dds> <output.png>");
            eprintln!("  hevtex <directory> [threads]");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::PathMissing(path) => write!(f, "Path does not exist: {}", path.display()),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Convert(e) => write!(f, "Conversion failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Convert(e) => Some(e),
            _ => None,
        }
    }
}
