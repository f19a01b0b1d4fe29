//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// ABI parsing error.
    #[error("ABI parse error: {0}")]
    Parse(#[from] abigen_schema::ParseError),

    /// ABI validation error.
    #[error("ABI error: {0}")]
    Schema(#[from] abigen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ABI file does not exist.
    #[error("missing ABI file at path '{}'", path.display())]
    MissingSchema {
        /// Expected file path.
        path: PathBuf,
    },

    /// Nothing to generate from.
    #[error("no ABI files to generate from in {location}")]
    NoSchemas {
        /// Where the source looked.
        location: String,
    },

    /// Invalid ABI discovery pattern.
    #[error("invalid ABI file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Failure while walking the ABI directory.
    #[error("failed to enumerate ABI files: {0}")]
    Glob(#[from] glob::GlobError),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
