//! Error types for palette ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading palette sources.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Palette file not found.
    #[error("palette file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// No decoder is registered for the file's extension.
    #[error("{path} is not a supported palette file (expected one of: {supported})")]
    UnsupportedExtension { path: PathBuf, supported: String },

    /// The decoder rejected the file contents.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Errors raised by a decoder for malformed palette contents.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The CSV reader failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("required column '{column}' not found")]
    MissingColumn { column: &'static str },

    /// The file does not start with the expected header.
    #[error("expected '{expected}' header")]
    MissingHeader { expected: &'static str },

    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
