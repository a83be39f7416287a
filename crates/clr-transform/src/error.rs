//! Error types for palette transformation.

use thiserror::Error;

/// Errors raised while assembling or rendering a document.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The requested palette is not part of the decoded set.
    #[error("palette '{name}' not found")]
    PaletteNotFound { name: String },

    /// The document could not be rendered as JSON.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
