//! Error types for bqfe-core

use thiserror::Error;

/// Core error type for bqfe
#[derive(Error, Debug)]
pub enum CoreError {
    /// BQ001: Dialect table could not be parsed
    #[error("[BQ001] Failed to parse dialect table: {message}")]
    DialectParseError { message: String },

    /// BQ002: Dialect table is structurally invalid
    #[error("[BQ002] Invalid dialect table: {message}")]
    DialectInvalid { message: String },

    /// BQ003: Two type entries claim the same tag or alias
    #[error("[BQ003] Duplicate type tag '{tag}' in dialect table")]
    DuplicateTypeTag { tag: String },

    /// BQ004: Schema document could not be parsed
    #[error("[BQ004] Failed to parse schema document {path}: {details}")]
    DocumentParseError { path: String, details: String },

    /// BQ005: IO error
    #[error("[BQ005] IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
