//! Error types for bqfe-ddl

use thiserror::Error;

/// DDL rendering errors
///
/// Optional or malformed schema data never produces an error; it degrades to
/// omitted clauses or marker text. Only the template engine itself can fail.
#[derive(Error, Debug)]
pub enum DdlError {
    /// Template render error (D001)
    #[error("[D001] Statement template render error: {0}")]
    RenderError(String),
}

/// Result type alias for DdlError
pub type DdlResult<T> = Result<T, DdlError>;

impl From<minijinja::Error> for DdlError {
    fn from(err: minijinja::Error) -> Self {
        DdlError::RenderError(err.to_string())
    }
}
