//! Shared error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `OutputError`) and
//! keep `MapError` for invalid configuration values.

use thiserror::Error;

/// The base error type for `map-core`.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `map-core`.
pub type MapResult<T> = Result<T, MapError>;
