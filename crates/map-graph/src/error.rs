//! Graph-subsystem error type.
//!
//! Only the structured load can fail.  Everything else in the graph API
//! degrades to a no-op or an empty result and reports through the
//! [`GraphObserver`](crate::GraphObserver).

use thiserror::Error;

/// Errors produced by `map-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed map document: {0}")]
    Xml(String),

    #[error("unexpected root element <{0}>, expected <map>")]
    UnexpectedRoot(String),

    #[error("map document has no <{0}> section")]
    MissingSection(&'static str),
}

impl From<quick_xml::Error> for GraphError {
    fn from(e: quick_xml::Error) -> Self {
        GraphError::Xml(e.to_string())
    }
}

impl From<quick_xml::DeError> for GraphError {
    fn from(e: quick_xml::DeError) -> Self {
        GraphError::Xml(e.to_string())
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
