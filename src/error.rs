use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommendError>;

#[derive(Debug, Error)]
pub enum RecommendError {
    /// The corpus had no usable items, nothing can be recommended
    #[error("corpus contains no items")]
    EmptyCorpus,
    /// No item name contains the query, carries the query as typed
    #[error("no game found for input: '{query}'")]
    NoMatchFound { query: String },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported corpus format: {0}")]
    UnsupportedFormat(String),
    /// CSV delimiters are single bytes
    #[error("invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(char),
}

impl RecommendError {
    /// The original query text when this is a `NoMatchFound`
    pub fn query(&self) -> Option<&str> {
        match self {
            RecommendError::NoMatchFound { query } => Some(query),
            _ => None,
        }
    }
}
