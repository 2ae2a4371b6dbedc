//! Error types for duration-engine operations.
//!
//! Extraction itself never fails: a text without durations yields an empty
//! list. Errors only arise while building a configuration (pattern
//! compilation, option decoding).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid pattern '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl EngineError {
    pub(crate) fn pattern(name: impl Into<String>, source: regex::Error) -> Self {
        EngineError::InvalidPattern {
            name: name.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
