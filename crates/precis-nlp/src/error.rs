//! Error types for text analysis

use thiserror::Error;

/// Errors that can occur while analysing text
#[derive(Error, Debug)]
pub enum NlpError {
    /// Nothing left to analyse once markup and whitespace are removed
    #[error("Empty text provided after sanitization")]
    EmptyText,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
