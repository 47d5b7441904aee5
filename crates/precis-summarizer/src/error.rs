//! Error types for summarization

use thiserror::Error;

/// Errors that can occur while summarizing
#[derive(Error, Debug)]
pub enum SummarizerError {
    /// Nothing left to summarize once markup and whitespace are removed
    #[error("Empty text provided after sanitization")]
    EmptyText,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
