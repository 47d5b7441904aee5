//! Precis Domain Layer
//!
//! Value types shared by the text-processing crates and the HTTP service.
//! Like every domain crate in this workspace it has no external dependencies:
//! sanitizing, tagging and ranking live in `precis-nlp` and
//! `precis-summarizer`, and the wire format lives in `precis-server`.
//!
//! ## Key Concepts
//!
//! - **Token**: a word or punctuation mark with its part of speech and lemma
//! - **Sentence**: a span of the source text delimited by terminal punctuation
//! - **Keyword**: a short noun phrase, positioned by its first occurrence
//! - **Summary**: at most a handful of ranked sentences
//!
//! Every value here is transient: it is created for one request and dropped
//! with it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keyword;
pub mod pos;
pub mod sentence;
pub mod summary;
pub mod token;

// Re-exports for convenience
pub use keyword::Keyword;
pub use pos::PosTag;
pub use sentence::Sentence;
pub use summary::Summary;
pub use token::Token;
