//! Precis NLP
//!
//! Text cleanup and English analysis for the keyword pipeline.
//!
//! # Overview
//!
//! Raw request text may contain HTML. It is sanitized to plain paragraphs,
//! stripped of quotes and brackets, and analysed by a pure-Rust
//! [`LanguageModel`]: sentence segmentation, tokenization, part-of-speech
//! tagging, lemmatization and stopword marking. Noun chunks found over the
//! tagged tokens become keyword candidates.
//!
//! # Architecture
//!
//! ```text
//! raw text → sanitize → normalize → LanguageModel → NounChunker → KeywordExtractor
//! ```
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use precis_nlp::{KeywordConfig, KeywordExtractor, LanguageModel};
//!
//! let model = Arc::new(LanguageModel::english());
//! let extractor = KeywordExtractor::new(model, KeywordConfig::default());
//!
//! let keywords = extractor
//!     .extract("<p>The quick brown fox jumps over the lazy dog.</p>")
//!     .unwrap();
//! let phrases: Vec<_> = keywords.iter().map(|k| k.phrase.as_str()).collect();
//! assert_eq!(phrases, ["quick brown fox", "lazy dog"]);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod keywords;
mod lemmatizer;
mod model;
mod normalize;
mod sanitize;
mod stopwords;
mod tagger;

pub mod chunker;
pub mod lexicon;
pub mod sentences;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use chunker::{ChunkSpan, ChunkerConfig, NounChunker};
pub use config::KeywordConfig;
pub use error::NlpError;
pub use keywords::KeywordExtractor;
pub use lemmatizer::Lemmatizer;
pub use lexicon::Lexicon;
pub use model::LanguageModel;
pub use normalize::strip_quotes_and_brackets;
pub use sanitize::sanitize_html;
pub use sentences::{split_sentences, LineBreaks};
pub use stopwords::StopwordFilter;
pub use tagger::Tagger;
pub use tokenizer::{tokenize, RawToken};
