//! Precis Summarizer
//!
//! Extractive summarization by TextRank.
//!
//! # Overview
//!
//! Sanitized text is split into sentences, each sentence is reduced to its
//! lowercase words, and sentences are scored by power iteration over a word
//! overlap graph. The best-scoring candidates then pass an anaphora filter
//! that drops sentences opening with a pronoun such as "it" or "they", since
//! those read badly out of context.
//!
//! # Example Usage
//!
//! ```
//! use precis_summarizer::{SummarizerConfig, TextRankSummarizer};
//!
//! let summarizer = TextRankSummarizer::new(SummarizerConfig::default()).unwrap();
//! let summary = summarizer
//!     .summarize("The cat sat. It was tired. The dog barked loudly outside.")
//!     .unwrap();
//!
//! // Only two sentences survive the filter, so the unfiltered candidates are used
//! assert!(summary.used_fallback);
//! assert_eq!(summary.len(), 3);
//! ```

#![warn(missing_docs)]

mod anaphora;
mod config;
mod error;
mod summarizer;
mod textrank;
mod words;


pub use anaphora::AnaphoraFilter;
pub use config::{AnaphoraMatch, SentenceOrder, SummarizerConfig};
pub use error::SummarizerError;
pub use summarizer::TextRankSummarizer;
pub use textrank::{RankResult, SentenceRanker};
pub use words::WordExtractor;
