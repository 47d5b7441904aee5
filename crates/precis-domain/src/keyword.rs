//! Extracted keyword phrases

use std::fmt;

/// A keyword phrase extracted from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    /// The phrase, built from token lemmas joined by single spaces
    pub phrase: String,
    /// Byte offset of the first verbatim occurrence of the phrase in the
    /// normalized text, if it occurs verbatim at all
    pub offset: Option<usize>,
}

impl Keyword {
    /// Create a keyword
    pub fn new(phrase: impl Into<String>, offset: Option<usize>) -> Self {
        Self {
            phrase: phrase.into(),
            offset,
        }
    }

    /// Number of whitespace-separated words in the phrase
    pub fn word_count(&self) -> usize {
        self.phrase.split_whitespace().count()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}
