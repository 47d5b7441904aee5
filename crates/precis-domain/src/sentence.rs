//! Sentences of a document

/// A sentence span of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position of the sentence in the document (0-based)
    pub index: usize,
    /// Sentence text, trimmed
    pub text: String,
    /// Start byte offset in the source text
    pub start: usize,
    /// End byte offset in the source text (exclusive)
    pub end: usize,
}

impl Sentence {
    /// Create a sentence
    pub fn new(index: usize, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            index,
            text: text.into(),
            start,
            end,
        }
    }
}
