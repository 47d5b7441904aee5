//! Extractive summaries

/// An extractive summary: selected sentences in output order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// The selected sentences
    pub sentences: Vec<String>,
    /// Whether the anaphora filter left too few sentences and the unfiltered
    /// candidates were used instead
    pub used_fallback: bool,
}

impl Summary {
    /// Create a summary from selected sentences
    pub fn new(sentences: Vec<String>, used_fallback: bool) -> Self {
        Self {
            sentences,
            used_fallback,
        }
    }

    /// The sentences joined by single spaces
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }

    /// Number of sentences in the summary
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the summary has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
