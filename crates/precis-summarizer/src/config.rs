//! Configuration for the summarizer

use serde::{Deserialize, Serialize};

/// Order in which candidate sentences are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceOrder {
    /// Highest score first
    #[default]
    Rank,
    /// Position in the document
    Document,
}

/// How sentence openings are matched against the anaphora list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnaphoraMatch {
    /// Raw string prefix, so "Items" matches "it"
    #[default]
    Prefix,
    /// Whole first word only
    Word,
}

/// Configuration for [`crate::TextRankSummarizer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of top-ranked sentences considered
    pub candidate_sentences: usize,

    /// Number of sentences in the summary
    pub summary_sentences: usize,

    /// PageRank damping factor
    pub damping: f64,

    /// Power iteration stops once the L2 change drops to this value
    pub epsilon: f64,

    /// Upper bound on power iterations
    pub max_iterations: usize,

    /// Order of candidates, and therefore of the summary
    pub sentence_order: SentenceOrder,

    /// Matching mode for the anaphora filter
    pub anaphora_match: AnaphoraMatch,

    /// Sentence openings that make a sentence depend on its context
    pub anaphora_starts: Vec<String>,

    /// Stem words with the Snowball English stemmer before comparing sentences
    pub stem_words: bool,

    /// Ignore stopwords when comparing sentences
    pub remove_stopwords: bool,
}

impl SummarizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.candidate_sentences == 0 {
            return Err("candidate_sentences must be greater than 0".to_string());
        }
        if self.summary_sentences == 0 {
            return Err("summary_sentences must be greater than 0".to_string());
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err("damping must be between 0.0 and 1.0 (exclusive)".to_string());
        }
        if !(self.epsilon > 0.0) {
            return Err("epsilon must be positive".to_string());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            candidate_sentences: 6,
            summary_sentences: 3,
            damping: 0.85,
            epsilon: 1e-4,
            max_iterations: 1000,
            sentence_order: SentenceOrder::Rank,
            anaphora_match: AnaphoraMatch::Prefix,
            anaphora_starts: ["it", "they", "he", "she", "this", "these", "those", "that"]
                .into_iter()
                .map(String::from)
                .collect(),
            stem_words: false,
            remove_stopwords: false,
        }
    }
}
