//! Filter for sentences that open with a context-dependent pronoun

use crate::config::AnaphoraMatch;

/// Drops sentences whose opening refers back to earlier text
#[derive(Debug, Clone)]
pub struct AnaphoraFilter {
    starts: Vec<String>,
    mode: AnaphoraMatch,
}

impl AnaphoraFilter {
    /// Create a filter; `starts` are compared case-insensitively
    pub fn new(starts: &[String], mode: AnaphoraMatch) -> Self {
        Self {
            starts: starts.iter().map(|s| s.to_lowercase()).collect(),
            mode,
        }
    }

    /// Whether `sentence` opens with one of the configured words
    pub fn is_anaphoric(&self, sentence: &str) -> bool {
        let lower = sentence.trim().to_lowercase();
        match self.mode {
            AnaphoraMatch::Prefix => self
                .starts
                .iter()
                .any(|start| lower.starts_with(start.as_str())),
            AnaphoraMatch::Word => {
                let first = lower
                    .split(|c: char| !c.is_alphanumeric() && c != '\'' && c != '’')
                    .next()
                    .unwrap_or_default();
                self.starts.iter().any(|start| start == first)
            }
        }
    }

    /// Sentences that survive the filter, in their original order
    pub fn retain<'a>(&self, sentences: &'a [String]) -> Vec<&'a String> {
        sentences.iter().filter(|s| !self.is_anaphoric(s)).collect()
    }
}
