//! Extractive summarization: rank, filter, select

use precis_domain::Summary;
use precis_nlp::{sanitize_html, split_sentences, LineBreaks, StopwordFilter};
use tracing::debug;

use crate::anaphora::AnaphoraFilter;
use crate::config::{SentenceOrder, SummarizerConfig};
use crate::error::SummarizerError;
use crate::textrank::SentenceRanker;
use crate::words::WordExtractor;

/// TextRank summarizer with an anaphora filter
#[derive(Debug)]
pub struct TextRankSummarizer {
    config: SummarizerConfig,
    ranker: SentenceRanker,
    words: WordExtractor,
    anaphora: AnaphoraFilter,
}

impl TextRankSummarizer {
    /// Create a summarizer, validating `config`
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizerError> {
        config.validate().map_err(SummarizerError::Config)?;

        let ranker = SentenceRanker::new()
            .with_damping(config.damping)
            .with_epsilon(config.epsilon)
            .with_max_iterations(config.max_iterations);
        let mut words = WordExtractor::new();
        if config.stem_words {
            words = words.with_stemming();
        }
        if config.remove_stopwords {
            words = words.with_stopwords(StopwordFilter::english());
        }
        let anaphora = AnaphoraFilter::new(&config.anaphora_starts, config.anaphora_match);

        Ok(Self {
            config,
            ranker,
            words,
            anaphora,
        })
    }

    /// Summarization settings
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Sanitize `raw` and summarize it
    pub fn summarize(&self, raw: &str) -> Result<Summary, SummarizerError> {
        let text = sanitize_html(raw.trim());
        if text.is_empty() {
            return Err(SummarizerError::EmptyText);
        }
        Ok(self.summarize_sanitized(&text))
    }

    /// Summarize text that is already free of markup
    ///
    /// The top candidates are filtered for anaphoric openings. When fewer
    /// than `summary_sentences` survive, the first candidates are used
    /// unfiltered instead.
    pub fn summarize_sanitized(&self, text: &str) -> Summary {
        let candidates = self.candidates(text);
        let kept: Vec<String> = self
            .anaphora
            .retain(&candidates)
            .into_iter()
            .cloned()
            .collect();
        let wanted = self.config.summary_sentences;

        let summary = if kept.len() >= wanted {
            Summary::new(kept.into_iter().take(wanted).collect(), false)
        } else {
            Summary::new(candidates.into_iter().take(wanted).collect(), true)
        };
        debug!(
            candidates = self.config.candidate_sentences,
            sentences = summary.len(),
            used_fallback = summary.used_fallback,
            "Summarized text"
        );
        summary
    }

    /// The highest-scoring sentences, in the configured order
    pub fn candidates(&self, text: &str) -> Vec<String> {
        let sentences = split_sentences(text, LineBreaks::Whitespace);
        let words: Vec<Vec<String>> = sentences.iter().map(|s| self.words.words(&s.text)).collect();
        let result = self.ranker.rank(&words);
        if !result.converged {
            debug!(iterations = result.iterations, "Sentence ranking did not converge");
        }

        let mut order: Vec<usize> = (0..sentences.len()).collect();
        // Stable: equal scores keep document order
        order.sort_by(|&a, &b| result.scores[b].total_cmp(&result.scores[a]));
        order.truncate(self.config.candidate_sentences);
        if self.config.sentence_order == SentenceOrder::Document {
            order.sort_unstable();
        }

        order
            .into_iter()
            .map(|idx| sentences[idx].text.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnaphoraMatch;

    const CAT_AND_DOG: &str = "The cat sat. It was tired. The dog barked loudly outside.";

    fn summarizer() -> TextRankSummarizer {
        TextRankSummarizer::new(SummarizerConfig::default()).unwrap()
    }

    #[test]
    fn test_fallback_uses_unfiltered_candidates() {
        let summary = summarizer().summarize(CAT_AND_DOG).unwrap();
        assert!(summary.used_fallback);
        assert_eq!(
            summary.text(),
            "The dog barked loudly outside. It was tired. The cat sat."
        );
    }

    #[test]
    fn test_document_order() {
        let config = SummarizerConfig {
            sentence_order: SentenceOrder::Document,
            ..SummarizerConfig::default()
        };
        let summary = TextRankSummarizer::new(config)
            .unwrap()
            .summarize(CAT_AND_DOG)
            .unwrap();
        assert_eq!(summary.text(), CAT_AND_DOG);
    }

    #[test]
    fn test_anaphoric_sentences_are_dropped_when_enough_remain() {
        let text = "Rust guarantees memory safety. It has no garbage collector. \
                    Memory safety prevents many bugs. Rust programs run fast. \
                    Safety and speed make Rust popular.";
        let summarizer = summarizer();
        let summary = summarizer.summarize(text).unwrap();
        let survivors: Vec<String> = summarizer
            .candidates(text)
            .into_iter()
            .filter(|s| !summarizer.anaphora.is_anaphoric(s))
            .take(3)
            .collect();

        assert!(!summary.used_fallback);
        assert_eq!(summary.sentences, survivors);
        assert!(summary.sentences.iter().all(|s| !s.starts_with("It ")));
    }

    #[test]
    fn test_summary_is_top_survivors_in_rank_order() {
        let text = "Rust is fast. Rust is safe. Rust compiles code. \
                    Cargo builds Rust crates. They like Rust.";
        let summarizer = summarizer();

        let candidates = summarizer.candidates(text);
        assert_eq!(candidates.len(), 5);
        assert_eq!(&candidates[..3], ["Rust is fast.", "Rust is safe.", "Rust compiles code."]);

        let summary = summarizer.summarize(text).unwrap();
        assert!(!summary.used_fallback);
        assert_eq!(summary.text(), "Rust is fast. Rust is safe. Rust compiles code.");
    }

    #[test]
    fn test_short_text() {
        let summary = summarizer().summarize("<p>Only one sentence here.</p>").unwrap();
        assert_eq!(summary.sentences, vec!["Only one sentence here."]);
        assert!(summary.used_fallback);
    }

    #[test]
    fn test_lines_are_joined_before_splitting() {
        let summary = summarizer()
            .summarize("<p>A heading without a period</p><p>The body follows.</p>")
            .unwrap();
        assert_eq!(
            summary.sentences,
            vec!["A heading without a period The body follows."]
        );
    }

    #[test]
    fn test_empty_after_sanitization() {
        let result = summarizer().summarize("<br><p> </p>");
        assert!(matches!(result, Err(SummarizerError::EmptyText)));
    }

    #[test]
    fn test_candidate_limit() {
        let text = "Line one. Line two. Line three. Line four. \
                    Line five. Line six. Line seven. Line eight.";
        let candidates = summarizer().candidates(text);
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn test_word_mode_keeps_items_sentence() {
        let config = SummarizerConfig {
            anaphora_match: AnaphoraMatch::Word,
            summary_sentences: 1,
            ..SummarizerConfig::default()
        };
        let summary = TextRankSummarizer::new(config)
            .unwrap()
            .summarize("Items were sold.")
            .unwrap();
        assert!(!summary.used_fallback);
        assert_eq!(summary.sentences, vec!["Items were sold."]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SummarizerConfig {
            summary_sentences: 0,
            ..SummarizerConfig::default()
        };
        assert!(matches!(
            TextRankSummarizer::new(config),
            Err(SummarizerError::Config(_))
        ));
    }
}
