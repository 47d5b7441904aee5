//! Keyword extraction from noun chunks

use std::sync::Arc;

use precis_domain::{Keyword, PosTag, Token};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::chunker::{ChunkSpan, NounChunker};
use crate::config::KeywordConfig;
use crate::error::NlpError;
use crate::model::LanguageModel;
use crate::normalize::strip_quotes_and_brackets;
use crate::sanitize::sanitize_html;

/// Phrases containing any of these are dropped
const REJECTED_FRAGMENTS: &[&str] = &[" and ", " etc", "\n"];

/// Phrases ending with any of these are dropped
const REJECTED_ENDINGS: &[&str] = &["etc", "and"];

/// Extracts keyword phrases from HTML or plain text
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    model: Arc<LanguageModel>,
    chunker: NounChunker,
    config: KeywordConfig,
}

impl KeywordExtractor {
    /// Create an extractor over a shared language model
    pub fn new(model: Arc<LanguageModel>, config: KeywordConfig) -> Self {
        let chunker = NounChunker::new(model.lexicon());
        Self {
            model,
            chunker,
            config,
        }
    }

    /// Create an extractor after validating `config`
    pub fn try_new(model: Arc<LanguageModel>, config: KeywordConfig) -> Result<Self, NlpError> {
        config.validate().map_err(NlpError::Config)?;
        Ok(Self::new(model, config))
    }

    /// Extraction settings
    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    /// Sanitize `raw` and extract its keywords
    ///
    /// Keywords are distinct lemma phrases taken from noun chunks, ordered by
    /// the first verbatim occurrence in the normalized text. Phrases that never
    /// occur verbatim come first, in discovery order.
    pub fn extract(&self, raw: &str) -> Result<Vec<Keyword>, NlpError> {
        let text = sanitize_html(raw.trim());
        if text.is_empty() {
            return Err(NlpError::EmptyText);
        }
        Ok(self.extract_sanitized(&text))
    }

    /// Extract keywords from text that is already free of markup
    pub fn extract_sanitized(&self, text: &str) -> Vec<Keyword> {
        let normalized = strip_quotes_and_brackets(text);
        let tokens = self.model.analyze(&normalized);
        let chunks = self.chunker.extract_chunks(&tokens);

        let mut seen = FxHashSet::default();
        let mut phrases = Vec::new();
        for chunk in &chunks {
            let phrase = chunk_phrase(&tokens, chunk);
            if self.is_well_formed(&phrase) && seen.insert(phrase.clone()) {
                phrases.push(phrase);
            }
        }

        let mut keywords: Vec<Keyword> = phrases
            .into_iter()
            .map(|phrase| {
                let offset = normalized.find(&phrase);
                Keyword::new(phrase, offset)
            })
            .filter(|keyword| keyword.word_count() <= self.config.max_phrase_words)
            .collect();
        keywords.sort_by_key(|keyword| keyword.offset);

        debug!(
            tokens = tokens.len(),
            chunks = chunks.len(),
            keywords = keywords.len(),
            "Extracted keywords"
        );
        keywords
    }

    fn is_well_formed(&self, phrase: &str) -> bool {
        if phrase.chars().count() < self.config.min_phrase_chars {
            return false;
        }
        if REJECTED_FRAGMENTS.iter().any(|f| phrase.contains(f)) {
            return false;
        }
        let lower = phrase.to_lowercase();
        if REJECTED_ENDINGS.iter().any(|e| lower.ends_with(e)) {
            return false;
        }
        !self.model.stopwords().is_stopword(phrase)
    }
}

/// Lemmas of the chunk's content tokens joined by single spaces
fn chunk_phrase(tokens: &[Token], chunk: &ChunkSpan) -> String {
    tokens[chunk.start_token..chunk.end_token]
        .iter()
        .filter(|t| !t.is_stop && t.pos != PosTag::Pronoun)
        .map(|t| t.lemma.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
