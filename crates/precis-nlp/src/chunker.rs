//! Noun chunk detection
//!
//! Identifies base noun phrases using pattern matching on POS tags.
//! Pattern: (DET | possessive PRON)? (ADV before ADJ | ADJ | NUM | NOUN | PROPN | 's)*
//! trimmed back to its last noun. A lone personal pronoun is a chunk of its own.

use std::sync::Arc;

use precis_domain::{PosTag, Token};

use crate::lexicon::Lexicon;

/// A noun chunk, as token and byte ranges of the analysed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    /// First token index (inclusive)
    pub start_token: usize,
    /// Last token index (exclusive)
    pub end_token: usize,
    /// Start byte offset
    pub start_char: usize,
    /// End byte offset
    pub end_char: usize,
    /// Sentence containing the chunk
    pub sentence_idx: usize,
}

/// Configuration for noun chunk detection
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Minimum number of tokens in a chunk
    pub min_length: usize,
    /// Maximum number of tokens in a chunk, if any
    pub max_length: Option<usize>,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: None,
        }
    }
}

/// Noun chunk detector
#[derive(Debug, Clone)]
pub struct NounChunker {
    config: ChunkerConfig,
    lexicon: Arc<Lexicon>,
}

impl NounChunker {
    /// Create a chunker with default config
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_config(lexicon, ChunkerConfig::default())
    }

    /// Create a chunker with custom config
    pub fn with_config(lexicon: Arc<Lexicon>, config: ChunkerConfig) -> Self {
        Self { config, lexicon }
    }

    /// Set maximum chunk length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = Some(max_length);
        self
    }

    /// Extract noun chunks from tokens, in document order
    pub fn extract_chunks(&self, tokens: &[Token]) -> Vec<ChunkSpan> {
        let mut chunks = Vec::new();
        for sentence in tokens.chunk_by(|a, b| a.sentence_idx == b.sentence_idx) {
            self.extract_chunks_from_sentence(sentence, &mut chunks);
        }
        chunks
    }

    fn extract_chunks_from_sentence(&self, tokens: &[Token], chunks: &mut Vec<ChunkSpan>) {
        let mut i = 0;
        while i < tokens.len() {
            if let Some(end) = self.match_noun_phrase(tokens, i) {
                let len = end - i;
                let fits = len >= self.config.min_length
                    && self.config.max_length.is_none_or(|max| len <= max);
                if fits {
                    chunks.push(ChunkSpan {
                        start_token: tokens[i].token_idx,
                        end_token: tokens[end - 1].token_idx + 1,
                        start_char: tokens[i].start,
                        end_char: tokens[end - 1].end,
                        sentence_idx: tokens[i].sentence_idx,
                    });
                }
                i = end;
                continue;
            }
            i += 1;
        }
    }

    /// End (exclusive, sentence-relative) of the noun phrase starting at `start`
    fn match_noun_phrase(&self, tokens: &[Token], start: usize) -> Option<usize> {
        let first = &tokens[start];
        let mut j = start;
        if first.pos == PosTag::Determiner || self.is_possessive(first) {
            j += 1;
        }

        let mut last_noun = None;
        while j < tokens.len() {
            let token = &tokens[j];
            let advance = match token.pos {
                PosTag::Noun | PosTag::ProperNoun => {
                    last_noun = Some(j);
                    true
                }
                PosTag::Adjective | PosTag::Numeral => true,
                PosTag::Adverb => tokens
                    .get(j + 1)
                    .is_some_and(|next| next.pos == PosTag::Adjective),
                PosTag::Particle => {
                    is_possessive_clitic(token)
                        && j > 0
                        && last_noun == Some(j - 1)
                        && j + 1 < tokens.len()
                }
                _ => false,
            };
            if !advance {
                break;
            }
            j += 1;
        }

        match last_noun {
            Some(head) => Some(head + 1),
            None if first.pos == PosTag::Pronoun && !self.is_possessive(first) => Some(start + 1),
            None => None,
        }
    }

    fn is_possessive(&self, token: &Token) -> bool {
        token.pos == PosTag::Pronoun && self.lexicon.is_possessive_pronoun(&token.lower())
    }
}

fn is_possessive_clitic(token: &Token) -> bool {
    matches!(token.text.as_str(), "'s" | "’s" | "'S" | "’S")
}
