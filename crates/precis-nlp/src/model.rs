//! The English language model: segmentation, tagging and lemmatization

use std::sync::Arc;

use precis_domain::{Sentence, Token};

use crate::lemmatizer::Lemmatizer;
use crate::lexicon::Lexicon;
use crate::sentences::{split_sentences, LineBreaks};
use crate::stopwords::StopwordFilter;
use crate::tagger::Tagger;
use crate::tokenizer::tokenize;

/// Immutable English analysis pipeline
///
/// Building the model compiles its word lists, so build it once and share it
/// behind an [`Arc`]; analysis never mutates it.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    lexicon: Arc<Lexicon>,
    tagger: Tagger,
    lemmatizer: Lemmatizer,
    stopwords: StopwordFilter,
}

impl LanguageModel {
    /// Load the English model
    pub fn english() -> Self {
        let lexicon = Arc::new(Lexicon::english());
        Self {
            tagger: Tagger::new(Arc::clone(&lexicon)),
            lemmatizer: Lemmatizer::new(Arc::clone(&lexicon)),
            stopwords: StopwordFilter::english(),
            lexicon,
        }
    }

    /// Split text into sentences
    pub fn sentences(&self, text: &str, line_breaks: LineBreaks) -> Vec<Sentence> {
        split_sentences(text, line_breaks)
    }

    /// Tokenize, tag and lemmatize `text`
    ///
    /// Every line is treated as a hard sentence boundary. Token offsets are
    /// byte offsets into `text`.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let sentences = split_sentences(text, LineBreaks::Boundary);
        let raw = tokenize(text, &sentences);
        let tags = self.tagger.tag(&raw);

        raw.into_iter()
            .zip(tags)
            .enumerate()
            .map(|(idx, (raw, pos))| {
                let lemma = self.lemmatizer.lemmatize(&raw.text, pos);
                let mut token =
                    Token::new(raw.text, lemma, pos, raw.start, raw.end, raw.sentence_idx, idx);
                token.is_stop = self.stopwords.is_stopword(&token.text);
                token
            })
            .collect()
    }

    /// Stopword list used to mark tokens
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Shared word lists
    pub fn lexicon(&self) -> Arc<Lexicon> {
        Arc::clone(&self.lexicon)
    }
}

impl Default for LanguageModel {
    fn default() -> Self {
        Self::english()
    }
}
