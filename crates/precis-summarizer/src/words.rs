//! Sentence words used to compare sentences

use std::fmt;
use std::sync::LazyLock;

use precis_domain::Sentence;
use precis_nlp::{tokenize, StopwordFilter};
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// A word starts with a letter and continues with letters, apostrophes or hyphens
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\W\d_](?:[^\W\d_]|['-])*$").expect("word pattern is valid"));

/// Turns a sentence into the lowercase words it is compared by
pub struct WordExtractor {
    stemmer: Option<Stemmer>,
    stopwords: Option<StopwordFilter>,
}

impl WordExtractor {
    /// Plain lowercase words, no stemming and no stopword removal
    pub fn new() -> Self {
        Self {
            stemmer: None,
            stopwords: None,
        }
    }

    /// Stem words with the Snowball English stemmer
    pub fn with_stemming(mut self) -> Self {
        self.stemmer = Some(Stemmer::create(Algorithm::English));
        self
    }

    /// Drop English stopwords
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    /// Words of `sentence`, in order, duplicates kept
    pub fn words(&self, sentence: &str) -> Vec<String> {
        let span = [Sentence::new(0, sentence, 0, sentence.len())];
        tokenize(sentence, &span)
            .into_iter()
            .filter(|token| WORD.is_match(&token.text))
            .map(|token| token.text.to_lowercase())
            .filter(|word| {
                self.stopwords
                    .as_ref()
                    .is_none_or(|stopwords| !stopwords.is_stopword(word))
            })
            .map(|word| match &self.stemmer {
                Some(stemmer) => stemmer.stem(&word).into_owned(),
                None => word,
            })
            .collect()
    }
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WordExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordExtractor")
            .field("stemming", &self.stemmer.is_some())
            .field("stopwords", &self.stopwords.as_ref().map(StopwordFilter::len))
            .finish()
    }
}
