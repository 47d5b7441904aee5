//! Word tokenization
//!
//! Words are runs of letters and digits, optionally joined by apostrophes,
//! hyphens or inner periods ("state-of-the-art", "U.S", "3.14"). English
//! clitics are split off ("dog's" becomes "dog" + "'s", "don't" becomes
//! "do" + "n't"). Any other non-space character is a token of its own.

use std::sync::LazyLock;

use precis_domain::Sentence;
use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}]+(?:['’.\-][\p{L}\p{M}\p{N}]+)*|\S")
        .expect("token pattern is valid")
});

const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// A token before tagging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// Surface form
    pub text: String,
    /// Start byte offset in the analysed text
    pub start: usize,
    /// End byte offset in the analysed text
    pub end: usize,
    /// Index of the enclosing sentence
    pub sentence_idx: usize,
}

impl RawToken {
    /// Whether the token contains at least one letter or digit
    pub fn is_word(&self) -> bool {
        self.text.chars().any(char::is_alphanumeric)
    }
}

/// Tokenize every sentence of `text`
///
/// `sentences` must carry offsets into `text`.
pub fn tokenize(text: &str, sentences: &[Sentence]) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    for sentence in sentences {
        let span = &text[sentence.start..sentence.end];
        for m in TOKEN_PATTERN.find_iter(span) {
            let start = sentence.start + m.start();
            for (offset, piece) in split_clitic(m.as_str()) {
                tokens.push(RawToken {
                    text: piece.to_string(),
                    start: start + offset,
                    end: start + offset + piece.len(),
                    sentence_idx: sentence.index,
                });
            }
        }
    }
    tokens
}

/// Split a trailing clitic off a word, returning pieces with their byte offsets
fn split_clitic(word: &str) -> Vec<(usize, &str)> {
    let lower = word.to_lowercase().replace('’', "'");
    // Lowercasing and the apostrophe swap can change byte lengths, so
    // compare on chars and slice the original at a char boundary.
    let cut = if lower.ends_with("n't") && lower.chars().count() > 3 {
        Some(3)
    } else {
        CLITICS
            .iter()
            .find(|clitic| lower.ends_with(*clitic) && lower.chars().count() > clitic.len())
            .map(|clitic| clitic.chars().count())
    };

    match cut {
        Some(clitic_chars) => {
            let split_at = word
                .char_indices()
                .rev()
                .nth(clitic_chars - 1)
                .map_or(0, |(idx, _)| idx);
            vec![(0, &word[..split_at]), (split_at, &word[split_at..])]
        }
        None => vec![(0, word)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentences::{split_sentences, LineBreaks};

    fn words(text: &str) -> Vec<String> {
        let sentences = split_sentences(text, LineBreaks::Boundary);
        tokenize(text, &sentences)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            words("The quick brown fox, jumps!"),
            vec!["The", "quick", "brown", "fox", ",", "jumps", "!"]
        );
    }

    #[test]
    fn test_clitics_are_split() {
        assert_eq!(words("The dog's bone"), vec!["The", "dog", "'s", "bone"]);
        assert_eq!(words("They don't know"), vec!["They", "do", "n't", "know"]);
        assert_eq!(words("We’re here"), vec!["We", "’re", "here"]);
    }

    #[test]
    fn test_hyphens_and_decimals_stay_together() {
        assert_eq!(
            words("A state-of-the-art model scored 3.14 points."),
            vec!["A", "state-of-the-art", "model", "scored", "3.14", "points", "."]
        );
    }

    #[test]
    fn test_offsets_and_sentence_indices() {
        let text = "Cats sleep. Dogs bark.";
        let sentences = split_sentences(text, LineBreaks::Boundary);
        let tokens = tokenize(text, &sentences);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
        assert_eq!(tokens[0].sentence_idx, 0);
        assert_eq!(tokens.last().map(|t| t.sentence_idx), Some(1));
    }
}
