//! Tokens produced by the language model

use crate::PosTag;

/// A single analysed token
///
/// Offsets are byte offsets into the text the token was produced from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface form as it appears in the text
    pub text: String,
    /// Base (dictionary) form
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Index of the sentence containing the token
    pub sentence_idx: usize,
    /// Index of the token in the document
    pub token_idx: usize,
    /// Whether the token is a stopword
    pub is_stop: bool,
}

impl Token {
    /// Create a token that is not (yet) marked as a stopword
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            start,
            end,
            sentence_idx,
            token_idx,
            is_stop: false,
        }
    }

    /// Lowercased surface form
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    /// Whether the token starts with an uppercase letter
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_not_stop() {
        let token = Token::new("Cats", "cat", PosTag::Noun, 0, 4, 0, 0);
        assert!(!token.is_stop);
        assert_eq!(token.lower(), "cats");
        assert!(token.is_capitalized());
    }
}
