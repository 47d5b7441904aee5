//! Punctuation normalization ahead of keyword extraction

use regex::Regex;
use std::sync::LazyLock;

static QUOTES_AND_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[‘’“”"()\[\]]"#).expect("quote pattern is valid"));

/// Remove quotation marks, parentheses and square brackets
pub fn strip_quotes_and_brackets(text: &str) -> String {
    QUOTES_AND_BRACKETS.replace_all(text, "").into_owned()
}
