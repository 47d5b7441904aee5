//! Lemmatization by lookup tables and suffix rules

use std::sync::Arc;

use precis_domain::PosTag;

use crate::lexicon::{Lexicon, E_RESTORING_ENDINGS};

/// Maps a word and its tag to a dictionary form
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lexicon: Arc<Lexicon>,
}

impl Lemmatizer {
    /// Create a lemmatizer over a shared lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Lemma of `word` given its part of speech
    ///
    /// Proper nouns keep their surface form, pronouns are lowercased except
    /// "I", and other words are lowercased before their inflection is removed.
    pub fn lemmatize(&self, word: &str, pos: PosTag) -> String {
        let lower = word.to_lowercase();
        match pos {
            PosTag::ProperNoun => word.to_string(),
            PosTag::Pronoun if word == "I" => word.to_string(),
            PosTag::Noun => self.noun_lemma(&lower),
            PosTag::Verb | PosTag::Auxiliary => self
                .lexicon
                .irregular_verb(&lower)
                .map(str::to_string)
                .unwrap_or_else(|| self.regular_verb_lemma(&lower)),
            PosTag::Adjective => self.adjective_base(&lower).unwrap_or(lower),
            _ => lower,
        }
    }

    /// Lemma of a lowercase noun
    pub fn noun_lemma(&self, lower: &str) -> String {
        if let Some(singular) = self.lexicon.irregular_noun(lower) {
            return singular.to_string();
        }
        if self.lexicon.is_uninflected_noun(lower) || self.lexicon.is_noun(lower) {
            return lower.to_string();
        }
        let len = lower.chars().count();

        if let Some(stem) = lower.strip_suffix("ies") {
            let ie = format!("{stem}ie");
            if self.lexicon.is_ie_noun(&ie) {
                return ie;
            }
            if len > 4 {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = lower.strip_suffix("es") {
            if ["ss", "x", "z", "ch", "sh"].iter().any(|end| stem.ends_with(end)) {
                return stem.to_string();
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            let keeps_s = ["s", "u", "i"].iter().any(|end| stem.ends_with(end));
            if len > 3 && !keeps_s && !stem.ends_with('\'') {
                return stem.to_string();
            }
        }
        lower.to_string()
    }

    /// Base form of a verb when `lower` is a recognised inflection of a
    /// listed verb
    pub fn verb_base(&self, lower: &str) -> Option<String> {
        if let Some(lemma) = self.lexicon.irregular_verb(lower) {
            return Some(lemma.to_string());
        }
        if self.lexicon.is_base_verb(lower) {
            return Some(lower.to_string());
        }
        let candidate = self.regular_verb_lemma(lower);
        (candidate != lower && self.lexicon.is_base_verb(&candidate)).then_some(candidate)
    }

    /// Base form of an adjective when `lower` is a listed adjective or a
    /// comparative/superlative of one
    pub fn adjective_base(&self, lower: &str) -> Option<String> {
        if let Some(lemma) = self.lexicon.irregular_adjective(lower) {
            return Some(lemma.to_string());
        }
        if self.lexicon.is_adjective(lower) {
            return Some(lower.to_string());
        }
        for suffix in ["est", "er"] {
            let Some(stem) = lower.strip_suffix(suffix) else {
                continue;
            };
            if let Some(y_stem) = stem.strip_suffix('i') {
                let candidate = format!("{y_stem}y");
                if self.lexicon.is_adjective(&candidate) {
                    return Some(candidate);
                }
            }
            let candidates = [
                stem.to_string(),
                format!("{stem}e"),
                undouble(stem).unwrap_or_default(),
            ];
            if let Some(found) = candidates
                .into_iter()
                .find(|c| !c.is_empty() && self.lexicon.is_adjective(c))
            {
                return Some(found);
            }
        }
        None
    }

    /// Strip a regular verb inflection, restoring a dropped `e` or a doubled
    /// consonant where the spelling suggests one
    pub(crate) fn regular_verb_lemma(&self, lower: &str) -> String {
        if lower.len() > 4 {
            if let Some(stem) = lower.strip_suffix("ies").or_else(|| lower.strip_suffix("ied")) {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = lower.strip_suffix("ing") {
            if stem.chars().count() >= 2 {
                return self.restore_stem(stem);
            }
        }
        if let Some(stem) = lower.strip_suffix("ed") {
            if stem.chars().count() >= 2 {
                return self.restore_stem(stem);
            }
        }
        if let Some(stem) = lower.strip_suffix("es") {
            if ["ss", "x", "z", "ch", "sh", "o"].iter().any(|end| stem.ends_with(end)) {
                return stem.to_string();
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            if !stem.ends_with('s') && stem.chars().count() >= 2 {
                return stem.to_string();
            }
        }
        lower.to_string()
    }

    fn restore_stem(&self, stem: &str) -> String {
        let with_e = format!("{stem}e");
        if self.lexicon.is_base_verb(&with_e) {
            return with_e;
        }
        if self.lexicon.is_base_verb(stem) {
            return stem.to_string();
        }
        if let Some(single) = undouble(stem) {
            if !stem.ends_with(['l', 's', 'z']) || self.lexicon.is_base_verb(&single) {
                return single;
            }
        }
        if E_RESTORING_ENDINGS.iter().any(|end| stem.ends_with(end)) || is_short_cvc(stem) {
            return with_e;
        }
        stem.to_string()
    }
}

/// `stem` without its final letter when that letter is doubled
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    (last == before && !is_vowel(last)).then(|| stem[..stem.len() - last.len_utf8()].to_string())
}

/// Short consonant-vowel-consonant stems such as "hop" or "smil"
fn is_short_cvc(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() < 3 || chars.len() > 4 {
        return false;
    }
    let [a, b, c] = [chars[chars.len() - 3], chars[chars.len() - 2], chars[chars.len() - 1]];
    !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !matches!(c, 'w' | 'x' | 'y')
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
