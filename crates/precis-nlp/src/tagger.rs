//! Part-of-speech tagging
//!
//! Tagging runs in two passes over each sentence. The first pass looks every
//! token up on its own: closed-class words, capitalization, the open-class
//! word lists, then suffix rules, with unknown words defaulting to nouns. The
//! second pass walks the sentence left to right and repairs the tags that
//! depend on their neighbours, such as "to" before a verb, demonstratives,
//! possessive "'s", verbs used as nouns after a determiner, and unlisted
//! -s verbs after a sentence-initial noun.

use std::sync::Arc;

use precis_domain::PosTag;

use crate::lemmatizer::Lemmatizer;
use crate::lexicon::Lexicon;
use crate::tokenizer::RawToken;

const SYMBOLS: &[char] = &[
    '$', '%', '#', '@', '+', '=', '<', '>', '|', '~', '^', '*', '°', '€', '£', '¥', '©', '®', '§',
    '×', '÷',
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "less", "ical", "able", "ible", "ish", "ic", "al",
];

/// Rule-based tagger
#[derive(Debug, Clone)]
pub struct Tagger {
    lexicon: Arc<Lexicon>,
    lemmatizer: Lemmatizer,
}

impl Tagger {
    /// Create a tagger over a shared lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let lemmatizer = Lemmatizer::new(Arc::clone(&lexicon));
        Self {
            lexicon,
            lemmatizer,
        }
    }

    /// Tag every token; the result is parallel to `tokens`
    pub fn tag(&self, tokens: &[RawToken]) -> Vec<PosTag> {
        let mut tags = Vec::with_capacity(tokens.len());
        for sentence in tokens.chunk_by(|a, b| a.sentence_idx == b.sentence_idx) {
            tags.extend(self.tag_sentence(sentence));
        }
        tags
    }

    fn tag_sentence(&self, tokens: &[RawToken]) -> Vec<PosTag> {
        let lowers: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();

        let mut tags: Vec<PosTag> = (0..tokens.len())
            .map(|i| {
                let next_capitalized = tokens.get(i + 1).is_some_and(|t| is_capitalized(&t.text));
                self.initial_tag(&tokens[i], &lowers[i], i == 0, next_capitalized)
            })
            .collect();

        for i in 0..tokens.len() {
            let tag = self.contextual_tag(&lowers, &tags, i);
            tags[i] = tag;
        }
        tags
    }

    fn initial_tag(
        &self,
        token: &RawToken,
        lower: &str,
        sentence_start: bool,
        next_capitalized: bool,
    ) -> PosTag {
        let text = token.text.as_str();
        if !token.is_word() {
            return if text == "&" {
                PosTag::CoordinatingConjunction
            } else if text.chars().all(|c| SYMBOLS.contains(&c)) {
                PosTag::Symbol
            } else {
                PosTag::Punctuation
            };
        }
        if is_numeric(text) {
            return PosTag::Numeral;
        }
        if let Some(tag) = self.lexicon.closed_class(lower) {
            return tag;
        }
        if self.lexicon.is_number_word(lower) {
            return PosTag::Numeral;
        }
        if is_acronym(text) {
            return PosTag::ProperNoun;
        }
        if is_capitalized(text) {
            if !sentence_start {
                return PosTag::ProperNoun;
            }
            if next_capitalized && self.open_class_tag(lower).is_none() {
                return PosTag::ProperNoun;
            }
        }
        self.open_class_tag(lower)
            .unwrap_or_else(|| suffix_tag(lower))
    }

    /// Tag from the open-class word lists, if the word is listed
    fn open_class_tag(&self, lower: &str) -> Option<PosTag> {
        if self.lemmatizer.adjective_base(lower).is_some() {
            Some(PosTag::Adjective)
        } else if self.lexicon.irregular_verb(lower).is_some() {
            Some(PosTag::Verb)
        } else if self.lexicon.is_noun(lower) {
            Some(PosTag::Noun)
        } else if self.lemmatizer.verb_base(lower).is_some() {
            Some(PosTag::Verb)
        } else {
            None
        }
    }

    fn contextual_tag(&self, lowers: &[String], tags: &[PosTag], i: usize) -> PosTag {
        let lower = lowers[i].as_str();
        let tag = tags[i];
        let prev = i.checked_sub(1).map(|p| (lowers[p].as_str(), tags[p]));
        let next = tags.get(i + 1).copied();
        let next_lower = lowers.get(i + 1).map(String::as_str);

        if lower == "to" {
            let before_verb = next == Some(PosTag::Verb)
                || matches!(next_lower, Some("be" | "have" | "do"));
            return if before_verb {
                PosTag::Particle
            } else {
                PosTag::Adposition
            };
        }
        if matches!(lower, "'s" | "’s") {
            return match prev {
                Some((_, prev_tag)) if prev_tag.is_noun() => PosTag::Particle,
                _ => PosTag::Auxiliary,
            };
        }

        match tag {
            PosTag::Determiner if self.lexicon.is_demonstrative(lower) => {
                if next.is_some_and(opens_noun_phrase) {
                    PosTag::Determiner
                } else if lower == "that" && matches!(prev, Some((_, PosTag::Verb))) {
                    PosTag::SubordinatingConjunction
                } else {
                    PosTag::Pronoun
                }
            }
            PosTag::Verb => self.retag_verb(lower, prev, next),
            PosTag::Noun => match prev {
                Some((prev_lower, prev_tag))
                    if !self.lexicon.is_noun(lower) && self.expects_verb(prev_lower, prev_tag) =>
                {
                    PosTag::Verb
                }
                // "Water boils at ...": a bare noun subject followed by an -s verb
                Some((_, prev_tag))
                    if i == 1
                        && prev_tag.is_noun()
                        && next.is_some_and(|t| self.is_present_tense_verb(lower, t)) =>
                {
                    PosTag::Verb
                }
                _ => PosTag::Noun,
            },
            PosTag::Adjective
                if self.lexicon.is_noun(lower)
                    && matches!(prev, Some((_, PosTag::Determiner)))
                    && !next.is_some_and(opens_noun_phrase) =>
            {
                PosTag::Noun
            }
            _ => tag,
        }
    }

    /// Verbs in noun positions become nouns, or adjectives for participles
    /// in front of a noun
    fn retag_verb(&self, lower: &str, prev: Option<(&str, PosTag)>, next: Option<PosTag>) -> PosTag {
        let base = self.lemmatizer.verb_base(lower);
        let is_s_form = lower.ends_with('s') && base.as_deref().is_some_and(|b| b != lower);

        let Some((prev_lower, prev_tag)) = prev else {
            let bare_base = base.as_deref() == Some(lower);
            let before_verb = next.is_some_and(|t| t.is_verbal());
            return if is_s_form || (bare_base && before_verb) {
                PosTag::Noun
            } else {
                PosTag::Verb
            };
        };

        let nominal_context = matches!(
            prev_tag,
            PosTag::Determiner | PosTag::Adjective | PosTag::Numeral
        ) || (prev_tag == PosTag::Pronoun && self.lexicon.is_possessive_pronoun(prev_lower))
            || (prev_tag == PosTag::Particle && matches!(prev_lower, "'s" | "’s"));

        if nominal_context {
            let participle = lower.ends_with("ing") || lower.ends_with("ed");
            if participle && next.is_some_and(|t| t.is_noun() || t == PosTag::Adjective) {
                return PosTag::Adjective;
            }
            return PosTag::Noun;
        }
        if is_s_form && prev_tag == PosTag::Adposition {
            return PosTag::Noun;
        }
        PosTag::Verb
    }

    /// Whether an -s word followed by `next` reads as a present-tense verb
    ///
    /// Before a noun the stem has to be a listed verb. Before a determiner,
    /// adjective, adposition or number any stem that is not a listed noun
    /// qualifies.
    fn is_present_tense_verb(&self, lower: &str, next: PosTag) -> bool {
        if !lower.ends_with('s') || lower.ends_with("ss") {
            return false;
        }
        let stem = self.lemmatizer.regular_verb_lemma(lower);
        if stem == lower || stem.chars().count() < 3 {
            return false;
        }
        match next {
            PosTag::Noun | PosTag::ProperNoun => self.lexicon.is_base_verb(&stem),
            PosTag::Determiner | PosTag::Adjective | PosTag::Adposition | PosTag::Numeral => {
                self.lexicon.is_base_verb(&stem) || !self.lexicon.is_noun(&stem)
            }
            _ => false,
        }
    }

    fn expects_verb(&self, prev_lower: &str, prev_tag: PosTag) -> bool {
        match prev_tag {
            PosTag::Pronoun => self.lexicon.is_subject_pronoun(prev_lower),
            PosTag::Auxiliary => self.lexicon.is_modal(prev_lower),
            PosTag::Particle => matches!(prev_lower, "not" | "n't" | "n’t"),
            _ => false,
        }
    }
}

fn opens_noun_phrase(tag: PosTag) -> bool {
    matches!(
        tag,
        PosTag::Noun | PosTag::ProperNoun | PosTag::Adjective | PosTag::Numeral
    )
}

fn suffix_tag(lower: &str) -> PosTag {
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        PosTag::Adverb
    } else if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        PosTag::Adjective
    } else if (len > 5 && lower.ends_with("ize")) || (len > 4 && lower.ends_with("ify")) {
        PosTag::Verb
    } else if len > 5 && lower.ends_with("ing") {
        PosTag::Verb
    } else if len > 4 && lower.ends_with("ed") && !lower.ends_with("eed") {
        PosTag::Verb
    } else {
        PosTag::Noun
    }
}

fn is_capitalized(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

/// All-caps words of two or more letters, such as "NASA"
fn is_acronym(text: &str) -> bool {
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

fn is_numeric(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '-' | '/' | '%'))
}
