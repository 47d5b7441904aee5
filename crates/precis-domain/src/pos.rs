//! Part-of-speech tags

use std::fmt;

/// Coarse part-of-speech tag, following the Universal Dependencies tag set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Common noun
    Noun,
    /// Proper noun
    ProperNoun,
    /// Pronoun, including possessive determiners such as "my"
    Pronoun,
    /// Main verb
    Verb,
    /// Auxiliary or modal verb
    Auxiliary,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Determiner or article
    Determiner,
    /// Preposition or postposition
    Adposition,
    /// Coordinating conjunction
    CoordinatingConjunction,
    /// Subordinating conjunction
    SubordinatingConjunction,
    /// Numeral
    Numeral,
    /// Particle ("to" before a verb, possessive "'s", "not")
    Particle,
    /// Interjection
    Interjection,
    /// Punctuation
    Punctuation,
    /// Symbol
    Symbol,
    /// Anything else
    Other,
}

impl PosTag {
    /// Whether the tag heads a noun phrase
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Whether the tag is a verb or an auxiliary
    pub fn is_verbal(&self) -> bool {
        matches!(self, PosTag::Verb | PosTag::Auxiliary)
    }

    /// Universal Dependencies label for the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPN",
            PosTag::Pronoun => "PRON",
            PosTag::Verb => "VERB",
            PosTag::Auxiliary => "AUX",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Determiner => "DET",
            PosTag::Adposition => "ADP",
            PosTag::CoordinatingConjunction => "CCONJ",
            PosTag::SubordinatingConjunction => "SCONJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Interjection => "INTJ",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::Other => "X",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
