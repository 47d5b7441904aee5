//! Rule-based sentence segmentation
//!
//! A sentence ends at `.`, `!` or `?` (optionally followed by closing quotes or
//! brackets) when the next non-space character starts a new sentence: an
//! uppercase letter, a digit, or an opening quote or bracket. Periods after
//! known abbreviations, single-letter initials and dotted acronyms do not end
//! a sentence.

use precis_domain::Sentence;

const TERMINATORS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', '’', '”', ')', ']'];
const OPENERS: &[char] = &['"', '\'', '‘', '“', '(', '['];

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "inc", "ltd", "co", "corp", "dept",
    "fig", "approx", "gen", "gov", "sen", "rep", "mt", "ave", "jan", "feb", "mar", "apr", "jun",
    "jul", "aug", "sep", "sept", "oct", "nov", "dec", "e.g", "i.e", "etc", "cf", "al",
];

/// How line breaks are treated while segmenting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreaks {
    /// Every line is segmented on its own, so no sentence spans two lines
    Boundary,
    /// Line breaks are ordinary whitespace; sentence text has them replaced by spaces
    Whitespace,
}

/// Split `text` into sentences
///
/// Sentence offsets are byte offsets into `text` and exclude surrounding
/// whitespace. Empty segments are skipped.
pub fn split_sentences(text: &str, line_breaks: LineBreaks) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    match line_breaks {
        LineBreaks::Boundary => {
            let mut base = 0;
            for line in text.split('\n') {
                split_segment(line, base, false, &mut sentences);
                base += line.len() + 1;
            }
        }
        LineBreaks::Whitespace => split_segment(text, 0, true, &mut sentences),
    }
    sentences
}

fn split_segment(segment: &str, base: usize, flatten: bool, out: &mut Vec<Sentence>) {
    let chars: Vec<(usize, char)> = segment.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map_or(segment.len(), |(b, _)| *b);

    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        let (period_byte, c) = chars[i];
        if !TERMINATORS.contains(&c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
            j += 1;
        }
        while j < chars.len() && CLOSERS.contains(&chars[j].1) {
            j += 1;
        }

        let boundary = if j == chars.len() {
            true
        } else if chars[j].1.is_whitespace() {
            let next = chars[j..].iter().find(|(_, ch)| !ch.is_whitespace());
            match next {
                None => true,
                Some((_, ch)) => {
                    starts_sentence(*ch)
                        && !(c == '.' && ends_with_abbreviation(&segment[start..period_byte]))
                }
            }
        } else {
            false
        };

        if boundary {
            let end = byte_at(j);
            push_sentence(segment, base, start, end, flatten, out);
            start = end;
        }
        i = j;
    }
    push_sentence(segment, base, start, segment.len(), flatten, out);
}

fn starts_sentence(c: char) -> bool {
    c.is_uppercase() || c.is_ascii_digit() || OPENERS.contains(&c)
}

fn ends_with_abbreviation(before_period: &str) -> bool {
    let Some(word) = before_period.split_whitespace().last() else {
        return false;
    };
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    let lower = word.to_lowercase();

    if lower.chars().count() == 1 && lower.chars().all(char::is_alphabetic) {
        return true;
    }
    if lower.contains('.') && lower.split('.').all(|part| part.chars().count() <= 2) {
        return true;
    }
    ABBREVIATIONS.contains(&lower.as_str())
}

fn push_sentence(
    segment: &str,
    base: usize,
    from: usize,
    to: usize,
    flatten: bool,
    out: &mut Vec<Sentence>,
) {
    let raw = &segment[from..to];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = raw.len() - raw.trim_start().len();
    let start = base + from + lead;
    let end = start + trimmed.len();
    let text = if flatten {
        trimmed.replace('\n', " ")
    } else {
        trimmed.to_string()
    };
    out.push(Sentence::new(out.len(), text, start, end));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str, line_breaks: LineBreaks) -> Vec<String> {
        split_sentences(text, line_breaks)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(
            texts("The cat sat. It was tired. The dog barked!", LineBreaks::Boundary),
            vec!["The cat sat.", "It was tired.", "The dog barked!"]
        );
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        assert_eq!(
            texts("Mr. Smith met Dr. Jones. They talked.", LineBreaks::Boundary),
            vec!["Mr. Smith met Dr. Jones.", "They talked."]
        );
        assert_eq!(
            texts("It was built in the U.S. Then it shipped.", LineBreaks::Boundary),
            vec!["It was built in the U.S. Then it shipped."]
        );
    }

    #[test]
    fn test_lowercase_continuation_does_not_split() {
        assert_eq!(
            texts("Version 2.5 is out. see the notes.", LineBreaks::Boundary),
            vec!["Version 2.5 is out. see the notes."]
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            texts("He said \"stop.\" Then he left.", LineBreaks::Boundary),
            vec!["He said \"stop.\"", "Then he left."]
        );
    }

    #[test]
    fn test_lines_as_boundaries() {
        let text = "First line without period\nSecond line.";
        assert_eq!(
            texts(text, LineBreaks::Boundary),
            vec!["First line without period", "Second line."]
        );
        assert_eq!(
            texts(text, LineBreaks::Whitespace),
            vec!["First line without period Second line."]
        );
    }

    #[test]
    fn test_inner_spacing_is_kept() {
        assert_eq!(
            texts("The   body\nhas\tspaces.", LineBreaks::Whitespace),
            vec!["The   body has\tspaces."]
        );
        assert_eq!(
            texts("The   body   has spaces.", LineBreaks::Boundary),
            vec!["The   body   has spaces."]
        );
    }

    #[test]
    fn test_offsets_point_into_text() {
        let text = "  One.  Two.\nThree.";
        for sentence in split_sentences(text, LineBreaks::Boundary) {
            assert_eq!(&text[sentence.start..sentence.end], sentence.text);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("", LineBreaks::Boundary).is_empty());
        assert!(split_sentences(" \n ", LineBreaks::Whitespace).is_empty());
    }
}
