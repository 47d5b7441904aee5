//! Pipeline tests for keyword extraction

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::{KeywordConfig, KeywordExtractor, LanguageModel, NlpError};

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new(Arc::new(LanguageModel::english()), KeywordConfig::default())
    }

    #[test]
    fn test_html_paragraphs_are_analysed_separately() {
        let html = "<div><p>Solar panels</p><p>Wind turbines generate power.</p></div>";
        let keywords = extractor().extract(html).unwrap();
        let phrases: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();

        // No chunk may span the paragraph break
        assert!(phrases.iter().all(|p| !p.contains("panel wind")));
        assert!(phrases.contains(&"power"));
    }

    #[test]
    fn test_quotes_and_brackets_do_not_block_matching() {
        let keywords = extractor()
            .extract("The \"lazy dog\" slept (quietly) near the [old barn].")
            .unwrap();
        let phrases: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["lazy dog", "old barn"]);
        assert!(keywords.iter().all(|k| k.offset.is_some()));
    }

    #[test]
    fn test_whitespace_only_input_is_rejected() {
        assert!(matches!(extractor().extract("   \n\t "), Err(NlpError::EmptyText)));
    }

    #[test]
    fn test_script_content_is_ignored() {
        let keywords = extractor()
            .extract("<script>var secretToken = 1;</script><p>The lazy dog.</p>")
            .unwrap();
        let phrases: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["lazy dog"]);
    }

    #[test]
    fn test_model_is_shareable_across_threads() {
        let model = Arc::new(LanguageModel::english());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let extractor = KeywordExtractor::new(Arc::clone(&model), KeywordConfig::default());
                std::thread::spawn(move || extractor.extract("The lazy dog slept.").map(|k| k.len()))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 1);
        }
    }

    proptest! {
        #[test]
        fn prop_keywords_are_unique_short_and_ordered(
            words in prop::collection::vec(
                prop::sample::select(vec![
                    "the", "a", "quick", "lazy", "dog", "dogs", "fox", "Paris", "river",
                    "runs", "jumped", "over", "and", "it", "they", "big", "old", "stone",
                    "bridge", "etc", ".", ",", "\n", "<p>", "</p>", "\"", "(", ")",
                ]),
                0..40,
            )
        ) {
            let text = words.join(" ");
            match extractor().extract(&text) {
                Err(NlpError::EmptyText) => {}
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
                Ok(keywords) => {
                    let mut seen = std::collections::HashSet::new();
                    for keyword in &keywords {
                        prop_assert!(seen.insert(keyword.phrase.clone()));
                        prop_assert!(keyword.word_count() <= 5);
                        prop_assert!(keyword.phrase.chars().count() >= 3);
                        prop_assert!(!keyword.phrase.contains(" and "));
                        prop_assert!(!keyword.phrase.ends_with("etc"));
                    }
                    let offsets: Vec<_> = keywords.iter().map(|k| k.offset).collect();
                    let mut sorted = offsets.clone();
                    sorted.sort();
                    prop_assert_eq!(offsets, sorted);
                }
            }
        }
    }
}
