//! Keywords command implementation.

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::output::Formatter;
use precis_nlp::{KeywordExtractor, LanguageModel};
use std::sync::Arc;

/// Execute the keywords command, returning the formatted output.
pub fn execute_keywords(
    args: InputArgs,
    config: &PipelineConfig,
    formatter: &Formatter,
) -> Result<String> {
    let text = read_input(args)?;

    let model = Arc::new(LanguageModel::english());
    let extractor = KeywordExtractor::try_new(model, config.keywords.clone())?;
    let keywords = extractor.extract(&text)?;

    formatter.format_keywords(&keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::output::OutputFormat;

    fn inline(text: &str) -> InputArgs {
        InputArgs {
            file: None,
            text: Some(text.to_string()),
        }
    }

    #[test]
    fn test_keywords_text_output() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = execute_keywords(
            inline("The quick brown fox jumps over the lazy dog."),
            &PipelineConfig::default(),
            &formatter,
        )
        .unwrap();
        assert_eq!(output, "quick brown fox\nlazy dog");
    }

    #[test]
    fn test_empty_text_is_an_error() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let err = execute_keywords(inline("<p>  </p>"), &PipelineConfig::default(), &formatter)
            .unwrap_err();
        assert!(matches!(err, CliError::Nlp(_)));
        assert_eq!(err.to_string(), "Empty text provided after sanitization");
    }
}
