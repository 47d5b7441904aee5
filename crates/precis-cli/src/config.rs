//! Pipeline configuration for the CLI.
//!
//! Reads the `[keywords]` and `[summarizer]` tables of a TOML file. Other
//! keys are ignored, so the server's configuration file can be reused.

use crate::error::{CliError, Result};
use precis_nlp::KeywordConfig;
use precis_summarizer::SummarizerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for both pipelines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Keyword extraction settings
    pub keywords: KeywordConfig,

    /// Summarization settings
    pub summarizer: SummarizerConfig,
}

impl PipelineConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: PipelineConfig = toml::from_str(contents)?;
        config
            .keywords
            .validate()
            .map_err(|e| CliError::Config(format!("keywords: {}", e)))?;
        config
            .summarizer
            .validate()
            .map_err(|e| CliError::Config(format!("summarizer: {}", e)))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precis_summarizer::SentenceOrder;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.keywords.max_phrase_words, 5);
        assert_eq!(config.summarizer.summary_sentences, 3);
    }

    #[test]
    fn test_server_config_file_is_accepted() {
        let toml = r#"
            bind_port = 8080

            [logging]
            level = "debug"

            [summarizer]
            sentence_order = "document"
        "#;
        let config = PipelineConfig::from_toml(toml).unwrap();
        assert_eq!(config.summarizer.sentence_order, SentenceOrder::Document);
        assert_eq!(config.keywords, KeywordConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = PipelineConfig::from_toml("[keywords]\nmax_phrase_words = 0");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[summarizer]\nsummary_sentences = 2").unwrap();

        let config = PipelineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.summarizer.summary_sentences, 2);
    }

    #[test]
    fn test_missing_file() {
        let result = PipelineConfig::from_file("/nonexistent/precis.toml");
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
