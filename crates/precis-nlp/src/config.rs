//! Configuration for keyword extraction

use serde::{Deserialize, Serialize};

/// Configuration for the keyword extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Phrases shorter than this many characters are dropped
    pub min_phrase_chars: usize,

    /// Phrases with more words than this are dropped
    pub max_phrase_words: usize,
}

impl KeywordConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_phrase_chars == 0 {
            return Err("min_phrase_chars must be greater than 0".to_string());
        }
        if self.max_phrase_words == 0 {
            return Err("max_phrase_words must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_phrase_chars: 3,
            max_phrase_words: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = KeywordConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_phrase_words, 5);
    }

    #[test]
    fn test_zero_word_limit_is_invalid() {
        let config = KeywordConfig {
            max_phrase_words: 0,
            ..KeywordConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = KeywordConfig::from_toml("max_phrase_words = 3").unwrap();
        assert_eq!(config.max_phrase_words, 3);
        assert_eq!(config.min_phrase_chars, 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = KeywordConfig::default();
        let parsed = KeywordConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
