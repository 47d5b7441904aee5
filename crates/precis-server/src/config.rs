//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address, request limits, logging,
//! and the keyword and summarizer pipelines. Every field has a default, so
//! an empty file is a valid configuration.

use precis_nlp::KeywordConfig;
use precis_summarizer::SummarizerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (default: 5001)
    pub bind_port: u16,

    /// Longest accepted `text`, in characters; unlimited when unset
    pub max_text_length: Option<usize>,

    /// Largest accepted request body, in bytes; unlimited when unset
    pub max_body_bytes: Option<usize>,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Keyword extraction settings
    pub keywords: KeywordConfig,

    /// Summarization settings
    pub summarizer: SummarizerConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 5001,
            max_text_length: None,
            max_body_bytes: None,
            logging: LoggingConfig::default(),
            keywords: KeywordConfig::default(),
            summarizer: SummarizerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges, including the pipeline sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }
        if self.max_text_length == Some(0) {
            return Err(ConfigError::Invalid(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        if self.max_body_bytes == Some(0) {
            return Err(ConfigError::Invalid(
                "max_body_bytes must be greater than 0".to_string(),
            ));
        }
        self.keywords
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("keywords: {e}")))?;
        self.summarizer
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("summarizer: {e}")))?;
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
