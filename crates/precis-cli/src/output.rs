//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use precis_domain::{Keyword, Summary};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One item per line
    Text,
    /// JSON bodies as returned by the HTTP service
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extracted keywords.
    pub fn format_keywords(&self, keywords: &[Keyword]) -> Result<String> {
        let phrases: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "keywords": phrases }),
            )?),
            OutputFormat::Text if phrases.is_empty() => {
                Ok(self.colorize("No keywords found.", "yellow"))
            }
            OutputFormat::Text => Ok(phrases.join("\n")),
        }
    }

    /// Format a summary.
    pub fn format_summary(&self, summary: &Summary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "summary": summary.text() }),
            )?),
            OutputFormat::Text if summary.used_fallback => Ok(format!(
                "{}\n{}",
                summary.text(),
                self.colorize("(anaphora filter skipped: too few sentences)", "cyan")
            )),
            OutputFormat::Text => Ok(summary.text()),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<Keyword> {
        vec![Keyword::new("quick brown fox", Some(4)), Keyword::new("lazy dog", Some(35))]
    }

    #[test]
    fn test_text_keywords() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_keywords(&keywords()).unwrap();
        assert_eq!(output, "quick brown fox\nlazy dog");
    }

    #[test]
    fn test_json_keywords() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_keywords(&keywords()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["keywords"][1], "lazy dog");
    }

    #[test]
    fn test_empty_keywords() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_keywords(&[]).unwrap();
        assert_eq!(output, "No keywords found.");
    }

    #[test]
    fn test_summary_formats() {
        let summary = Summary::new(vec!["One.".to_string(), "Two.".to_string()], false);

        let text = Formatter::new(OutputFormat::Text, false)
            .format_summary(&summary)
            .unwrap();
        assert_eq!(text, "One. Two.");

        let json = Formatter::new(OutputFormat::Json, false)
            .format_summary(&summary)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"], "One. Two.");
    }

    #[test]
    fn test_fallback_note_only_in_text() {
        let summary = Summary::new(vec!["It ran.".to_string()], true);

        let text = Formatter::new(OutputFormat::Text, false)
            .format_summary(&summary)
            .unwrap();
        assert!(text.starts_with("It ran.\n"));
        assert!(text.contains("anaphora filter skipped"));

        let json = Formatter::new(OutputFormat::Json, false)
            .format_summary(&summary)
            .unwrap();
        assert!(!json.contains("anaphora"));
    }
}
