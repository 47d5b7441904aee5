//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Precis CLI - Extract keywords from and summarize text or HTML.
#[derive(Debug, Parser)]
#[command(name = "precis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Pipeline configuration file (TOML with [keywords] / [summarizer])
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Plain text (default)
    Text,
    /// JSON matching the HTTP response bodies
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract noun-phrase keywords
    Keywords(InputArgs),

    /// Produce an extractive summary
    Summarize(InputArgs),
}

/// Where to read the text from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// File to read; standard input when omitted
    pub file: Option<PathBuf>,

    /// Text given inline instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::output::OutputFormat::Text,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}
