//! Precis CLI library.
//!
//! Runs the keyword extraction and summarization pipelines on a file or
//! standard input, printing plain text or JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::PipelineConfig;
pub use error::{CliError, Result};
pub use output::Formatter;
