//! Summarize command implementation.

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::output::Formatter;
use precis_summarizer::TextRankSummarizer;

/// Execute the summarize command, returning the formatted output.
pub fn execute_summarize(
    args: InputArgs,
    config: &PipelineConfig,
    formatter: &Formatter,
) -> Result<String> {
    let text = read_input(args)?;

    let summarizer = TextRankSummarizer::new(config.summarizer.clone())?;
    let summary = summarizer.summarize(&text)?;

    formatter.format_summary(&summary)
}
