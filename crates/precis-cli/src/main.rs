//! Precis CLI - keyword extraction and summarization from the command line.

use clap::Parser;
use precis_cli::commands;
use precis_cli::{Cli, Command, Formatter, PipelineConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> precis_cli::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };

    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    let output = match cli.command {
        Command::Keywords(args) => commands::execute_keywords(args, &config, &formatter)?,
        Command::Summarize(args) => commands::execute_summarize(args, &config, &formatter)?,
    };
    println!("{}", output);

    Ok(())
}
