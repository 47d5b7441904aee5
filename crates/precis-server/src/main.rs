//! Precis server binary
//!
//! Starts the HTTP server for keyword extraction and summarization.

use precis_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("No config file specified, using defaults");
        ServerConfig::default()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Precis Server - Keyword Extraction and Summarization");
    println!();
    println!("USAGE:");
    println!("    precis-server [--config <path-to-config.toml>]");
    println!();
    println!("EXAMPLE:");
    println!("    precis-server --config config/precis.toml");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /extract-keywords   {{\"text\": \"...\"}} -> {{\"keywords\": [...]}}");
    println!("    POST /summarize          {{\"text\": \"...\"}} -> {{\"summary\": \"...\"}}");
    println!("    GET  /health");
    println!();
    println!("CONFIGURATION:");
    println!("    - bind_address: IP address to bind (default '127.0.0.1')");
    println!("    - bind_port: Port number (default 5001)");
    println!("    - max_text_length: Longest accepted text in characters (default: unlimited)");
    println!("    - max_body_bytes: Largest accepted request body in bytes (default: unlimited)");
    println!("    - [logging] level, json");
    println!("    - [keywords] min_phrase_chars, max_phrase_words");
    println!("    - [summarizer] candidate_sentences, summary_sentences, damping, ...");
    println!();
    println!("Set RUST_LOG to override the configured log filter.");
}
