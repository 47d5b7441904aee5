//! Reading the text to analyse.

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};

/// Read text from `--text`, the file argument, or standard input.
pub fn read_input(args: InputArgs) -> Result<String> {
    if let Some(text) = args.text {
        return Ok(text);
    }
    if let Some(path) = args.file {
        return fs::read_to_string(&path).map_err(|e| {
            CliError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
        });
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
