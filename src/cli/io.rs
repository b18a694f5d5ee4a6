//! JSON I/O handling for CLI
//!
//! - Input: one JSON array of operator arguments on stdin
//! - Output: one JSON object per command on stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde_json::Value as Json;

use crate::operators::Value;

use super::errors::{CliError, CliResult};

/// Parse operator arguments from JSON text
pub fn parse_args(input: &str) -> CliResult<Vec<Value>> {
    if input.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }

    let json: Json = serde_json::from_str(input)?;
    if !json.is_array() {
        return Err(CliError::invalid_input("Arguments must be a JSON array"));
    }

    serde_json::from_value(json)
        .map_err(|e| CliError::invalid_input(format!("Unsupported argument: {}", e)))
}

/// Read operator arguments from stdin
pub fn read_args() -> CliResult<Vec<Value>> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_args(&input)
}

fn write_line(response: &Json) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Write a success response to stdout
pub fn write_response(data: Json) -> CliResult<()> {
    write_line(&serde_json::json!({
        "status": "ok",
        "data": data
    }))
}

/// Write an inapplicable response to stdout
pub fn write_inapplicable(reason: &str) -> CliResult<()> {
    write_line(&serde_json::json!({
        "status": "inapplicable",
        "reason": reason
    }))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_line(&serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    }))
}
