//! Report rendering for validated files.
//!
//! Supports `human` (default) and `json` outputs. Human output is a
//! `FILE:` header per file followed by one severity-prefixed line per lint;
//! JSON output is one object per file.

use crate::error::{UsageError, ValidateError};
use crate::models::{LintResult, Severity};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputMode {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            other => Err(UsageError::InvalidOutput(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Human => f.write_str("human"),
            OutputMode::Json => f.write_str("json"),
        }
    }
}

/// Whether colored output should be used on an interactive stream.
pub fn use_colors(mode: OutputMode, is_terminal: bool) -> bool {
    mode == OutputMode::Human && is_terminal && std::env::var_os("NO_COLOR").is_none()
}

/// Line prefix for a severity, including the trailing space.
pub fn prefix(kind: Severity) -> &'static str {
    match kind {
        Severity::Error => "ERROR: ",
        Severity::Warning => "WARN : ",
        Severity::Recommendation => "HINT : ",
        Severity::Info => "INFO : ",
    }
}

fn colored_prefix(kind: Severity) -> String {
    let p = prefix(kind).trim_end();
    let painted = match kind {
        Severity::Error => p.red().bold().to_string(),
        Severity::Warning => p.yellow().bold().to_string(),
        Severity::Recommendation => p.cyan().to_string(),
        Severity::Info => p.blue().to_string(),
    };
    format!("{painted} ")
}

pub fn write_header<W: Write>(out: &mut W, path: &str) -> io::Result<()> {
    writeln!(out, "FILE: {path}")
}

/// Write one line per lint, in accumulation order.
pub fn write_lints<W: Write>(out: &mut W, result: &LintResult, color: bool) -> io::Result<()> {
    for lint in result.lints() {
        if color {
            writeln!(out, "{}{}", colored_prefix(lint.kind), lint.message)?;
        } else {
            writeln!(out, "{}{}", prefix(lint.kind), lint.message)?;
        }
    }
    Ok(())
}

/// Compose the JSON object reported for one file.
pub fn compose_file_json(path: &str, result: &LintResult) -> JsonVal {
    json!({
        "file": path,
        "lints": result.lints(),
        "errors": result.errors(),
    })
}

/// Write the JSON object for one file as a single line.
pub fn write_file_json<W: Write>(
    out: &mut W,
    path: &str,
    result: &LintResult,
) -> Result<(), ValidateError> {
    serde_json::to_writer(&mut *out, &compose_file_json(path, result))?;
    writeln!(out)?;
    Ok(())
}
