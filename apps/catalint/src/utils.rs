//! Colored prefixes for diagnostics written to stderr.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

fn stderr_colors() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn paint(label: &str, f: fn(&str) -> String) -> String {
    if stderr_colors() {
        f(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    paint("error:", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    paint("note:", |s| s.yellow().bold().to_string())
}
