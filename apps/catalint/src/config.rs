//! Configuration discovery and effective settings resolution.
//!
//! catalint reads `catalint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `versioning`: `directory`
//! - `output`: `human`
//! - `categories`: built-in list
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::UsageError;
use crate::output::OutputMode;
use crate::validator::path::{DIRECTORY_VERSIONING, GIT_VERSIONING};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILES: [&str; 3] = ["catalint.toml", "catalint.yaml", "catalint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `catalint.toml|yaml`.
pub struct CatalintConfig {
    pub versioning: Option<String>,
    pub output: Option<String>,
    /// Categories file, relative to the repository root.
    pub categories: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub versioning: String,
    pub output: OutputMode,
    pub categories: Option<PathBuf>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `catalint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `CatalintConfig` from `catalint.toml` or `catalint.yaml|yml` if present.
///
/// An unreadable or malformed file is reported and treated as absent.
pub fn load_config(root: &Path) -> Option<CatalintConfig> {
    let toml_path = root.join("catalint.toml");
    if toml_path.exists() {
        let s = read_config(&toml_path)?;
        return match toml::from_str(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!(path = %toml_path.display(), error = %e, "ignoring invalid config");
                None
            }
        };
    }
    for yml in ["catalint.yaml", "catalint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read_config(&p)?;
            return match serde_yaml::from_str(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "ignoring invalid config");
                    None
                }
            };
        }
    }
    None
}

fn read_config(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            None
        }
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Rejects versioning and output values the tool does not understand.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_versioning: Option<&str>,
    cli_output: Option<&str>,
    cli_categories: Option<&str>,
) -> Result<Effective, UsageError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let versioning = cli_versioning
        .map(|s| s.to_string())
        .or(cfg.versioning)
        .unwrap_or_else(|| DIRECTORY_VERSIONING.to_string());
    if versioning != GIT_VERSIONING && versioning != DIRECTORY_VERSIONING {
        return Err(UsageError::InvalidVersioning(versioning));
    }

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| OutputMode::Human.to_string())
        .parse::<OutputMode>()?;

    // CLI paths are taken as given; config paths are relative to the root.
    let categories = match cli_categories {
        Some(p) => Some(PathBuf::from(p)),
        None => cfg.categories.map(|p| repo_root.join(p)),
    };

    Ok(Effective {
        repo_root,
        versioning,
        output,
        categories,
    })
}
