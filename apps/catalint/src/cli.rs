//! CLI argument parsing via `clap`.

use crate::error::UsageError;
use crate::lint::is_yaml;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "catalint",
    version,
    about = "Validate catalog resources before they are published",
    long_about = "catalint checks catalog resource YAML files against layout and metadata conventions.\n\nConfiguration precedence: CLI > catalint.toml > defaults.",
    after_help = "Examples:\n  catalint validate task/git-clone/0.1/git-clone.yaml\n  catalint validate --versioning git task/git-clone/\n  catalint verify --output json task/foo/0.2",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current catalint version.")]
    Version,
    /// Validate resource files
    #[command(
        visible_alias = "verify",
        about = "Validate catalog resources",
        long_about = "Validate resource files, or the .yaml files directly inside the given directories. The run stops at the first file with errors.",
        after_help = "Examples:\n  catalint validate task/foo/0.1/foo.yaml\n  catalint validate --versioning git task/foo/"
    )]
    Validate {
        #[arg(required = true, num_args = 1.., help = "Resource files or directories")]
        paths: Vec<String>,
        #[arg(long, help = "Versioning type of catalog: directory|git (default: directory)")]
        versioning: Option<String>,
        #[arg(long, help = "Categories YAML file (default: built-in list)")]
        categories: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Repository root used for config discovery (default: current dir)")]
        repo_root: Option<String>,
    },
}

/// Reject the invocation unless every path exists and every directory holds
/// at least one `.yaml` entry.
pub fn check_resource_paths<S: AsRef<str>>(paths: &[S]) -> Result<(), UsageError> {
    if paths.is_empty() {
        return Err(UsageError::NoPaths);
    }
    for p in paths {
        let p = p.as_ref();
        if !has_resource(Path::new(p)) {
            return Err(UsageError::ResourceNotFound(p.to_string()));
        }
    }
    Ok(())
}

fn has_resource(path: &Path) -> bool {
    let Ok(meta) = fs::metadata(path) else {
        return false;
    };
    if !meta.is_dir() {
        return true;
    }
    match fs::read_dir(path) {
        Ok(entries) => entries
            .flatten()
            .any(|e| is_yaml(Path::new(&e.file_name()))),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_validate_with_alias() {
        let cli = Cli::try_parse_from([
            "catalint",
            "verify",
            "--versioning",
            "git",
            "a.yaml",
            "dir/",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Validate {
                paths, versioning, ..
            } => {
                assert_eq!(paths, vec!["a.yaml", "dir/"]);
                assert_eq!(versioning.as_deref(), Some("git"));
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn test_validate_requires_a_path() {
        assert!(Cli::try_parse_from(["catalint", "validate"]).is_err());
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml").to_string_lossy().to_string();
        let err = check_resource_paths(&[missing.clone()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("valid resource not found in the path - {missing}")
        );
    }

    #[test]
    fn test_directory_without_yaml_is_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "x").unwrap();
        let d = dir.path().to_string_lossy().to_string();
        assert!(matches!(
            check_resource_paths(&[d]),
            Err(UsageError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn test_existing_file_and_yaml_directory_pass() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("foo.yaml"), "kind: Task").unwrap();
        let d = dir.path().to_string_lossy().to_string();
        let f = dir.path().join("foo.yaml").to_string_lossy().to_string();
        assert!(check_resource_paths(&[d, f]).is_ok());
    }

    #[test]
    fn test_no_paths_is_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            check_resource_paths(&empty),
            Err(UsageError::NoPaths)
        ));
    }
}
