//! Error types for parsing, category lookup, and validation runs.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a YAML document into a `Resource`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid resource yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("resource is missing `{0}`")]
    MissingField(&'static str),
}

/// Failure to load the list of valid catalog categories.
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("failed to read categories from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid categories file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("category list in {0} is empty")]
    Empty(PathBuf),
}

/// Terminal outcome of a validation run that did not pass.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to list directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Categories(#[from] CategoryError),
    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0} failed validation")]
    Failed(String),
}

/// Invocation rejected before any validation runs.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("requires at least 1 path to a resource yaml but received none")]
    NoPaths,
    #[error("valid resource not found in the path - {0}")]
    ResourceNotFound(String),
    #[error("invalid versioning: {0}, expecting git or directory")]
    InvalidVersioning(String),
    #[error("invalid output: {0}, expecting human or json")]
    InvalidOutput(String),
}
