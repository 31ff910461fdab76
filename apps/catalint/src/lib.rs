//! catalint core library.
//!
//! This crate validates catalog resource definitions (YAML documents such as
//! `Task` resources) against layout and metadata conventions before they
//! are published.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing and argument pre-checks (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `lint`: The validation run over files and directories.
//! - `validator`: The `Validator` contract, kind dispatch and checks.
//! - `models`: Lint severities, lint results, and the parsed resource.
//! - `parser`: YAML to `Resource` parsing.
//! - `categories`: Category sources and the per-run cache.
//! - `output`: Human/JSON report rendering.
//! - `error`: Error types.
//! - `utils`: Supporting helpers.
pub mod categories;
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod parser;
pub mod utils;
pub mod validator;
