//! catalint CLI binary entry point.
//! Resolves configuration, runs validation and maps the outcome to an exit code.

use catalint::categories::{BuiltinCategories, CategoryCache, CategorySource, FileCategories};
use catalint::cli::{self, Cli, Commands};
use catalint::config;
use catalint::lint::Validation;
use catalint::output;
use catalint::utils::{error_prefix, note_prefix};
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Diagnostics go to stderr (respects RUST_LOG); stdout carries the report.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Validate {
            paths,
            versioning,
            categories,
            output,
            repo_root,
        } => {
            if let Err(e) = cli::check_resource_paths(&paths) {
                eprintln!("{} {}", error_prefix(), e);
                std::process::exit(2);
            }
            let eff = match config::resolve_effective(
                repo_root.as_deref(),
                versioning.as_deref(),
                output.as_deref(),
                categories.as_deref(),
            ) {
                Ok(eff) => eff,
                Err(e) => {
                    eprintln!("{} {}", error_prefix(), e);
                    std::process::exit(2);
                }
            };
            tracing::debug!(
                repo_root = %eff.repo_root.display(),
                versioning = %eff.versioning,
                output = %eff.output,
                "resolved configuration"
            );

            let source: Box<dyn CategorySource> = match eff.categories {
                Some(path) => Box::new(FileCategories { path }),
                None => Box::new(BuiltinCategories),
            };
            let cache = CategoryCache::new(source);

            let stdout = io::stdout();
            let color = output::use_colors(eff.output, stdout.is_terminal());
            let mut validation = Validation::new(stdout.lock(), eff.versioning, &cache)
                .with_output(eff.output, color);
            if let Err(e) = validation.run(&paths) {
                eprintln!("{} {}", error_prefix(), e);
                if matches!(e, catalint::error::ValidateError::Failed(_)) {
                    eprintln!(
                        "{} {}",
                        note_prefix(),
                        "validation stops at the first file with errors"
                    );
                }
                std::process::exit(1);
            }
        }
    }
}
