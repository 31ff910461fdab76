//! Validation runner: resolves input paths to resource files, runs the
//! validator pipeline on each and reports the findings.
//!
//! Files are processed one at a time in argument order. The first file that
//! fails to open or parse, or that collects an error lint, ends the run.

use crate::categories::CategoryCache;
use crate::error::ValidateError;
use crate::models::LintResult;
use crate::output::{self, OutputMode};
use crate::parser;
use crate::validator::{self, ContentValidator, PathValidator, Validator};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// True when `path` names a `.yaml` file.
pub fn is_yaml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "yaml")
}

/// One validation run over a batch of paths.
pub struct Validation<'c, W: Write> {
    out: W,
    versioning: String,
    mode: OutputMode,
    color: bool,
    categories: &'c CategoryCache,
}

impl<'c, W: Write> Validation<'c, W> {
    pub fn new(out: W, versioning: impl Into<String>, categories: &'c CategoryCache) -> Self {
        Self {
            out,
            versioning: versioning.into(),
            mode: OutputMode::Human,
            color: false,
            categories,
        }
    }

    pub fn with_output(mut self, mode: OutputMode, color: bool) -> Self {
        self.mode = mode;
        self.color = color;
        self
    }

    /// Validate every `.yaml` file named by `paths`, directly or as an
    /// immediate child of a directory. Other files are skipped.
    pub fn run<S: AsRef<str>>(&mut self, paths: &[S]) -> Result<(), ValidateError> {
        for arg in paths {
            let arg = arg.as_ref();
            if Path::new(arg).is_dir() {
                let entries = fs::read_dir(arg).map_err(|source| ValidateError::ReadDir {
                    path: arg.to_string(),
                    source,
                })?;
                for entry in entries {
                    let entry = entry.map_err(|source| ValidateError::ReadDir {
                        path: arg.to_string(),
                        source,
                    })?;
                    let file_name = entry.file_name();
                    if !is_yaml(Path::new(&file_name)) {
                        continue;
                    }
                    let file_name = file_name.to_string_lossy();
                    let file = if arg.ends_with('/') {
                        format!("{arg}{file_name}")
                    } else {
                        format!("{arg}/{file_name}")
                    };
                    self.validate_file(&file)?;
                }
            } else if is_yaml(Path::new(arg)) {
                self.validate_file(arg)?;
            } else {
                debug!(path = arg, "skipping non-yaml path");
            }
        }
        Ok(())
    }

    /// Validate one file and report its lints; errors end the run.
    pub fn validate_file(&mut self, path: &str) -> Result<(), ValidateError> {
        info!(path, "validating");
        if self.mode == OutputMode::Human {
            output::write_header(&mut self.out, path)?;
        }

        let reader = fs::File::open(path).map_err(|source| ValidateError::Open {
            path: path.to_string(),
            source,
        })?;
        let res = parser::parse(reader).map_err(|source| ValidateError::Parse {
            path: path.to_string(),
            source,
        })?;
        let categories = self.categories.get_or_fetch()?;

        let validators: [Box<dyn Validator + '_>; 3] = [
            Box::new(PathValidator::new(&res, path, self.versioning.as_str())),
            Box::new(ContentValidator::new(&res, categories)),
            validator::for_kind(&res),
        ];

        let mut result = LintResult::new();
        for v in &validators {
            result.append(v.validate());
        }
        debug!(
            path,
            lints = result.lints().len(),
            errors = result.errors(),
            "validators finished"
        );

        match self.mode {
            OutputMode::Human => output::write_lints(&mut self.out, &result, self.color)?,
            OutputMode::Json => output::write_file_json(&mut self.out, path, &result)?,
        }
        self.out.flush()?;

        if result.errors() != 0 {
            return Err(ValidateError::Failed(path.to_string()));
        }
        Ok(())
    }
}
