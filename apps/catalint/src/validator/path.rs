//! Path convention validator.
//!
//! The expected location of a resource is derived from its kind, name and
//! (in directory mode) version, and only the trailing components are
//! compared, so the catalog may live under any root.

use crate::models::resource::Resource;
use crate::models::LintResult;
use crate::validator::Validator;
use std::path::{self, Component, Path, PathBuf};

/// Versions are tracked by git history: `<kind>/<name>/<name>.yaml`.
pub const GIT_VERSIONING: &str = "git";
/// Each version has its own directory: `<kind>/<name>/<version>/<name>.yaml`.
pub const DIRECTORY_VERSIONING: &str = "directory";

pub struct PathValidator<'a> {
    res: &'a Resource,
    path: String,
    versioning: String,
}

impl<'a> PathValidator<'a> {
    pub fn new(res: &'a Resource, path: impl Into<String>, versioning: impl Into<String>) -> Self {
        Self {
            res,
            path: path.into(),
            versioning: versioning.into(),
        }
    }

    /// Trailing path the resource must live at, or `None` for an unknown
    /// versioning mode.
    pub fn expected_path(&self) -> Option<PathBuf> {
        let kind = self.res.kind.to_lowercase();
        let name = self.res.name();
        let file = format!("{name}.yaml");
        match self.versioning.as_str() {
            GIT_VERSIONING => Some([kind.as_str(), name, file.as_str()].iter().collect()),
            DIRECTORY_VERSIONING => Some(
                [kind.as_str(), name, self.res.version(), file.as_str()]
                    .iter()
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl Validator for PathValidator<'_> {
    fn validate(&self) -> LintResult {
        let mut result = LintResult::new();

        let abs_path = match path::absolute(Path::new(&self.path)) {
            Ok(p) => clean(&p),
            Err(e) => {
                result.error(format!("invalid path: {} - {}", self.path, e));
                return result;
            }
        };

        let Some(expected) = self.expected_path() else {
            result.error(format!(
                "invalid versioning, expecting git or directory, but got: {}",
                self.versioning
            ));
            return result;
        };

        if !abs_path.ends_with(&expected) {
            result.error(format!(
                "Resource path is invalid; expected path: {}",
                expected.display()
            ));
        }
        result
    }
}

/// Lexically drop `.` and resolve `..` against the preceding component.
/// Symlinks are not consulted; `..` at the root stays at the root.
fn clean(p: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in p.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    out
}
