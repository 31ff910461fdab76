//! Metadata checks shared by every resource kind.

use crate::categories::Categories;
use crate::models::resource::{Resource, VERSION_LABEL};
use crate::models::LintResult;
use crate::validator::Validator;

pub const MIN_VERSION_ANNOTATION: &str = "tekton.dev/pipelines.minVersion";
pub const CATEGORIES_ANNOTATION: &str = "tekton.dev/categories";
pub const TAGS_ANNOTATION: &str = "tekton.dev/tags";
pub const DISPLAY_NAME_ANNOTATION: &str = "tekton.dev/displayName";

/// Checks labels, annotations and description against catalog conventions.
pub struct ContentValidator<'a> {
    res: &'a Resource,
    categories: &'a Categories,
}

impl<'a> ContentValidator<'a> {
    pub fn new(res: &'a Resource, categories: &'a Categories) -> Self {
        Self { res, categories }
    }

    fn validate_categories(&self, result: &mut LintResult) {
        let kind = &self.res.kind;
        let name = self.res.name();
        let declared = match self.res.annotation(CATEGORIES_ANNOTATION) {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                result.error(format!(
                    "{kind} {name} is missing the {CATEGORIES_ANNOTATION} annotation"
                ));
                return;
            }
        };
        for category in declared.split(',').map(str::trim) {
            if category.is_empty() {
                continue;
            }
            if !self.categories.contains(category) {
                result.error(format!(
                    "Category {category} is not valid; it must be one of: {}",
                    self.categories
                        .iter()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
        }
    }
}

impl Validator for ContentValidator<'_> {
    fn validate(&self) -> LintResult {
        let mut result = LintResult::new();
        let res = self.res;
        let kind = &res.kind;
        let name = res.name();

        if res.version().trim().is_empty() {
            result.error(format!(
                "{kind} {name} must have a {VERSION_LABEL} label"
            ));
        }
        if missing(res.annotation(MIN_VERSION_ANNOTATION)) {
            result.error(format!(
                "{kind} {name} is missing the {MIN_VERSION_ANNOTATION} annotation"
            ));
        }
        self.validate_categories(&mut result);
        if missing(res.annotation(TAGS_ANNOTATION)) {
            result.recommendation(format!(
                "{kind} {name} should declare {TAGS_ANNOTATION} to improve discoverability"
            ));
        }
        if missing(res.annotation(DISPLAY_NAME_ANNOTATION)) {
            result.recommendation(format!(
                "{kind} {name} should declare a human readable {DISPLAY_NAME_ANNOTATION}"
            ));
        }
        let description = res
            .spec_field("description")
            .and_then(|d| d.as_str())
            .unwrap_or_default();
        if description.trim().is_empty() {
            result.warning(format!("{kind} {name} has no spec.description"));
        }
        result
    }
}

fn missing(v: Option<&str>) -> bool {
    v.map_or(true, |s| s.trim().is_empty())
}
