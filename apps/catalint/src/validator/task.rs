//! Checks specific to `Task` resources: steps, images, params and results.

use crate::models::resource::Resource;
use crate::models::LintResult;
use crate::validator::Validator;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value as Yaml;

/// `name[:tag][@algo:hex]`; the tag may not contain `/`, so registry ports
/// end up in the name.
static IMAGE_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[^@\s]+?)(?::(?P<tag>[\w][\w.-]{0,127}))?(?:@(?P<digest>[A-Za-z][A-Za-z0-9]*(?:[-_+.][A-Za-z][A-Za-z0-9]*)*:[0-9a-fA-F]{32,}))?$",
    )
    .expect("image reference pattern is valid")
});

pub struct TaskValidator<'a> {
    res: &'a Resource,
}

impl<'a> TaskValidator<'a> {
    pub fn new(res: &'a Resource) -> Self {
        Self { res }
    }

    fn validate_steps(&self, result: &mut LintResult) {
        let task = self.res.name();
        let steps = match self.res.spec_field("steps").and_then(Yaml::as_sequence) {
            Some(s) if !s.is_empty() => s,
            _ => {
                result.error(format!("Task {task} has no steps"));
                return;
            }
        };
        for (i, step) in steps.iter().enumerate() {
            let label = match str_field(step, "name") {
                Some(n) => n.to_string(),
                None => {
                    result.recommendation(format!("Step #{i} of Task {task} should have a name"));
                    format!("#{i}")
                }
            };
            match str_field(step, "image") {
                Some(image) => validate_image(task, &label, image, result),
                None => result.error(format!("Step {label} of Task {task} has no image")),
            }
        }
    }

    fn validate_described(&self, field: &str, what: &str, result: &mut LintResult) {
        let task = self.res.name();
        let Some(items) = self.res.spec_field(field).and_then(Yaml::as_sequence) else {
            return;
        };
        for item in items {
            let name = str_field(item, "name").unwrap_or("<unnamed>");
            if str_field(item, "description").is_none() {
                result.warning(format!("{what} {name} of Task {task} has no description"));
            }
        }
    }
}

impl Validator for TaskValidator<'_> {
    fn validate(&self) -> LintResult {
        let mut result = LintResult::new();
        self.validate_steps(&mut result);
        self.validate_described("params", "Param", &mut result);
        self.validate_described("results", "Result", &mut result);
        result
    }
}

fn validate_image(task: &str, step: &str, image: &str, result: &mut LintResult) {
    // Parameterised images are resolved at run time.
    if image.contains("$(") {
        return;
    }
    let Some(caps) = IMAGE_REF.captures(image) else {
        result.warning(format!(
            "Step {step} of Task {task} has an invalid image reference {image}"
        ));
        return;
    };
    if caps.name("digest").is_some() {
        return;
    }
    match caps.name("tag").map(|m| m.as_str()) {
        None => result.warning(format!(
            "Step {step} of Task {task} uses image {image} without a tag; pin a version or digest"
        )),
        Some("latest") => result.warning(format!(
            "Step {step} of Task {task} uses image {image} with the latest tag; pin a version or digest"
        )),
        Some(_) => {}
    }
}

fn str_field<'y>(v: &'y Yaml, key: &str) -> Option<&'y str> {
    v.get(key)
        .and_then(Yaml::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::parser::parse_str;

    fn run(spec: &str) -> LintResult {
        let res = parse_str(&format!("kind: Task\nmetadata:\n  name: t\nspec:\n{spec}")).unwrap();
        TaskValidator::new(&res).validate()
    }

    #[test]
    fn test_pinned_steps_pass() {
        let out = run(r#"
  params:
    - name: url
      description: Repository URL
  results:
    - name: commit
      description: Resolved commit
  steps:
    - name: clone
      image: gcr.io/tekton-releases/git-init:v0.40.2
    - name: digest
      image: alpine@sha256:0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef
    - name: param
      image: $(params.image)
"#);
        assert!(out.lints().is_empty(), "{:?}", out.lints());
    }

    #[test]
    fn test_missing_steps_is_error() {
        let out = run("  description: nothing\n");
        assert_eq!(out.errors(), 1);
        assert_eq!(out.lints()[0].message, "Task t has no steps");
    }

    #[test]
    fn test_latest_and_untagged_images_warn() {
        let out = run(r#"
  steps:
    - name: a
      image: ubuntu:latest
    - name: b
      image: localhost:5000/tools
"#);
        assert_eq!(out.errors(), 0);
        assert_eq!(out.count(Severity::Warning), 2);
        assert!(out.lints()[0].message.contains("latest tag"));
        assert!(out.lints()[1].message.contains("without a tag"));
    }

    #[test]
    fn test_step_without_image_or_name() {
        let out = run("  steps:\n    - script: echo hi\n");
        assert_eq!(out.errors(), 1);
        assert_eq!(out.count(Severity::Recommendation), 1);
        assert_eq!(out.lints()[1].message, "Step #0 of Task t has no image");
    }

    #[test]
    fn test_unparsable_image_reference_warns() {
        let out = run("  steps:\n    - name: a\n      image: alpine@sha256:abc\n");
        assert_eq!(out.errors(), 0);
        assert_eq!(out.count(Severity::Warning), 1);
        assert_eq!(
            out.lints()[0].message,
            "Step a of Task t has an invalid image reference alpine@sha256:abc"
        );
    }

    #[test]
    fn test_params_and_results_need_descriptions() {
        let out = run(r#"
  params:
    - name: url
  results:
    - name: commit
  steps:
    - name: a
      image: alpine:3.18
"#);
        assert_eq!(out.count(Severity::Warning), 2);
        assert_eq!(out.lints()[0].message, "Param url of Task t has no description");
        assert_eq!(out.lints()[1].message, "Result commit of Task t has no description");
    }
}
