//! Validator contract and kind dispatch.
//!
//! Every check implements `Validator`; the orchestrator runs a fixed list
//! of them without knowing their concrete type. `for_kind` selects the
//! kind-specific validator and falls back to an informational no-op.

pub mod content;
pub mod path;
pub mod task;

pub use content::ContentValidator;
pub use path::PathValidator;
pub use task::TaskValidator;

use crate::models::resource::Resource;
use crate::models::LintResult;

/// A check that produces lints from the state it was built with.
pub trait Validator {
    fn validate(&self) -> LintResult;
}

/// Select the validator specialized for the resource's kind.
pub fn for_kind(res: &Resource) -> Box<dyn Validator + '_> {
    match res.kind.as_str() {
        "Task" => Box::new(TaskValidator::new(res)),
        other => Box::new(NoopValidator {
            kind: other.to_string(),
        }),
    }
}

/// Acknowledges kinds that have no dedicated validator.
pub struct NoopValidator {
    kind: String,
}

impl Validator for NoopValidator {
    fn validate(&self) -> LintResult {
        let mut r = LintResult::new();
        r.info(format!("no validator specific to kind {}", self.kind));
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::parser::parse_str;

    #[test]
    fn test_unknown_kind_yields_single_info() {
        for kind in ["Pipeline", "StepAction", "task"] {
            let res = parse_str(&format!("kind: {kind}\nmetadata:\n  name: foo\n")).unwrap();
            let out = for_kind(&res).validate();
            assert_eq!(out.lints().len(), 1);
            assert_eq!(out.count(Severity::Info), 1);
            assert_eq!(out.errors(), 0);
            assert_eq!(
                out.lints()[0].message,
                format!("no validator specific to kind {kind}")
            );
        }
    }

    #[test]
    fn test_task_kind_dispatches_to_task_validator() {
        let res = parse_str("kind: Task\nmetadata:\n  name: foo\nspec: {}\n").unwrap();
        let out = for_kind(&res).validate();
        // Task without steps is an error, which the no-op never reports.
        assert!(out.errors() > 0);
        assert_eq!(out.count(Severity::Info), 0);
    }
}
