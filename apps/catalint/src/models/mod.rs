//! Shared data models: lint severities, findings, and the per-validator
//! result container, plus the parsed resource in `resource`.

pub mod resource;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Classification of a single finding. Only `Error` affects pass/fail.
pub enum Severity {
    Error,
    Warning,
    Recommendation,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single lint finding with severity and message.
pub struct Lint {
    #[serde(rename = "severity")]
    pub kind: Severity,
    pub message: String,
}

#[derive(Debug, Default, Clone, Serialize)]
/// Ordered lints plus a running error count.
///
/// Lints can only be added through the severity helpers or `append`, which
/// keeps `errors` equal to the number of `Error` lints.
pub struct LintResult {
    lints: Vec<Lint>,
    errors: usize,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
        self.errors += 1;
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message.into());
    }

    pub fn recommendation(&mut self, message: impl Into<String>) {
        self.push(Severity::Recommendation, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message.into());
    }

    /// Merge `other` after the current lints, summing error counts.
    pub fn append(&mut self, other: LintResult) {
        self.lints.extend(other.lints);
        self.errors += other.errors;
    }

    pub fn lints(&self) -> &[Lint] {
        &self.lints
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Number of lints carrying `kind`.
    pub fn count(&self, kind: Severity) -> usize {
        self.lints.iter().filter(|l| l.kind == kind).count()
    }

    /// True when no error-severity lint was recorded.
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }

    fn push(&mut self, kind: Severity, message: String) {
        self.lints.push(Lint { kind, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_severity_adds_one_lint() {
        let mut r = LintResult::new();
        r.error("e");
        r.warning("w");
        r.recommendation("r");
        r.info("i");
        assert_eq!(r.lints().len(), 4);
        assert_eq!(r.errors(), 1);
        let kinds: Vec<Severity> = r.lints().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Severity::Error,
                Severity::Warning,
                Severity::Recommendation,
                Severity::Info
            ]
        );
    }

    #[test]
    fn test_only_error_increments_counter() {
        let mut r = LintResult::new();
        r.warning("a");
        r.recommendation("b");
        r.info("c");
        assert_eq!(r.errors(), 0);
        assert!(r.is_ok());
        r.error("d");
        assert_eq!(r.errors(), 1);
        assert!(!r.is_ok());
    }

    #[test]
    fn test_append_concatenates_in_order_and_sums_errors() {
        let mut a = LintResult::new();
        a.error("a1");
        a.info("a2");
        let mut b = LintResult::new();
        b.warning("b1");
        b.error("b2");
        b.error("b3");

        a.append(b);
        let msgs: Vec<&str> = a.lints().iter().map(|l| l.message.as_str()).collect();
        assert_eq!(msgs, vec!["a1", "a2", "b1", "b2", "b3"]);
        assert_eq!(a.errors(), 3);
        assert_eq!(a.errors(), a.count(Severity::Error));
    }

    #[test]
    fn test_append_empty_is_noop() {
        let mut a = LintResult::new();
        a.recommendation("x");
        a.append(LintResult::new());
        assert_eq!(a.lints().len(), 1);
        assert_eq!(a.errors(), 0);
    }
}
