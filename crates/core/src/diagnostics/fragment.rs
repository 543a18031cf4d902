//! Diagnostic fragments, the pieces a pattern is split into for replay.

use serde::{Deserialize, Serialize};

/// One element of a diagnostic fragment list.
///
/// In configuration files a plain fragment is written as a string and an
/// optional group as an array of strings:
///
/// ```
/// use commit_checker_core::diagnostics::fragment::DiagnosticFragment;
///
/// let fragments: Vec<DiagnosticFragment> =
///     serde_json::from_str(r#"[["JIRA-", "\\d+", ": "], "bug"]"#).unwrap();
///
/// assert_eq!(fragments[0], DiagnosticFragment::group(["JIRA-", r"\d+", ": "]));
/// assert_eq!(fragments[1], DiagnosticFragment::plain("bug"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiagnosticFragment {
    /// A single pattern that must match at the current position
    Plain(String),

    /// Patterns that must all match one after the other, or be absent together
    OptionalGroup(Vec<String>),
}

impl DiagnosticFragment {
    pub fn plain(pattern: impl Into<String>) -> Self {
        DiagnosticFragment::Plain(pattern.into())
    }

    pub fn group<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DiagnosticFragment::OptionalGroup(patterns.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for DiagnosticFragment {
    fn from(pattern: &str) -> Self {
        DiagnosticFragment::plain(pattern)
    }
}
