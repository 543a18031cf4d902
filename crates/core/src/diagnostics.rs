//! # Failure Diagnostics
//!
//! When a message fails the configured pattern, the caller may supply the
//! same pattern split into fragments. Replaying those fragments one by one
//! shows how much of the message matched and which fragment stopped matching.
//!
//! The work is split into submodules:
//! - `fragment`: The plain and optional-group fragment types
//! - `replay`: Prefix matching of fragments against the message
//! - `context`: The excerpt and underline shown around the failure point

use indoc::formatdoc;
use tracing::warn;

pub mod context;
pub mod fragment;
pub mod replay;

use crate::checks::pattern::normalize_line_endings;
use crate::errors::CheckerError;
use context::render_context;
use fragment::DiagnosticFragment;
use replay::{replay, DiagnosticReport, ReplayOutcome};

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;

/// Text reported when the fragments match a message the pattern rejected
pub const FULL_MATCH_MESSAGE: &str = "The regex should work.";

impl DiagnosticReport {
    /// Renders the report for display, using `message` for the excerpt.
    pub fn render(&self, message: &str) -> String {
        let message = normalize_line_endings(message);

        match &self.outcome {
            ReplayOutcome::FullMatch => FULL_MATCH_MESSAGE.to_string(),
            ReplayOutcome::TrailingUnmatched(remainder) => {
                let context = render_context(&message, self.consumed_length);
                formatdoc!(
                    r#"
                    Trailing characters: "{remainder}"
                    --------------------------------
                    {context}"#,
                    remainder = remainder,
                    context = context
                )
            }
            ReplayOutcome::FragmentFailed(fragment) => {
                let context = render_context(&message, self.consumed_length);
                formatdoc!(
                    r#"
                    The regex stopped matching at index: {index}
                    Expected: /^{fragment}/
                    {context}"#,
                    index = self.consumed_length,
                    fragment = fragment,
                    context = context
                )
            }
        }
    }
}

/// Replays `fragments` against `message` and renders the result.
///
/// # Examples
///
/// ```
/// use commit_checker_core::diagnostics::diagnose;
/// use commit_checker_core::diagnostics::fragment::DiagnosticFragment;
///
/// let fragments = vec![DiagnosticFragment::plain("fix: ")];
/// let text = diagnose(&fragments, "fix: bug extra").unwrap();
///
/// assert!(text.starts_with("Trailing characters: \"bug extra\""));
/// ```
pub fn diagnose(fragments: &[DiagnosticFragment], message: &str) -> Result<String, CheckerError> {
    let report = replay(fragments, message)?;

    if report.outcome == ReplayOutcome::FullMatch {
        warn!(
            commit = message,
            "Debug fragments match a message the pattern rejected; the fragments do not describe the pattern"
        );
    }

    Ok(report.render(message))
}
