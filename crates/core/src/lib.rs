//! # Commit Checker Core
//!
//! Core logic for validating a batch of commit messages against a
//! configurable regular expression.
//!
//! Every message is tested against the pattern and reported as passing or
//! failing. When any message fails, the check fails with the configured
//! error text. If the pattern was also supplied as a list of debug
//! fragments, the first failing message is replayed fragment by fragment and
//! a diagnostic showing where it stopped matching is appended.
//!
//! ## Example Usage
//!
//! ```rust
//! use commit_checker_core::{CheckRequest, CommitChecker};
//! use commit_checker_core::reporter::TracingReporter;
//! use commit_checker_core::diagnostics::fragment::DiagnosticFragment;
//!
//! let request = CheckRequest {
//!     pattern: "^(fix|feat): .+".to_string(),
//!     flags: "i".to_string(),
//!     error: "Bad format".to_string(),
//!     messages: vec!["fix: ok".to_string(), "nope".to_string()],
//!     debug_fragments: Some(vec![
//!         DiagnosticFragment::plain("(fix|feat)"),
//!         DiagnosticFragment::plain(": "),
//!         DiagnosticFragment::plain(".+"),
//!     ]),
//! };
//!
//! let checker = CommitChecker::new(TracingReporter);
//! let err = checker.check(&request).unwrap_err();
//!
//! assert!(err.to_string().starts_with("Bad format\nThe regex stopped matching at index: 0"));
//! ```

pub mod checks;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod event;
pub mod reporter;

use checks::pattern::{normalize_line_endings, CommitPattern};
use config::{validate_flags, CheckerConfig};
use diagnostics::diagnose;
use diagnostics::fragment::DiagnosticFragment;
use diagnostics::replay::validate_fragments;
use errors::CheckerError;
use reporter::{StatusReporter, TracingReporter};
use tracing::{debug, info, instrument};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Everything needed to check one batch of commit messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRequest {
    /// Regular expression every message must match
    pub pattern: String,

    /// Regex flags, drawn from `gimsuy`
    pub flags: String,

    /// Text reported when any message fails
    pub error: String,

    /// Messages to check, in order
    pub messages: Vec<String>,

    /// The pattern split into fragments, used to explain a failure
    pub debug_fragments: Option<Vec<DiagnosticFragment>>,
}

impl CheckRequest {
    /// Builds a request from a loaded configuration and the messages to check.
    pub fn from_config(config: CheckerConfig, messages: Vec<String>) -> Self {
        Self {
            pattern: config.pattern,
            flags: config.flags,
            error: config.error,
            messages,
            debug_fragments: config.debug_regex,
        }
    }

    /// Checks the request is complete.
    ///
    /// Fields are checked in order: pattern, flags, error text, messages,
    /// debug fragments. The first problem found is returned.
    pub fn validate(&self) -> Result<(), CheckerError> {
        if self.pattern.is_empty() {
            return Err(CheckerError::MissingPattern);
        }

        validate_flags(&self.flags)?;

        if self.error.is_empty() {
            return Err(CheckerError::MissingErrorMessage);
        }

        if self.messages.is_empty() {
            return Err(CheckerError::MissingMessages);
        }

        if let Some(fragments) = &self.debug_fragments {
            validate_fragments(fragments)?;
        }

        Ok(())
    }
}

/// Result of checking a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageOutcome {
    /// The message as supplied
    pub message: String,

    /// Whether the message matched the pattern
    pub passed: bool,
}

/// Checks batches of commit messages, reporting progress to a
/// [`StatusReporter`].
#[derive(Debug)]
pub struct CommitChecker<R: StatusReporter> {
    reporter: R,
}

impl<R: StatusReporter> CommitChecker<R> {
    /// Creates a checker that sends status lines to `reporter`.
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Checks every message in `request` against its pattern.
    ///
    /// All messages are checked and reported, in order, even after one has
    /// failed.
    ///
    /// # Returns
    ///
    /// The outcome of every message when all of them match.
    ///
    /// # Errors
    ///
    /// - Configuration errors (`MissingPattern`, `InvalidFlags`,
    ///   `MissingErrorMessage`, `MissingMessages`, `InvalidFragment`,
    ///   `InvalidPattern`) before any message is checked.
    /// - `CheckFailed` when at least one message does not match. Its detail is
    ///   the configured error text, followed by a line feed and the
    ///   diagnostic for the first failing message when debug fragments were
    ///   supplied.
    #[instrument(skip(self, request), fields(message_count = request.messages.len()))]
    pub fn check(&self, request: &CheckRequest) -> Result<Vec<MessageOutcome>, CheckerError> {
        request.validate()?;
        let pattern = CommitPattern::new(&request.pattern, &request.flags)?;

        self.reporter.report(&format!(
            "Checking commit messages against \"{}\"...",
            request.pattern
        ));

        let outcomes: Vec<MessageOutcome> = request
            .messages
            .iter()
            .map(|message| {
                let passed = pattern.matches(&normalize_line_endings(message));
                if passed {
                    self.reporter.report(&format!("- OK: \"{}\"", message));
                } else {
                    self.reporter.report(&format!("- failed: \"{}\"", message));
                }

                MessageOutcome {
                    message: message.clone(),
                    passed,
                }
            })
            .collect();

        let Some(first_failure) = outcomes.iter().position(|o| !o.passed) else {
            info!("All commit messages match the pattern");
            return Ok(outcomes);
        };

        let failed_count = outcomes.iter().filter(|o| !o.passed).count();
        debug!(failed_count, "Commit message check failed");

        let mut detail = request.error.clone();
        if let Some(fragments) = &request.debug_fragments {
            detail.push('\n');
            detail.push_str(&diagnose(fragments, &outcomes[first_failure].message)?);
        }

        Err(CheckerError::CheckFailed(detail))
    }
}

/// Checks `request` with the default, log based, reporter.
pub fn check_commit_messages(request: &CheckRequest) -> Result<Vec<MessageOutcome>, CheckerError> {
    CommitChecker::new(TracingReporter).check(request)
}
