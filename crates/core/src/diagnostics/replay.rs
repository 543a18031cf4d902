//! # Fragment Replay
//!
//! Replays a pattern, split into diagnostic fragments, against a message that
//! failed the real check. Each fragment is matched at the start of what is
//! left of the message and the matched prefix is stripped, until either the
//! fragments run out or one of them no longer matches.
//!
//! The fragment list is never modified; replay walks it with a cursor.

use tracing::debug;

use crate::checks::pattern::{matched_prefix_len, normalize_line_endings, prefix_regex};
use crate::diagnostics::fragment::DiagnosticFragment;
use crate::errors::CheckerError;

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;

/// Progress of a replay through a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayState<'a> {
    /// Part of the message not matched yet
    pub remaining_text: &'a str,

    /// Number of characters stripped from the front of the message so far
    pub consumed_length: usize,

    /// Index of the next fragment to replay
    pub cursor: usize,
}

impl<'a> ReplayState<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            remaining_text: text,
            consumed_length: 0,
            cursor: 0,
        }
    }

    /// Moves forward to `remaining`, which must be a suffix of the current
    /// remaining text.
    fn advance_to(&mut self, remaining: &'a str) {
        let stripped = self.remaining_text.len() - remaining.len();
        self.consume(stripped);
    }

    /// Strips `len` bytes from the front of the remaining text.
    fn consume(&mut self, len: usize) {
        let (matched, rest) = self.remaining_text.split_at(len);
        self.consumed_length += matched.chars().count();
        self.remaining_text = rest;
    }
}

/// How a replay ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayOutcome {
    /// Every fragment matched and nothing is left over
    FullMatch,

    /// Every fragment matched but text is left over
    TrailingUnmatched(String),

    /// The named fragment did not match
    FragmentFailed(String),
}

/// Result of replaying fragments against a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Number of characters matched before the replay ended
    pub consumed_length: usize,

    pub outcome: ReplayOutcome,
}

/// Result of matching an optional group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupResolution<'a> {
    /// The group's first fragment did not match; nothing was consumed
    Skipped,

    /// Every fragment in the group matched
    Consumed { remaining: &'a str },

    /// The group was entered but `fragment` did not match. `remaining` is the
    /// text left after the fragments that did match.
    Broken { remaining: &'a str, fragment: String },
}

/// Matches an optional group against the start of `text`.
///
/// If the group's first fragment does not match, the whole group is treated
/// as absent. Once it matches, every following fragment must match in turn.
///
/// # Errors
///
/// Returns `CheckerError::InvalidFragment` if a fragment is not a valid
/// regular expression.
///
/// # Examples
///
/// ```
/// use commit_checker_core::diagnostics::replay::{resolve_group, GroupResolution};
///
/// let group = vec!["JIRA-".to_string(), r"\d+".to_string(), ": ".to_string()];
///
/// assert_eq!(resolve_group(&group, "bug").unwrap(), GroupResolution::Skipped);
/// assert_eq!(
///     resolve_group(&group, "JIRA-12: bug").unwrap(),
///     GroupResolution::Consumed { remaining: "bug" }
/// );
/// assert_eq!(
///     resolve_group(&group, "JIRA-bug").unwrap(),
///     GroupResolution::Broken { remaining: "bug", fragment: r"\d+".to_string() }
/// );
/// ```
pub fn resolve_group<'a>(
    fragments: &[String],
    text: &'a str,
) -> Result<GroupResolution<'a>, CheckerError> {
    let Some(first) = fragments.first() else {
        return Ok(GroupResolution::Skipped);
    };

    if matched_prefix_len(&prefix_regex(first)?, text).is_none() {
        return Ok(GroupResolution::Skipped);
    }

    let mut remaining = text;
    for fragment in fragments {
        match matched_prefix_len(&prefix_regex(fragment)?, remaining) {
            Some(len) => remaining = &remaining[len..],
            None => {
                return Ok(GroupResolution::Broken {
                    remaining,
                    fragment: fragment.clone(),
                })
            }
        }
    }

    Ok(GroupResolution::Consumed { remaining })
}

/// Checks that every fragment, including each member of an optional group,
/// compiles as an anchored regular expression.
///
/// # Errors
///
/// Returns `CheckerError::InvalidFragment` naming the first fragment that
/// does not compile.
pub fn validate_fragments(fragments: &[DiagnosticFragment]) -> Result<(), CheckerError> {
    for fragment in fragments {
        match fragment {
            DiagnosticFragment::Plain(pattern) => {
                prefix_regex(pattern)?;
            }
            DiagnosticFragment::OptionalGroup(group) => {
                for pattern in group {
                    prefix_regex(pattern)?;
                }
            }
        }
    }

    Ok(())
}

/// Replays `fragments` against `message` and reports how far they matched.
///
/// Carriage returns are removed from the message first, so
/// `consumed_length` is a character offset into the normalised message.
///
/// # Errors
///
/// Returns `CheckerError::InvalidFragment` if a fragment is not a valid
/// regular expression.
///
/// # Examples
///
/// ```
/// use commit_checker_core::diagnostics::fragment::DiagnosticFragment;
/// use commit_checker_core::diagnostics::replay::{replay, ReplayOutcome};
///
/// let fragments = vec![DiagnosticFragment::plain("fix: "), DiagnosticFragment::plain("bug")];
/// let report = replay(&fragments, "fix: bug").unwrap();
///
/// assert_eq!(report.outcome, ReplayOutcome::FullMatch);
/// assert_eq!(report.consumed_length, 8);
/// ```
pub fn replay(
    fragments: &[DiagnosticFragment],
    message: &str,
) -> Result<DiagnosticReport, CheckerError> {
    let normalized = normalize_line_endings(message);
    let mut state = ReplayState::new(&normalized);
    let mut failed_fragment = None;

    while let Some(fragment) = fragments.get(state.cursor) {
        match fragment {
            DiagnosticFragment::Plain(pattern) => {
                match matched_prefix_len(&prefix_regex(pattern)?, state.remaining_text) {
                    Some(len) => state.consume(len),
                    None => {
                        failed_fragment = Some(pattern.clone());
                        break;
                    }
                }
            }
            DiagnosticFragment::OptionalGroup(group) => {
                match resolve_group(group, state.remaining_text)? {
                    GroupResolution::Skipped => {
                        debug!(cursor = state.cursor, "Optional group absent, skipping");
                    }
                    GroupResolution::Consumed { remaining } => state.advance_to(remaining),
                    GroupResolution::Broken {
                        remaining,
                        fragment,
                    } => {
                        state.advance_to(remaining);
                        failed_fragment = Some(fragment);
                        break;
                    }
                }
            }
        }

        state.cursor += 1;
    }

    let outcome = match failed_fragment {
        Some(pattern) => ReplayOutcome::FragmentFailed(pattern),
        None if state.remaining_text.is_empty() => ReplayOutcome::FullMatch,
        None => ReplayOutcome::TrailingUnmatched(state.remaining_text.to_string()),
    };

    debug!(
        consumed_length = state.consumed_length,
        outcome = ?outcome,
        "Fragment replay finished"
    );

    Ok(DiagnosticReport {
        consumed_length: state.consumed_length,
        outcome,
    })
}
