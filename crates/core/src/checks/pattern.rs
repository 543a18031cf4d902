//! # Pattern Matching
//!
//! This module compiles the configured commit message pattern together with
//! its flags and tests messages against it.
//!
//! Flags follow the conventional regex modifier letters:
//! - `i`: case-insensitive matching
//! - `m`: `^` and `$` match at line boundaries
//! - `s`: `.` also matches line feeds
//! - `u`: Unicode-aware matching (always on)
//! - `g`: accepted, has no effect on a single test
//! - `y`: sticky, the match must start at the beginning of the message
//!
//! Patterns are always compiled Unicode-aware, with or without `u`. Classes
//! such as `\d`, `\w` and `\b` therefore cover Unicode digits, letters and
//! word boundaries; use `[0-9]` or `(?-u:\d)` where ASCII-only matching is
//! wanted.

use regex::{Regex, RegexBuilder};

use crate::errors::CheckerError;

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;

/// A compiled commit message pattern.
#[derive(Debug, Clone)]
pub struct CommitPattern {
    regex: Regex,
}

impl CommitPattern {
    /// Compiles `pattern` with the given `flags`.
    ///
    /// The flags are expected to have been validated already; unknown
    /// characters are ignored here.
    ///
    /// # Errors
    ///
    /// Returns `CheckerError::InvalidPattern` when the pattern is not a valid
    /// regular expression.
    pub fn new(pattern: &str, flags: &str) -> Result<Self, CheckerError> {
        let source = if flags.contains('y') {
            format!(r"\A(?:{})", pattern)
        } else {
            pattern.to_string()
        };

        let regex = RegexBuilder::new(&source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .unicode(true)
            .build()
            .map_err(CheckerError::InvalidPattern)?;

        Ok(Self { regex })
    }

    /// Returns `true` if the pattern matches anywhere in `message`.
    pub fn matches(&self, message: &str) -> bool {
        self.regex.is_match(message)
    }
}

/// Tests a single message against a pattern and its flags.
///
/// # Examples
///
/// ```
/// use commit_checker_core::checks::pattern::message_matches;
///
/// assert!(message_matches("FIX: typo", "^(fix|feat): .+", "i").unwrap());
/// assert!(!message_matches("typo", "^(fix|feat): .+", "i").unwrap());
/// ```
pub fn message_matches(message: &str, pattern: &str, flags: &str) -> Result<bool, CheckerError> {
    Ok(CommitPattern::new(pattern, flags)?.matches(message))
}

/// Removes every carriage return so line endings are line-feed only.
pub fn normalize_line_endings(message: &str) -> String {
    message.replace('\r', "")
}

/// Compiles a diagnostic fragment so it can only match at the start of the text.
pub(crate) fn prefix_regex(fragment: &str) -> Result<Regex, CheckerError> {
    Regex::new(&format!("^(?:{})", fragment)).map_err(|source| CheckerError::InvalidFragment {
        fragment: fragment.to_string(),
        source,
    })
}

/// Byte length of the prefix of `text` matched by an anchored fragment regex.
pub(crate) fn matched_prefix_len(regex: &Regex, text: &str) -> Option<usize> {
    regex.find(text).map(|m| m.end())
}
