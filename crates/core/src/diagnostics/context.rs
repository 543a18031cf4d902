//! Excerpt rendering around the point where a message stopped matching.

use std::fmt;

use crate::config::{CONTEXT_WINDOW, ELLIPSIS, NEWLINE_PLACEHOLDER};

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

/// Label printed in front of the excerpt. The underline is indented by its
/// width so the caret lines up with the excerpt.
const CONTEXT_LABEL: &str = "Context: \"";

/// A truncated excerpt of a message with an underline marking one offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    /// Excerpt text, with line feeds replaced and ellipses added
    pub excerpt: String,

    /// Spaces up to the marked offset, a caret, then tildes
    pub underline: String,
}

/// Builds the excerpt and underline for `text` around `matched_until`.
///
/// Offsets are counted in characters. The window extends
/// [`CONTEXT_WINDOW`] characters to each side of `matched_until`, clamped to
/// the text, and an ellipsis marks each side that was cut short.
///
/// # Examples
///
/// ```
/// use commit_checker_core::diagnostics::context::render_context;
///
/// let window = render_context("fix: bug", 5);
/// assert_eq!(window.excerpt, "fix: bug");
/// assert_eq!(window.underline, "     ^~~~");
/// ```
pub fn render_context(text: &str, matched_until: usize) -> ContextWindow {
    let chars: Vec<char> = text.chars().collect();
    let matched_until = matched_until.min(chars.len());
    let start = matched_until.saturating_sub(CONTEXT_WINDOW);
    let end = (matched_until + CONTEXT_WINDOW).min(chars.len());

    let left_dots = if start != 0 { ELLIPSIS } else { "" };
    let right_dots = if end != chars.len() { ELLIPSIS } else { "" };

    let visible: String = chars[start..end]
        .iter()
        .map(|&c| if c == '\n' { NEWLINE_PLACEHOLDER } else { c })
        .collect();

    let excerpt = format!("{}{}{}", left_dots, visible, right_dots);
    let underline = format!(
        "{}{}^{}",
        " ".repeat(left_dots.chars().count()),
        " ".repeat(matched_until - start),
        "~".repeat(end - matched_until)
    );

    ContextWindow { excerpt, underline }
}

impl fmt::Display for ContextWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}\"\n{}{}",
            CONTEXT_LABEL,
            self.excerpt,
            " ".repeat(CONTEXT_LABEL.chars().count()),
            self.underline
        )
    }
}
