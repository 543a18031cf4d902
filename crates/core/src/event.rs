//! # CI Event Payloads
//!
//! Extracts the commit messages to check from a GitHub Actions event payload,
//! the JSON document found at `GITHUB_EVENT_PATH`.
//!
//! - Pull request events produce a single message made of the PR title and
//!   description, separated by a blank line.
//! - Push events produce one message per pushed commit.

use serde::Deserialize;
use tracing::debug;

use crate::errors::CheckerError;

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

/// Controls which parts of a pull request make up its message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOptions {
    /// Leave the pull request title out of the message
    pub exclude_title: bool,

    /// Leave the pull request description out of the message
    pub exclude_description: bool,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,

    #[serde(default)]
    commits: Vec<CommitPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    #[serde(default)]
    title: String,

    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommitPayload {
    message: String,
}

/// Reads the messages to check from an event payload.
///
/// Payloads that are neither pull request nor push events yield no messages.
///
/// # Errors
///
/// Returns `CheckerError::InvalidEventPayload` if `payload` is not a JSON
/// object of the expected shape.
///
/// # Examples
///
/// ```
/// use commit_checker_core::event::{messages_from_event, EventOptions};
///
/// let payload = r#"{ "pull_request": { "title": "fix: typo", "body": "Details" } }"#;
/// let messages = messages_from_event(payload, EventOptions::default()).unwrap();
///
/// assert_eq!(messages, vec!["fix: typo\n\nDetails".to_string()]);
/// ```
pub fn messages_from_event(
    payload: &str,
    options: EventOptions,
) -> Result<Vec<String>, CheckerError> {
    let event: EventPayload = serde_json::from_str(payload)?;

    if let Some(pr) = event.pull_request {
        debug!("Reading message from pull request event");
        let mut message = String::new();

        if !options.exclude_title {
            message.push_str(&pr.title);
        }

        if !options.exclude_description {
            if let Some(body) = pr.body.filter(|b| !b.is_empty()) {
                if !message.is_empty() {
                    message.push_str("\n\n");
                }
                message.push_str(&body);
            }
        }

        return Ok(if message.is_empty() {
            Vec::new()
        } else {
            vec![message]
        });
    }

    debug!(count = event.commits.len(), "Reading messages from push event");
    Ok(event.commits.into_iter().map(|c| c.message).collect())
}
