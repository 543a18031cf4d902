use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use commit_checker_core::config::CheckerConfig;
use commit_checker_core::diagnostics::fragment::DiagnosticFragment;
use commit_checker_core::event::{messages_from_event, EventOptions};
use commit_checker_core::reporter::TracingReporter;
use commit_checker_core::{CheckRequest, CommitChecker};
use tracing::{debug, info, instrument};

use crate::config::load_config;
use crate::errors::CliError;

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Regular expression every commit message must match
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Regex flags, any of g, i, m, s, u, y
    #[arg(short, long)]
    pub flags: Option<String>,

    /// Error text reported when a message does not match
    #[arg(short, long)]
    pub error: Option<String>,

    /// The pattern split into fragments, as a JSON array of strings and
    /// arrays of strings (optional groups)
    #[arg(long)]
    pub debug_regex: Option<String>,

    /// Commit message to check (repeatable)
    #[arg(short, long = "message")]
    pub messages: Vec<String>,

    /// File holding one commit message to check (repeatable)
    #[arg(long = "message-file")]
    pub message_files: Vec<PathBuf>,

    /// GitHub Actions event payload to read messages from
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Leave the pull request title out of the checked message
    #[arg(long)]
    pub exclude_title: bool,

    /// Leave the pull request description out of the checked message
    #[arg(long)]
    pub exclude_description: bool,

    /// Alternate config file
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Executes the `check` command.
///
/// Settings come from the configuration file, overridden by any given on
/// the command line. Messages are gathered from `--message`, then
/// `--message-file`, then the event payload, and checked in that order.
///
/// # Errors
///
/// - `CliError::ConfigError` when the settings are incomplete or invalid
/// - `CliError::InvalidArguments` when `--debug-regex` or the event payload
///   is not valid JSON
/// - `CliError::ValidationFailed` when a message does not match
/// - `CliError::Other` when a message source cannot be read
#[instrument(skip(args))]
pub fn execute(args: CheckArgs) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    let config = apply_args(config, &args)?;
    let messages = collect_messages(&args, &config)?;

    debug!(count = messages.len(), "Collected commit messages");

    let request = CheckRequest::from_config(config, messages);
    let outcomes = CommitChecker::new(TracingReporter).check(&request)?;

    info!("All {} commit message(s) are valid", outcomes.len());
    Ok(())
}

/// Overrides configuration values with those given on the command line.
fn apply_args(mut config: CheckerConfig, args: &CheckArgs) -> Result<CheckerConfig, CliError> {
    if let Some(pattern) = &args.pattern {
        config.pattern = pattern.clone();
    }

    if let Some(flags) = &args.flags {
        config.flags = flags.clone();
    }

    if let Some(error) = &args.error {
        config.error = error.clone();
    }

    if let Some(debug_regex) = &args.debug_regex {
        let fragments: Vec<DiagnosticFragment> =
            serde_json::from_str(debug_regex).map_err(|e| {
                CliError::InvalidArguments(format!(
                    "Failed to parse --debug-regex as a JSON fragment list: {}",
                    e
                ))
            })?;
        config.debug_regex = Some(fragments);
    }

    config.exclude_title |= args.exclude_title;
    config.exclude_description |= args.exclude_description;

    Ok(config)
}

/// Gathers the messages to check from every source given.
///
/// Unreadable files become `CliError::Other`, a malformed event payload
/// becomes `CliError::InvalidArguments`.
fn collect_messages(args: &CheckArgs, config: &CheckerConfig) -> Result<Vec<String>, CliError> {
    let mut messages = args.messages.clone();

    for path in &args.message_files {
        let message = fs::read_to_string(path)
            .with_context(|| format!("Failed to read commit message file {:?}", path))?;
        messages.push(message);
    }

    if let Some(path) = &args.event_path {
        let payload = fs::read_to_string(path)
            .with_context(|| format!("Failed to read event payload {:?}", path))?;
        let options = EventOptions {
            exclude_title: config.exclude_title,
            exclude_description: config.exclude_description,
        };
        messages.extend(messages_from_event(&payload, options)?);
    }

    Ok(messages)
}
