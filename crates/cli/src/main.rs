//! # Commit Checker CLI
//!
//! Command-line interface for validating commit messages against a
//! configured regular expression.
//!
//! The binary is meant to run as a CI step, reading messages from the GitHub
//! Actions event payload, or as a git `commit-msg` hook, reading the message
//! file git passes to the hook.
//!
//! # Commands
//!
//! - `check` - Validate commit messages against the configured pattern
//!
//! # Examples
//!
//! ```bash
//! # Check messages given on the command line
//! commit-checker check --pattern '^(fix|feat): .+' --flags i --error 'Bad format' \
//!     --message 'fix: ok'
//!
//! # Use as a commit-msg hook with settings from .commit-checker.toml
//! commit-checker check --message-file "$1"
//! ```

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

use std::process::{ExitCode, Termination};

use clap::{Parser, Subcommand};
use tracing::{error, info};

/// Command implementations for the CLI.
mod commands;

/// Configuration management for the CLI.
mod config;

/// Error types specific to the CLI.
mod errors;

use commands::check::CheckArgs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives
const LOG_ENV_VAR: &str = "COMMIT_CHECKER_LOG";

/// Command-line interface structure for Commit Checker.
///
/// This struct defines the top-level CLI interface using clap's derive API.
/// It includes global options like verbose logging and the main command structure.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands for the Commit Checker CLI.
#[derive(Subcommand)]
enum Commands {
    /// Validate commit messages against the configured pattern
    Check(CheckArgs),
}

/// Main entry point for the Commit Checker CLI.
///
/// This function initializes logging, parses command-line arguments,
/// and dispatches to the appropriate command handler.
///
/// # Returns
///
/// Exit code 0 when every message is valid, otherwise the code mapped from
/// the `CliError` that stopped the run.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error checking commit messages");
            eprintln!("{}", e);
            e.report()
        }
    }
}
