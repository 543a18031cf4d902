//! Configuration settings for the commit checker core functionality.
//!
//! This module centralizes the constants used throughout the crate together
//! with the TOML configuration model and flag validation.
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::diagnostics::fragment::DiagnosticFragment;
use crate::errors::{CheckerError, ConfigLoadError};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Regex flag characters accepted in the `flags` setting
pub const RECOGNIZED_FLAGS: [char; 6] = ['g', 'i', 'm', 's', 'u', 'y'];

/// Number of characters shown on each side of the failure point in diagnostics
pub const CONTEXT_WINDOW: usize = 10;

/// Marker shown when a diagnostic excerpt has been truncated
pub const ELLIPSIS: &str = "…";

/// Visible stand-in for line feeds inside a diagnostic excerpt
pub const NEWLINE_PLACEHOLDER: char = '␤';

lazy_static! {
    /// Matches every character that is not a recognised flag
    static ref INVALID_FLAG_REGEX: Regex =
        Regex::new(r"[^gimsuy]").expect("Failed to compile invalid flag regex");
}

/// Checks that `flags` only contains recognised regex flag characters.
///
/// All offending characters are collected, in order and including
/// duplicates, and reported together.
///
/// # Examples
///
/// ```
/// use commit_checker_core::config::validate_flags;
///
/// assert!(validate_flags("gi").is_ok());
/// let err = validate_flags("xy!").unwrap_err();
/// assert_eq!(err.to_string(), "FLAGS contains invalid characters \"x!\".");
/// ```
pub fn validate_flags(flags: &str) -> Result<(), CheckerError> {
    let invalid: String = INVALID_FLAG_REGEX
        .find_iter(flags)
        .map(|m| m.as_str())
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(CheckerError::InvalidFlags(invalid))
    }
}

/// Checker settings as stored in a TOML configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Regular expression every commit message must match
    #[serde(default)]
    pub pattern: String,

    /// Regex flags, drawn from `gimsuy`
    #[serde(default)]
    pub flags: String,

    /// Text reported when a message fails the check
    #[serde(default)]
    pub error: String,

    /// Leave the pull request title out of the checked message
    #[serde(default)]
    pub exclude_title: bool,

    /// Leave the pull request description out of the checked message
    #[serde(default)]
    pub exclude_description: bool,

    /// Pattern broken into fragments, replayed to explain failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_regex: Option<Vec<DiagnosticFragment>>,
}

/// Loads the checker configuration from the given path.
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Returns
/// * `Ok(CheckerConfig)` if loaded and parsed
/// * `Err(ConfigLoadError)` if the file is missing, unreadable or malformed
pub fn load_checker_config<P: AsRef<Path>>(path: P) -> Result<CheckerConfig, ConfigLoadError> {
    let path_ref = path.as_ref();
    let content = match fs::read_to_string(path_ref) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigLoadError::NotFound(path_ref.display().to_string()));
        }
        Err(e) => return Err(ConfigLoadError::Io(e)),
    };
    let config: CheckerConfig = toml::from_str(&content)?;
    Ok(config)
}
