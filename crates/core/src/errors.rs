use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors produced while checking a batch of commit messages.
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("PATTERN not defined.")]
    MissingPattern,

    #[error("FLAGS contains invalid characters \"{0}\".")]
    InvalidFlags(String),

    #[error("ERROR not defined.")]
    MissingErrorMessage,

    #[error("MESSAGES not defined.")]
    MissingMessages,

    #[error("PATTERN is not a valid regular expression: {0}")]
    InvalidPattern(#[source] regex::Error),

    #[error("Debug fragment '{fragment}' is not a valid regular expression: {source}")]
    InvalidFragment {
        fragment: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to parse event payload")]
    InvalidEventPayload(#[from] serde_json::Error),

    /// One or more messages did not match. The detail is the configured error
    /// text, optionally followed by a diagnostic block.
    #[error("{0}")]
    CheckFailed(String),
}

impl CheckerError {
    /// Returns `true` for errors raised before any message was checked.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, CheckerError::CheckFailed(_))
    }
}

/// Errors raised while loading a checker configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}
