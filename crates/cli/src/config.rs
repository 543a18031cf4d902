use std::path::PathBuf;

use commit_checker_core::config::{load_checker_config, CheckerConfig};
use commit_checker_core::errors::ConfigLoadError;
use tracing::{debug, info};

use crate::errors::CliError;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = ".commit-checker.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Loads the checker configuration.
///
/// An explicitly named file must exist. The default file in the current
/// directory is optional; when it is missing an empty configuration is used
/// and every setting has to come from the command line.
pub fn load_config(config_path: Option<&str>) -> Result<CheckerConfig, CliError> {
    let path = get_config_path(config_path);
    debug!("Loading configuration from {:?}", path);

    match load_checker_config(&path) {
        Ok(config) => {
            info!("Loaded configuration from {:?}", path);
            Ok(config)
        }
        Err(ConfigLoadError::NotFound(_)) if config_path.is_none() => {
            debug!("No configuration file found, using command line settings only");
            Ok(CheckerConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Get the path to the configuration file
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        // Look for config in current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
