use super::*;

#[test]
fn test_configuration_error_messages() {
    assert_eq!(
        CheckerError::MissingPattern.to_string(),
        "PATTERN not defined."
    );
    assert_eq!(
        CheckerError::InvalidFlags("xy!".to_string()).to_string(),
        "FLAGS contains invalid characters \"xy!\"."
    );
    assert_eq!(
        CheckerError::MissingErrorMessage.to_string(),
        "ERROR not defined."
    );
    assert_eq!(
        CheckerError::MissingMessages.to_string(),
        "MESSAGES not defined."
    );
}

#[test]
fn test_check_failed_displays_detail_verbatim() {
    let err = CheckerError::CheckFailed("Bad format\nThe regex should work.".to_string());
    assert_eq!(err.to_string(), "Bad format\nThe regex should work.");
    assert!(!err.is_configuration_error());
}

#[test]
fn test_invalid_pattern_is_configuration_error() {
    let source = regex::Regex::new("(").unwrap_err();
    let err = CheckerError::InvalidPattern(source);
    assert!(err.is_configuration_error());
    assert!(err.to_string().starts_with("PATTERN is not a valid regular expression"));
}

#[test]
fn test_config_load_not_found_display() {
    let err = ConfigLoadError::NotFound("missing.toml".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration file not found: missing.toml"
    );
}
