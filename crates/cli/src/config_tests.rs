use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_get_config_path_explicit() {
    assert_eq!(
        get_config_path(Some("custom/checker.toml")),
        PathBuf::from("custom/checker.toml")
    );
}

#[test]
fn test_get_config_path_default() {
    let path = get_config_path(None);
    assert!(path.ends_with(DEFAULT_CONFIG_FILENAME));
}

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
pattern = '^(fix|feat): .+'
flags = "i"
error = "Bad format"
debug_regex = ["(fix|feat)", ": ", ".+"]
"#
    )
    .unwrap();

    let config = load_config(file.path().to_str()).unwrap();

    assert_eq!(config.pattern, "^(fix|feat): .+");
    assert_eq!(config.flags, "i");
    assert_eq!(config.error, "Bad format");
    assert_eq!(config.debug_regex.map(|f| f.len()), Some(3));
}

#[test]
fn test_load_config_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let result = load_config(path.to_str());
    assert!(matches!(result, Err(CliError::ConfigError(_))));
}

#[test]
fn test_load_config_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "pattern = ").unwrap();

    let result = load_config(file.path().to_str());
    assert!(matches!(result, Err(CliError::ConfigError(_))));
}
