use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn args_with_config(file: &NamedTempFile) -> CheckArgs {
    CheckArgs {
        config: file.path().to_str().map(str::to_string),
        ..Default::default()
    }
}

const CONFIG: &str = r#"
pattern = '^(fix|feat): .+'
flags = "i"
error = "Bad format"
"#;

#[test]
fn test_apply_args_overrides_config() {
    let config = CheckerConfig {
        pattern: "^fix".to_string(),
        flags: "i".to_string(),
        error: "config error".to_string(),
        exclude_title: true,
        ..Default::default()
    };
    let args = CheckArgs {
        pattern: Some("^feat".to_string()),
        error: Some("cli error".to_string()),
        debug_regex: Some(r#"[["JIRA-", "\\d+"], "feat"]"#.to_string()),
        exclude_description: true,
        ..Default::default()
    };

    let merged = apply_args(config, &args).unwrap();

    assert_eq!(merged.pattern, "^feat");
    assert_eq!(merged.flags, "i");
    assert_eq!(merged.error, "cli error");
    assert!(merged.exclude_title);
    assert!(merged.exclude_description);
    assert_eq!(
        merged.debug_regex,
        Some(vec![
            DiagnosticFragment::group(["JIRA-", r"\d+"]),
            DiagnosticFragment::plain("feat"),
        ])
    );
}

#[test]
fn test_apply_args_rejects_malformed_debug_regex() {
    let args = CheckArgs {
        debug_regex: Some("[1, 2".to_string()),
        ..Default::default()
    };

    let result = apply_args(CheckerConfig::default(), &args);
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[test]
fn test_collect_messages_from_all_sources_in_order() {
    let mut message_file = NamedTempFile::new().unwrap();
    write!(message_file, "fix: from file\n\nbody").unwrap();

    let mut event_file = NamedTempFile::new().unwrap();
    write!(
        event_file,
        r#"{{ "commits": [ {{ "message": "feat: from event" }} ] }}"#
    )
    .unwrap();

    let args = CheckArgs {
        messages: vec!["fix: from flag".to_string()],
        message_files: vec![message_file.path().to_path_buf()],
        event_path: Some(event_file.path().to_path_buf()),
        ..Default::default()
    };

    let messages = collect_messages(&args, &CheckerConfig::default()).unwrap();

    assert_eq!(
        messages,
        vec![
            "fix: from flag".to_string(),
            "fix: from file\n\nbody".to_string(),
            "feat: from event".to_string(),
        ]
    );
}

#[test]
fn test_collect_messages_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let args = CheckArgs {
        message_files: vec![dir.path().join("COMMIT_EDITMSG")],
        ..Default::default()
    };

    match collect_messages(&args, &CheckerConfig::default()) {
        Err(CliError::Other(message)) => {
            assert!(message.contains("Failed to read commit message file"))
        }
        other => panic!("Expected Other, got {:?}", other),
    }
}

#[test]
fn test_collect_messages_malformed_event_payload() {
    let mut event_file = NamedTempFile::new().unwrap();
    write!(event_file, "not json").unwrap();

    let args = CheckArgs {
        event_path: Some(event_file.path().to_path_buf()),
        ..Default::default()
    };

    match collect_messages(&args, &CheckerConfig::default()) {
        Err(CliError::InvalidArguments(message)) => {
            assert!(message.starts_with("Failed to parse event payload: "))
        }
        other => panic!("Expected InvalidArguments, got {:?}", other),
    }
}

#[test]
fn test_execute_passes_valid_messages() {
    let config = write_config(CONFIG);
    let args = CheckArgs {
        messages: vec!["fix: ok".to_string(), "Feat: also ok".to_string()],
        ..args_with_config(&config)
    };

    assert!(execute(args).is_ok());
}

#[test]
fn test_execute_fails_invalid_message() {
    let config = write_config(CONFIG);
    let args = CheckArgs {
        messages: vec!["fix: ok".to_string(), "nope".to_string()],
        debug_regex: Some(r#"["(fix|feat)", ": ", ".+"]"#.to_string()),
        ..args_with_config(&config)
    };

    match execute(args) {
        Err(CliError::ValidationFailed(detail)) => {
            assert!(detail.starts_with("Bad format\n"));
            assert!(detail.contains("Expected: /^(fix|feat)/"));
        }
        other => panic!("Expected ValidationFailed, got {:?}", other),
    }
}

#[test]
fn test_execute_without_messages_is_a_configuration_error() {
    let config = write_config(CONFIG);

    match execute(args_with_config(&config)) {
        Err(CliError::ConfigError(message)) => assert!(message.contains("MESSAGES not defined.")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_execute_with_invalid_flags() {
    let config = write_config(CONFIG);
    let args = CheckArgs {
        flags: Some("gx".to_string()),
        messages: vec!["fix: ok".to_string()],
        ..args_with_config(&config)
    };

    match execute(args) {
        Err(CliError::ConfigError(message)) => {
            assert!(message.contains("FLAGS contains invalid characters \"x\"."))
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}
