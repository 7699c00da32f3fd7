//! Integration Tests for the config Command
//!
//! Runs against a real temporary directory since the configuration store
//! reads and writes files directly.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use std::fs;

use tempfile::TempDir;
use test_utils::{native_shell, run_lines};
use texshell::config::{ConfigDocument, MAIN_SECTION};

#[test]
fn test_query_without_file() {
    let dir = TempDir::new().unwrap();
    let (mut shell, _) = native_shell(dir.path(), &[]);

    assert_eq!(
        run_lines(&mut shell, &["config"]),
        "No configuration file in current working directory. Nothing to print.\n"
    );
}

#[test]
fn test_assign_on_fresh_directory_then_query() {
    let dir = TempDir::new().unwrap();
    let (mut shell, _) = native_shell(dir.path(), &[]);

    run_lines(&mut shell, &["config a=1,b=2"]);
    let text = fs::read_to_string(dir.path().join(".config")).unwrap();
    let document = ConfigDocument::parse(&text).unwrap();
    assert_eq!(document.get(MAIN_SECTION, "a"), Some("1"));
    assert_eq!(document.get(MAIN_SECTION, "b"), Some("2"));

    assert_eq!(
        run_lines(&mut shell, &["config"]),
        "Configuration:\n 'main' section\n   a = 1\n   b = 2\n"
    );
}

#[test]
fn test_bad_token_reported_and_others_persisted() {
    let dir = TempDir::new().unwrap();
    let (mut shell, _) = native_shell(dir.path(), &[]);

    let output = run_lines(&mut shell, &["config bad key=1,c=3"]);
    assert!(output.contains("Config parameters (bad key=1) are wrong"));
    assert!(output.contains("Set c = 3"));

    let text = fs::read_to_string(dir.path().join(".config")).unwrap();
    assert_eq!(text, "[main]\nc = 3\n\n");
}

#[test]
fn test_only_bad_tokens_write_nothing() {
    let dir = TempDir::new().unwrap();
    let (mut shell, _) = native_shell(dir.path(), &[]);

    let output = run_lines(&mut shell, &["config bad key=1"]);
    assert!(output.contains("(bad key=1)"));
    assert!(!dir.path().join(".config").exists());
}

#[test]
fn test_assignments_update_in_place() {
    let dir = TempDir::new().unwrap();
    let (mut shell, _) = native_shell(dir.path(), &[]);

    run_lines(&mut shell, &["config a=1,b=2", "config a=9"]);
    assert_eq!(
        run_lines(&mut shell, &["config"]),
        "Configuration:\n 'main' section\n   a = 9\n   b = 2\n"
    );
}

#[test]
fn test_query_shows_empty_sections() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".config"), "[main]\n\n[build]\nengine = tex\n").unwrap();
    let (mut shell, _) = native_shell(dir.path(), &[]);

    assert_eq!(
        run_lines(&mut shell, &["config"]),
        "Configuration:\n 'main' section\n   This section is empty.\n 'build' section\n   engine = tex\n"
    );
}

#[test]
fn test_malformed_file_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".config"), "no header = here\n").unwrap();
    let (mut shell, _) = native_shell(dir.path(), &[]);

    let output = run_lines(&mut shell, &["config"]);
    assert!(output.contains("contains failures, please inspect"));

    let output = run_lines(&mut shell, &["config a=1"]);
    assert!(output.contains("contains failures, please inspect"));
    assert_eq!(
        fs::read_to_string(dir.path().join(".config")).unwrap(),
        "no header = here\n"
    );
}

#[test]
fn test_config_lives_in_current_project() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("paper")).unwrap();
    let (mut shell, _) = native_shell(dir.path(), &[]);

    run_lines(&mut shell, &["im paper", "config lang=cs"]);
    assert!(dir.path().join("paper").join(".config").is_file());
    assert!(!dir.path().join(".config").exists());

    run_lines(&mut shell, &["im"]);
    assert_eq!(
        run_lines(&mut shell, &["config"]),
        "No configuration file in current working directory. Nothing to print.\n"
    );
}

#[test]
fn test_custom_config_file_name() {
    let dir = TempDir::new().unwrap();
    let (shell, _) = native_shell(dir.path(), &[]);
    let mut shell = shell.with_config_file_name(".texshellrc");

    run_lines(&mut shell, &["config x=1"]);
    assert!(dir.path().join(".texshellrc").is_file());
    assert!(!dir.path().join(".config").exists());
}
