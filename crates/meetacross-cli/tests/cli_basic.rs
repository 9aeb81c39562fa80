//! Basic CLI E2E tests.
//!
//! Tests run the built binary with an isolated HOME so no real
//! configuration is read or written.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &std::path::Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_meetacross"))
        .args(args)
        .env("HOME", home)
        .env_remove("MEETACROSS_ENV")
        .env_remove("MEETACROSS_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn home() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp HOME")
}

#[test]
fn test_zones_list() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["zones"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Europe/London"));
    assert!(stdout.contains("Tokyo (JST)"));
}

#[test]
fn test_zones_json() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["zones", "--json"]);
    assert_eq!(code, 0);
    let zones: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(zones.as_array().unwrap().len(), 15);
    assert_eq!(zones[0]["zone_id"], "Europe/London");
}

#[test]
fn test_find_text_output() {
    let home = home();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["find", "--date", "2024-06-10", "--duration", "30", "-p", "Europe/London"],
    );
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Option 1 (Mon, Jun 10, 8:00 AM UTC)"));
    assert!(stdout.contains("London: 9:00 AM (standard)"));
}

#[test]
fn test_find_json_output() {
    let home = home();
    let (stdout, _, code) = run_cli(
        home.path(),
        &[
            "find", "--date", "2024-06-10", "--duration", "30", "-p", "Tokyo", "-p",
            "America/Sao_Paulo", "--extended", "--json",
        ],
    );
    assert_eq!(code, 0);
    let outcome: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(outcome["slots"].as_array().unwrap().len(), 4);
    assert_eq!(outcome["slots"][0]["score"], 4);
}

#[test]
fn test_find_no_results_is_not_an_error() {
    let home = home();
    let (stdout, _, code) = run_cli(
        home.path(),
        &[
            "find", "--date", "2024-06-10", "--duration", "30", "-p", "Asia/Tokyo", "-p",
            "America/Sao_Paulo",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("No Ideal Times Found"));
}

#[test]
fn test_find_rejects_invalid_input() {
    let home = home();
    let (_, stderr, code) = run_cli(
        home.path(),
        &["find", "--date", "2024-02-30", "-p", "London"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("not a valid YYYY-MM-DD date"));

    let (_, stderr, code) = run_cli(
        home.path(),
        &["find", "--date", "2024-06-10", "--duration", "-15", "-p", "London"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("duration must be positive"));

    let (_, stderr, code) = run_cli(home.path(), &["find", "--date", "2024-06-10"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("at least one participant"));

    let (_, stderr, code) = run_cli(
        home.path(),
        &["find", "--date", "2024-06-10", "-p", "London", "-p", "Atlantis"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("participant 2"));
}

#[test]
fn test_find_copy_and_calendar() {
    let home = home();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["find", "--date", "2024-06-10", "--duration", "30", "-p", "London", "--copy", "2"],
    );
    assert_eq!(code, 0);
    assert!(stdout.starts_with("INTERNATIONAL MEETING DETAILS"));
    assert!(stdout.contains("✅ London: 9:30 AM"));

    let (stdout, _, code) = run_cli(
        home.path(),
        &["find", "--date", "2024-06-10", "--duration", "30", "-p", "London", "--calendar", "1"],
    );
    assert_eq!(code, 0);
    assert!(stdout.starts_with("https://calendar.google.com/calendar/render?"));
    assert!(stdout.contains("20240610T080000Z"));

    let (_, stderr, code) = run_cli(
        home.path(),
        &["find", "--date", "2024-06-10", "--duration", "30", "-p", "London", "--copy", "9"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("option 9 does not exist"));
}

#[test]
fn test_config_defaults_drive_find() {
    let home = home();
    let (_, _, code) = run_cli(
        home.path(),
        &["config", "set", "meeting.participants", r#"["Europe/London"]"#],
    );
    assert_eq!(code, 0);
    let (_, _, code) = run_cli(home.path(), &["config", "set", "meeting.duration_minutes", "30"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "meeting.duration_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "30");

    let (stdout, _, code) = run_cli(home.path(), &["find", "--date", "2024-06-10", "--json"]);
    assert_eq!(code, 0);
    let outcome: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(outcome["slots"].as_array().unwrap().len(), 5);
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = home();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "meeting.colour", "blue"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_completions() {
    let home = home();
    let (stdout, _, code) = run_cli(home.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("meetacross"));
}
