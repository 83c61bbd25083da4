//! Integration tests for the render command (CLI)

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixture_path;

fn chapview(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chapview").expect("binary");
    cmd.env("NO_COLOR", "1")
        .env("CHAPVIEW_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn render_prints_list_table_and_track() {
    let config_dir = TempDir::new().unwrap();
    let response = fixture_path("sample_response.json");

    chapview(&config_dir)
        .args(["render", response.to_str().unwrap(), "--width", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Intro (0:00:00)"))
        .stdout(predicate::str::contains("3. Outro (0:01:40)"))
        .stdout(predicate::str::contains("78.7%"))
        .stdout(predicate::str::contains("━━━━━═══════════━━━━"))
        .stdout(predicate::str::contains("duration 0:02:07"));
}

#[test]
fn render_keeps_chapter_order() {
    let config_dir = TempDir::new().unwrap();
    let response = fixture_path("sample_response.json");

    let output = chapview(&config_dir)
        .args(["render", response.to_str().unwrap(), "-w", "40"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let intro = stdout.find("Intro").unwrap();
    let main = stdout.find("Main").unwrap();
    let outro = stdout.find("Outro").unwrap();
    assert!(intro < main && main < outro);
}

#[test]
fn render_uses_explicit_duration() {
    let config_dir = TempDir::new().unwrap();
    let response = fixture_path("sample_response.json");

    // Twice the chapter span: everything lands in the left half
    chapview(&config_dir)
        .args(["render", response.to_str().unwrap(), "-d", "254", "-w", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("39.4%"))
        .stdout(predicate::str::contains("──────────\n"))
        .stdout(predicate::str::contains("duration 0:04:14"));
}

#[test]
fn render_shows_malformed_times_as_nan() {
    let config_dir = TempDir::new().unwrap();
    let response = fixture_path("malformed_times.json");

    chapview(&config_dir)
        .args(["render", response.to_str().unwrap(), "-w", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NaN%"))
        .stdout(predicate::str::contains("Broken"));
}

#[test]
fn render_fails_for_missing_response() {
    let config_dir = TempDir::new().unwrap();

    chapview(&config_dir)
        .args(["render", "/nonexistent/response.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn render_rejects_non_response_json() {
    let config_dir = TempDir::new().unwrap();
    let path = config_dir.path().join("other.json");
    std::fs::write(&path, r#"{"chapters": null}"#).unwrap();

    chapview(&config_dir)
        .args(["render", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not an analyzer response"));
}

#[test]
fn snapshot_cli_help_render() {
    let config_dir = TempDir::new().unwrap();
    let output = chapview(&config_dir).args(["render", "--help"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Print the chapter list, marker table and timeline track"));
    assert!(stdout.contains("<RESPONSE>"));
    assert!(stdout.contains("--duration"));
}

#[test]
fn render_tolerates_off_type_optional_fields() {
    let config_dir = TempDir::new().unwrap();
    let response = fixture_path("loose_fields.json");

    chapview(&config_dir)
        .args(["render", response.to_str().unwrap(), "-w", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Opening (0:00:00)"))
        .stdout(predicate::str::contains("2. Closing (0:00:40)"))
        .stdout(predicate::str::contains("50.0%"));
}
