//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path of a fixture by file name.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Read a fixture as a string.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

/// Write a small stand-in video file.
pub fn fake_video(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"\x00\x00\x00\x18ftypmp42 not really a video").expect("write video");
    path
}

/// Run the chapview binary with an isolated config and no colors.
///
/// Returns (stdout, stderr, exit code).
pub fn run_chapview(config_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_chapview"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("CHAPVIEW_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute chapview");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}
