//! Integration tests for configuration loading and the config command

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use chapview::config::{migrate_config, CONFIG_ENV, DEFAULT_ENDPOINT};
use chapview::Config;

use crate::helpers::run_chapview;

/// Point the library at `path` for the duration of `f`.
fn with_config_env<T>(path: &std::path::Path, f: impl FnOnce() -> T) -> T {
    let previous = std::env::var_os(CONFIG_ENV);
    std::env::set_var(CONFIG_ENV, path);
    let result = f();
    match previous {
        Some(value) => std::env::set_var(CONFIG_ENV, value),
        None => std::env::remove_var(CONFIG_ENV),
    }
    result
}

#[test]
#[serial]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    let resolved = with_config_env(&path, Config::config_path).unwrap();
    assert_eq!(resolved, path);
}

#[test]
#[serial]
fn load_reads_partial_file_over_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[analyzer]\nendpoint = \"http://analyzer:9000/upload\"\n").unwrap();

    let config = with_config_env(&path, Config::load).unwrap();
    assert_eq!(config.analyzer.endpoint, "http://analyzer:9000/upload");
    assert_eq!(config.analyzer.field_name, "file");
    assert_eq!(config.viewer.tick_ms, 100);
}

#[test]
#[serial]
fn save_then_load_from_env_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/config.toml");

    let mut config = Config::default();
    config.viewer.seek_step = 10.0;
    with_config_env(&path, || config.save()).unwrap();

    let loaded = with_config_env(&path, Config::load).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn migrate_adds_only_missing_fields() {
    let content = "# my analyzer\n[analyzer]\nendpoint = \"http://x/upload\"\n";
    let result = migrate_config(content).unwrap();

    assert!(result.content.contains("# my analyzer"));
    assert!(result.content.contains("endpoint = \"http://x/upload\""));
    assert!(!result.content.contains(DEFAULT_ENDPOINT));
    assert!(result.added_fields.contains(&"analyzer.field_name".to_string()));
    assert!(result.sections_added.contains(&"viewer".to_string()));
    assert!(result.sections_added.contains(&"logging".to_string()));
}

#[test]
fn cli_config_path_prints_env_path() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, code) = run_chapview(&dir, &["config", "path"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), dir.path().join("config.toml").display().to_string());
}

#[test]
fn cli_config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, code) = run_chapview(&dir, &["config", "show"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("[analyzer]"));
    assert!(stdout.contains(DEFAULT_ENDPOINT));
    assert!(stdout.contains("[viewer]"));
}

#[test]
fn cli_config_migrate_yes_creates_file() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, code) = run_chapview(&dir, &["config", "migrate", "--yes"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Config file created successfully."));
    let written = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    let config: Config = toml::from_str(&written).unwrap();
    assert_eq!(config, Config::default());

    let (stdout, _stderr, code) = run_chapview(&dir, &["config", "migrate"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Config is already up to date."));
}

#[test]
fn cli_rejects_broken_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[analyzer\nendpoint = 1").unwrap();

    let (_stdout, stderr, code) = run_chapview(&dir, &["config", "show"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to parse config"));
}
