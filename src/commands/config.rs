//! Config subcommands handler

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};

use chapview::config::migrate_config;
use chapview::theme::{current_theme, Theme};
use chapview::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format!("# {}", Config::config_path()?.display()))
    );
    print!("{}", toml::to_string_pretty(&config)?);
    if let Some(log_file) = config.log_file() {
        println!(
            "{}",
            theme.secondary_text(&format!("# viewer log: {}", log_file.display()))
        );
    }
    Ok(())
}

/// Open the config file in $EDITOR (defaults to 'vi'), creating it first.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Add fields missing from the config file, after confirmation.
///
/// A missing file is created with every default. `yes` skips the prompt.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };
    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("Config is already up to date.");
        return Ok(());
    }

    if file_exists {
        let fields = result.added_fields.len();
        match result.sections_added.len() {
            0 => println!("Found {} missing field(s):", fields),
            sections => println!(
                "Found {} missing field(s) in {} new section(s):",
                fields, sections
            ),
        }
    } else {
        println!("Config file does not exist. Will create with default settings.");
    }
    println!();
    for line in diff_preview(&result.content, &result.added_fields, !file_exists) {
        println!("{}", paint_diff_line(&theme, &line));
    }
    println!();

    let question = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&theme, &question)? {
        println!("No changes made.");
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)?;
    println!(
        "{}",
        theme.accent_text(if file_exists {
            "Config updated successfully."
        } else {
            "Config file created successfully."
        })
    );
    Ok(())
}

fn paint_diff_line(theme: &Theme, line: &str) -> String {
    if line.starts_with('+') {
        theme.accent_text(line)
    } else {
        line.to_string()
    }
}

/// Diff-style preview lines of the migrated content.
///
/// Added fields are prefixed with `+`, as are the headers of sections that
/// gain fields. For a new file every non-empty line counts as added.
fn diff_preview(new_content: &str, added_fields: &[String], is_new_file: bool) -> Vec<String> {
    let added: HashSet<&str> = added_fields.iter().map(String::as_str).collect();
    let mut out = Vec::new();
    let mut section = String::new();
    let mut pending_header: Option<String> = None;

    for line in new_content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            section = trimmed[1..trimmed.len() - 1].to_string();
            let prefix = format!("{}.", section);
            let has_additions = is_new_file || added.iter().any(|f| f.starts_with(&prefix));
            pending_header = has_additions.then(|| line.to_string());
            continue;
        }

        let is_added = is_new_file
            || trimmed
                .split_once('=')
                .map(|(key, _)| added.contains(format!("{}.{}", section, key.trim()).as_str()))
                .unwrap_or(false);
        if is_added {
            if let Some(header) = pending_header.take() {
                out.push(format!("+ {}", header));
            }
            out.push(format!("+ {}", line));
        }
    }
    out
}

/// Ask a yes/no question on stdin.
///
/// Non-interactive stdin answers no and points at `--yes`.
fn prompt_confirmation(theme: &Theme, message: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
