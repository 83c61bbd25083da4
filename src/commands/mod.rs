//! Subcommand handlers.

pub mod analyze;
pub mod completions;
pub mod config;
pub mod render;
pub mod view;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use chapview::cli::AnalyzerArgs;
use chapview::Config;

/// Runtime for the upload and probe tasks.
pub fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

/// Apply command line overrides to the loaded analyzer settings.
pub fn analyzer_config(config: &Config, args: &AnalyzerArgs) -> chapview::config::AnalyzerConfig {
    let mut analyzer = config.analyzer.clone();
    if let Some(endpoint) = &args.endpoint {
        analyzer.endpoint = endpoint.clone();
    }
    analyzer
}

/// Width available for a timeline track on stdout.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80)
}
