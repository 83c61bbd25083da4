//! Analyze subcommand handler

use std::path::Path;

use anyhow::{Context, Result};

use chapview::analyzer::{AnalyzeError, AnalyzerClient};
use chapview::cli::AnalyzerArgs;
use chapview::media::probe_duration;
use chapview::Config;

use super::render::print_timeline;

/// Upload a video, then print or save the analyzer response.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    file: Option<&Path>,
    args: &AnalyzerArgs,
    json: bool,
    output: Option<&Path>,
) -> Result<()> {
    // Checked before building anything so no request can go out.
    let path = match file {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => return Err(AnalyzeError::NoFileSelected.into()),
    };

    let client = AnalyzerClient::new(&super::analyzer_config(config, args))?;
    let runtime = super::build_runtime()?;

    let analysis = runtime
        .block_on(client.analyze(path))
        .with_context(|| format!("Analysis of {} failed", path.display()))?;

    if let Some(output) = output {
        analysis.save(output)?;
        eprintln!("Saved response to {}", output.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let duration = match args.duration {
        Some(d) => Some(d),
        None if config.viewer.probe_duration => {
            match runtime.block_on(probe_duration(&config.viewer.ffprobe, path)) {
                Ok(d) => Some(d),
                Err(e) => {
                    tracing::warn!(error = %e, "duration probe failed, using chapter span");
                    analysis.span_end()
                }
            }
        }
        None => analysis.span_end(),
    };

    print_timeline(
        analysis.chapter_list(),
        duration,
        super::terminal_width().saturating_sub(4).max(1),
    );
    Ok(())
}
