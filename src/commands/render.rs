//! Render subcommand handler

use std::path::Path;

use anyhow::Result;

use chapview::chapters::{format_timestamp, AnalysisResponse, Chapter};
use chapview::theme::current_theme;
use chapview::timeline::{build_timeline_track, chapter_list, marker_table, project_markers};

/// Columns kept free on each side of the track.
const TRACK_PADDING: usize = 2;

/// Print a saved analyzer response as list, marker table and track.
#[cfg(not(tarpaulin_include))]
pub fn handle(response: &Path, duration: Option<f64>, width: Option<usize>) -> Result<()> {
    let analysis = AnalysisResponse::load(response)?;
    let duration = duration.or_else(|| analysis.span_end());
    let width = width.unwrap_or_else(|| {
        super::terminal_width()
            .saturating_sub(TRACK_PADDING * 2)
            .max(1)
    });
    print_timeline(analysis.chapter_list(), duration, width);
    Ok(())
}

/// Shared output of `render` and `analyze`.
pub fn print_timeline(chapters: &[Chapter], duration: Option<f64>, width: usize) {
    let theme = current_theme();
    if chapters.is_empty() {
        println!("{}", theme.secondary_text("No chapters."));
        return;
    }

    let duration_secs = duration.unwrap_or(0.0);
    print!("{}", chapter_list(chapters));
    println!();
    print!("{}", marker_table(chapters, duration_secs));
    println!();

    let markers = project_markers(chapters, duration_secs);
    println!("{}", theme.accent_text(&build_timeline_track(width, &markers)));
    match duration {
        Some(d) => println!(
            "{}",
            theme.secondary_text(&format!("duration {}", format_timestamp(d)))
        ),
        None => println!("{}", theme.secondary_text("duration unknown")),
    }
}
