//! Plain-text rendering of chapters and their timeline markers.
//!
//! Used by the non-interactive commands; the interactive viewer has its own
//! styled renderers.

use unicode_width::UnicodeWidthStr;

use super::projection::{format_percent, project_markers, TimelineMarker};
use crate::chapters::{format_timestamp, Chapter};

/// Fill characters for alternating chapters on a text track.
pub const TRACK_FILLS: [char; 2] = ['━', '═'];
/// Character for track cells no chapter covers.
pub const TRACK_EMPTY: char = '─';

/// Draw markers onto a track of `width` characters.
///
/// Chapters alternate between the two fill characters so neighbours stay
/// distinguishable; later chapters overwrite earlier ones where they overlap.
/// Markers that are not drawable leave the track untouched.
pub fn build_timeline_track(width: usize, markers: &[TimelineMarker]) -> String {
    let mut track = vec![TRACK_EMPTY; width];
    for (idx, marker) in markers.iter().enumerate() {
        if let Some(columns) = marker.columns(width) {
            let fill = TRACK_FILLS[idx % TRACK_FILLS.len()];
            for cell in &mut track[columns] {
                *cell = fill;
            }
        }
    }
    track.into_iter().collect()
}

/// Numbered chapter list, one title per line, in input order.
pub fn chapter_list(chapters: &[Chapter]) -> String {
    let digits = chapters.len().to_string().len();
    chapters
        .iter()
        .enumerate()
        .map(|(idx, chapter)| {
            format!(
                "{:>digits$}. {} ({})\n",
                idx + 1,
                chapter.title,
                format_timestamp(chapter.start_seconds()),
                digits = digits
            )
        })
        .collect()
}

/// Table of chapter bounds and marker percentages.
pub fn marker_table(chapters: &[Chapter], duration: f64) -> String {
    let markers = project_markers(chapters, duration);
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:<9}{:<9}{:>10} {:>10}  {}\n",
        "#", "START", "END", "LEFT", "WIDTH", "TITLE"
    ));
    for (idx, (chapter, marker)) in chapters.iter().zip(&markers).enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<9}{:<9}{:>10} {:>10}  {}\n",
            idx + 1,
            chapter.start_time,
            chapter.end_time,
            format_percent(marker.left_percent),
            format_percent(marker.width_percent),
            chapter.title
        ));
    }
    out
}

/// Truncate `text` to at most `max_width` terminal columns, adding an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
