//! Chapter-to-timeline projection.
//!
//! A marker is positioned by two percentages of the video duration:
//!
//! ```text
//! left%  = start / duration * 100
//! width% = (end - start) / duration * 100
//! ```
//!
//! Nothing is validated. An unknown or zero duration produces `Infinity` or
//! `NaN`, and malformed chapter times produce `NaN`; such markers are simply
//! not drawable until the projection is recomputed with a real duration.

use std::ops::Range;

use crate::chapters::Chapter;

/// Position and size of a chapter on the timeline, in percent of the duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineMarker {
    pub left_percent: f64,
    pub width_percent: f64,
}

impl TimelineMarker {
    /// Both percentages are finite numbers.
    pub fn is_drawable(&self) -> bool {
        self.left_percent.is_finite() && self.width_percent.is_finite()
    }

    /// Right edge in percent.
    pub fn right_percent(&self) -> f64 {
        self.left_percent + self.width_percent
    }

    /// Map the marker onto a track of `width` cells.
    ///
    /// Edges are rounded to the nearest cell so adjacent chapters share a
    /// boundary instead of overlapping. The result is clamped to the track
    /// and is at least one cell wide. Returns `None` for markers that are not
    /// drawable or fall entirely outside the track.
    pub fn columns(&self, width: usize) -> Option<Range<usize>> {
        if width == 0 || !self.is_drawable() {
            return None;
        }
        let scale = width as f64 / 100.0;
        let left = (self.left_percent * scale).round();
        let right = (self.right_percent() * scale).round();

        if left >= width as f64 || right < 0.0 {
            return None;
        }

        let start = left.max(0.0) as usize;
        let end = (right.min(width as f64) as usize).max(start + 1).min(width);
        Some(start..end)
    }
}

/// Project one chapter onto a timeline of `duration` seconds.
pub fn project_marker(chapter: &Chapter, duration: f64) -> TimelineMarker {
    let start = chapter.start_seconds();
    let end = chapter.end_seconds();
    TimelineMarker {
        left_percent: start / duration * 100.0,
        width_percent: (end - start) / duration * 100.0,
    }
}

/// Project every chapter, preserving order.
pub fn project_markers(chapters: &[Chapter], duration: f64) -> Vec<TimelineMarker> {
    chapters
        .iter()
        .map(|chapter| project_marker(chapter, duration))
        .collect()
}

/// Format a percentage the way a style attribute would spell it.
///
/// Finite values get one decimal; the rest come out as `NaN%`,
/// `Infinity%` or `-Infinity%`.
pub fn format_percent(value: f64) -> String {
    if value.is_nan() {
        "NaN%".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity%".to_string()
        } else {
            "-Infinity%".to_string()
        }
    } else {
        format!("{:.1}%", value)
    }
}
