//! Timeline track with chapter markers and playhead.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::chapters::format_clock;
use crate::theme::Theme;
use crate::timeline::{TimelineMarker, TRACK_EMPTY, TRACK_FILLS};

/// Columns reserved for padding and the ` MM:SS/MM:SS` clock.
pub const TIME_DISPLAY_WIDTH: u16 = 14;

const PLAYHEAD: char = '⏺';
const PLAYED: char = '━';

/// What a single track cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackCell {
    /// No chapter covers this cell
    Empty,
    /// Covered by chapter `n` (later chapters win on overlap)
    Chapter(usize),
    /// Current playback position
    Playhead,
}

/// Start column and width of the track inside `area`.
pub fn bar_geometry(area: Rect) -> (u16, usize) {
    (
        area.x + 1,
        area.width.saturating_sub(TIME_DISPLAY_WIDTH) as usize,
    )
}

/// Lay out chapter markers and the playhead on a track of `bar_width` cells.
///
/// Returns the cells and the number of cells before the playhead. An unknown
/// duration keeps the playhead at the start.
pub fn build_progress_cells(
    bar_width: usize,
    current_time: f64,
    duration: Option<f64>,
    markers: &[TimelineMarker],
) -> (Vec<TrackCell>, usize) {
    let progress = match duration {
        Some(d) if d.is_finite() && d > 0.0 => (current_time / d).clamp(0.0, 1.0),
        _ => 0.0,
    };
    let filled = (bar_width as f64 * progress) as usize;

    let mut cells = vec![TrackCell::Empty; bar_width];
    for (idx, marker) in markers.iter().enumerate() {
        if let Some(columns) = marker.columns(bar_width) {
            for cell in &mut cells[columns] {
                *cell = TrackCell::Chapter(idx);
            }
        }
    }
    if filled < bar_width {
        cells[filled] = TrackCell::Playhead;
    }

    (cells, filled)
}

/// Character representation of the track.
pub fn build_progress_chars(
    bar_width: usize,
    current_time: f64,
    duration: Option<f64>,
    markers: &[TimelineMarker],
) -> Vec<char> {
    let (cells, filled) = build_progress_cells(bar_width, current_time, duration, markers);
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            TrackCell::Playhead => PLAYHEAD,
            TrackCell::Chapter(idx) => TRACK_FILLS[idx % TRACK_FILLS.len()],
            TrackCell::Empty if i < filled => PLAYED,
            TrackCell::Empty => TRACK_EMPTY,
        })
        .collect()
}

/// ` MM:SS/MM:SS`, with `--:--` for an unknown duration.
pub fn format_time_display(current_time: f64, duration: Option<f64>) -> String {
    format!(
        " {}/{}",
        format_clock(current_time),
        format_clock(duration.unwrap_or(f64::NAN))
    )
}

/// Styled timeline line for an area `width` columns wide.
pub fn build_progress_line(
    width: u16,
    current_time: f64,
    duration: Option<f64>,
    markers: &[TimelineMarker],
    theme: &Theme,
) -> Line<'static> {
    let bar_width = width.saturating_sub(TIME_DISPLAY_WIDTH) as usize;
    let chars = build_progress_chars(bar_width, current_time, duration, markers);
    let (cells, filled) = build_progress_cells(bar_width, current_time, duration, markers);

    let mut spans = Vec::with_capacity(bar_width + 2);
    spans.push(Span::raw(" "));
    for (i, (ch, cell)) in chars.into_iter().zip(cells).enumerate() {
        let style = match cell {
            TrackCell::Playhead => theme.playhead_style(),
            TrackCell::Chapter(idx) if i < filled => theme.marker_style(idx).fg(theme.accent),
            TrackCell::Chapter(idx) => theme.marker_style(idx),
            TrackCell::Empty if i < filled => theme.accent_style(),
            TrackCell::Empty => theme.text_secondary_style(),
        };
        spans.push(Span::styled(ch.to_string(), style));
    }
    spans.push(Span::styled(
        format_time_display(current_time, duration),
        Style::default().fg(theme.text_primary),
    ));
    Line::from(spans)
}

/// Playback position for a click at `column`, if it hit the track.
pub fn time_at_column(area: Rect, column: u16, duration: Option<f64>) -> Option<f64> {
    let duration = duration.filter(|d| d.is_finite() && *d > 0.0)?;
    let (start, width) = bar_geometry(area);
    if width == 0 || column < start || column >= start + width as u16 {
        return None;
    }
    let ratio = (column - start) as f64 / width as f64;
    Some((ratio * duration).clamp(0.0, duration))
}
