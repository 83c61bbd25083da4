//! Header and status line text.

use ratatui::text::{Line, Span};

use crate::chapters::format_timestamp;
use crate::theme::Theme;
use crate::viewer::view::ChapterView;

/// Status line for the current view.
///
/// A one-off `message` (upload rejected, busy, ...) replaces the regular
/// text. While an upload is running the loading indicator is shown.
pub fn build_status_text(view: &ChapterView, message: Option<&str>) -> String {
    if let Some(message) = message {
        return message.to_string();
    }

    if view.is_loading() {
        return match view.source() {
            Some(source) => format!(
                "Analyzing {} ({})...",
                source.file_name,
                source.display_size()
            ),
            None => "Analyzing...".to_string(),
        };
    }

    let state = if view.clock.paused { "paused" } else { "playing" };
    let mut parts = vec![
        state.to_string(),
        format!("{:.1}x", view.clock.speed),
        format!(
            "{} chapter{}",
            view.chapters().len(),
            if view.chapters().len() == 1 { "" } else { "s" }
        ),
    ];

    if let Some(idx) = view.current_chapter() {
        parts.push(format!("in {}", idx + 1));
    }

    match view.duration() {
        Some(duration) => parts.push(format!("duration {}", format_timestamp(duration))),
        None if view.source().is_some() => parts.push("duration unknown".to_string()),
        None => {}
    }

    parts.join(" | ")
}

/// Title line: program name and the selected file.
pub fn build_header_line(view: &ChapterView, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(" chapview ", theme.accent_bold_style())];
    match view.source() {
        Some(source) => {
            spans.push(Span::styled(source.file_name.clone(), theme.text_style()));
            spans.push(Span::styled(
                format!(" ({})", source.display_size()),
                theme.text_secondary_style(),
            ));
        }
        None => spans.push(Span::styled(
            "no video selected",
            theme.text_secondary_style(),
        )),
    }
    Line::from(spans)
}
