//! Keyboard shortcut overview.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Shortcut groups shown in the help overlay: (heading, [(keys, action)]).
pub const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Video",
        &[
            ("o", "Choose video file"),
            ("u", "Upload for analysis"),
        ],
    ),
    (
        "Chapters",
        &[
            ("\u{2191}/\u{2193} j/k", "Select chapter"),
            ("Home/End", "First/last chapter"),
            ("Enter", "Jump to selected chapter"),
            ("n/p", "Next/previous chapter"),
            ("click", "Jump to chapter or position"),
        ],
    ),
    (
        "Playback",
        &[
            ("Space", "Pause / resume"),
            ("\u{2190}/\u{2192} ,/.", "Seek -/+ step"),
            ("Shift+\u{2190}/\u{2192}", "Seek -/+ 5%"),
            ("+/-", "Speed up / down"),
        ],
    ),
    ("General", &[("?", "This help"), ("q", "Quit")]),
];

/// Width of the key column.
const KEY_COLUMN: usize = 14;

/// Styled lines for the help overlay.
pub fn build_help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            theme.accent_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (heading, keys) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            heading.to_string(),
            theme.text_secondary_style(),
        )));
        for (key, action) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}", key, width = KEY_COLUMN), theme.accent_style()),
                Span::raw(action.to_string()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.text_secondary_style(),
    )));
    lines
}
