//! Colors and styles for the viewer and CLI output.
//!
//! Provides ratatui styles for the TUI and ANSI-wrapped strings for the
//! non-interactive commands. Setting `NO_COLOR` selects the monochrome theme.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for keys, titles and the played part of the track
    pub accent: Color,
    /// Error/alert color
    pub error: Color,
    /// Playhead color
    pub playhead: Color,
    /// Alternating chapter marker colors
    pub markers: [Color; 2],
    /// Whether ANSI escapes are emitted for CLI output
    pub ansi: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Gray text with green accents and yellow/cyan chapter markers.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            error: Color::Red,
            playhead: Color::White,
            markers: [Color::Yellow, Color::Cyan],
            ansi: true,
        }
    }

    /// No colors at all.
    pub fn monochrome() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            error: Color::Reset,
            playhead: Color::Reset,
            markers: [Color::Reset, Color::Reset],
            ansi: false,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, titles).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for the highlighted list entry.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Style of chapter `idx` on the timeline.
    pub fn marker_style(&self, idx: usize) -> Style {
        Style::default().fg(self.markers[idx % self.markers.len()])
    }

    pub fn playhead_style(&self) -> Style {
        Style::default()
            .fg(self.playhead)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI helpers for CLI output

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    fn paint(&self, color: Color, text: &str) -> String {
        let code = color_to_ansi(color);
        if !self.ansi || code.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", code, text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        // Reset, RGB and indexed colors are left uncolored
        _ => "",
    }
}

/// Theme honoring `NO_COLOR`.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some() {
        Theme::monochrome()
    } else {
        Theme::standard()
    }
}
