//! Modal overlays: the blocking alert and the help screen.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme::current_theme;
use crate::viewer::render::build_help_lines;

/// Area of a modal of at most `width`×`height`, centered in `area`.
pub fn modal_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Render a blocking alert with `message`.
pub fn render_alert_modal(frame: &mut Frame, area: Rect, message: &str) {
    let theme = current_theme();
    let modal = modal_area(area, 50, 7);
    frame.render_widget(Clear, modal);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme.text_style())),
        Line::from(""),
        Line::from(Span::styled("Enter/Esc: OK", theme.text_secondary_style())),
    ];
    let alert = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error_style())
                .title(" Alert "),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(alert, modal);
}

/// Render the keyboard shortcut overlay.
pub fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let lines = build_help_lines(&theme);
    let modal = modal_area(area, 52, lines.len() as u16 + 2);
    frame.render_widget(Clear, modal);

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, modal);
}
