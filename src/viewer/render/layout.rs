//! Screen regions of the viewer.
//!
//! Mouse handling needs the same geometry the renderer used, so both go
//! through [`build_viewer_layout`].

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Where each part of the viewer is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerLayout {
    /// Title and selected file
    pub header: Rect,
    /// Chapter list, with border
    pub list: Rect,
    /// Details of the highlighted chapter, with border
    pub details: Rect,
    /// Timeline track and clock
    pub timeline: Rect,
    /// Loading indicator and counts
    pub status: Rect,
    /// Key hints
    pub footer: Rect,
}

/// Split the terminal area into the viewer regions.
pub fn build_viewer_layout(area: Rect) -> ViewerLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    ViewerLayout {
        header: rows[0],
        list: columns[0],
        details: columns[1],
        timeline: rows[2],
        status: rows[3],
        footer: rows[4],
    }
}

/// Number of chapter rows visible inside the bordered list.
pub fn list_visible_rows(list: Rect) -> usize {
    list.height.saturating_sub(2) as usize
}

/// First visible list entry so that `selected` stays on screen.
pub fn list_scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(visible_rows)
}

/// List entry under a click at (`column`, `row`), if any.
pub fn list_index_at(
    list: Rect,
    column: u16,
    row: u16,
    offset: usize,
    entries: usize,
) -> Option<usize> {
    let inner_top = list.y + 1;
    let inner_bottom = list.y + list.height.saturating_sub(1);
    let inner_left = list.x + 1;
    let inner_right = list.x + list.width.saturating_sub(1);

    if row < inner_top || row >= inner_bottom || column < inner_left || column >= inner_right {
        return None;
    }
    let idx = offset + (row - inner_top) as usize;
    (idx < entries).then_some(idx)
}
