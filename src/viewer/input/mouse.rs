//! Mouse input handling for the viewer.
//!
//! Left click on the timeline seeks to that position; left click on a list
//! row activates that chapter.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::viewer::render::{
    list_index_at, list_scroll_offset, list_visible_rows, time_at_column, ViewerLayout,
};
use crate::viewer::state::InputResult;
use crate::viewer::view::ChapterView;

/// Handle a mouse event against the last drawn layout.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    view: &mut ChapterView,
    layout: &ViewerLayout,
) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if mouse.row == layout.timeline.y {
            if let Some(time) = time_at_column(layout.timeline, mouse.column, view.duration()) {
                view.seek(time);
            }
        } else {
            let offset = list_scroll_offset(view.selected(), list_visible_rows(layout.list));
            if let Some(idx) = list_index_at(
                layout.list,
                mouse.column,
                mouse.row,
                offset,
                view.chapters().len(),
            ) {
                view.activate_entry(idx);
            }
        }
    }

    InputResult::Continue
}
