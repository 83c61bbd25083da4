//! Input handling for the viewer's normal mode.
//!
//! Dispatches crossterm events to the keyboard and mouse handlers and
//! returns control flow signals to the application loop.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::{Event, KeyEventKind};

use crate::viewer::render::ViewerLayout;
use crate::viewer::state::InputResult;
use crate::viewer::view::ChapterView;

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    view: &mut ChapterView,
    layout: &ViewerLayout,
    seek_step: f64,
) -> InputResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(key, view, seek_step)
        }
        Event::Mouse(mouse) => handle_mouse_event(mouse, view, layout),
        Event::Resize(_, _) => {
            view.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore key releases, focus events, etc.
    }
}
