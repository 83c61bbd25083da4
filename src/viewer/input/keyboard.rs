//! Keyboard input handling for the viewer's normal mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::viewer::state::InputResult;
use crate::viewer::view::ChapterView;

/// Handle a key press in normal mode.
///
/// Playback and navigation keys act on the view directly; keys that need the
/// application (upload, path entry, help, quit) are returned as signals.
pub fn handle_key_event(key: KeyEvent, view: &mut ChapterView, seek_step: f64) -> InputResult {
    match key.code {
        // === Application signals ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Char('?') => InputResult::Help,
        KeyCode::Char('o') => InputResult::EditPath,
        KeyCode::Char('u') => InputResult::Upload,

        // === Chapter selection ===
        KeyCode::Up | KeyCode::Char('k') => {
            view.select_previous();
            InputResult::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view.select_next();
            InputResult::Continue
        }
        KeyCode::Home => {
            view.select_first();
            InputResult::Continue
        }
        KeyCode::End => {
            view.select_last();
            InputResult::Continue
        }
        KeyCode::Enter => {
            view.activate_selected();
            InputResult::Continue
        }
        KeyCode::Char('n') => {
            view.next_chapter();
            InputResult::Continue
        }
        KeyCode::Char('p') => {
            view.previous_chapter();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            view.clock.toggle_pause();
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            view.clock.speed_up();
            view.needs_render = true;
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            view.clock.speed_down();
            view.needs_render = true;
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Char('<') | KeyCode::Char(',') => {
            view.seek_by(-seek_step);
            InputResult::Continue
        }
        KeyCode::Char('>') | KeyCode::Char('.') => {
            view.seek_by(seek_step);
            InputResult::Continue
        }
        KeyCode::Left => {
            view.seek_by(-arrow_step(view, key.modifiers, seek_step));
            InputResult::Continue
        }
        KeyCode::Right => {
            view.seek_by(arrow_step(view, key.modifiers, seek_step));
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Seek distance for the arrow keys: 5% of the video with Shift.
fn arrow_step(view: &ChapterView, modifiers: KeyModifiers, seek_step: f64) -> f64 {
    match view.duration() {
        Some(duration) if modifiers.contains(KeyModifiers::SHIFT) => duration * 0.05,
        _ => seek_step,
    }
}
