//! Render projections for the viewer.
//!
//! Everything here is a pure function from view state to text, lines or
//! geometry. The TUI only draws what these return.

mod help;
mod layout;
mod list;
mod progress;
mod status;

pub use help::{build_help_lines, HELP_SECTIONS};
pub use layout::{
    build_viewer_layout, list_index_at, list_scroll_offset, list_visible_rows, ViewerLayout,
};
pub use list::{build_chapter_lines, build_detail_lines};
pub use progress::{
    bar_geometry, build_progress_cells, build_progress_chars, build_progress_line,
    format_time_display, time_at_column, TrackCell, TIME_DISPLAY_WIDTH,
};
pub use status::{build_header_line, build_status_text};
