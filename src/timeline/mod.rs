//! Timeline projection for chapter markers.
//!
//! - [`projection`] - the pure `chapter × duration → marker` arithmetic
//! - [`text`] - plain-text tracks, lists and tables for CLI output

mod projection;
mod text;

pub use projection::{format_percent, project_marker, project_markers, TimelineMarker};
pub use text::{
    build_timeline_track, chapter_list, marker_table, truncate_to_width, TRACK_EMPTY, TRACK_FILLS,
};
