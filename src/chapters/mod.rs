//! Chapter data returned by the media analyzer.
//!
//! - [`model`] - response, chapter and metadata types
//! - [`time`] - `H:MM:SS` conversion in both directions

mod model;
mod time;

pub use model::{
    transcript_excerpt, AnalysisResponse, Chapter, ChapterDocument, ChapterIssue, ChapterMetadata,
};
pub use time::{format_clock, format_timestamp, parse_timestamp, time_to_seconds, TimestampError};
