//! Chapter viewer
//!
//! Everything the interactive viewer needs apart from the terminal itself.
//!
//! # Architecture
//!
//! - `state`: playback clock and shared types (`InputResult`)
//! - `view`: the `ChapterView` view-model and the events that change it
//! - `controller`: runs uploads and duration probes, feeds results back
//! - `input/`: keyboard and mouse handling for normal mode
//! - `render/`: pure projections from view state to lines and geometry

mod controller;
pub mod input;
pub mod render;
pub mod state;
mod view;

pub use controller::{Controller, UploadOutcome};
pub use state::{InputResult, PlaybackClock};
pub use view::{ChapterView, UploadDecision, ViewerEvent};
