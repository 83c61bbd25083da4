//! chapview - chapter timelines for analyzed videos
//!
//! Uploads a video to a media analyzer service, receives its chapter list
//! and projects the chapters onto a timeline, either as plain text or in an
//! interactive terminal viewer.
//!
//! - [`chapters`] - analyzer response model and `H:MM:SS` conversion
//! - [`timeline`] - chapter to marker projection
//! - [`analyzer`] - multipart upload client
//! - [`media`] - duration probe
//! - [`viewer`] - view-model, controller, input and render projections
//! - [`tui`] - terminal front end

pub mod analyzer;
pub mod chapters;
pub mod cli;
pub mod config;
pub mod logging;
pub mod media;
pub mod timeline;
pub mod tui;
pub mod viewer;

pub use config::Config;
pub use tui::theme;
