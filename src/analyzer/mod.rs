//! Upload pipeline to the remote media analyzer.
//!
//! A selected file is first resolved into a [`PreviewSource`] (bound to the
//! player immediately), then posted as multipart form data by
//! [`AnalyzerClient`]. Failures are reported as [`AnalyzeError`]; only
//! [`AnalyzeError::NoFileSelected`] is ever shown to the user directly.

mod client;
mod error;
mod preview;

pub use client::AnalyzerClient;
pub use error::{AnalyzeError, NO_FILE_ALERT};
pub use preview::{mime_for_path, PreviewSource};
