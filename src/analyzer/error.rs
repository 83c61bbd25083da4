//! Upload and analysis errors.

use std::path::PathBuf;

/// Text shown when an upload is triggered without a selected file.
pub const NO_FILE_ALERT: &str = "Please select a video file to upload.";

/// Errors that can occur while uploading a video for analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("{}", NO_FILE_ALERT)]
    NoFileSelected,

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read video: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid analyzer endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("Request to analyzer failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Analyzer responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Analyzer response could not be parsed: {0}")]
    Decode(#[from] serde_json::Error),
}
