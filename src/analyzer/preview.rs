//! Local preview source for the selected video.
//!
//! As soon as an upload starts, the selected file is bound to the player so
//! playback can begin before the analyzer has answered.

use std::path::{Path, PathBuf};

use humansize::{format_size, DECIMAL};
use reqwest::Url;

use super::error::AnalyzeError;

/// A video file selected for playback and upload.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSource {
    /// Absolute path of the file
    pub path: PathBuf,
    /// `file://` URL of the file
    pub url: Url,
    /// File name sent with the upload
    pub file_name: String,
    /// Size in bytes
    pub size_bytes: u64,
}

impl PreviewSource {
    /// Resolve a selected path into a preview source.
    pub fn from_path(path: &Path) -> Result<Self, AnalyzeError> {
        if !path.is_file() {
            return Err(AnalyzeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let path = path.canonicalize()?;
        let size_bytes = path.metadata()?.len();
        let url = Url::from_file_path(&path).map_err(|_| AnalyzeError::FileNotFound {
            path: path.clone(),
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "video".to_string());

        Ok(Self {
            path,
            url,
            file_name,
            size_bytes,
        })
    }

    /// Human readable file size, e.g. `12.3 MB`.
    pub fn display_size(&self) -> String {
        format_size(self.size_bytes, DECIMAL)
    }

    /// Content type announced for the multipart file part.
    pub fn mime_type(&self) -> &'static str {
        mime_for_path(&self.path)
    }
}

/// Guess a video content type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("ogv") => "video/ogg",
        Some("mpeg") | Some("mpg") => "video/mpeg",
        _ => "application/octet-stream",
    }
}
