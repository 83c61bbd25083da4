//! Video duration probing via ffprobe.
//!
//! A terminal has no video element that fires "metadata loaded", so the
//! duration comes from `ffprobe` running in the background. Its completion
//! plays the same role: markers are re-rendered once it reports.

use std::path::Path;

/// Errors from probing a media file.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ffprobe failed: {0}")]
    Failed(String),

    #[error("ffprobe reported no usable duration: '{0}'")]
    InvalidDuration(String),
}

/// Read the container duration of `path` in seconds.
pub async fn probe_duration(ffprobe: &str, path: &Path) -> Result<f64, ProbeError> {
    let output = tokio::process::Command::new(ffprobe)
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .output()
        .await
        .map_err(|source| ProbeError::Spawn {
            program: ffprobe.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProbeError::Failed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    parse_probe_output(&String::from_utf8_lossy(&output.stdout))
}

/// Parse ffprobe's bare duration output.
///
/// ffprobe prints `N/A` for streams without a duration; that and any
/// non-positive value are rejected.
pub fn parse_probe_output(stdout: &str) -> Result<f64, ProbeError> {
    let trimmed = stdout.trim();
    match trimmed.parse::<f64>() {
        Ok(duration) if duration.is_finite() && duration > 0.0 => Ok(duration),
        _ => Err(ProbeError::InvalidDuration(trimmed.to_string())),
    }
}
