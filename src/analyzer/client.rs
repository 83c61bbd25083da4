//! HTTP client for the media analyzer.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Url;

use super::error::AnalyzeError;
use super::preview::PreviewSource;
use crate::chapters::AnalysisResponse;
use crate::config::AnalyzerConfig;

/// Uploads videos to the analyzer endpoint and decodes its chapter response.
///
/// Requests have no timeout and are never retried; a slow analyzer simply
/// keeps the loading indicator on.
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoint: Url,
    field_name: String,
}

impl AnalyzerClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalyzeError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| AnalyzeError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                message: e.to_string(),
            })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AnalyzeError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                message: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("chapview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            field_name: config.field_name.clone(),
        })
    }

    /// The URL uploads are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload a video and return the analyzer's response.
    pub async fn analyze(&self, path: &Path) -> Result<AnalysisResponse, AnalyzeError> {
        let source = PreviewSource::from_path(path)?;
        self.analyze_source(&source).await
    }

    /// Upload an already resolved preview source.
    pub async fn analyze_source(
        &self,
        source: &PreviewSource,
    ) -> Result<AnalysisResponse, AnalyzeError> {
        let bytes = tokio::fs::read(&source.path).await?;
        tracing::info!(
            file = %source.file_name,
            size = source.size_bytes,
            endpoint = %self.endpoint,
            "uploading video for analysis"
        );

        let part = Part::bytes(bytes)
            .file_name(source.file_name.clone())
            .mime_str(source.mime_type())?;
        let form = Form::new().part(self.field_name.clone(), part);

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AnalyzeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let analysis = AnalysisResponse::from_json(&body)?;
        tracing::info!(
            chapters = analysis.chapter_list().len(),
            "analysis received"
        );
        Ok(analysis)
    }
}
