/// HTTP client for the analysis endpoint
///
/// One request per submission: a multipart upload for local files or a
/// JSON body for URLs. No retry, no backoff and no timeout.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

use super::verdict::{AnalysisResponse, Verdict};
use crate::state::data::SelectedImage;

/// Multipart field carrying the image bytes
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response was not valid JSON: {0}")]
    Decode(reqwest::Error),
    #[error("response carried neither a result nor an error")]
    EmptyResponse,
}

/// JSON body for URL submissions
#[derive(Serialize, Debug)]
struct UrlRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit an image and always come back with something to display.
    ///
    /// Every failure collapses into the generic error verdict after a
    /// diagnostic log line.
    pub async fn submit(self, image: SelectedImage) -> Verdict {
        match self.analyze(&image).await {
            Ok(verdict) => verdict,
            Err(err) => {
                error!(endpoint = %self.endpoint, error = %err, "analysis request failed");
                Verdict::failure()
            }
        }
    }

    pub async fn analyze(&self, image: &SelectedImage) -> Result<Verdict, AnalyzeError> {
        match image {
            SelectedImage::File { name, bytes, mime } => {
                // Cheap: `Bytes` clones share the buffer
                self.analyze_file(name, bytes.clone(), mime).await
            }
            SelectedImage::Url(url) => self.analyze_url(url).await,
        }
    }

    /// Upload a local file as the multipart field `file`
    pub async fn analyze_file(
        &self,
        name: &str,
        bytes: Bytes,
        mime: &str,
    ) -> Result<Verdict, AnalyzeError> {
        info!(file = name, size = bytes.len(), "submitting file for analysis");

        let length = bytes.len() as u64;
        let part = Part::stream_with_length(bytes, length)
            .file_name(name.to_string())
            .mime_str(mime)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        Self::read_verdict(response).await
    }

    /// Ask the endpoint to fetch and analyze a remote image
    pub async fn analyze_url(&self, url: &str) -> Result<Verdict, AnalyzeError> {
        info!(url, "submitting url for analysis");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&UrlRequest { url })
            .send()
            .await?;
        Self::read_verdict(response).await
    }

    /// Fetch raw bytes from `url` (used for remote previews)
    pub async fn fetch_bytes(&self, url: &str) -> Result<Bytes, AnalyzeError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?)
    }

    /// The status code is not inspected; 4xx/5xx bodies still carry a
    /// displayable `error`.
    async fn read_verdict(response: reqwest::Response) -> Result<Verdict, AnalyzeError> {
        let status = response.status();
        let body: AnalysisResponse = response.json().await.map_err(AnalyzeError::Decode)?;
        debug!(%status, ?body, "analysis response");

        Verdict::from_response(body).ok_or(AnalyzeError::EmptyResponse)
    }
}
