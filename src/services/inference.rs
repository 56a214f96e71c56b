use crate::models::{InferenceResult, UploadedImage};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on one inference round trip
pub const INFERENCE_TIMEOUT: Duration = Duration::from_secs(30);

/// Content type sent when the upload's own type is not forwarded
pub const GENERIC_CONTENT_TYPE: &str = "application/octet-stream";

/// Errors that can occur when calling the inference service
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference request timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    RequestError(reqwest::Error),

    #[error("Inference service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            InferenceError::Timeout
        } else {
            InferenceError::RequestError(err)
        }
    }
}

/// Which `Content-Type` accompanies the forwarded bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentTypeMode {
    /// Forward the MIME type declared on the uploaded file
    #[default]
    Upload,
    /// Always send `application/octet-stream`
    OctetStream,
}

impl ContentTypeMode {
    pub fn header_for<'a>(&self, image: &'a UploadedImage) -> &'a str {
        match self {
            ContentTypeMode::Upload if !image.mime_type.is_empty() => &image.mime_type,
            _ => GENERIC_CONTENT_TYPE,
        }
    }
}

/// Capability to turn an image into an [`InferenceResult`]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn infer(&self, image: UploadedImage) -> Result<InferenceResult, InferenceError>;
}

/// Inference client backed by the external ML service
///
/// Sends a single POST per image with the raw bytes as body. There is no
/// retry; a failed attempt is returned to the caller as is.
pub struct HttpInferenceClient {
    endpoint: String,
    content_type: ContentTypeMode,
    timeout: Duration,
    client: Client,
}

impl HttpInferenceClient {
    /// Create a client with the standard 30s timeout
    pub fn new(endpoint: String, content_type: ContentTypeMode) -> Result<Self, InferenceError> {
        Self::with_timeout(endpoint, content_type, INFERENCE_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: String,
        content_type: ContentTypeMode,
        timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(InferenceError::RequestError)?;

        Ok(Self {
            endpoint,
            content_type,
            timeout,
            client,
        })
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn infer(&self, image: UploadedImage) -> Result<InferenceResult, InferenceError> {
        let content_type = self.content_type.header_for(&image).to_string();

        tracing::debug!(
            "Forwarding {} bytes ({}) to {} with a {:?} timeout",
            image.len(),
            content_type,
            self.endpoint,
            self.timeout
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, content_type)
            .body(image.bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body)
            .map_err(|e| InferenceError::InvalidResponse(format!("Failed to parse inference result: {}", e)))
    }
}
