use crate::core::resolver::{resolve_recommendations, RecommendationSource};
use crate::core::upload::ValidationError;
use crate::models::{AnalyzeResponse, ErrorResponse, ProfileOverrides, UploadedImage};
use crate::services::{InferenceClient, InferenceError, RecommendationCatalog};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::sync::Arc;
use thiserror::Error;

/// Failure of an `/analyze` request
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Inference endpoint is not configured")]
    Configuration,

    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),
}

impl AnalyzeError {
    /// Minimal, non-leaking body text
    pub fn client_message(&self) -> &'static str {
        match self {
            AnalyzeError::Validation(err) => err.client_message(),
            AnalyzeError::Configuration => "ML service not configured",
            AnalyzeError::Inference(_) => "Failed to analyze image",
        }
    }
}

impl ResponseError for AnalyzeError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::Validation(err) => err.status_code(),
            AnalyzeError::Configuration | AnalyzeError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.client_message()))
    }
}

/// Orchestrates one analysis: proxy the image, resolve recommendations, assemble the response.
///
/// Holds no per-request state; clones share the same collaborators.
#[derive(Clone)]
pub struct Analyzer {
    inference: Option<Arc<dyn InferenceClient>>,
    catalog: Arc<dyn RecommendationCatalog>,
}

impl Analyzer {
    pub fn new(
        inference: Option<Arc<dyn InferenceClient>>,
        catalog: Arc<dyn RecommendationCatalog>,
    ) -> Self {
        Self { inference, catalog }
    }

    /// The inference client, or a configuration error when none is set up
    pub fn inference_client(&self) -> Result<&dyn InferenceClient, AnalyzeError> {
        self.inference.as_deref().ok_or(AnalyzeError::Configuration)
    }

    pub async fn analyze(
        &self,
        image: UploadedImage,
        overrides: &ProfileOverrides,
    ) -> Result<AnalyzeResponse, AnalyzeError> {
        let client = self.inference_client()?;

        let result = client.infer(image).await?;

        let resolved = resolve_recommendations(&result, overrides, self.catalog.as_ref());
        match &resolved.source {
            RecommendationSource::Inference => {
                tracing::debug!("Using {} recommendations from inference service", resolved.recommendations.len());
            }
            RecommendationSource::Catalog(profile) => {
                tracing::debug!(
                    "Catalog fallback for issues {:?} with profile {:?}: {} recommendations",
                    result.issues,
                    profile,
                    resolved.recommendations.len()
                );
            }
        }

        Ok(AnalyzeResponse::assemble(result, resolved.recommendations))
    }
}
