use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use crate::models::domain::{InferenceResult, Recommendation, SkinProfile};

/// Response for the analyze endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeResponse {
    pub issues: Vec<String>,
    pub confidence: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_tone: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<Value>,
    pub recommendations: Vec<Recommendation>,
}

impl AnalyzeResponse {
    /// Carry the descriptive inference fields over and substitute the resolved recommendations
    pub fn assemble(result: InferenceResult, recommendations: Vec<Recommendation>) -> Self {
        Self {
            issues: result.issues,
            confidence: result.confidence,
            skin_tone: result.skin_tone,
            skin_type: result.skin_type,
            recommendations,
        }
    }
}

/// Response for the recommendations endpoints
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    pub profile: SkinProfile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
