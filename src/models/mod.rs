// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UploadedImage, InferenceResult, SkinProfile, ProfileOverrides, Product, Recommendation, DEFAULT_SKIN_TONE, DEFAULT_SKIN_TYPE};
pub use requests::{RecommendationsQuery, RecommendationsRequest};
pub use responses::{AnalyzeResponse, RecommendationsResponse, HealthResponse, ErrorResponse};
