//! Skincare relay - skin analysis backend
//!
//! Accepts a skin image, forwards it to an external inference service and
//! answers with the detected issues plus product recommendations, falling back
//! to a static catalog when the service supplies none.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Analyzer, AnalyzeError, resolve_attribute, resolve_profile, resolve_recommendations};
pub use crate::models::{UploadedImage, InferenceResult, SkinProfile, Recommendation, AnalyzeResponse};
pub use crate::services::{InferenceClient, HttpInferenceClient, RecommendationCatalog, StaticCatalog};
