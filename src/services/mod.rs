// Service exports
pub mod catalog;
pub mod inference;

pub use catalog::{RecommendationCatalog, StaticCatalog, CatalogError};
pub use inference::{InferenceClient, HttpInferenceClient, InferenceError, ContentTypeMode};
