// Core pipeline exports
pub mod analyzer;
pub mod matching;
pub mod profile;
pub mod resolver;
pub mod upload;

pub use analyzer::{Analyzer, AnalyzeError};
pub use matching::{concern_overlap, matches_profile, normalize_issues};
pub use profile::{resolve_attribute, resolve_profile};
pub use resolver::{resolve_recommendations, RecommendationSource, ResolvedRecommendations};
pub use upload::{extract_image, is_multipart, ValidationError, IMAGE_FIELD};
