use crate::core::profile::resolve_profile;
use crate::models::{InferenceResult, ProfileOverrides, Recommendation, SkinProfile};
use crate::services::RecommendationCatalog;

/// Where the final recommendation list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationSource {
    /// Supplied by the inference service
    Inference,
    /// Looked up in the catalog with the resolved profile
    Catalog(SkinProfile),
}

#[derive(Debug, Clone)]
pub struct ResolvedRecommendations {
    pub source: RecommendationSource,
    pub recommendations: Vec<Recommendation>,
}

/// Choose the recommendation set for one request.
///
/// Non-empty upstream recommendations are used verbatim and the catalog is not
/// consulted. Otherwise the catalog is queried with the detected issues and the
/// resolved skin profile; an empty result is a valid outcome.
pub fn resolve_recommendations(
    result: &InferenceResult,
    overrides: &ProfileOverrides,
    catalog: &dyn RecommendationCatalog,
) -> ResolvedRecommendations {
    if let Some(upstream) = result.supplied_recommendations() {
        return ResolvedRecommendations {
            source: RecommendationSource::Inference,
            recommendations: upstream.to_vec(),
        };
    }

    let profile = resolve_profile(overrides, Some(result));
    let recommendations = catalog.recommend(&result.issues, &profile);

    ResolvedRecommendations {
        source: RecommendationSource::Catalog(profile),
        recommendations,
    }
}
