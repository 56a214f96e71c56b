use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query for `GET /recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsQuery {
    /// Comma-separated issue list, e.g. `acne,redness`
    #[serde(default)]
    pub issues: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default, rename = "type")]
    pub skin_type: Option<String>,
}

impl RecommendationsQuery {
    pub fn issue_list(&self) -> Vec<String> {
        self.issues
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|issue| !issue.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Body for `POST /recommendations`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[validate(length(min = 1))]
    pub issues: Vec<String>,
    #[serde(alias = "skin_tone", rename = "skinTone", default)]
    pub skin_tone: Option<String>,
    #[serde(alias = "skin_type", rename = "skinType", default)]
    pub skin_type: Option<String>,
}
