use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Fallback literal used when no skin tone is known
pub const DEFAULT_SKIN_TONE: &str = "defaultTone";

/// Fallback literal used when no skin type is known
pub const DEFAULT_SKIN_TYPE: &str = "defaultType";

/// Image received on `/analyze`, owned by a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl UploadedImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Parsed body returned by the inference service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub issues: Vec<String>,
    /// Echoed exactly as the service sent it
    pub confidence: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_tone: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
}

impl InferenceResult {
    /// Upstream recommendations, only when the service actually supplied some
    pub fn supplied_recommendations(&self) -> Option<&[Recommendation]> {
        self.recommendations
            .as_deref()
            .filter(|recs| !recs.is_empty())
    }
}

/// Resolved key for the fallback catalog lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkinProfile {
    #[serde(rename = "skinTone")]
    pub skin_tone: String,
    #[serde(rename = "skinType")]
    pub skin_type: String,
}

impl Default for SkinProfile {
    fn default() -> Self {
        Self {
            skin_tone: DEFAULT_SKIN_TONE.to_string(),
            skin_type: DEFAULT_SKIN_TYPE.to_string(),
        }
    }
}

/// Caller-supplied profile overrides (`?tone=..&type=..`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOverrides {
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default, rename = "type")]
    pub skin_type: Option<String>,
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Issues this product addresses
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(rename = "skinTones", default)]
    pub skin_tones: Vec<String>,
    #[serde(rename = "skinTypes", default)]
    pub skin_types: Vec<String>,
}

/// A recommendation in the `/analyze` response.
///
/// Upstream recommendations are carried through untouched; catalog ones are
/// serialized from the product record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Recommendation {
    Catalog(Product),
    Upstream(Value),
}

impl<'de> Deserialize<'de> for Recommendation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Recommendation::Upstream)
    }
}

impl From<Product> for Recommendation {
    fn from(product: Product) -> Self {
        Recommendation::Catalog(product)
    }
}
