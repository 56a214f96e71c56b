use crate::models::{InferenceResult, ProfileOverrides, SkinProfile, DEFAULT_SKIN_TONE, DEFAULT_SKIN_TYPE};
use serde_json::Value;

/// Text form of an inferred attribute; empty or falsy values count as absent.
fn inferred_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Resolve one profile attribute.
///
/// Priority: `requested` (query parameter) > `inferred` (inference field) > `default`.
/// Empty strings are skipped at every level.
pub fn resolve_attribute(requested: Option<&str>, inferred: Option<&Value>, default: &str) -> String {
    requested
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| inferred.and_then(inferred_text))
        .unwrap_or_else(|| default.to_string())
}

/// Build the fallback lookup key, resolving tone and type independently
pub fn resolve_profile(overrides: &ProfileOverrides, result: Option<&InferenceResult>) -> SkinProfile {
    SkinProfile {
        skin_tone: resolve_attribute(
            overrides.tone.as_deref(),
            result.and_then(|r| r.skin_tone.as_ref()),
            DEFAULT_SKIN_TONE,
        ),
        skin_type: resolve_attribute(
            overrides.skin_type.as_deref(),
            result.and_then(|r| r.skin_type.as_ref()),
            DEFAULT_SKIN_TYPE,
        ),
    }
}
