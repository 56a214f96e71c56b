// Unit tests for the skincare relay core

use serde_json::{json, Value};
use skincare_relay::core::{
    matching::{concern_overlap, matches_profile, normalize_issues},
    profile::{resolve_attribute, resolve_profile},
    resolver::{resolve_recommendations, RecommendationSource},
};
use skincare_relay::models::{
    AnalyzeResponse, InferenceResult, Product, ProfileOverrides, Recommendation, SkinProfile,
    DEFAULT_SKIN_TONE, DEFAULT_SKIN_TYPE,
};
use skincare_relay::services::{RecommendationCatalog, StaticCatalog};

fn issues(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn inference(body: Value) -> InferenceResult {
    serde_json::from_value(body).unwrap()
}

#[test]
fn test_profile_priority_table() {
    let light = json!("light");
    let cases: Vec<(Option<&str>, Option<&Value>, &str)> = vec![
        (Some("dark"), Some(&light), "dark"),
        (Some("dark"), None, "dark"),
        (None, Some(&light), "light"),
        (None, None, DEFAULT_SKIN_TONE),
    ];

    for (requested, inferred, expected) in cases {
        assert_eq!(
            resolve_attribute(requested, inferred, DEFAULT_SKIN_TONE),
            expected,
            "requested={:?} inferred={:?}",
            requested,
            inferred
        );
    }
}

#[test]
fn test_profile_from_query_and_inference() {
    let result = inference(json!({
        "issues": ["acne"],
        "confidence": 0.7,
        "skin_tone": "light",
        "skin_type": "combination"
    }));
    let overrides = ProfileOverrides {
        tone: Some("dark".to_string()),
        skin_type: None,
    };

    let profile = resolve_profile(&overrides, Some(&result));
    assert_eq!(profile.skin_tone, "dark");
    assert_eq!(profile.skin_type, "combination");

    let profile = resolve_profile(&ProfileOverrides::default(), None);
    assert_eq!(profile.skin_tone, DEFAULT_SKIN_TONE);
    assert_eq!(profile.skin_type, DEFAULT_SKIN_TYPE);
}

#[test]
fn test_resolver_with_builtin_catalog() {
    let catalog = StaticCatalog::builtin(10).unwrap();
    let result = inference(json!({
        "issues": ["hyperpigmentation"],
        "confidence": 0.66,
        "skin_tone": "dark"
    }));

    let resolved = resolve_recommendations(&result, &ProfileOverrides::default(), &catalog);

    match &resolved.source {
        RecommendationSource::Catalog(profile) => assert_eq!(profile.skin_tone, "dark"),
        other => panic!("expected catalog fallback, got {:?}", other),
    }

    assert!(!resolved.recommendations.is_empty());
    for rec in &resolved.recommendations {
        match rec {
            Recommendation::Catalog(product) => {
                assert!(product.skin_tones.is_empty()
                    || product.skin_tones.iter().any(|t| t == "dark" || t == "all"));
            }
            Recommendation::Upstream(_) => panic!("catalog returned an upstream value"),
        }
    }
}

#[test]
fn test_resolver_is_deterministic() {
    let catalog = StaticCatalog::builtin(10).unwrap();
    let result = inference(json!({ "issues": ["acne", "redness"], "confidence": 0.5 }));
    let overrides = ProfileOverrides::default();

    let first = resolve_recommendations(&result, &overrides, &catalog).recommendations;
    let second = resolve_recommendations(&result, &overrides, &catalog).recommendations;

    assert_eq!(first, second);
}

#[test]
fn test_catalog_respects_profile() {
    let catalog = StaticCatalog::builtin(10).unwrap();
    let profile = SkinProfile {
        skin_tone: "light".to_string(),
        skin_type: "dry".to_string(),
    };

    let recs = catalog.recommend(&issues(&["dryness"]), &profile);
    assert!(!recs.is_empty());
    for rec in recs {
        if let Recommendation::Catalog(product) = rec {
            assert!(matches_profile(&product, &profile));
            assert!(concern_overlap(&product, &normalize_issues(&issues(&["dryness"]))) > 0);
        }
    }
}

#[test]
fn test_catalog_from_custom_json() {
    let catalog = StaticCatalog::from_json(
        r#"[{"id": "x1", "name": "Balm", "brand": "B", "category": "balm", "concerns": ["Eczema"]}]"#,
        5,
    )
    .unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.recommend(&issues(&["eczema"]), &SkinProfile::default()).len(), 1);
    assert!(StaticCatalog::from_json("not json", 5).is_err());
}

#[test]
fn test_response_serialization_shape() {
    let result = inference(json!({
        "issues": ["acne"],
        "confidence": 0.8,
        "skin_type": { "label": "oily", "score": 0.7 },
        "recommendations": []
    }));
    let product = Product {
        id: "p".to_string(),
        name: "Gel".to_string(),
        brand: "B".to_string(),
        category: "cleanser".to_string(),
        description: String::new(),
        concerns: vec!["acne".to_string()],
        skin_tones: vec![],
        skin_types: vec![],
    };

    let response = AnalyzeResponse::assemble(result, vec![Recommendation::from(product)]);
    let body = serde_json::to_value(&response).unwrap();

    assert_eq!(body["skin_type"], json!({ "label": "oily", "score": 0.7 }));
    assert!(body.get("skin_tone").is_none());
    assert_eq!(body["recommendations"][0]["id"], "p");
    assert_eq!(body["recommendations"][0]["skinTones"], json!([]));
}
