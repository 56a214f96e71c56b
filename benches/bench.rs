// Criterion benchmarks for the skincare relay

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Number};
use skincare_relay::core::{profile::resolve_attribute, resolver::resolve_recommendations};
use skincare_relay::models::{InferenceResult, Product, ProfileOverrides, SkinProfile, DEFAULT_SKIN_TONE};
use skincare_relay::services::{RecommendationCatalog, StaticCatalog};

const CONCERNS: [&str; 6] = ["acne", "redness", "dryness", "hyperpigmentation", "wrinkles", "oiliness"];
const TONES: [&str; 4] = ["light", "medium", "tan", "dark"];
const TYPES: [&str; 4] = ["oily", "dry", "combination", "sensitive"];

fn create_product(id: usize) -> Product {
    Product {
        id: format!("p-{}", id),
        name: format!("Product {}", id),
        brand: "Bench".to_string(),
        category: "serum".to_string(),
        description: String::new(),
        concerns: vec![
            CONCERNS[id % CONCERNS.len()].to_string(),
            CONCERNS[(id / 3) % CONCERNS.len()].to_string(),
        ],
        skin_tones: if id % 5 == 0 { vec![] } else { vec![TONES[id % TONES.len()].to_string()] },
        skin_types: vec![TYPES[id % TYPES.len()].to_string(), "all".to_string()],
    }
}

fn bench_resolve_attribute(c: &mut Criterion) {
    let inferred = json!("medium");
    c.bench_function("resolve_attribute", |b| {
        b.iter(|| resolve_attribute(black_box(None), black_box(Some(&inferred)), DEFAULT_SKIN_TONE))
    });
}

fn bench_catalog_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_lookup");
    let issues = vec!["acne".to_string(), "redness".to_string()];
    let profile = SkinProfile {
        skin_tone: "dark".to_string(),
        skin_type: "oily".to_string(),
    };

    for size in [12, 100, 1000, 10000].iter() {
        let catalog = StaticCatalog::new((0..*size).map(create_product).collect(), 10);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| catalog.recommend(black_box(&issues), black_box(&profile)))
        });
    }

    group.finish();
}

fn bench_resolve_recommendations(c: &mut Criterion) {
    let catalog = StaticCatalog::builtin(10).expect("builtin catalog");
    let result = InferenceResult {
        issues: vec!["acne".to_string(), "hyperpigmentation".to_string()],
        confidence: Number::from_f64(0.8).expect("finite"),
        skin_tone: Some(json!("medium")),
        skin_type: None,
        recommendations: None,
    };
    let overrides = ProfileOverrides::default();

    c.bench_function("resolve_recommendations_fallback", |b| {
        b.iter(|| resolve_recommendations(black_box(&result), black_box(&overrides), &catalog))
    });
}

criterion_group!(
    benches,
    bench_resolve_attribute,
    bench_catalog_lookup,
    bench_resolve_recommendations
);
criterion_main!(benches);
