use crate::core::matching::{concern_overlap, matches_profile, normalize_issues};
use crate::models::{Product, Recommendation, SkinProfile};
use std::path::Path;
use thiserror::Error;

/// Catalog shipped with the service
const BUILTIN_CATALOG: &str = include_str!("../../data/products.json");

/// Errors that can occur when loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Product lookup used when the inference service supplies no recommendations.
///
/// Implementations must be total: an unknown issue yields an empty list, never an error.
pub trait RecommendationCatalog: Send + Sync {
    fn recommend(&self, issues: &[String], profile: &SkinProfile) -> Vec<Recommendation>;

    fn product(&self, _id: &str) -> Option<Product> {
        None
    }
}

/// In-memory catalog loaded once at startup
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
    max_results: usize,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>, max_results: usize) -> Self {
        Self {
            products,
            max_results,
        }
    }

    /// Load the built-in product list
    pub fn builtin(max_results: usize) -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG, max_results)
    }

    pub fn from_json(json: &str, max_results: usize) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products, max_results))
    }

    pub fn from_path<P: AsRef<Path>>(path: P, max_results: usize) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, max_results)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl RecommendationCatalog for StaticCatalog {
    fn recommend(&self, issues: &[String], profile: &SkinProfile) -> Vec<Recommendation> {
        let issues = normalize_issues(issues);
        if issues.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<(usize, &Product)> = self
            .products
            .iter()
            .filter(|product| matches_profile(product, profile))
            .map(|product| (concern_overlap(product, &issues), product))
            .filter(|(overlap, _)| *overlap > 0)
            .collect();

        // Stable sort keeps catalog order among equal overlaps
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        ranked
            .into_iter()
            .take(self.max_results)
            .map(|(_, product)| Recommendation::from(product.clone()))
            .collect()
    }

    fn product(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }
}
