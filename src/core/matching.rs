use crate::models::{Product, SkinProfile, DEFAULT_SKIN_TONE, DEFAULT_SKIN_TYPE};

/// Wildcard entry in a product's tone/type list
const ANY: &str = "all";

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalize detected issues for comparison against product concerns
pub fn normalize_issues(issues: &[String]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| normalize(issue))
        .filter(|issue| !issue.is_empty())
        .collect()
}

/// Number of the product's concerns that appear in `issues` (already normalized)
#[inline]
pub fn concern_overlap(product: &Product, issues: &[String]) -> usize {
    product
        .concerns
        .iter()
        .filter(|concern| issues.contains(&normalize(concern)))
        .count()
}

#[inline]
fn accepts(allowed: &[String], value: &str, default: &str) -> bool {
    if allowed.is_empty() || value == default {
        return true;
    }

    let value = normalize(value);
    allowed.iter().any(|entry| {
        let entry = normalize(entry);
        entry == ANY || entry == value
    })
}

/// Check whether the product suits the resolved skin profile.
///
/// Default literals act as wildcards, as does an empty list or an `"all"` entry.
#[inline]
pub fn matches_profile(product: &Product, profile: &SkinProfile) -> bool {
    accepts(&product.skin_tones, &profile.skin_tone, DEFAULT_SKIN_TONE)
        && accepts(&product.skin_types, &profile.skin_type, DEFAULT_SKIN_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(concerns: &[&str], tones: &[&str], types: &[&str]) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Test".to_string(),
            brand: "Brand".to_string(),
            category: "serum".to_string(),
            description: String::new(),
            concerns: concerns.iter().map(|s| s.to_string()).collect(),
            skin_tones: tones.iter().map(|s| s.to_string()).collect(),
            skin_types: types.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn profile(tone: &str, skin_type: &str) -> SkinProfile {
        SkinProfile {
            skin_tone: tone.to_string(),
            skin_type: skin_type.to_string(),
        }
    }

    #[test]
    fn test_concern_overlap_case_insensitive() {
        let p = product(&["Acne", "Oiliness", "pores"], &[], &[]);
        let issues = normalize_issues(&[" acne ".to_string(), "PORES".to_string()]);
        assert_eq!(concern_overlap(&p, &issues), 2);
    }

    #[test]
    fn test_defaults_are_wildcards() {
        let p = product(&["acne"], &["dark"], &["oily"]);
        assert!(matches_profile(&p, &SkinProfile::default()));
    }

    #[test]
    fn test_profile_filtering() {
        let p = product(&["acne"], &["medium", "dark"], &["all"]);
        assert!(matches_profile(&p, &profile("Dark", "dry")));
        assert!(!matches_profile(&p, &profile("light", "dry")));
    }
}
