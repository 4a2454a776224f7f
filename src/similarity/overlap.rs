// Set-overlap primitives for tag profiles.
//
// Plain Jaccard over tag sets:
//
//   |A ∩ B| / |A ∪ B|
//
// An empty set on either side means there is nothing to compare, so the
// overlap is 0.0 rather than undefined.

use crate::models::{TagCategory, TagProfile, TagSet};

/// Jaccard overlap of two tag sets, from 0.0 (disjoint) to 1.0 (identical).
///
/// Returns 0.0 when either set is empty.
pub fn jaccard(a: &TagSet, b: &TagSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    shared as f64 / union as f64
}

/// Tags present in both sets, in sorted order.
pub fn shared_tags<'a>(a: &'a TagSet, b: &'a TagSet) -> Vec<&'a str> {
    a.intersection(b).map(String::as_str).collect()
}

/// Per-category intersection of two profiles.
pub fn intersection_profile(a: &TagProfile, b: &TagProfile) -> TagProfile {
    let mut shared = TagProfile::default();
    for category in TagCategory::ALL {
        *shared.get_mut(category) = a.get(category).intersection(b.get(category)).cloned().collect();
    }
    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> TagSet {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_identical_sets() {
        let a = set(&["underdog", "rivalry"]);
        assert!((jaccard(&a, &a) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_partial_overlap() {
        let a = set(&["underdog", "rivalry"]);
        let b = set(&["underdog", "comeback"]);
        let score = jaccard(&a, &b);
        assert!(
            (score - 1.0 / 3.0).abs() < 0.001,
            "One shared tag out of three should score 1/3, got {score}"
        );
    }

    #[test]
    fn test_empty_side_scores_zero() {
        let a = set(&["underdog"]);
        assert_eq!(jaccard(&a, &TagSet::new()), 0.0);
        assert_eq!(jaccard(&TagSet::new(), &TagSet::new()), 0.0);
    }

    #[test]
    fn test_shared_tags_sorted() {
        let a = set(&["rivalry", "underdog", "action"]);
        let b = set(&["underdog", "action"]);
        assert_eq!(shared_tags(&a, &b), vec!["action", "underdog"]);
    }

    #[test]
    fn test_shared_tags_outlive_call() {
        let content = set(&["underdog", "rivalry"]);
        let fighter = set(&["rivalry"]);
        let shared: Vec<&str> = shared_tags(&content, &fighter);
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0], "rivalry");
        assert!(shared_tags(&content, &TagSet::new()).is_empty());
    }
}
