// Filter-driven recommendations.
//
// A CatalogFilter picks content by genre, theme, character archetype and
// type. Tag criteria combine with OR: an item passes when it carries any
// requested genre, theme or archetype. The type list, when given, is applied
// on top of that as a hard restriction.
//
// Fighters are then ranked by their mean score across the matching items.
// When nothing in the catalog matches, or every fighter scores zero against
// the matches, fighters are scored directly against the requested tags.

use tracing::debug;

use super::engine::{aggregate_for_selection, score_tags, weighted_total};
use crate::models::{ContentItem, FighterProfile, SimilarityResult, TagProfile, TagSet};
use crate::tags::normalize_tag;

/// Sidebar-style filter over the content catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub genres: TagSet,
    pub themes: TagSet,
    /// Character archetypes. Stored with the narrative tags on content.
    pub characters: TagSet,
    /// Content types, compared case-insensitively.
    pub types: Vec<String>,
}

fn normalized(values: &[String]) -> TagSet {
    values.iter().filter_map(|v| normalize_tag(v)).collect()
}

impl CatalogFilter {
    /// Build a filter from raw user input. Tag values are normalized the same
    /// way catalog tags are, so "Lone Wolf" finds `lone-wolf`.
    pub fn new(genres: &[String], themes: &[String], characters: &[String], types: &[String]) -> Self {
        Self {
            genres: normalized(genres),
            themes: normalized(themes),
            characters: normalized(characters),
            types: types
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    fn has_tag_criteria(&self) -> bool {
        !(self.genres.is_empty() && self.themes.is_empty() && self.characters.is_empty())
    }

    /// True when no criterion was given at all.
    pub fn is_empty(&self) -> bool {
        !self.has_tag_criteria() && self.types.is_empty()
    }

    /// Whether a content item passes the filter. An empty filter passes
    /// nothing.
    pub fn matches(&self, item: &ContentItem) -> bool {
        if self.is_empty() {
            return false;
        }

        let tag_match = !self.has_tag_criteria()
            || !self.genres.is_disjoint(&item.tags.genres)
            || !self.themes.is_disjoint(&item.tags.themes)
            || !self.characters.is_disjoint(&item.tags.narratives);

        let type_match = self.types.is_empty()
            || self
                .types
                .iter()
                .any(|t| item.content_type.trim().eq_ignore_ascii_case(t));

        tag_match && type_match
    }

    /// The requested tags as a profile, archetypes in the narrative slot.
    pub fn as_profile(&self) -> TagProfile {
        TagProfile {
            themes: self.themes.clone(),
            genres: self.genres.clone(),
            narratives: self.characters.clone(),
        }
    }
}

/// Items from `candidates` that pass the filter, in their original order.
pub fn filter_catalog<'a>(candidates: &[&'a ContentItem], filter: &CatalogFilter) -> Vec<&'a ContentItem> {
    candidates.iter().copied().filter(|c| filter.matches(c)).collect()
}

/// Score every fighter straight against the requested tags.
///
/// Only fighters sharing at least one tag are returned. Results carry an
/// empty content id since no catalog item was involved.
pub fn match_fighters_by_tags(
    filter: &CatalogFilter,
    fighters: &[FighterProfile],
    top_n: usize,
) -> Vec<SimilarityResult> {
    let wanted = filter.as_profile();
    let mut results: Vec<SimilarityResult> = fighters
        .iter()
        .map(|f| {
            let subscores = score_tags(&wanted, &f.tags);
            SimilarityResult {
                content_id: String::new(),
                fighter_id: f.id.clone(),
                score: weighted_total(&subscores),
                subscores,
            }
        })
        .filter(|r| r.score > 0.0)
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.fighter_id.cmp(&b.fighter_id)));
    results.truncate(top_n.max(1));
    results
}

/// Rank fighters for everything in `candidates` that passes the filter.
///
/// An empty filter gives no results.
pub fn recommend_for_filter(
    candidates: &[&ContentItem],
    fighters: &[FighterProfile],
    filter: &CatalogFilter,
    top_n: usize,
) -> Vec<SimilarityResult> {
    if filter.is_empty() {
        return Vec::new();
    }

    let matched = filter_catalog(candidates, filter);
    let ranked = aggregate_for_selection(&matched, fighters, top_n);
    debug!(
        candidates = candidates.len(),
        matched = matched.len(),
        returned = ranked.len(),
        "Ranked fighters for catalog filter"
    );

    let scored = ranked.iter().any(|r| r.score > 0.0);
    if !scored && filter.has_tag_criteria() {
        debug!("No catalog match scored, matching fighters on requested tags");
        return match_fighters_by_tags(filter, fighters, top_n);
    }
    ranked
}

/// Every tag available for filtering: themes and narratives from both
/// content and fighters, genres from content only.
pub fn available_filters(content: &[ContentItem], fighters: &[FighterProfile]) -> TagProfile {
    let mut all = TagProfile::default();
    for item in content {
        all.merge(item.tags.clone());
    }
    for fighter in fighters {
        all.themes.extend(fighter.tags.themes.iter().cloned());
        all.narratives.extend(fighter.tags.narratives.iter().cloned());
    }
    all
}
