// Weighted multi-factor similarity between content items and fighters.
//
// Each of the three tag categories gets its own Jaccard subscore and the
// total is a fixed weighted sum:
//
//   total = 0.5 * theme + 0.3 * genre + 0.2 * narrative
//
// Rankings sort by total descending and break ties on the identifier of the
// ranked entity, ascending, so equal inputs always produce the same order.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use super::overlap::jaccard;
use crate::models::{ContentItem, FighterProfile, Subscores, SimilarityResult, TagProfile};

/// Weight of the theme subscore in the total.
pub const THEME_WEIGHT: f64 = 0.5;
/// Weight of the genre subscore in the total.
pub const GENRE_WEIGHT: f64 = 0.3;
/// Weight of the narrative subscore in the total.
pub const NARRATIVE_WEIGHT: f64 = 0.2;

/// Per-category Jaccard overlaps between two tag profiles.
pub fn score_tags(content: &TagProfile, fighter: &TagProfile) -> Subscores {
    Subscores {
        theme: jaccard(&content.themes, &fighter.themes),
        genre: jaccard(&content.genres, &fighter.genres),
        narrative: jaccard(&content.narratives, &fighter.narratives),
    }
}

/// Combine subscores into the weighted total, always within [0, 1].
pub fn weighted_total(subscores: &Subscores) -> f64 {
    let total = THEME_WEIGHT * subscores.theme
        + GENRE_WEIGHT * subscores.genre
        + NARRATIVE_WEIGHT * subscores.narrative;
    total.clamp(0.0, 1.0)
}

/// Score one content item against one fighter.
pub fn score(content: &ContentItem, fighter: &FighterProfile) -> SimilarityResult {
    let subscores = score_tags(&content.tags, &fighter.tags);
    SimilarityResult {
        content_id: content.id.clone(),
        fighter_id: fighter.id.clone(),
        score: weighted_total(&subscores),
        subscores,
    }
}

/// Descending by score, then ascending by the given identifier.
fn by_score_then_id(a: &SimilarityResult, b: &SimilarityResult, id: fn(&SimilarityResult) -> &str) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| id(a).cmp(id(b)))
}

fn fighter_key(result: &SimilarityResult) -> &str {
    &result.fighter_id
}

fn content_key(result: &SimilarityResult) -> &str {
    &result.content_id
}

/// Sort and cut a result list. A `top_n` of zero is treated as one.
fn rank(mut results: Vec<SimilarityResult>, top_n: usize, id: fn(&SimilarityResult) -> &str) -> Vec<SimilarityResult> {
    results.sort_by(|a, b| by_score_then_id(a, b, id));
    results.truncate(top_n.max(1));
    results
}

/// Rank every fighter against one content item.
///
/// Returns `min(top_n, fighters.len())` results. Fighters without tags score
/// 0.0 and sort last, but are never dropped before truncation.
pub fn rank_fighters_for_content(
    content: &ContentItem,
    fighters: &[FighterProfile],
    top_n: usize,
) -> Vec<SimilarityResult> {
    let results: Vec<SimilarityResult> = fighters.iter().map(|f| score(content, f)).collect();
    let ranked = rank(results, top_n, fighter_key);

    debug!(
        content = %content.id,
        candidates = fighters.len(),
        returned = ranked.len(),
        top = ranked.first().map(|r| r.score).unwrap_or(0.0),
        "Ranked fighters for content"
    );
    ranked
}

/// Rank every content item against one fighter. Ties break on content id.
pub fn rank_content_for_fighter(
    fighter: &FighterProfile,
    content: &[ContentItem],
    top_n: usize,
) -> Vec<SimilarityResult> {
    let results: Vec<SimilarityResult> = content.iter().map(|c| score(c, fighter)).collect();
    let ranked = rank(results, top_n, content_key);

    debug!(
        fighter = %fighter.id,
        candidates = content.len(),
        returned = ranked.len(),
        "Ranked content for fighter"
    );
    ranked
}

/// Rank fighters by their mean total across a selection of content items.
///
/// Repeated items in the selection count once. Each result carries the mean
/// as its score, plus the content id and subscores of the selected item that
/// matched the fighter best, so a one-item selection gives exactly the
/// `rank_fighters_for_content` result. An empty selection gives no results.
pub fn aggregate_for_selection(
    selected: &[&ContentItem],
    fighters: &[FighterProfile],
    top_n: usize,
) -> Vec<SimilarityResult> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut selection: Vec<&ContentItem> = Vec::with_capacity(selected.len());
    for &item in selected {
        if seen.insert(item.id.as_str()) {
            selection.push(item);
        }
    }

    if selection.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::with_capacity(fighters.len());
    for fighter in fighters {
        let mut sum = 0.0;
        let mut best: Option<SimilarityResult> = None;

        for item in &selection {
            let result = score(item, fighter);
            sum += result.score;
            let better = match &best {
                None => true,
                Some(current) => by_score_then_id(&result, current, content_key) == Ordering::Less,
            };
            if better {
                best = Some(result);
            }
        }

        if let Some(best) = best {
            results.push(SimilarityResult {
                score: sum / selection.len() as f64,
                ..best
            });
        }
    }

    let ranked = rank(results, top_n, fighter_key);
    debug!(
        selected = selection.len(),
        candidates = fighters.len(),
        returned = ranked.len(),
        "Aggregated fighter ranking for selection"
    );
    ranked
}
