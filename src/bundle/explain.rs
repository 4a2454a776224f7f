// Explanation text for a content/fighter match.
//
// The template names the category that drove the match and the tags the
// two sides share in it. Output is fully determined by the inputs.

use crate::models::{ContentItem, FighterProfile, SimilarityResult};
use crate::similarity::shared_tags;

/// Explain why `fighter` was matched to `content`.
///
/// Names the dominant subscore category (ties go theme, then genre, then
/// narrative) and the overlapping tags from that category. All-zero
/// subscores produce a "no strong thematic overlap" sentence instead.
pub fn explain(content: &ContentItem, fighter: &FighterProfile, result: &SimilarityResult) -> String {
    let Some(category) = result.subscores.dominant() else {
        return format!(
            "{} and {} have no strong thematic overlap.",
            content.title, fighter.name
        );
    };

    let shared = shared_tags(content.tags.get(category), fighter.tags.get(category));
    format!(
        "{} matches {} through {} ({:.0}% {} overlap): {}. Match score {:.2}.",
        fighter.name,
        content.title,
        category_phrase(shared.len(), category.as_str()),
        result.subscores.get(category) * 100.0,
        category,
        shared.join(", "),
        result.score,
    )
}

fn category_phrase(count: usize, category: &str) -> String {
    if count == 1 {
        format!("a shared {category}")
    } else {
        format!("shared {category}s")
    }
}
