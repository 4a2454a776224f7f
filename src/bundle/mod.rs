// Bundle composer: content + fighter + a fight to watch + why they fit.

pub mod explain;
pub mod fights;

pub use explain::explain;
pub use fights::{describe_fight, recent_fights, select_fight};

use tracing::debug;

use crate::models::{Bundle, ContentItem, FightRecord, FighterProfile};
use crate::similarity::{rank_fighters_for_content, score};

/// Compose a bundle for one content item and one fighter.
///
/// Never fails: a fighter without fight records gets a bundle with no fight.
pub fn build_bundle(content: &ContentItem, fighter: &FighterProfile, records: &[FightRecord]) -> Bundle {
    let similarity = score(content, fighter);
    let fight = select_fight(&fighter.id, records).cloned();

    let mut explanation = explain(content, fighter, &similarity);
    if let Some(record) = &fight {
        explanation.push_str(&format!(" Watch {} {}.", fighter.name, describe_fight(record)));
    }

    Bundle {
        content: content.clone(),
        fighter: fighter.clone(),
        fight,
        similarity,
        explanation,
    }
}

/// One bundle per selected content item, each with that item's top fighter.
///
/// Takes the first `max_bundles` items of the selection in order. No
/// fighters or no selection gives no bundles.
pub fn bundles_for_selection(
    selected: &[&ContentItem],
    fighters: &[FighterProfile],
    records: &[FightRecord],
    max_bundles: usize,
) -> Vec<Bundle> {
    let mut bundles = Vec::new();
    for content in selected.iter().take(max_bundles) {
        let top = rank_fighters_for_content(content, fighters, 1);
        let Some(best) = top.first() else {
            continue;
        };
        if let Some(fighter) = fighters.iter().find(|f| f.id == best.fighter_id) {
            bundles.push(build_bundle(content, fighter, records));
        }
    }

    debug!(
        selected = selected.len(),
        bundles = bundles.len(),
        "Composed bundles for selection"
    );
    bundles
}
