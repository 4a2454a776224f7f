// Tag extractor trait, so the tagging strategy can be swapped.
//
// The default implementation matches a fixed keyword vocabulary. Anything
// that turns raw fields into a TagProfile deterministically can stand in.

use crate::models::{FightRecord, FighterBio, FighterStats, TagProfile};

/// Raw descriptive fields of a catalog entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFields<'a> {
    pub title: &'a str,
    pub content_type: &'a str,
    pub description: &'a str,
    pub genre_labels: &'a [String],
    /// Tags already present in the source row, merged in after normalization
    pub preset: Option<&'a TagProfile>,
}

/// Raw lore and stat fields of a fighter.
#[derive(Debug, Clone, Copy)]
pub struct FighterFields<'a> {
    pub id: &'a str,
    pub lore: &'a str,
    pub bio: &'a FighterBio,
    pub stats: &'a FighterStats,
}

/// Trait for deriving tag profiles from raw fields.
///
/// Implementations must be pure: identical fields give identical profiles,
/// and missing text gives empty sets rather than an error.
pub trait TagExtractor {
    fn content_tags(&self, fields: &ContentFields<'_>) -> TagProfile;

    /// `history` may contain other fighters' records; implementations pick
    /// out the ones for `fields.id`.
    fn fighter_tags(&self, fields: &FighterFields<'_>, history: &[FightRecord]) -> TagProfile;
}
