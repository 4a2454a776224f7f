// Keyword-vocabulary tag extractor, the default TagExtractor.
//
// Content is tagged from its title, description, genre labels and type.
// Fighters are tagged from their lore, then topped up with stat-derived and
// fight-history tags.

use once_cell::sync::Lazy;

use super::history::history_tags;
use super::stats::stat_tags;
use super::traits::{ContentFields, FighterFields, TagExtractor};
use super::vocabulary::Vocabulary;
use super::normalize_tag;
use crate::models::{FightRecord, TagCategory, TagProfile};

static DEFAULT_TAGGER: Lazy<KeywordTagger> = Lazy::new(KeywordTagger::default);

/// Tags text by matching it against a fixed keyword vocabulary.
#[derive(Default)]
pub struct KeywordTagger {
    vocabulary: Vocabulary,
}

impl KeywordTagger {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Shared instance built from the built-in vocabulary.
    pub fn shared() -> &'static KeywordTagger {
        &DEFAULT_TAGGER
    }

    fn text_tags(&self, text: &str) -> TagProfile {
        TagProfile {
            themes: self.vocabulary.matches(TagCategory::Theme, text),
            genres: self.vocabulary.matches(TagCategory::Genre, text),
            narratives: self.vocabulary.matches(TagCategory::Narrative, text),
        }
    }
}

/// Split catalog genre labels like "Action & Adventure" or "Sci-Fi/Fantasy"
/// into individual labels.
fn split_genre_label(label: &str) -> impl Iterator<Item = &str> {
    label
        .split(['&', '/', ','])
        .flat_map(|part| part.split(" and "))
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

impl TagExtractor for KeywordTagger {
    fn content_tags(&self, fields: &ContentFields<'_>) -> TagProfile {
        let story = format!("{}. {}", fields.title, fields.description);
        let mut profile = self.text_tags(&story);

        // Genre labels are genres by definition, known to the vocabulary or not
        for label in fields.genre_labels {
            for part in split_genre_label(label) {
                profile
                    .genres
                    .extend(self.vocabulary.matches(TagCategory::Genre, part));
                if let Some(tag) = normalize_tag(part) {
                    profile.genres.insert(tag);
                }
            }
        }
        profile
            .genres
            .extend(self.vocabulary.matches(TagCategory::Genre, fields.content_type));

        if let Some(preset) = fields.preset {
            profile.merge(preset.clone());
        }
        profile
    }

    fn fighter_tags(&self, fields: &FighterFields<'_>, history: &[FightRecord]) -> TagProfile {
        let mut profile = self.text_tags(fields.lore);
        profile.merge(stat_tags(fields.bio, fields.stats));
        profile.merge(history_tags(fields.id, history));
        profile
    }
}

/// Tag a catalog entry with the built-in vocabulary.
pub fn extract_content_tags(fields: &ContentFields<'_>) -> TagProfile {
    KeywordTagger::shared().content_tags(fields)
}

/// Tag a fighter with the built-in vocabulary, stats and fight history.
pub fn extract_fighter_tags(fields: &FighterFields<'_>, history: &[FightRecord]) -> TagProfile {
    KeywordTagger::shared().fighter_tags(fields, history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_genre_label() {
        let parts: Vec<&str> = split_genre_label("Action & Adventure").collect();
        assert_eq!(parts, vec!["Action", "Adventure"]);
        let parts: Vec<&str> = split_genre_label("Sci-Fi/Fantasy").collect();
        assert_eq!(parts, vec!["Sci-Fi", "Fantasy"]);
    }

    #[test]
    fn test_type_contributes_genre() {
        let fields = ContentFields {
            title: "Sunday Ticket",
            content_type: "Sports",
            ..Default::default()
        };
        let tags = extract_content_tags(&fields);
        assert!(tags.genres.contains("sports"));
    }
}
