// Unit tests for tag extraction.
//
// Covers normalization, vocabulary matching over content and fighter fields,
// stat- and history-derived fighter tags, and the TagExtractor seam.

use cagematch::models::{FightOutcome, FightRecord, FighterBio, FighterStats, TagCategory};
use cagematch::tags::vocabulary::Vocabulary;
use cagematch::tags::{
    extract_content_tags, extract_fighter_tags, normalize_tag, parse_tag_list, ContentFields,
    FighterFields, KeywordTagger, TagExtractor,
};
use chrono::NaiveDate;

fn bout(fighter: &str, opponent: &str, date: &str, outcome: FightOutcome) -> FightRecord {
    FightRecord {
        fighter_id: fighter.to_string(),
        opponent: opponent.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
        outcome,
        event_name: None,
        method: None,
        round: None,
    }
}

// ============================================================
// Normalization
// ============================================================

#[test]
fn normalization_collapses_separators() {
    assert_eq!(normalize_tag("Fish Out Of Water").as_deref(), Some("fish-out-of-water"));
    assert_eq!(normalize_tag("lone__wolf").as_deref(), Some("lone-wolf"));
    assert_eq!(normalize_tag("--mentor--").as_deref(), Some("mentor"));
}

#[test]
fn list_cells_deduplicate_after_normalizing() {
    let tags = parse_tag_list("['Rise to Glory', 'rise_to_glory', 'rise-to-glory']");
    assert_eq!(tags.len(), 1);
}

// ============================================================
// Content tagging
// ============================================================

#[test]
fn content_description_triggers_themes() {
    let fields = ContentFields {
        title: "Rocky",
        content_type: "Movie",
        description: "A small-time boxer gets an unlikely shot at the title against a bitter rival.",
        ..Default::default()
    };
    let tags = extract_content_tags(&fields);
    assert!(tags.themes.contains("underdog"), "got {:?}", tags.themes);
    assert!(tags.themes.contains("rivalry"), "got {:?}", tags.themes);
}

#[test]
fn content_genre_labels_split_and_normalized() {
    let labels = vec!["Action & Adventure".to_string(), "Crime Drama".to_string()];
    let fields = ContentFields {
        title: "Tulsa King",
        content_type: "Show",
        genre_labels: &labels,
        ..Default::default()
    };
    let tags = extract_content_tags(&fields);
    assert!(tags.genres.contains("action"));
    assert!(tags.genres.contains("adventure"));
    assert!(tags.genres.contains("crime"));
    assert!(tags.genres.contains("drama"));
}

#[test]
fn content_without_text_has_no_tags() {
    let tags = extract_content_tags(&ContentFields::default());
    assert!(tags.is_empty());
}

#[test]
fn content_preset_tags_are_merged() {
    let preset = cagematch::models::TagProfile {
        narratives: parse_tag_list("mentor and student"),
        ..Default::default()
    };
    let fields = ContentFields {
        title: "Quiet drama",
        preset: Some(&preset),
        ..Default::default()
    };
    let tags = extract_content_tags(&fields);
    assert!(tags.narratives.contains("mentor-and-student"));
}

#[test]
fn identical_text_gives_identical_tags() {
    let fields = ContentFields {
        title: "Yellowstone",
        content_type: "Show",
        description: "A family dynasty fights to protect its legacy and land.",
        ..Default::default()
    };
    assert_eq!(extract_content_tags(&fields), extract_content_tags(&fields));
}

// ============================================================
// Fighter tagging
// ============================================================

#[test]
fn fighter_lore_and_stats_combine() {
    let bio = FighterBio::default();
    let stats = FighterStats {
        strikes_per_min: Some(6.5),
        ..Default::default()
    };
    let fields = FighterFields {
        id: "holloway_m",
        lore: "A legendary warrior who never stops moving forward.",
        bio: &bio,
        stats: &stats,
    };
    let tags = extract_fighter_tags(&fields, &[]);
    assert!(tags.themes.contains("legacy"), "lore should tag legacy");
    assert!(tags.narratives.contains("warrior"), "lore should tag warrior");
    assert!(tags.themes.contains("aggression"), "volume should tag aggression");
    assert!(tags.genres.contains("sports"));
}

#[test]
fn fighter_losing_streak_then_win_is_comeback() {
    let bio = FighterBio::default();
    let stats = FighterStats::default();
    let fields = FighterFields {
        id: "aldo_j",
        lore: "",
        bio: &bio,
        stats: &stats,
    };
    let records = vec![
        bout("aldo_j", "Holloway", "2017-06-03", FightOutcome::Loss),
        bout("aldo_j", "Holloway", "2017-12-02", FightOutcome::Loss),
        bout("aldo_j", "Stephens", "2018-07-28", FightOutcome::Win),
        bout("someone_else", "Nobody", "2018-07-28", FightOutcome::Loss),
    ];
    let tags = extract_fighter_tags(&fields, &records);
    assert!(tags.themes.contains("comeback"));
    assert!(tags.narratives.contains("comeback"));
    assert!(!tags.themes.contains("revenge"), "Stephens never beat Aldo");
}

#[test]
fn fighter_missing_everything_only_gets_baseline() {
    let bio = FighterBio::default();
    let stats = FighterStats::default();
    let fields = FighterFields {
        id: "unknown",
        lore: "",
        bio: &bio,
        stats: &stats,
    };
    let tags = extract_fighter_tags(&fields, &[]);
    assert_eq!(tags.len(), 2);
    assert!(tags.themes.contains("competition"));
    assert!(tags.genres.contains("sports"));
}

// ============================================================
// TagExtractor seam
// ============================================================

#[test]
fn custom_vocabulary_tagger() {
    let vocab = Vocabulary::from_tables(&[("grit", &["grit", "gritty"])], &[], &[]);
    assert!(vocab.knows(TagCategory::Theme, "grit"));
    assert!(!vocab.knows(TagCategory::Theme, "underdog"));

    let tagger = KeywordTagger::new(vocab);
    let fields = ContentFields {
        title: "A gritty underdog tale",
        ..Default::default()
    };
    let tags = tagger.content_tags(&fields);
    assert!(tags.themes.contains("grit"));
    assert!(!tags.themes.contains("underdog"), "custom vocabulary has no underdog trigger");
}
