// Data models: the value types that flow between the pipeline stages.
//
// Content items and fighter profiles are built once by the data loader and
// never mutated afterwards. Similarity results and bundles are derived per
// request and never stored.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A set of normalized tags. Ordered so iteration (and therefore every
/// explanation built from it) is deterministic.
pub type TagSet = BTreeSet<String>;

/// The three tag categories, in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Theme,
    Genre,
    Narrative,
}

impl TagCategory {
    /// All categories, highest priority first.
    pub const ALL: [TagCategory; 3] = [TagCategory::Theme, TagCategory::Genre, TagCategory::Narrative];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Theme => "theme",
            TagCategory::Genre => "genre",
            TagCategory::Narrative => "narrative",
        }
    }
}

impl std::fmt::Display for TagCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Theme, genre and narrative tags for one content item or fighter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagProfile {
    pub themes: TagSet,
    pub genres: TagSet,
    pub narratives: TagSet,
}

impl TagProfile {
    pub fn get(&self, category: TagCategory) -> &TagSet {
        match category {
            TagCategory::Theme => &self.themes,
            TagCategory::Genre => &self.genres,
            TagCategory::Narrative => &self.narratives,
        }
    }

    pub fn get_mut(&mut self, category: TagCategory) -> &mut TagSet {
        match category {
            TagCategory::Theme => &mut self.themes,
            TagCategory::Genre => &mut self.genres,
            TagCategory::Narrative => &mut self.narratives,
        }
    }

    /// True when all three categories are empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty() && self.genres.is_empty() && self.narratives.is_empty()
    }

    /// Union another profile into this one.
    pub fn merge(&mut self, other: TagProfile) {
        self.themes.extend(other.themes);
        self.genres.extend(other.genres);
        self.narratives.extend(other.narratives);
    }

    /// Total number of tags across all categories.
    pub fn len(&self) -> usize {
        self.themes.len() + self.genres.len() + self.narratives.len()
    }
}

/// One entry of the streaming catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Movie, show, sports, documentary, ...
    pub content_type: String,
    pub description: String,
    /// Genre labels as they appeared in the catalog, before normalization
    pub genre_labels: Vec<String>,
    pub tags: TagProfile,
}

/// Biographical fields. Any of them may be missing in the source table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FighterBio {
    pub age: Option<u32>,
    pub nationality: Option<String>,
    pub height_inches: Option<f64>,
    pub reach_inches: Option<f64>,
    pub stance: Option<String>,
}

/// Career record and per-fight averages.
///
/// Ratios and accuracies are fractions (0.0-1.0). A missing value means the
/// source row had nothing usable and contributes no tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FighterStats {
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub draws: Option<u32>,
    pub strikes_per_min: Option<f64>,
    pub strike_accuracy: Option<f64>,
    pub head_strike_ratio: Option<f64>,
    pub body_strike_ratio: Option<f64>,
    pub leg_strike_ratio: Option<f64>,
    pub takedown_accuracy: Option<f64>,
    pub control_time_ratio: Option<f64>,
    pub clinch_time_ratio: Option<f64>,
}

impl FighterStats {
    /// Wins plus losses plus draws, counting missing values as zero.
    /// Saturates at `u32::MAX` on absurd records.
    pub fn total_fights(&self) -> u32 {
        self.wins
            .unwrap_or(0)
            .saturating_add(self.losses.unwrap_or(0))
            .saturating_add(self.draws.unwrap_or(0))
    }

    /// Fraction of recorded fights won. 0.0 with no recorded fights.
    pub fn win_rate(&self) -> f64 {
        let total = self.total_fights();
        if total == 0 {
            return 0.0;
        }
        self.wins.unwrap_or(0) as f64 / total as f64
    }

    /// "W-L-D", or None when the record is entirely missing.
    pub fn record(&self) -> Option<String> {
        if self.wins.is_none() && self.losses.is_none() && self.draws.is_none() {
            return None;
        }
        Some(format!(
            "{}-{}-{}",
            self.wins.unwrap_or(0),
            self.losses.unwrap_or(0),
            self.draws.unwrap_or(0)
        ))
    }
}

/// A fighter with biography, statistics, lore and derived tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterProfile {
    pub id: String,
    pub name: String,
    pub bio: FighterBio,
    pub stats: FighterStats,
    pub lore: String,
    pub tags: TagProfile,
}

/// Result of a bout from the fighter's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightOutcome {
    Win,
    Loss,
    Draw,
    NoContest,
    Unknown,
}

impl FightOutcome {
    /// Parse the outcome column. Accepts the single-letter scorecard codes
    /// and spelled-out words; anything else is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "w" | "win" | "won" => FightOutcome::Win,
            "l" | "loss" | "lost" => FightOutcome::Loss,
            "d" | "draw" => FightOutcome::Draw,
            "nc" | "no contest" | "no-contest" => FightOutcome::NoContest,
            _ => FightOutcome::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FightOutcome::Win => "Win",
            FightOutcome::Loss => "Loss",
            FightOutcome::Draw => "Draw",
            FightOutcome::NoContest => "No Contest",
            FightOutcome::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for FightOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bout in a fighter's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightRecord {
    pub fighter_id: String,
    pub opponent: String,
    /// None when the source date was missing or unparseable
    pub date: Option<NaiveDate>,
    pub outcome: FightOutcome,
    pub event_name: Option<String>,
    pub method: Option<String>,
    pub round: Option<u32>,
}

/// Per-category Jaccard overlaps between a content item and a fighter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscores {
    #[serde(rename = "theme_score")]
    pub theme: f64,
    #[serde(rename = "genre_score")]
    pub genre: f64,
    #[serde(rename = "narrative_score")]
    pub narrative: f64,
}

impl Subscores {
    pub fn get(&self, category: TagCategory) -> f64 {
        match category {
            TagCategory::Theme => self.theme,
            TagCategory::Genre => self.genre,
            TagCategory::Narrative => self.narrative,
        }
    }

    /// The category with the highest subscore, ties going to the earlier
    /// category in `TagCategory::ALL`. None when every subscore is zero.
    pub fn dominant(&self) -> Option<TagCategory> {
        let mut best: Option<(TagCategory, f64)> = None;
        for category in TagCategory::ALL {
            let value = self.get(category);
            if value <= 0.0 {
                continue;
            }
            match best {
                Some((_, top)) if value <= top => {}
                _ => best = Some((category, value)),
            }
        }
        best.map(|(category, _)| category)
    }
}

/// How well one content item matches one fighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub content_id: String,
    pub fighter_id: String,
    /// Weighted total in [0, 1]
    pub score: f64,
    #[serde(flatten)]
    pub subscores: Subscores,
}

/// A packaged recommendation: content, fighter, a fight to watch, and why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub content: ContentItem,
    pub fighter: FighterProfile,
    pub fight: Option<FightRecord>,
    pub similarity: SimilarityResult,
    pub explanation: String,
}
