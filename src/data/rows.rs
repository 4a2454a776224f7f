// Raw CSV row shapes and their conversion into model types.
//
// Every column is optional at the row level. Non-numeric values in numeric
// columns deserialize to None instead of failing the row.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{FightOutcome, FightRecord, FighterBio, FighterStats, TagProfile};
use crate::tags::{parse_tag_list, split_list_cell};

/// One row of the content catalog.
#[derive(Debug, Default, Deserialize)]
pub struct ContentRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub themes: String,
    #[serde(default)]
    pub narrative_patterns: String,
    #[serde(default)]
    pub character_archetypes: String,
}

impl ContentRow {
    /// Raw genre labels from the `genres` cell.
    pub fn genre_labels(&self) -> Vec<String> {
        split_list_cell(&self.genres)
    }

    /// Tags the catalog already carries. Archetypes count as narratives.
    /// Genres are left to the extractor, which splits combined labels.
    pub fn preset_tags(&self) -> TagProfile {
        let mut narratives = parse_tag_list(&self.narrative_patterns);
        narratives.extend(parse_tag_list(&self.character_archetypes));
        TagProfile {
            themes: parse_tag_list(&self.themes),
            narratives,
            ..Default::default()
        }
    }
}

/// One row of the fighter table.
#[derive(Debug, Default, Deserialize)]
pub struct FighterRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fighter: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub age: Option<f64>,
    #[serde(default)]
    pub nationality: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub height_inches: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub reach_inches: Option<f64>,
    #[serde(default)]
    pub stance: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub wins: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub losses: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub draws: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub strikes_landed_per_min_mean: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub strike_accuracy_mean: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub head_strike_ratio_mean: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub body_strike_ratio_mean: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub leg_strike_ratio_mean: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub takedown_accuracy_mean: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub control_time_ratio_mean: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub clinch_time_ratio_mean: Option<f64>,
    #[serde(default)]
    pub lore: String,
}

/// Counts may be written as floats ("12.0"). Negative or non-finite values
/// are treated as missing.
fn count(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as u32)
}

fn measure(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl FighterRow {
    pub fn bio(&self) -> FighterBio {
        FighterBio {
            age: count(self.age),
            nationality: text(&self.nationality),
            height_inches: measure(self.height_inches),
            reach_inches: measure(self.reach_inches),
            stance: text(&self.stance),
        }
    }

    pub fn stats(&self) -> FighterStats {
        FighterStats {
            wins: count(self.wins),
            losses: count(self.losses),
            draws: count(self.draws),
            strikes_per_min: measure(self.strikes_landed_per_min_mean),
            strike_accuracy: measure(self.strike_accuracy_mean),
            head_strike_ratio: measure(self.head_strike_ratio_mean),
            body_strike_ratio: measure(self.body_strike_ratio_mean),
            leg_strike_ratio: measure(self.leg_strike_ratio_mean),
            takedown_accuracy: measure(self.takedown_accuracy_mean),
            control_time_ratio: measure(self.control_time_ratio_mean),
            clinch_time_ratio: measure(self.clinch_time_ratio_mean),
        }
    }
}

/// One row of the fight history table.
#[derive(Debug, Default, Deserialize)]
pub struct FightRow {
    #[serde(default)]
    pub fighter_id: String,
    #[serde(default)]
    pub opponent: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub method: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub round: Option<f64>,
}

/// Parse `YYYY-MM-DD` or `DD/MM/YYYY`. Anything else is None.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

impl FightRow {
    /// None when the row names no fighter.
    pub fn into_record(self) -> Option<FightRecord> {
        let fighter_id = self.fighter_id.trim().to_string();
        if fighter_id.is_empty() {
            return None;
        }
        Some(FightRecord {
            fighter_id,
            opponent: self.opponent.trim().to_string(),
            date: parse_date(&self.date),
            outcome: FightOutcome::parse(&self.outcome),
            event_name: text(&self.event_name),
            method: text(&self.method),
            round: count(self.round),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2019, 7, 27);
        assert_eq!(parse_date("2019-07-27"), expected);
        assert_eq!(parse_date("27/07/2019"), expected);
        assert_eq!(parse_date("July 27th"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_counts_from_floats() {
        assert_eq!(count(Some(12.0)), Some(12));
        assert_eq!(count(Some(-1.0)), None);
        assert_eq!(count(Some(f64::NAN)), None);
        assert_eq!(count(None), None);
    }

    #[test]
    fn test_preset_archetypes_are_narratives() {
        let row = ContentRow {
            character_archetypes: "['Warrior', 'Lone Wolf']".to_string(),
            ..Default::default()
        };
        let tags = row.preset_tags();
        assert!(tags.narratives.contains("warrior"));
        assert!(tags.narratives.contains("lone-wolf"));
    }
}
