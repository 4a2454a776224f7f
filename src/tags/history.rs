// Career-arc tags from a fighter's bout history.
//
// Patterns are read off the fighter's dated fights in chronological order.
// Undated fights cannot be placed in a streak, so they only count towards
// repeat-opponent rivalries.

use std::collections::{HashMap, HashSet};

use crate::models::{FightOutcome, FightRecord, TagCategory, TagProfile};

/// Consecutive losses that make the next win a comeback.
const COMEBACK_LOSS_STREAK: u32 = 2;
/// Consecutive wins that count as a run.
const RUN_LENGTH: u32 = 3;
/// Bouts against the same opponent that make a rivalry.
const RIVALRY_BOUTS: usize = 3;

/// Whether a record belongs to the given fighter.
pub fn belongs_to(record: &FightRecord, fighter_id: &str) -> bool {
    record.fighter_id.trim().eq_ignore_ascii_case(fighter_id.trim())
}

fn opponent_key(record: &FightRecord) -> String {
    record.opponent.trim().to_lowercase()
}

/// Tags implied by the fight-record patterns of `fighter_id`.
///
/// - a win after two or more straight losses: comeback
/// - a win over someone who beat the fighter earlier: revenge, redemption arc
/// - three or more bouts with one opponent: rivalry
/// - three or more straight wins: rise to glory
/// - three or more straight losses after such a run: fall from grace
pub fn history_tags(fighter_id: &str, records: &[FightRecord]) -> TagProfile {
    let mut profile = TagProfile::default();

    let own: Vec<&FightRecord> = records.iter().filter(|r| belongs_to(r, fighter_id)).collect();
    if own.is_empty() {
        return profile;
    }

    let mut tag = |category: TagCategory, name: &str| {
        profile.get_mut(category).insert(name.to_string());
    };

    let mut bouts_per_opponent: HashMap<String, usize> = HashMap::new();
    for record in &own {
        let key = opponent_key(record);
        if !key.is_empty() {
            *bouts_per_opponent.entry(key).or_insert(0) += 1;
        }
    }
    if bouts_per_opponent.values().any(|&n| n >= RIVALRY_BOUTS) {
        tag(TagCategory::Theme, "rivalry");
        tag(TagCategory::Narrative, "rivalry-saga");
    }

    // Stable sort keeps table order for fights on the same date
    let mut dated: Vec<&FightRecord> = own.into_iter().filter(|r| r.date.is_some()).collect();
    dated.sort_by_key(|r| r.date);

    let mut win_streak = 0u32;
    let mut loss_streak = 0u32;
    let mut had_run = false;
    let mut beaten_by: HashSet<String> = HashSet::new();

    for record in dated {
        match record.outcome {
            FightOutcome::Win => {
                if loss_streak >= COMEBACK_LOSS_STREAK {
                    tag(TagCategory::Theme, "comeback");
                    tag(TagCategory::Narrative, "comeback");
                }
                if beaten_by.contains(&opponent_key(record)) {
                    tag(TagCategory::Theme, "revenge");
                    tag(TagCategory::Narrative, "redemption-arc");
                }
                loss_streak = 0;
                win_streak += 1;
                if win_streak >= RUN_LENGTH {
                    had_run = true;
                    tag(TagCategory::Narrative, "rise-to-glory");
                }
            }
            FightOutcome::Loss => {
                beaten_by.insert(opponent_key(record));
                win_streak = 0;
                loss_streak += 1;
                if had_run && loss_streak >= RUN_LENGTH {
                    tag(TagCategory::Narrative, "fall-from-grace");
                }
            }
            // Draws and no-contests break both streaks
            _ => {
                win_streak = 0;
                loss_streak = 0;
            }
        }
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bout(opponent: &str, day: u32, outcome: FightOutcome) -> FightRecord {
        FightRecord {
            fighter_id: "aldo_j".to_string(),
            opponent: opponent.to_string(),
            date: NaiveDate::from_ymd_opt(2020, 1, day),
            outcome,
            event_name: None,
            method: None,
            round: None,
        }
    }

    #[test]
    fn test_losing_streak_then_win_is_comeback() {
        let records = vec![
            bout("A", 1, FightOutcome::Loss),
            bout("B", 2, FightOutcome::Loss),
            bout("C", 3, FightOutcome::Win),
        ];
        let profile = history_tags("aldo_j", &records);
        assert!(profile.themes.contains("comeback"));
        assert!(profile.narratives.contains("comeback"));
    }

    #[test]
    fn test_single_loss_then_win_is_not_comeback() {
        let records = vec![bout("A", 1, FightOutcome::Loss), bout("C", 3, FightOutcome::Win)];
        assert!(!history_tags("aldo_j", &records).themes.contains("comeback"));
    }

    #[test]
    fn test_chronological_not_table_order() {
        // Listed newest first; chronologically it is loss, loss, win
        let records = vec![
            bout("C", 3, FightOutcome::Win),
            bout("B", 2, FightOutcome::Loss),
            bout("A", 1, FightOutcome::Loss),
        ];
        assert!(history_tags("aldo_j", &records).themes.contains("comeback"));
    }

    #[test]
    fn test_revenge_win() {
        let records = vec![
            bout("Holloway", 1, FightOutcome::Loss),
            bout("holloway ", 5, FightOutcome::Win),
        ];
        let profile = history_tags("aldo_j", &records);
        assert!(profile.themes.contains("revenge"));
        assert!(profile.narratives.contains("redemption-arc"));
    }

    #[test]
    fn test_rivalry_and_runs() {
        let records = vec![
            bout("X", 1, FightOutcome::Win),
            bout("X", 2, FightOutcome::Win),
            bout("X", 3, FightOutcome::Win),
            bout("Y", 4, FightOutcome::Loss),
            bout("Z", 5, FightOutcome::Loss),
            bout("W", 6, FightOutcome::Loss),
        ];
        let profile = history_tags("aldo_j", &records);
        assert!(profile.themes.contains("rivalry"));
        assert!(profile.narratives.contains("rise-to-glory"));
        assert!(profile.narratives.contains("fall-from-grace"));
    }

    #[test]
    fn test_other_fighters_ignored() {
        let records = vec![bout("A", 1, FightOutcome::Loss)];
        assert!(history_tags("silva_a", &records).is_empty());
    }
}
