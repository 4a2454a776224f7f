// Fight lookup for bundles.
//
// Records for a fighter are ordered most recent first. Records without a
// usable date sort behind every dated record, and records sharing a date
// keep their table order.

use crate::models::FightRecord;
use crate::tags::history::belongs_to;

/// The most recent fight for `fighter_id`, or None without records.
pub fn select_fight<'a>(fighter_id: &str, records: &'a [FightRecord]) -> Option<&'a FightRecord> {
    records
        .iter()
        .filter(|r| belongs_to(r, fighter_id))
        .fold(None, |best: Option<&FightRecord>, record| match best {
            // Strictly later only, so the earliest listed wins a shared date
            Some(current) if record.date <= current.date => Some(current),
            _ => Some(record),
        })
}

/// Up to `limit` fights for `fighter_id`, most recent first.
pub fn recent_fights<'a>(fighter_id: &str, records: &'a [FightRecord], limit: usize) -> Vec<&'a FightRecord> {
    let mut own: Vec<&FightRecord> = records.iter().filter(|r| belongs_to(r, fighter_id)).collect();
    own.sort_by(|a, b| b.date.cmp(&a.date));
    own.truncate(limit);
    own
}

/// One-line description of a fight, e.g.
/// "vs Max Holloway, 2019-07-27, UFC 240 (Loss by Decision)".
pub fn describe_fight(record: &FightRecord) -> String {
    let mut line = format!("vs {}", record.opponent.trim());
    if let Some(date) = record.date {
        line.push_str(&format!(", {}", date.format("%Y-%m-%d")));
    }
    if let Some(event) = record.event_name.as_deref().filter(|e| !e.trim().is_empty()) {
        line.push_str(&format!(", {}", event.trim()));
    }

    let mut result = record.outcome.as_str().to_string();
    if let Some(method) = record.method.as_deref().filter(|m| !m.trim().is_empty()) {
        result.push_str(&format!(" by {}", method.trim()));
    }
    if let Some(round) = record.round {
        result.push_str(&format!(", round {round}"));
    }
    line.push_str(&format!(" ({result})"));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FightOutcome;
    use chrono::NaiveDate;

    fn fight(fighter: &str, opponent: &str, date: Option<(i32, u32, u32)>) -> FightRecord {
        FightRecord {
            fighter_id: fighter.to_string(),
            opponent: opponent.to_string(),
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            outcome: FightOutcome::Win,
            event_name: None,
            method: None,
            round: None,
        }
    }

    #[test]
    fn test_most_recent_wins() {
        let records = vec![
            fight("aldo_j", "Mendes", Some((2014, 10, 25))),
            fight("aldo_j", "Holloway", Some((2017, 6, 3))),
            fight("aldo_j", "Edgar", Some((2016, 7, 9))),
        ];
        let selected = select_fight("aldo_j", &records);
        assert_eq!(selected.map(|r| r.opponent.as_str()), Some("Holloway"));
    }

    #[test]
    fn test_same_date_keeps_table_order() {
        let records = vec![
            fight("aldo_j", "First", Some((2017, 6, 3))),
            fight("aldo_j", "Second", Some((2017, 6, 3))),
        ];
        assert_eq!(select_fight("aldo_j", &records).map(|r| r.opponent.as_str()), Some("First"));
    }

    #[test]
    fn test_undated_behind_dated() {
        let records = vec![
            fight("aldo_j", "Undated", None),
            fight("aldo_j", "Dated", Some((2010, 1, 1))),
        ];
        assert_eq!(select_fight("aldo_j", &records).map(|r| r.opponent.as_str()), Some("Dated"));

        let recent = recent_fights("aldo_j", &records, 10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].opponent, "Undated");
    }

    #[test]
    fn test_no_records() {
        let records = vec![fight("silva_a", "Sonnen", Some((2010, 8, 7)))];
        assert!(select_fight("aldo_j", &records).is_none());
        assert!(recent_fights("aldo_j", &records, 5).is_empty());
    }

    #[test]
    fn test_describe_fight() {
        let mut record = fight("aldo_j", "Max Holloway", Some((2017, 6, 3)));
        record.outcome = FightOutcome::Loss;
        record.event_name = Some("UFC 212".to_string());
        record.method = Some("KO/TKO".to_string());
        record.round = Some(3);
        assert_eq!(
            describe_fight(&record),
            "vs Max Holloway, 2017-06-03, UFC 212 (Loss by KO/TKO, round 3)"
        );
    }
}
