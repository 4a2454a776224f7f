// Stat-derived fighter tags and the fighting-style label.
//
// Thresholds come from the fighter-cluster analysis the dataset was built
// with: strike volume and accuracy drive striking themes, takedown accuracy
// and control time drive grappling themes, and record plus age drive the
// career arc.

use crate::models::{FighterBio, FighterStats, TagCategory, TagProfile};

const HIGH_VOLUME_STRIKES: f64 = 6.0;
const STEADY_VOLUME_STRIKES: f64 = 4.0;
const SHARP_ACCURACY: f64 = 0.65;
const GRAPPLER_TAKEDOWN_ACCURACY: f64 = 0.6;
const GRAPPLER_CONTROL_RATIO: f64 = 0.5;
const HEAD_HUNTER_RATIO: f64 = 0.65;
const BODY_WORK_RATIO: f64 = 0.45;
const LEG_KICKER_RATIO: f64 = 0.35;
const CLINCH_RATIO: f64 = 0.3;

fn add(profile: &mut TagProfile, category: TagCategory, tags: &[&str]) {
    profile
        .get_mut(category)
        .extend(tags.iter().map(|t| t.to_string()));
}

/// Tags implied by a fighter's statistics and biography.
///
/// Missing stats count as zero and therefore never trigger a threshold.
/// Every fighter gets the `competition` theme and the `sports` genre.
pub fn stat_tags(bio: &FighterBio, stats: &FighterStats) -> TagProfile {
    let mut profile = TagProfile::default();

    let spm = stats.strikes_per_min.unwrap_or(0.0);
    let accuracy = stats.strike_accuracy.unwrap_or(0.0);
    let takedowns = stats.takedown_accuracy.unwrap_or(0.0);
    let control = stats.control_time_ratio.unwrap_or(0.0);
    let head = stats.head_strike_ratio.unwrap_or(0.0);
    let body = stats.body_strike_ratio.unwrap_or(0.0);
    let legs = stats.leg_strike_ratio.unwrap_or(0.0);
    let clinch = stats.clinch_time_ratio.unwrap_or(0.0);

    // Striking volume
    if spm > HIGH_VOLUME_STRIKES {
        add(&mut profile, TagCategory::Theme, &["aggression", "pressure-fighting"]);
        add(&mut profile, TagCategory::Genre, &["action", "striker"]);
    } else if spm > STEADY_VOLUME_STRIKES {
        add(&mut profile, TagCategory::Theme, &["determination"]);
        add(&mut profile, TagCategory::Genre, &["action", "striker"]);
    }

    if accuracy > SHARP_ACCURACY {
        add(&mut profile, TagCategory::Theme, &["precision", "technical-mastery"]);
        add(&mut profile, TagCategory::Narrative, &["tactician"]);
    }

    if control > GRAPPLER_CONTROL_RATIO || takedowns > GRAPPLER_TAKEDOWN_ACCURACY {
        add(&mut profile, TagCategory::Theme, &["strategy", "discipline"]);
        add(&mut profile, TagCategory::Genre, &["grappler"]);
        if control > GRAPPLER_CONTROL_RATIO {
            add(&mut profile, TagCategory::Theme, &["dominance"]);
        }
    }

    if head > HEAD_HUNTER_RATIO {
        add(&mut profile, TagCategory::Theme, &["knockout", "courage"]);
        add(&mut profile, TagCategory::Genre, &["thriller"]);
    }
    if body > BODY_WORK_RATIO {
        add(&mut profile, TagCategory::Theme, &["strategy", "endurance"]);
    }
    if legs > LEG_KICKER_RATIO {
        add(&mut profile, TagCategory::Theme, &["technical-mastery", "strategy"]);
    }
    if clinch > CLINCH_RATIO {
        add(&mut profile, TagCategory::Theme, &["pressure-fighting", "dominance"]);
    }

    // Career arc from the record
    let total = stats.total_fights();
    let win_rate = stats.win_rate();
    if win_rate > 0.75 && total > 10 {
        add(&mut profile, TagCategory::Theme, &["triumph", "championship"]);
        add(&mut profile, TagCategory::Narrative, &["championship-quest"]);
    } else if win_rate < 0.4 && total > 5 {
        add(&mut profile, TagCategory::Theme, &["underdog", "resilience"]);
        add(&mut profile, TagCategory::Narrative, &["underdog-story"]);
    }

    if let Some(age) = bio.age {
        if age > 35 && total > 15 {
            add(&mut profile, TagCategory::Theme, &["legacy"]);
            add(&mut profile, TagCategory::Narrative, &["veteran", "veteran-last-stand"]);
        } else if age < 25 && total > 3 {
            add(&mut profile, TagCategory::Theme, &["ambition"]);
            add(&mut profile, TagCategory::Narrative, &["prodigy", "rise-to-glory"]);
        }
    }

    if let (Some(height), Some(reach)) = (bio.height_inches, bio.reach_inches) {
        if reach - height < -3.0 {
            add(&mut profile, TagCategory::Theme, &["underdog"]);
        }
    }

    add(&mut profile, TagCategory::Theme, &["competition"]);
    add(&mut profile, TagCategory::Genre, &["sports"]);

    profile
}

/// Human-readable fighting style derived from the statistics.
///
/// Several parts can apply at once and are joined with " / ".
pub fn fighting_style(stats: &FighterStats) -> String {
    let spm = stats.strikes_per_min.unwrap_or(0.0);
    let accuracy = stats.strike_accuracy.unwrap_or(0.0);
    let takedowns = stats.takedown_accuracy.unwrap_or(0.0);
    let control = stats.control_time_ratio.unwrap_or(0.0);
    let head = stats.head_strike_ratio.unwrap_or(0.0);

    let mut parts: Vec<&str> = Vec::new();

    if spm > 5.0 {
        if head > HEAD_HUNTER_RATIO {
            parts.push("Aggressive Head Hunter");
        } else {
            parts.push("High-Volume Striker");
        }
    } else if accuracy > 0.55 && spm < 4.0 {
        parts.push("Precision Counter-Striker");
    }

    if control > 0.4 {
        parts.push("Dominant Grappler");
    } else if takedowns > 0.5 {
        parts.push("Takedown Specialist");
    }

    if spm > 2.0 && takedowns > 0.3 {
        parts.push("Well-Rounded Fighter");
    }

    if parts.is_empty() {
        "Versatile Fighter".to_string()
    } else {
        parts.join(" / ")
    }
}
