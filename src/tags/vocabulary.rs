// Shared keyword vocabulary for content and fighters.
//
// Both entity kinds are tagged from the same tables so their tags land in
// one space and can be compared directly. Each entry maps a normalized tag to
// the words and phrases that trigger it. Triggers match whole words only:
// "champion" does not fire on "championship".

use regex_lite::Regex;
use tracing::warn;

use crate::models::{TagCategory, TagSet};

type Table = &'static [(&'static str, &'static [&'static str])];

pub const THEME_TRIGGERS: Table = &[
    ("aggression", &["aggressive", "aggression", "relentless", "ferocious", "furious", "barrage", "onslaught", "overwhelms", "constant pressure"]),
    ("precision", &["precise", "precision", "surgical", "methodical", "calculated", "accurate", "accuracy"]),
    ("strategy", &["strategic", "strategy", "tactical", "tactics", "game plan", "cunning", "outsmart", "outsmarts"]),
    ("power", &["powerful", "power", "devastating", "crushing", "brutal", "knockout power"]),
    ("speed", &["fast", "quick", "swift", "lightning", "blazing"]),
    ("endurance", &["endurance", "stamina", "cardio", "endure", "endures", "endured", "marathon"]),
    ("underdog", &["underdog", "underdogs", "against the odds", "against all odds", "unlikely", "underestimated", "long shot", "defied expectations"]),
    ("comeback", &["comeback", "come back", "comes back", "bounced back", "bounces back", "fought back", "fights back", "resurgence"]),
    ("redemption", &["redemption", "redeem", "redeems", "redeemed", "second chance", "atone", "atonement", "forgiveness"]),
    ("rivalry", &["rival", "rivals", "rivalry", "nemesis", "arch-enemy", "feud", "grudge", "showdown"]),
    ("revenge", &["revenge", "vengeance", "avenge", "avenges", "avenged", "payback", "retribution", "settle the score"]),
    ("triumph", &["triumph", "triumphs", "victory", "victories", "victorious", "glory", "conquer", "conquers", "conquered"]),
    ("championship", &["champion", "champions", "championship", "title shot", "title fight", "belt", "crown"]),
    ("struggle", &["struggle", "struggles", "struggling", "hardship", "adversity", "obstacle", "obstacles"]),
    ("survival", &["survive", "survives", "survived", "survival", "survivor", "survivors", "persevere", "perseveres"]),
    ("resilience", &["resilient", "resilience", "tough", "toughness", "unbreakable", "grit", "durable"]),
    ("determination", &["determined", "determination", "driven", "unwavering", "single-minded", "dedicated", "dedication"]),
    ("discipline", &["disciplined", "discipline", "composed", "regimen", "drill"]),
    ("courage", &["courage", "courageous", "brave", "bravery", "fearless", "heroic", "hero", "heroes"]),
    ("honor", &["honor", "honour", "honorable", "integrity", "dignity", "respect", "respected"]),
    ("justice", &["justice", "righteous", "injustice", "lawman"]),
    ("legacy", &["legacy", "legend", "legends", "legendary", "dynasty", "heritage"]),
    ("family", &["family", "families", "father", "mother", "brother", "brothers", "sister", "sisters", "son", "daughter", "sibling", "siblings", "parents"]),
    ("brotherhood", &["brotherhood", "team", "teammates", "squad", "crew", "loyal", "loyalty", "band of brothers"]),
    ("betrayal", &["betrayal", "betrayed", "betrays", "treachery", "double-cross", "backstab", "backstabbed"]),
    ("isolation", &["alone", "isolated", "isolation", "lonely", "solitary"]),
    ("leadership", &["leader", "leaders", "leadership", "captain", "commander"]),
    ("sacrifice", &["sacrifice", "sacrifices", "sacrificed", "selfless"]),
    ("transformation", &["transform", "transforms", "transformation", "transformed", "evolve", "evolves", "evolved", "reinvent", "reinvents"]),
    ("mentorship", &["mentor", "mentors", "mentorship", "mentored", "coach", "coaches", "coached", "apprentice", "protege"]),
    ("competition", &["competition", "compete", "competes", "competing", "competitive", "tournament", "contest"]),
    ("conflict", &["war", "battle", "battles", "combat", "conflict", "clash", "clashes"]),
    ("knockout", &["knockout", "knockouts", "ko", "knocks out", "knocked out", "lights out", "stoppage"]),
    ("ambition", &["ambition", "ambitious", "dream", "dreams", "rise", "rising", "climb", "climbs"]),
    ("dominance", &["dominant", "dominance", "dominates", "dominated", "overpowering", "imposing", "unstoppable"]),
    ("mental-toughness", &["mental toughness", "fortitude", "willpower", "resolve", "composure", "calm under pressure"]),
];

pub const GENRE_TRIGGERS: Table = &[
    ("action", &["action", "action-packed", "explosive", "high-octane", "fast-paced", "adrenaline"]),
    ("drama", &["drama", "dramatic", "emotional"]),
    ("thriller", &["thriller", "suspense", "suspenseful", "tense", "edge of your seat"]),
    ("crime", &["crime", "criminal", "criminals", "gang", "mafia", "mob", "heist", "cartel", "detective"]),
    ("comedy", &["comedy", "comedic", "funny", "hilarious", "humor", "humour"]),
    ("sci-fi", &["sci-fi", "science fiction", "space", "starship", "alien", "aliens", "futuristic"]),
    ("war", &["war", "military", "soldier", "soldiers", "army", "marines"]),
    ("western", &["western", "cowboy", "cowboys", "ranch", "frontier", "outlaw", "outlaws"]),
    ("sports", &["sports", "sport", "athlete", "athletes", "football", "ufc", "mma", "league"]),
    ("horror", &["horror", "terrifying", "scary", "haunted"]),
    ("documentary", &["documentary", "docuseries", "true story", "real-life"]),
    ("biography", &["biography", "biographical", "biopic", "life story"]),
    ("adventure", &["adventure", "adventures", "expedition", "journey"]),
    ("fantasy", &["fantasy", "magic", "magical", "supernatural", "mythical"]),
    ("romance", &["romance", "romantic", "love story"]),
    ("family", &["family-friendly", "kids", "all ages"]),
    ("reality", &["reality", "unscripted"]),
    ("striker", &["striker", "striking", "kickboxing", "kickboxer", "muay thai", "boxer", "boxing", "karate", "kung fu", "martial arts"]),
    ("grappler", &["grappler", "grappling", "wrestler", "wrestling", "jiu-jitsu", "jiu jitsu", "judo", "submission", "submissions", "takedown", "takedowns"]),
];

/// Narrative arcs and character archetypes.
pub const NARRATIVE_TRIGGERS: Table = &[
    ("rise-to-glory", &["rise to glory", "rise to the top", "rises to", "rising star", "climbs the ranks", "rags to riches", "meteoric rise"]),
    ("comeback", &["comeback", "come back", "comes back", "bounced back", "back from injury", "returns to the"]),
    ("redemption-arc", &["redemption", "redeem himself", "redeem herself", "redeem themselves", "second chance", "shot at redemption"]),
    ("fall-from-grace", &["fall from grace", "downfall", "fallen", "disgraced", "lost everything"]),
    ("underdog-story", &["underdog", "against the odds", "against all odds", "long shot", "nobody believed"]),
    ("revenge-quest", &["revenge", "vengeance", "avenge", "avenges", "payback"]),
    ("coming-of-age", &["coming of age", "coming-of-age", "growing up", "teenager", "teenagers"]),
    ("championship-quest", &["title shot", "championship run", "chase the title", "chases the title", "quest for the title", "championship"]),
    ("veteran-last-stand", &["last stand", "one last", "final fight", "swan song", "last ride", "retirement"]),
    ("hero-journey", &["hero's journey", "chosen one", "destiny", "destined", "quest"]),
    ("survival-story", &["survival", "stranded", "trapped"]),
    ("rivalry-saga", &["rivalry", "trilogy", "rematch", "nemesis", "feud"]),
    ("mentor-and-student", &["mentor", "apprentice", "protege", "trains under", "student"]),
    ("family-saga", &["family saga", "dynasty", "generations", "patriarch", "matriarch", "family business"]),
    ("fish-out-of-water", &["fish out of water", "out of place", "far from home"]),
    ("warrior", &["warrior", "warriors", "gladiator", "samurai"]),
    ("prodigy", &["prodigy", "gifted", "phenom", "wunderkind", "natural talent"]),
    ("veteran", &["veteran", "veterans", "seasoned", "grizzled", "old guard"]),
    ("rebel", &["rebel", "rebellious", "defiant", "maverick", "renegade"]),
    ("lone-wolf", &["lone wolf", "loner", "solitary"]),
    ("protector", &["protector", "guardian", "protects", "bodyguard"]),
    ("tactician", &["tactician", "strategist", "mastermind", "chess"]),
];

/// A tag plus the compiled whole-word pattern of its triggers.
struct Trigger {
    tag: String,
    pattern: Regex,
}

impl Trigger {
    fn compile(tag: &str, keywords: &[&str]) -> Option<Self> {
        if keywords.is_empty() {
            return None;
        }
        let alternation = keywords
            .iter()
            .map(|kw| regex_lite::escape(&kw.to_lowercase()))
            .collect::<Vec<_>>()
            .join("|");
        match Regex::new(&format!(r"\b(?:{alternation})\b")) {
            Ok(pattern) => Some(Self {
                tag: tag.to_string(),
                pattern,
            }),
            Err(e) => {
                warn!(tag, error = %e, "Skipping tag with invalid trigger pattern");
                None
            }
        }
    }
}

/// Compiled trigger tables for all three categories.
pub struct Vocabulary {
    themes: Vec<Trigger>,
    genres: Vec<Trigger>,
    narratives: Vec<Trigger>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_tables(THEME_TRIGGERS, GENRE_TRIGGERS, NARRATIVE_TRIGGERS)
    }
}

impl Vocabulary {
    pub fn from_tables(
        themes: &[(&str, &[&str])],
        genres: &[(&str, &[&str])],
        narratives: &[(&str, &[&str])],
    ) -> Self {
        let compile = |table: &[(&str, &[&str])]| -> Vec<Trigger> {
            table
                .iter()
                .filter_map(|(tag, keywords)| Trigger::compile(tag, keywords))
                .collect()
        };
        Self {
            themes: compile(themes),
            genres: compile(genres),
            narratives: compile(narratives),
        }
    }

    fn triggers(&self, category: TagCategory) -> &[Trigger] {
        match category {
            TagCategory::Theme => &self.themes,
            TagCategory::Genre => &self.genres,
            TagCategory::Narrative => &self.narratives,
        }
    }

    /// Every tag in `category` with at least one trigger present in `text`.
    pub fn matches(&self, category: TagCategory, text: &str) -> TagSet {
        if text.trim().is_empty() {
            return TagSet::new();
        }
        let lower = text.to_lowercase();
        self.triggers(category)
            .iter()
            .filter(|t| t.pattern.is_match(&lower))
            .map(|t| t.tag.clone())
            .collect()
    }

    /// Whether `tag` is a known tag of `category`.
    pub fn knows(&self, category: TagCategory, tag: &str) -> bool {
        self.triggers(category).iter().any(|t| t.tag == tag)
    }
}
