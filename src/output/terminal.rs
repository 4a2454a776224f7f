// Colored terminal output for rankings, bundles and fighter profiles.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use super::{format_tag, format_tags, truncate_chars};
use crate::bundle::describe_fight;
use crate::data::Tables;
use crate::models::{Bundle, ContentItem, FightRecord, FighterProfile, SimilarityResult, TagProfile};
use crate::tags::stats::fighting_style;

/// Display the content catalog.
pub fn display_catalog(items: &[&ContentItem]) {
    if items.is_empty() {
        println!("No content items found. Check CAGEMATCH_CONTENT_PATH.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Content Catalog ({} titles) ===", items.len()).bold()
    );
    println!();
    println!(
        "  {:<24} {:<40} {:<12}  {}",
        "Id".dimmed(),
        "Title".dimmed(),
        "Type".dimmed(),
        "Genres".dimmed(),
    );
    println!("  {}", "-".repeat(96).dimmed());

    for item in items {
        println!(
            "  {:<24} {:<40} {:<12}  {}",
            truncate_chars(&item.id, 24),
            truncate_chars(&item.title, 40),
            item.content_type,
            format_tags(&item.tags.genres).dimmed(),
        );
    }
    println!();
}

/// Display a ranked fighter list for a content selection. An empty selection
/// means the fighters were matched on filter tags alone.
pub fn display_fighter_ranking(selection: &[&ContentItem], results: &[SimilarityResult], tables: &Tables) {
    let titles: Vec<&str> = selection.iter().map(|c| c.title.as_str()).collect();
    let label = if titles.is_empty() {
        "the requested tags".to_string()
    } else {
        titles.join(" + ")
    };
    println!("\n{}", format!("=== Fighters for {label} ===").bold());
    println!();

    if results.is_empty() {
        println!("  No fighters to rank.");
        return;
    }

    print_score_header("Fighter");
    for (i, result) in results.iter().enumerate() {
        let name = tables
            .fighter_by_id(&result.fighter_id)
            .map(|f| f.name.as_str())
            .unwrap_or(result.fighter_id.as_str());
        print_score_row(i + 1, name, result);
    }
    println!();
}

/// Display a ranked content list for one fighter.
pub fn display_content_ranking(fighter: &FighterProfile, results: &[SimilarityResult], tables: &Tables) {
    println!(
        "\n{}",
        format!("=== Watch list for {} ===", fighter.name).bold()
    );
    println!();

    if results.is_empty() {
        println!("  No content to rank.");
        return;
    }

    print_score_header("Title");
    for (i, result) in results.iter().enumerate() {
        let title = tables
            .content_by_id(&result.content_id)
            .map(|c| c.title.as_str())
            .unwrap_or(result.content_id.as_str());
        print_score_row(i + 1, title, result);
    }
    println!();
}

fn print_score_header(label: &str) {
    println!(
        "  {:>4}  {:<32} {:>6}  {:>6} {:>6} {:>6}",
        "Rank".dimmed(),
        label.dimmed(),
        "Score".dimmed(),
        "Theme".dimmed(),
        "Genre".dimmed(),
        "Narr".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());
}

fn print_score_row(rank: usize, name: &str, result: &SimilarityResult) {
    println!(
        "  {:>4}. {:<32} {}  {:>6.2} {:>6.2} {:>6.2}",
        rank,
        truncate_chars(name, 32),
        colorize_score(result.score),
        result.subscores.theme,
        result.subscores.genre,
        result.subscores.narrative,
    );
}

/// Display composed bundles, one block each.
pub fn display_bundles(bundles: &[Bundle]) {
    if bundles.is_empty() {
        println!("No bundles could be composed for this selection.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Thematic Bundles ({}) ===", bundles.len()).bold()
    );

    for (i, bundle) in bundles.iter().enumerate() {
        println!();
        println!(
            "  {} {} {} {}",
            format!("{}.", i + 1).bold(),
            bundle.content.title.cyan().bold(),
            "x".dimmed(),
            bundle.fighter.name.yellow().bold(),
        );
        println!("     Score: {}", colorize_score(bundle.similarity.score));
        match &bundle.fight {
            Some(fight) => println!("     Fight: {}", describe_fight(fight)),
            None => println!("     Fight: {}", "no recorded fights".dimmed()),
        }
        println!("     {}", bundle.explanation.italic());
    }
    println!();
}

/// Display one fighter's profile, style, tags and recent fights.
pub fn display_fighter_detail(fighter: &FighterProfile, fights: &[&FightRecord]) {
    println!("\n{}", format!("=== {} ===", fighter.name).bold());
    println!("  Id: {}", fighter.id.dimmed());

    let bio = &fighter.bio;
    let mut facts: Vec<String> = Vec::new();
    if let Some(age) = bio.age {
        facts.push(format!("Age {age}"));
    }
    if let Some(nationality) = &bio.nationality {
        facts.push(nationality.clone());
    }
    if let Some(height) = bio.height_inches {
        facts.push(format!("{height:.0}\" tall"));
    }
    if let Some(reach) = bio.reach_inches {
        facts.push(format!("{reach:.0}\" reach"));
    }
    if let Some(stance) = &bio.stance {
        facts.push(format!("{stance} stance"));
    }
    if !facts.is_empty() {
        println!("  {}", facts.join("  |  "));
    }

    if let Some(record) = fighter.stats.record() {
        println!("  Record: {}", record.bold());
    }
    println!("  Style: {}", fighting_style(&fighter.stats).cyan());

    if !fighter.lore.trim().is_empty() {
        println!("\n  {}", truncate_chars(fighter.lore.trim(), 400).dimmed());
    }

    println!();
    display_tag_profile(&fighter.tags);

    if !fights.is_empty() {
        println!("\n  Recent fights:");
        for fight in fights {
            println!("    {} {}", colorize_outcome(fight), describe_fight(fight));
        }
    }
    println!();
}

/// Display the tag profile of a content item.
pub fn display_content_tags(item: &ContentItem) {
    println!(
        "\n{}",
        format!(
            "=== {} ({}, {} tags) ===",
            item.title,
            item.content_type,
            item.tags.len()
        )
        .bold()
    );
    if !item.description.trim().is_empty() {
        println!("  {}", truncate_chars(item.description.trim(), 300).dimmed());
    }
    println!();
    display_tag_profile(&item.tags);
    println!();
}

fn display_tag_profile(tags: &TagProfile) {
    println!("  {:<11} {}", "Themes:".dimmed(), format_tags(&tags.themes));
    println!("  {:<11} {}", "Genres:".dimmed(), format_tags(&tags.genres));
    println!("  {:<11} {}", "Narratives:".dimmed(), format_tags(&tags.narratives));
}

/// List every genre, theme and narrative tag available for filtering.
pub fn display_available_filters(all: &TagProfile) {
    println!(
        "\n{}",
        format!("=== Available filters ({} tags) ===", all.len()).bold()
    );
    println!();
    display_tag_profile(all);
    println!(
        "\n  {}",
        "Archetypes are listed with the narratives; pass them with --character.".dimmed()
    );
    println!();
}

/// Show the tags two profiles share, per category.
pub fn display_shared_tags(shared: &TagProfile) {
    if shared.is_empty() {
        println!("  {}", "No shared tags.".dimmed());
        return;
    }
    for category in crate::models::TagCategory::ALL {
        let tags = shared.get(category);
        if !tags.is_empty() {
            let names: Vec<String> = tags.iter().map(|t| format_tag(t)).collect();
            println!("  {:<11} {}", format!("{}:", category).dimmed(), names.join(", ").green());
        }
    }
}

/// Colorize a similarity score by strength.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:>6.3}");
    if score >= 0.5 {
        text.green().bold()
    } else if score >= 0.25 {
        text.yellow()
    } else if score > 0.0 {
        text.normal()
    } else {
        text.dimmed()
    }
}

fn colorize_outcome(fight: &FightRecord) -> colored::ColoredString {
    let label = fight.outcome.as_str();
    match fight.outcome {
        crate::models::FightOutcome::Win => label.green(),
        crate::models::FightOutcome::Loss => label.red(),
        _ => label.dimmed(),
    }
}
