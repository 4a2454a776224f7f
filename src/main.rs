use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use cagematch::bundle::{bundles_for_selection, recent_fights};
use cagematch::config::Config;
use cagematch::data::{load_tables, Tables};
use cagematch::models::ContentItem;
use cagematch::output::terminal;
use cagematch::similarity::{
    aggregate_for_selection, available_filters, filter_catalog, intersection_profile,
    rank_content_for_fighter, recommend_for_filter, CatalogFilter,
};

/// Cagematch: UFC fighter recommendations for streaming-content fans.
///
/// Matches the themes, genres and story arcs of titles you like against
/// fighter careers, and packages the best matches into watchable bundles.
#[derive(Parser)]
#[command(name = "cagematch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the content catalog
    Catalog {
        /// Only show titles of this type (movie, show, sports, ...)
        #[arg(long = "type")]
        content_type: Option<String>,
    },

    /// Show the derived tags of a content item or fighter
    Tags {
        /// Content or fighter id
        id: String,
    },

    /// Recommend fighters for content titles, catalog filters, or both
    ///
    /// Filters combine with OR across genre, theme and character; --type
    /// narrows the result. Given content ids as well, only those titles are
    /// filtered.
    Recommend {
        /// Content ids making up the selection
        content_ids: Vec<String>,

        /// Match titles with this genre (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Match titles with this theme (repeatable)
        #[arg(long = "theme")]
        themes: Vec<String>,

        /// Match titles with this character archetype (repeatable)
        #[arg(long = "character")]
        characters: Vec<String>,

        /// Only consider titles of this type (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,

        /// Number of fighters to show (default: CAGEMATCH_TOP_N or 10)
        #[arg(long)]
        top: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the genres, themes and narratives available as filters
    Filters,

    /// Recommend content for a fighter
    Watch {
        /// Fighter id
        fighter_id: String,

        /// Number of titles to show (default: CAGEMATCH_TOP_N or 10)
        #[arg(long)]
        top: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compose content + fighter + fight bundles for a selection
    Bundle {
        /// Content ids making up the selection
        #[arg(required = true)]
        content_ids: Vec<String>,

        /// Maximum number of bundles (default: CAGEMATCH_BUNDLES or 3)
        #[arg(long)]
        count: Option<usize>,

        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show a fighter's profile, style, tags and recent fights
    Fighter {
        /// Fighter id
        fighter_id: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cagematch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    config.require_tables()?;
    let tables = load_tables(&config)?;

    match cli.command {
        Commands::Catalog { content_type } => {
            let items: Vec<&ContentItem> = tables
                .content
                .iter()
                .filter(|c| match &content_type {
                    Some(wanted) => c.content_type.trim().eq_ignore_ascii_case(wanted.trim()),
                    None => true,
                })
                .collect();
            terminal::display_catalog(&items);
        }

        Commands::Tags { id } => {
            if let Some(item) = tables.content_by_id(&id) {
                terminal::display_content_tags(item);
            } else if let Some(fighter) = tables.fighter_by_id(&id) {
                terminal::display_fighter_detail(fighter, &[]);
            } else {
                bail!("No content item or fighter with id '{id}'.\nRun `cagematch catalog` to list content ids.");
            }
        }

        Commands::Recommend {
            content_ids,
            genres,
            themes,
            characters,
            types,
            top,
            json,
        } => {
            let filter = CatalogFilter::new(&genres, &themes, &characters, &types);
            if content_ids.is_empty() && filter.is_empty() {
                bail!("Give at least one content id or filter (--genre, --theme, --character, --type).\nRun `cagematch filters` to list filter values.");
            }

            let top_n = top.unwrap_or(config.top_n);
            let (selection, results) = if filter.is_empty() {
                let selection = resolve_selection(&tables, &content_ids)?;
                info!(selected = selection.len(), top_n, "Ranking fighters for selection");
                let results = aggregate_for_selection(&selection, &tables.fighters, top_n);
                (selection, results)
            } else {
                let candidates = if content_ids.is_empty() {
                    tables.content.iter().collect()
                } else {
                    resolve_selection(&tables, &content_ids)?
                };
                let selection = filter_catalog(&candidates, &filter);
                info!(
                    candidates = candidates.len(),
                    matched = selection.len(),
                    top_n,
                    "Ranking fighters for catalog filter"
                );
                let results = recommend_for_filter(&candidates, &tables.fighters, &filter, top_n);
                (selection, results)
            };

            if json {
                print_json(&results)?;
                return Ok(());
            }

            terminal::display_fighter_ranking(&selection, &results, &tables);
            if let Some(best) = results.first() {
                let content = tables.content_by_id(&best.content_id);
                let fighter = tables.fighter_by_id(&best.fighter_id);
                if let (Some(content), Some(fighter)) = (content, fighter) {
                    println!(
                        "{}",
                        format!("Why {} fits {}:", fighter.name, content.title).bold()
                    );
                    terminal::display_shared_tags(&intersection_profile(&content.tags, &fighter.tags));
                    println!();
                }
            }
        }

        Commands::Filters => {
            terminal::display_available_filters(&available_filters(&tables.content, &tables.fighters));
        }

        Commands::Watch {
            fighter_id,
            top,
            json,
        } => {
            let Some(fighter) = tables.fighter_by_id(&fighter_id) else {
                bail!("No fighter with id '{fighter_id}'.");
            };
            let results = rank_content_for_fighter(fighter, &tables.content, top.unwrap_or(config.top_n));
            if json {
                print_json(&results)?;
            } else {
                terminal::display_content_ranking(fighter, &results, &tables);
            }
        }

        Commands::Bundle {
            content_ids,
            count,
            json,
        } => {
            let selection = resolve_selection(&tables, &content_ids)?;
            let bundles = bundles_for_selection(
                &selection,
                &tables.fighters,
                &tables.fights,
                count.unwrap_or(config.bundles),
            );
            if json {
                print_json(&bundles)?;
            } else {
                terminal::display_bundles(&bundles);
            }
        }

        Commands::Fighter { fighter_id } => {
            let Some(fighter) = tables.fighter_by_id(&fighter_id) else {
                bail!("No fighter with id '{fighter_id}'.");
            };
            let fights = recent_fights(&fighter.id, &tables.fights, config.fights_per_bundle);
            terminal::display_fighter_detail(fighter, &fights);
        }
    }

    Ok(())
}

/// Look up every requested content id, failing on the first unknown one.
fn resolve_selection<'a>(tables: &'a Tables, ids: &[String]) -> Result<Vec<&'a ContentItem>> {
    let mut selection = Vec::with_capacity(ids.len());
    for id in ids {
        match tables.content_by_id(id) {
            Some(item) => selection.push(item),
            None => bail!(
                "No content item with id '{id}'.\nRun `cagematch catalog` to list content ids."
            ),
        }
    }
    Ok(selection)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
