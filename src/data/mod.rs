// Data provider: loads the content catalog, fighter table and fight history
// from flat CSV files and tags every entity once at load time.
//
// Row-level problems never fail a load. Blank identifiers fall back to a
// slug of the title or name, rows with nothing to identify them are dropped,
// and duplicate identifiers keep the first row. Each case is logged.

pub mod rows;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{ContentItem, FightRecord, FighterProfile};
use crate::tags::{normalize_tag, ContentFields, FighterFields, KeywordTagger, TagExtractor};
use rows::{ContentRow, FightRow, FighterRow};

/// The three loaded tables.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub content: Vec<ContentItem>,
    pub fighters: Vec<FighterProfile>,
    pub fights: Vec<FightRecord>,
}

impl Tables {
    pub fn content_by_id(&self, id: &str) -> Option<&ContentItem> {
        let id = id.trim();
        self.content.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }

    pub fn fighter_by_id(&self, id: &str) -> Option<&FighterProfile> {
        let id = id.trim();
        self.fighters.iter().find(|f| f.id.eq_ignore_ascii_case(id))
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Deserialize every row, skipping (and logging) rows the CSV layer rejects.
fn read_rows<R: Read, T: DeserializeOwned>(reader: R, table: &str) -> Result<Vec<T>> {
    let mut rdr = csv_reader(reader);
    rdr.headers()
        .with_context(|| format!("Failed to read {table} header row"))?;

    let mut rows = Vec::new();
    for (index, row) in rdr.deserialize::<T>().enumerate() {
        match row {
            Ok(row) => rows.push(row),
            Err(e) => warn!(table, row = index + 1, error = %e, "Skipping unreadable row"),
        }
    }
    Ok(rows)
}

/// Use the id column, or a slug of the fallback text when it is blank.
fn resolve_id(id: &str, fallback: &str) -> Option<String> {
    let id = id.trim();
    if id.is_empty() {
        normalize_tag(fallback)
    } else {
        Some(id.to_string())
    }
}

/// Keeps the first occurrence of each identifier.
struct IdGuard {
    table: &'static str,
    seen: HashSet<String>,
}

impl IdGuard {
    fn new(table: &'static str) -> Self {
        Self {
            table,
            seen: HashSet::new(),
        }
    }

    /// Resolve a row's identifier. None means the row should be dropped.
    fn admit(&mut self, row: usize, id: &str, fallback: &str) -> Option<String> {
        let Some(id) = resolve_id(id, fallback) else {
            warn!(table = self.table, row, "Dropping row with no identifier");
            return None;
        };
        if !self.seen.insert(id.to_lowercase()) {
            warn!(table = self.table, row, id = %id, "Duplicate identifier, keeping the first row");
            return None;
        }
        Some(id)
    }
}

/// Read and tag the content catalog.
pub fn read_content<R: Read>(reader: R, extractor: &dyn TagExtractor) -> Result<Vec<ContentItem>> {
    let rows: Vec<ContentRow> = read_rows(reader, "content")?;
    let mut ids = IdGuard::new("content");
    let mut items = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let Some(id) = ids.admit(index + 1, &row.id, &row.title) else {
            continue;
        };

        let genre_labels = row.genre_labels();
        let preset = row.preset_tags();
        let tags = extractor.content_tags(&ContentFields {
            title: &row.title,
            content_type: &row.content_type,
            description: &row.description,
            genre_labels: &genre_labels,
            preset: Some(&preset),
        });

        items.push(ContentItem {
            id,
            title: row.title,
            content_type: row.content_type,
            description: row.description,
            genre_labels,
            tags,
        });
    }
    Ok(items)
}

/// Read the fight history. Rows without a fighter id are dropped.
pub fn read_fights<R: Read>(reader: R) -> Result<Vec<FightRecord>> {
    let rows: Vec<FightRow> = read_rows(reader, "fights")?;
    let total = rows.len();
    let records: Vec<FightRecord> = rows.into_iter().filter_map(FightRow::into_record).collect();
    if records.len() < total {
        warn!(dropped = total - records.len(), "Dropped fight rows with no fighter id");
    }
    Ok(records)
}

/// Read and tag the fighter table. `fights` feeds the history-based tags.
pub fn read_fighters<R: Read>(
    reader: R,
    fights: &[FightRecord],
    extractor: &dyn TagExtractor,
) -> Result<Vec<FighterProfile>> {
    let rows: Vec<FighterRow> = read_rows(reader, "fighters")?;
    let mut ids = IdGuard::new("fighters");
    let mut fighters = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let Some(id) = ids.admit(index + 1, &row.id, &row.fighter) else {
            continue;
        };

        let bio = row.bio();
        let stats = row.stats();
        let tags = extractor.fighter_tags(
            &FighterFields {
                id: &id,
                lore: &row.lore,
                bio: &bio,
                stats: &stats,
            },
            fights,
        );

        let name = if row.fighter.trim().is_empty() {
            id.clone()
        } else {
            row.fighter.trim().to_string()
        };

        fighters.push(FighterProfile {
            id,
            name,
            bio,
            stats,
            lore: row.lore,
            tags,
        });
    }
    Ok(fighters)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open {}", path.display()))
}

/// Load all three tables from the configured paths.
///
/// The fight history is optional; a missing file gives an empty table.
pub fn load_tables(config: &Config) -> Result<Tables> {
    let extractor = KeywordTagger::shared();

    let fights = if config.fights_path.is_file() {
        read_fights(open(&config.fights_path)?)
            .with_context(|| format!("Failed to load {}", config.fights_path.display()))?
    } else {
        info!(path = %config.fights_path.display(), "No fight history file, continuing without fights");
        Vec::new()
    };

    let content = read_content(open(&config.content_path)?, extractor)
        .with_context(|| format!("Failed to load {}", config.content_path.display()))?;
    let fighters = read_fighters(open(&config.fighters_path)?, &fights, extractor)
        .with_context(|| format!("Failed to load {}", config.fighters_path.display()))?;

    info!(
        content = content.len(),
        fighters = fighters.len(),
        fights = fights.len(),
        "Loaded tables"
    );

    Ok(Tables {
        content,
        fighters,
        fights,
    })
}
