use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_BUNDLES: usize = 3;
pub const DEFAULT_FIGHTS_PER_BUNDLE: usize = 5;

/// Central configuration loaded from environment variables.
///
/// Every value has a default, so an empty environment gives a working setup
/// as long as the data files sit in `./data`. The .env file is loaded
/// automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Streaming catalog CSV (required)
    pub content_path: PathBuf,
    /// Fighter profile CSV (required)
    pub fighters_path: PathBuf,
    /// Fight history CSV. Optional: a missing file means no fight records.
    pub fights_path: PathBuf,
    /// Default number of ranked results
    pub top_n: usize,
    /// Default number of bundles per selection
    pub bundles: usize,
    /// Fights listed per fighter in detailed views
    pub fights_per_bundle: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from("data/content_catalog.csv"),
            fighters_path: PathBuf::from("data/fighters.csv"),
            fights_path: PathBuf::from("data/fights.csv"),
            top_n: DEFAULT_TOP_N,
            bundles: DEFAULT_BUNDLES,
            fights_per_bundle: DEFAULT_FIGHTS_PER_BUNDLE,
        }
    }
}

/// Read a count from the environment, keeping the default when the variable
/// is unset or not a number.
fn env_count(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_path(name: &str, default: PathBuf) -> PathBuf {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            content_path: env_path("CAGEMATCH_CONTENT_PATH", defaults.content_path),
            fighters_path: env_path("CAGEMATCH_FIGHTERS_PATH", defaults.fighters_path),
            fights_path: env_path("CAGEMATCH_FIGHTS_PATH", defaults.fights_path),
            top_n: env_count("CAGEMATCH_TOP_N", defaults.top_n),
            bundles: env_count("CAGEMATCH_BUNDLES", defaults.bundles),
            fights_per_bundle: env_count("CAGEMATCH_FIGHTS_PER_BUNDLE", defaults.fights_per_bundle),
        })
    }

    /// Check that the content catalog and fighter table exist.
    /// Call this before any command that loads the tables.
    pub fn require_tables(&self) -> Result<()> {
        require_file(&self.content_path, "CAGEMATCH_CONTENT_PATH")?;
        require_file(&self.fighters_path, "CAGEMATCH_FIGHTERS_PATH")?;
        Ok(())
    }
}

fn require_file(path: &Path, var: &str) -> Result<()> {
    if !path.is_file() {
        anyhow::bail!(
            "Data file not found: {}\n\
             Set {var} in your .env file or place the file at the default location.",
            path.display()
        );
    }
    Ok(())
}
