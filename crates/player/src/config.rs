//! Player configuration.
//!
//! Read from the environment after `.env.local` and `.env` in the working
//! directory have been loaded. Command-line flags override both.
//!
//! Supported environment variables:
//! - SHEETKEEP_SAVE_DIR: directory sheets are saved into (default: the user's documents dir)
//! - SHEETKEEP_FILE_NAME: name of the sheet file (default: `character.json`)
//! - RUST_LOG: tracing filter (default: `sheetkeep_player=info`)

use std::path::{Path, PathBuf};

use sheetkeep_shared::DEFAULT_FILE_NAME;

use crate::infrastructure::FileDocumentStore;

pub const SAVE_DIR_VAR: &str = "SHEETKEEP_SAVE_DIR";
pub const FILE_NAME_VAR: &str = "SHEETKEEP_FILE_NAME";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "sheetkeep_player=info,sheetkeep_shared=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub save_dir: PathBuf,
    pub file_name: String,
    pub log_filter: String,
}

impl PlayerConfig {
    /// Load `.env` files from `dir`, then read the process environment.
    pub fn from_env(dir: &Path) -> Self {
        load_dotenv(dir);
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            save_dir: get(SAVE_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(FileDocumentStore::default_base_dir),
            file_name: get(FILE_NAME_VAR).unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            log_filter: get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, save_dir: Option<PathBuf>, file_name: Option<String>) -> Self {
        if let Some(dir) = save_dir {
            self.save_dir = dir;
        }
        if let Some(name) = file_name {
            self.file_name = name;
        }
        self
    }
}

fn load_dotenv(dir: &Path) {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                eprintln!("Ignoring {}: {e}", path.display());
            }
        }
    }
}
