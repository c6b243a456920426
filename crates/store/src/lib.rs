//! High-score persistence backed by a small JSON file.
//!
//! The file holds one object mapping keys to scores:
//!
//! ```json
//! { "tui-snake-highest-score": 120 }
//! ```
//!
//! A missing file reads as empty. Writes replace the whole file through a
//! temporary sibling and a rename, so a crash mid-write leaves the previous
//! contents intact. Write failures are logged and otherwise ignored: the game
//! keeps running with the in-memory value.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tui_snake_core::HighScoreStore;

/// On-disk layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct ScoreTable {
    entries: BTreeMap<String, u32>,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    table: ScoreTable,
}

impl JsonFileStore {
    /// Load the store at `path`.
    ///
    /// A missing file is not an error. An unreadable or malformed file is.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let table = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => ScoreTable::default(),
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("parse high scores from {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no high score file at {}, starting empty", path.display());
                ScoreTable::default()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read high scores from {}", path.display()))
            }
        };
        Ok(Self { path, table })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the table to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("create directory {}", dir.display()))?;
        }

        let json = serde_json::to_string_pretty(&self.table)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }
}

impl HighScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> u32 {
        self.table.entries.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: u32) {
        self.table.entries.insert(key.to_string(), value);
        match self.save() {
            Ok(()) => debug!("saved {}={} to {}", key, value, self.path.display()),
            Err(e) => warn!("could not persist high score: {:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("scores.json")).unwrap();
        assert_eq!(store.get("anything"), 0);
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("best", 50);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("best"), 50);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_format_is_flat_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("tui-snake-highest-score", 120);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["tui-snake-highest-score"], 120);
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"best": 40, "other": 7}"#).unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("best"), 40);
        assert_eq!(store.get("other"), 7);
    }

    #[test]
    fn test_empty_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "  \n").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("best"), 0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parse high scores"));
    }

    #[test]
    fn test_nested_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("scores.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("best", 1);
        assert!(path.exists());
    }

    #[test]
    fn test_write_failure_keeps_value_in_memory() {
        let dir = TempDir::new().unwrap();
        // The target path is an existing directory, so the rename fails.
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();

        let mut store = JsonFileStore {
            path: path.clone(),
            table: ScoreTable::default(),
        };
        store.set("best", 9);
        assert_eq!(store.get("best"), 9);
        assert!(path.is_dir());
    }
}
