//! Durable key/value persistence for malitrack.
//!
//! Engine state lives behind [`KeyValueStore`], a synchronous,
//! string-keyed storage contract. [`FileStore`] keeps the whole map in
//! a single JSON file rewritten after every mutation; [`MemoryStore`]
//! backs tests and ephemeral runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Synchronous string-keyed storage.
///
/// Reads are infallible (a missing key is `None`); writes report I/O
/// failure. Implementations persist each mutation before returning.
pub trait KeyValueStore {
    /// The value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed store: one JSON object per application.
///
/// Opened once at startup; a missing or unreadable file yields an empty
/// store (corruption is logged and never fatal). Every mutation rewrites
/// the file, so the on-disk state always matches the last completed
/// operation. There is no cross-process coordination: concurrent
/// processes race with last-write-wins at the file level.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, restoring whatever state is readable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::restore(&path);
        Self { path, entries }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn restore(path: &Path) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            // Usually a first run with no file yet.
            Err(_) => return BTreeMap::new(),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                malitrack_logger::warn(format!(
                    "State file {} is not valid JSON ({}), starting empty",
                    path.display(),
                    e
                ));
                BTreeMap::new()
            }
        }
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write state file {}", self.path.display()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
