//! # Draft Store
//!
//! A small on-disk store for unsaved article edits and editor preferences.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//!   drafts.json            title -> draft file index
//!   drafts/<uuid>.wikitext one file per draft
//!   kv/<key>.json          KeyValueStore entries
//! ```
//!
//! Paths inside the store are kept as [`RelativePathBuf`] so the index
//! stays valid if the root moves.

mod memory;

pub use memory::MemoryKeyValueStore;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid store data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Draft not found: {0}")]
    DraftNotFound(String),
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

/// Typed key-value persistence.
pub trait KeyValueStore {
    /// The value stored under `key`, or `None` if there is none.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>;

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Keys become file names, so they are restricted to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let ok = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DraftEntry {
    id: Uuid,
    path: RelativePathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct DraftIndex {
    drafts: BTreeMap<String, DraftEntry>,
}

#[derive(Debug)]
pub struct DataStore {
    root: PathBuf,
    index: DraftIndex,
}

impl DataStore {
    const INDEX_FILE: &'static str = "drafts.json";
    const DRAFTS_DIR: &'static str = "drafts";
    const KV_DIR: &'static str = "kv";

    /// Opens the store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;

        let index_path = RelativePath::new(Self::INDEX_FILE).to_path(&root);
        let index = if index_path.exists() {
            serde_json::from_str(&fs::read_to_string(&index_path)?)?
        } else {
            DraftIndex::default()
        };
        log::debug!(
            "opened store at {} with {} drafts",
            root.display(),
            index.drafts.len()
        );
        Ok(Self { root, index })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Titles of all saved drafts, sorted.
    pub fn draft_titles(&self) -> Vec<String> {
        self.index.drafts.keys().cloned().collect()
    }

    pub fn has_draft(&self, title: &str) -> bool {
        self.index.drafts.contains_key(title)
    }

    /// Saves `text` as the draft for `title`, overwriting any earlier one.
    ///
    /// Returns the draft's id, which stays the same across overwrites.
    pub fn save_draft(&mut self, title: &str, text: &str) -> Result<Uuid, StoreError> {
        let entry = match self.index.drafts.get(title) {
            Some(entry) => entry.clone(),
            None => {
                let id = Uuid::new_v4();
                DraftEntry {
                    id,
                    path: RelativePath::new(Self::DRAFTS_DIR).join(format!("{id}.wikitext")),
                }
            }
        };
        let path = entry.path.to_path(&self.root);
        write_creating_dirs(&path, text)?;

        let id = entry.id;
        let previous = self.index.drafts.insert(title.to_string(), entry);
        if let Err(e) = self.write_index() {
            match previous {
                Some(previous) => {
                    self.index.drafts.insert(title.to_string(), previous);
                }
                None => {
                    self.index.drafts.remove(title);
                    if let Err(e) = fs::remove_file(&path) {
                        log::warn!("could not delete {}: {e}", path.display());
                    }
                }
            }
            return Err(e);
        }
        log::debug!("saved draft {title:?} ({} bytes) as {id}", text.len());
        Ok(id)
    }

    pub fn load_draft(&self, title: &str) -> Result<String, StoreError> {
        let entry = self
            .index
            .drafts
            .get(title)
            .ok_or_else(|| StoreError::DraftNotFound(title.to_string()))?;
        let path = entry.path.to_path(&self.root);
        if !path.exists() {
            log::warn!("draft {title:?} is indexed but {} is missing", entry.path);
            return Err(StoreError::DraftNotFound(title.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Deletes the draft for `title`. Returns `false` if there was none.
    pub fn remove_draft(&mut self, title: &str) -> Result<bool, StoreError> {
        let Some(entry) = self.index.drafts.remove(title) else {
            return Ok(false);
        };
        let path = entry.path.to_path(&self.root);
        if let Err(e) = fs::remove_file(&path) {
            log::warn!("could not delete {}: {e}", path.display());
        }
        self.write_index()?;
        Ok(true)
    }

    fn write_index(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.index)?;
        write_creating_dirs(&RelativePath::new(Self::INDEX_FILE).to_path(&self.root), &json)
    }

    fn kv_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(RelativePath::new(Self::KV_DIR)
            .join(format!("{key}.json"))
            .to_path(&self.root))
    }
}

impl KeyValueStore for DataStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.kv_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&fs::read_to_string(path)?)?))
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.kv_path(key)?;
        write_creating_dirs(&path, &serde_json::to_string_pretty(value)?)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.kv_path(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_creating_dirs(path: &Path, content: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
