//! Disposable stores for tests.
//!
//! Compiled for this crate's own tests and, with the `test-support`
//! feature, for downstream test suites.

use std::path::Path;

use tempfile::TempDir;

use crate::store::{DataStore, StoreError};

/// A [`DataStore`] in a fresh temporary directory, deleted on drop.
pub struct TemporaryStore {
    store: DataStore,
    // Declared after `store` so the directory outlives it during drop.
    dir: TempDir,
}

impl TemporaryStore {
    pub fn create() -> Result<Self, StoreError> {
        let dir = tempfile::Builder::new().prefix("wikitext-store-").tempdir()?;
        let store = DataStore::open(dir.path())?;
        log::trace!("temporary store at {}", dir.path().display());
        Ok(Self { store, dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DataStore {
        &mut self.store
    }
}

/// Runs `completion` against a store in an isolated temporary directory.
///
/// The directory and everything in it are removed when `completion`
/// returns.
pub fn create_temporary_store<R>(
    completion: impl FnOnce(&mut DataStore) -> R,
) -> Result<R, StoreError> {
    let mut temp = TemporaryStore::create()?;
    Ok(completion(temp.store_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_is_removed_on_drop() {
        let temp = TemporaryStore::create().unwrap();
        let path = temp.path().to_path_buf();
        assert!(path.is_dir());
        drop(temp);
        assert!(!path.exists());
    }

    #[test]
    fn stores_are_isolated() {
        let first = create_temporary_store(|s| {
            s.save_draft("Shared", "a").unwrap();
            s.root().to_path_buf()
        })
        .unwrap();
        let second = create_temporary_store(|s| {
            assert!(s.draft_titles().is_empty());
            s.root().to_path_buf()
        })
        .unwrap();
        assert_ne!(first, second);
        assert!(!first.exists());
    }

    #[test]
    fn store_accessor_sees_saved_drafts() {
        let mut temp = TemporaryStore::create().unwrap();
        temp.store_mut().save_draft("X", "y").unwrap();
        assert_eq!(temp.store().draft_titles(), vec!["X".to_string()]);
    }
}
