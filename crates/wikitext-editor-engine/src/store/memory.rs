use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KeyValueStore, StoreError, validate_key};

/// In-memory [`KeyValueStore`] for tests and hosts without a filesystem.
///
/// Values go through JSON like the on-disk store, so type mismatches show
/// up here too.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, serde_json::Value>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        validate_key(key)?;
        self.values
            .get(key)
            .map(|v| serde_json::from_value(v.clone()))
            .transpose()
            .map_err(StoreError::from)
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        validate_key(key)?;
        self.values.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_removes() {
        let mut kv = MemoryKeyValueStore::new();
        kv.save("size", &3u8).unwrap();
        assert_eq!(kv.load::<u8>("size").unwrap(), Some(3));
        assert_eq!(kv.len(), 1);
        kv.remove("size").unwrap();
        assert!(kv.is_empty());
    }

    #[test]
    fn type_mismatch_is_a_json_error() {
        let mut kv = MemoryKeyValueStore::new();
        kv.save("flag", &true).unwrap();
        assert!(matches!(kv.load::<String>("flag"), Err(StoreError::Json(_))));
    }
}
