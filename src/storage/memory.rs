//! In-memory store with switchable failures

use super::Storage;
use crate::errors::StorageError;
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
    fail_loads: bool,
    fail_saves: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `load` fail with [`StorageError::Unavailable`]
    pub fn fail_loads(&mut self, fail: bool) {
        self.fail_loads = fail;
    }

    /// Make every `save` fail with [`StorageError::Unavailable`]
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_loads {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::Unavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_overwrites() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.load("a").unwrap(), None);

        storage.save("a", "1").unwrap();
        storage.save("a", "2").unwrap();
        assert_eq!(storage.load("a").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn failures_can_be_switched_on_and_off() {
        let mut storage = MemoryStorage::new();
        storage.fail_saves(true);
        assert!(matches!(storage.save("a", "1"), Err(StorageError::Unavailable)));

        storage.fail_saves(false);
        storage.save("a", "1").unwrap();
        storage.fail_loads(true);
        assert!(matches!(storage.load("a"), Err(StorageError::Unavailable)));
    }
}
