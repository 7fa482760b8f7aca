use std::collections::HashMap;

use eventdesk_core::storage::{KeyValueStorage, Result};

/// In-memory storage backend for tests.
///
/// Records live in a plain `HashMap` and disappear with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a record, for seeding test fixtures.
    pub fn with_record(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.records.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read("events").unwrap(), None);

        storage.write("events", "[]").unwrap();
        assert_eq!(storage.read("events").unwrap().as_deref(), Some("[]"));

        storage.remove("events").unwrap();
        assert_eq!(storage.read("events").unwrap(), None);
    }

    #[test]
    fn test_with_record_seeds_fixture() {
        let storage = MemoryStorage::new().with_record("events", "[]");
        assert_eq!(storage.read("events").unwrap().as_deref(), Some("[]"));
    }
}
