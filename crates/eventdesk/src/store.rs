//! The authoritative event collection.
//!
//! The store owns the in-memory `Vec<Event>` and is the only writer to the
//! persisted record under its key. Every mutation synchronously writes the
//! full collection back to storage; a failed write is logged and the store
//! degrades to memory-only operation for the rest of the session. External
//! writers (another process on the same data directory) are picked up only
//! through the explicit [`EventStore::reload`] call; the last persisted
//! write wins, with no merge.

use thiserror::Error;
use uuid::Uuid;

use eventdesk_core::event::Event;
use eventdesk_core::storage::KeyValueStorage;

/// Fixed key the event collection is persisted under.
pub const EVENTS_KEY: &str = "events";

/// Errors reported by store mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Event not found: {0}")]
    NotFound(Uuid),
}

/// Authoritative collection of events with durable persistence.
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    storage: Box<dyn KeyValueStorage>,
}

impl EventStore {
    /// Loads the collection from storage.
    ///
    /// A missing record yields an empty collection; so does a corrupt one
    /// (logged, never fatal).
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let events = read_collection(storage.as_ref());
        Self { events, storage }
    }

    /// Read-only snapshot of the collection, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the event with the given id, if present.
    pub fn get_by_id(&self, id: Uuid) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Appends a validated, conflict-cleared event and persists.
    pub fn create(&mut self, event: Event) {
        tracing::debug!(id = %event.id, title = %event.title, "creating event");
        self.events.push(event);
        self.persist();
    }

    /// Replaces the stored event with the same id; full replacement, never
    /// a partial patch.
    pub fn update(&mut self, event: Event) -> Result<(), StoreError> {
        let Some(slot) = self.events.iter_mut().find(|e| e.id == event.id) else {
            return Err(StoreError::NotFound(event.id));
        };
        tracing::debug!(id = %event.id, "updating event");
        *slot = event;
        self.persist();
        Ok(())
    }

    /// Removes the event with the given id.
    ///
    /// An absent id is reported and nothing is persisted.
    pub fn delete(&mut self, id: Uuid) -> Result<Event, StoreError> {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        tracing::debug!(id = %id, "deleting event");
        let removed = self.events.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Appends many events at once, persisting once for the whole batch.
    /// Used to seed a freshly authenticated session.
    pub fn bulk_import(&mut self, events: Vec<Event>) {
        if events.is_empty() {
            return;
        }
        tracing::debug!(count = events.len(), "importing events");
        self.events.extend(events);
        self.persist();
    }

    /// Empties the collection and removes the persisted record (logout).
    pub fn clear(&mut self) {
        self.events.clear();
        if let Err(error) = self.storage.remove(EVENTS_KEY) {
            tracing::warn!(%error, "failed to remove persisted events; continuing in memory");
        }
    }

    /// Replaces the in-memory collection with whatever storage holds now.
    ///
    /// The host calls this when it detects an external write to the same
    /// key. Unconditional full reload: the last persisted write wins.
    pub fn reload(&mut self) {
        self.events = read_collection(self.storage.as_ref());
        tracing::debug!(count = self.events.len(), "reloaded events from storage");
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.events) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize events; keeping in-memory state");
                return;
            }
        };
        if let Err(error) = self.storage.write(EVENTS_KEY, &json) {
            tracing::warn!(%error, "failed to persist events; keeping in-memory state");
        }
    }
}

fn read_collection(storage: &dyn KeyValueStorage) -> Vec<Event> {
    let record = match storage.read(EVENTS_KEY) {
        Ok(record) => record,
        Err(error) => {
            tracing::warn!(%error, "failed to read persisted events; starting empty");
            return Vec::new();
        }
    };
    let Some(json) = record else {
        return Vec::new();
    };
    match serde_json::from_str(&json) {
        Ok(events) => events,
        Err(error) => {
            tracing::warn!(%error, "persisted events are corrupt; starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use tempfile::TempDir;

    use eventdesk_core::event::{Category, EventType, Organizer};
    use eventdesk_core::storage::{Result as StorageResult, StorageError};

    use crate::storage::{FileStorage, MemoryStorage};

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, h, 0, 0).unwrap()
    }

    fn make_event(title: &str) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{title} description"),
            event_type: EventType::Online,
            location: None,
            event_link: Some("https://meet.example.com".to_string()),
            start: at(9),
            end: at(10),
            category: Category::Tech,
            organizer: Organizer {
                user_name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    fn memory_store() -> EventStore {
        EventStore::load(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_create_appends_in_insertion_order() {
        let mut store = memory_store();
        store.create(make_event("First"));
        store.create(make_event("Second"));

        let titles: Vec<&str> = store.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = memory_store();
        let event = make_event("Lookup");
        let id = event.id;
        store.create(event);

        assert_eq!(store.get_by_id(id).unwrap().title, "Lookup");
        assert!(store.get_by_id(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_update_replaces_whole_event() {
        let mut store = memory_store();
        let mut event = make_event("Before");
        let id = event.id;
        store.create(event.clone());

        event.title = "After".to_string();
        event.end = at(11);
        store.update(event).unwrap();

        let stored = store.get_by_id(id).unwrap();
        assert_eq!(stored.title, "After");
        assert_eq!(stored.end, at(11));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_reported() {
        let mut store = memory_store();
        let event = make_event("Ghost");
        let id = event.id;

        assert_eq!(store.update(event), Err(StoreError::NotFound(id)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_removes_and_returns_event() {
        let mut store = memory_store();
        let event = make_event("Doomed");
        let id = event.id;
        store.create(event);

        let removed = store.delete(id).unwrap();
        assert_eq!(removed.title, "Doomed");
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_leaves_store_and_storage_untouched() {
        // Storage double that counts writes, to prove the failed delete
        // never persists.
        #[derive(Debug, Default)]
        struct CountingStorage {
            inner: MemoryStorage,
            writes: std::rc::Rc<std::cell::Cell<usize>>,
        }
        impl KeyValueStorage for CountingStorage {
            fn read(&self, key: &str) -> StorageResult<Option<String>> {
                self.inner.read(key)
            }
            fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
                self.writes.set(self.writes.get() + 1);
                self.inner.write(key, value)
            }
            fn remove(&mut self, key: &str) -> StorageResult<()> {
                self.inner.remove(key)
            }
        }

        let writes = std::rc::Rc::new(std::cell::Cell::new(0));
        let storage = CountingStorage {
            inner: MemoryStorage::new(),
            writes: writes.clone(),
        };
        let mut store = EventStore::load(Box::new(storage));
        store.create(make_event("Kept"));
        let writes_after_create = writes.get();

        let missing = Uuid::new_v4();
        assert_eq!(store.delete(missing), Err(StoreError::NotFound(missing)));
        assert_eq!(store.len(), 1);
        assert_eq!(writes.get(), writes_after_create);
    }

    #[test]
    fn test_bulk_import_appends_after_existing() {
        let mut store = memory_store();
        store.create(make_event("Existing"));

        store.bulk_import(vec![make_event("Imported A"), make_event("Imported B")]);

        let titles: Vec<&str> = store.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Existing", "Imported A", "Imported B"]);
    }

    #[test]
    fn test_persistence_round_trip_through_files() {
        let dir = TempDir::new().unwrap();
        let event = make_event("Durable");
        let id = event.id;

        {
            let mut store = EventStore::load(Box::new(FileStorage::new(dir.path())));
            store.create(event);
        }

        let store = EventStore::load(Box::new(FileStorage::new(dir.path())));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(id).unwrap().title, "Durable");
    }

    #[test]
    fn test_corrupt_record_loads_as_empty() {
        let storage = MemoryStorage::new().with_record(EVENTS_KEY, "{not json");
        let store = EventStore::load(Box::new(storage));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reload_picks_up_external_write() {
        let dir = TempDir::new().unwrap();
        let mut ours = EventStore::load(Box::new(FileStorage::new(dir.path())));
        let mut theirs = EventStore::load(Box::new(FileStorage::new(dir.path())));

        theirs.create(make_event("From elsewhere"));
        assert!(ours.is_empty());

        ours.reload();
        assert_eq!(ours.len(), 1);
        assert_eq!(ours.events()[0].title, "From elsewhere");
    }

    #[test]
    fn test_clear_empties_collection_and_removes_record() {
        let dir = TempDir::new().unwrap();
        let mut store = EventStore::load(Box::new(FileStorage::new(dir.path())));
        store.create(make_event("Session data"));
        store.clear();

        assert!(store.is_empty());
        let reloaded = EventStore::load(Box::new(FileStorage::new(dir.path())));
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_failed_write_degrades_to_memory_only() {
        #[derive(Debug)]
        struct BrokenStorage;
        impl KeyValueStorage for BrokenStorage {
            fn read(&self, _key: &str) -> StorageResult<Option<String>> {
                Ok(None)
            }
            fn write(&mut self, key: &str, _value: &str) -> StorageResult<()> {
                Err(StorageError::Io {
                    key: key.to_string(),
                    message: "quota exceeded".to_string(),
                })
            }
            fn remove(&mut self, _key: &str) -> StorageResult<()> {
                Ok(())
            }
        }

        let mut store = EventStore::load(Box::new(BrokenStorage));
        store.create(make_event("Memory only"));

        // The mutation itself still succeeds against the in-memory state.
        assert_eq!(store.len(), 1);
        assert_eq!(store.events()[0].title, "Memory only");
    }
}
