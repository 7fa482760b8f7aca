use super::error::Result;

/// Durable string-keyed record storage.
///
/// The persistence model is deliberately small: whole JSON documents stored
/// under fixed keys, written synchronously and assumed durable by the time
/// the call returns. The engine is single-actor, so writers take `&mut self`
/// and no locking is involved; backends live in the application crate.
pub trait KeyValueStorage: std::fmt::Debug {
    /// Reads the record stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous record.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the record under `key`; removing an absent key is not an
    /// error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
