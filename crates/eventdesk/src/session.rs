//! Authenticated-identity persistence.
//!
//! Credential handling lives outside this client; what it keeps is the
//! snapshot of who is signed in (under one key) and the list of identities
//! that have ever signed in on this device (under another). Logout removes
//! the snapshot but leaves the registered list alone.

use eventdesk_core::auth::{validate_identity, Identity, IdentityError};
use eventdesk_core::storage::KeyValueStorage;

/// Fixed key for the authenticated-identity snapshot.
pub const SESSION_KEY: &str = "session";
/// Fixed key for the registered-identities list.
pub const USERS_KEY: &str = "users";

/// Session state backed by durable storage.
#[derive(Debug)]
pub struct SessionStore {
    current: Option<Identity>,
    registered: Vec<Identity>,
    storage: Box<dyn KeyValueStorage>,
}

impl SessionStore {
    /// Loads session state from storage; missing or corrupt records load
    /// as signed-out with no registered identities.
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let current = read_record(storage.as_ref(), SESSION_KEY);
        let registered = read_record(storage.as_ref(), USERS_KEY).unwrap_or_default();
        Self {
            current,
            registered,
            storage,
        }
    }

    /// The signed-in identity, if any.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Identities that have signed in on this device.
    pub fn registered(&self) -> &[Identity] {
        &self.registered
    }

    /// Records a successful sign-in.
    ///
    /// Validates the identity, snapshots it as current, and registers it if
    /// its email has not been seen before.
    pub fn login(&mut self, identity: Identity) -> Result<(), IdentityError> {
        validate_identity(&identity)?;
        tracing::info!(user = %identity.user_name, "signing in");

        if !self.registered.iter().any(|i| i.email == identity.email) {
            self.registered.push(identity.clone());
            let registered = self.registered.clone();
            self.persist(USERS_KEY, &registered);
        }

        self.persist(SESSION_KEY, &identity);
        self.current = Some(identity);
        Ok(())
    }

    /// Signs out: drops the snapshot and removes its persisted record.
    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            tracing::info!(user = %identity.user_name, "signing out");
        }
        if let Err(error) = self.storage.remove(SESSION_KEY) {
            tracing::warn!(%error, "failed to remove session record");
        }
    }

    fn persist<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, key, "failed to serialize session record");
                return;
            }
        };
        if let Err(error) = self.storage.write(key, &json) {
            tracing::warn!(%error, key, "failed to persist session record; continuing in memory");
        }
    }
}

fn read_record<T: serde::de::DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Option<T> {
    let json = match storage.read(key) {
        Ok(record) => record?,
        Err(error) => {
            tracing::warn!(%error, key, "failed to read session record");
            return None;
        }
    };
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(%error, key, "session record is corrupt; ignoring");
            None
        }
    }
}
