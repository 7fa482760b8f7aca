use serde::{Deserialize, Serialize};

use crate::event::Organizer;

/// The acting identity supplied by the host's authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_name: String,
    pub email: String,
}

impl Identity {
    pub fn new(user_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
        }
    }

    /// Snapshots this identity for stamping onto a new event.
    pub fn to_organizer(&self) -> Organizer {
        Organizer {
            user_name: self.user_name.clone(),
            email: self.email.clone(),
        }
    }
}

impl From<Identity> for Organizer {
    fn from(identity: Identity) -> Self {
        Organizer {
            user_name: identity.user_name,
            email: identity.email,
        }
    }
}
