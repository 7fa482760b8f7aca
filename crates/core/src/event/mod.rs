mod draft;
mod error;
mod types;

pub use draft::EventDraft;
pub use error::ValidationError;
pub use types::{Category, Event, EventType, Organizer};
