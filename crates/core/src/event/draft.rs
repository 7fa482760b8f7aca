//! Candidate event payloads.
//!
//! An [`EventDraft`] is what the UI or CLI submits: every event field except
//! the id and the organizer, which are stamped on once the draft has passed
//! validation and the conflict check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;
use super::types::{Category, Event, EventType, Organizer};

/// A candidate event awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_link: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub category: Category,
}

impl EventDraft {
    /// Creates a draft for an online event.
    pub fn online(
        title: impl Into<String>,
        event_link: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            event_type: EventType::Online,
            location: None,
            event_link: Some(event_link.into()),
            start,
            end,
            category: Category::Other,
        }
    }

    /// Creates a draft for an in-person event.
    pub fn in_person(
        title: impl Into<String>,
        location: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            event_type: EventType::InPerson,
            location: Some(location.into()),
            event_link: None,
            start,
            end,
            category: Category::Other,
        }
    }

    /// Sets the description for this draft.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category for this draft.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Validates field-level and cross-field invariants.
    ///
    /// Returns the first failing invariant, in presentation order: text
    /// fields, then the type-conditional field, then the time span.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        match self.event_type {
            EventType::InPerson => {
                if self
                    .location
                    .as_deref()
                    .is_none_or(|l| l.trim().is_empty())
                {
                    return Err(ValidationError::MissingLocation);
                }
            }
            EventType::Online => {
                if self
                    .event_link
                    .as_deref()
                    .is_none_or(|l| l.trim().is_empty())
                {
                    return Err(ValidationError::MissingEventLink);
                }
            }
        }

        if self.end <= self.start {
            return Err(ValidationError::EndNotAfterStart);
        }

        Ok(())
    }

    /// Stamps the draft with a fresh id and the acting organizer.
    ///
    /// Call only after [`validate`](Self::validate) has passed and the
    /// conflict check came back clear.
    pub fn into_event(self, organizer: Organizer) -> Event {
        self.into_event_with_id(Uuid::new_v4(), organizer)
    }

    /// Stamps the draft with an existing id, for full-replacement updates.
    ///
    /// The organizer must be the stored event's snapshot: it is immutable
    /// for the lifetime of the event.
    pub fn into_event_with_id(self, id: Uuid, organizer: Organizer) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            event_type: self.event_type,
            location: self.location,
            event_link: self.event_link,
            start: self.start,
            end: self.end,
            category: self.category,
            organizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_organizer() -> Organizer {
        Organizer {
            user_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn times() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2024, 1, 10, 14, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 10, 15, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_valid_online_draft() {
        let (start, end) = times();
        let draft = EventDraft::online("Demo", "https://meet.example.com/demo", start, end)
            .with_description("Quarterly demo")
            .with_category(Category::Tech);

        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_empty_title_rejected() {
        let (start, end) = times();
        let draft = EventDraft::online("   ", "https://meet.example.com", start, end)
            .with_description("whitespace title");

        assert_eq!(draft.validate(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_empty_description_rejected() {
        let (start, end) = times();
        let draft = EventDraft::online("Demo", "https://meet.example.com", start, end);

        assert_eq!(draft.validate(), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn test_online_event_requires_link() {
        let (start, end) = times();
        let mut draft =
            EventDraft::online("Demo", "", start, end).with_description("missing link");
        assert_eq!(draft.validate(), Err(ValidationError::MissingEventLink));
        assert_eq!(draft.validate().unwrap_err().field(), "event_link");

        draft.event_link = None;
        assert_eq!(draft.validate(), Err(ValidationError::MissingEventLink));
    }

    #[test]
    fn test_in_person_event_requires_location() {
        let (start, end) = times();
        let draft =
            EventDraft::in_person("Meetup", "  ", start, end).with_description("missing venue");

        assert_eq!(draft.validate(), Err(ValidationError::MissingLocation));
    }

    #[test]
    fn test_end_must_be_after_start() {
        let (start, end) = times();
        let draft = EventDraft::online("Demo", "https://meet.example.com", end, start)
            .with_description("inverted span");
        assert_eq!(draft.validate(), Err(ValidationError::EndNotAfterStart));

        // Zero-length spans are rejected too.
        let draft = EventDraft::online("Demo", "https://meet.example.com", start, start)
            .with_description("empty span");
        assert_eq!(draft.validate(), Err(ValidationError::EndNotAfterStart));
    }

    #[test]
    fn test_into_event_stamps_id_and_organizer() {
        let (start, end) = times();
        let draft = EventDraft::online("Demo", "https://meet.example.com", start, end)
            .with_description("Quarterly demo");

        let event = draft.clone().into_event(make_organizer());
        assert_eq!(event.title, "Demo");
        assert_eq!(event.organizer, make_organizer());

        let other = draft.into_event(make_organizer());
        assert_ne!(event.id, other.id);
    }

    #[test]
    fn test_into_event_with_id_preserves_identity() {
        let (start, end) = times();
        let id = Uuid::new_v4();
        let draft = EventDraft::online("Demo", "https://meet.example.com", start, end)
            .with_description("updated body");

        let event = draft.into_event_with_id(id, make_organizer());
        assert_eq!(event.id, id);
    }
}
