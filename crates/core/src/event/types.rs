use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::TimeRange;

/// How an event is held, which decides its conditional required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Held remotely; requires `event_link`.
    Online,
    /// Held at a physical venue; requires `location`.
    InPerson,
}

impl EventType {
    /// The wire token for this type, as stored and mirrored into filter
    /// parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::InPerson => "in_person",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "Online"),
            Self::InPerson => write!(f, "In Person"),
        }
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "in_person" | "in-person" => Ok(Self::InPerson),
            other => Err(format!("unknown event type: {other}")),
        }
    }
}

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Business,
    Design,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Tech,
        Category::Business,
        Category::Design,
        Category::Other,
    ];

    /// The wire token for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Business => "business",
            Self::Design => "design",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tech => write!(f, "Tech"),
            Self::Business => write!(f, "Business"),
            Self::Design => write!(f, "Design"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tech" => Ok(Self::Tech),
            "business" => Ok(Self::Business),
            "design" => Ok(Self::Design),
            "other" => Ok(Self::Other),
            unknown => Err(format!("unknown category: {unknown}")),
        }
    }
}

/// Identity data captured on an event at creation time.
///
/// This is a snapshot of the acting identity, not a live link: later changes
/// to the identity's profile do not propagate to existing events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub user_name: String,
    pub email: String,
}

/// A scheduled occurrence with a title, time span, type, and organizer.
///
/// Events are produced by stamping a validated [`EventDraft`] with a fresh id
/// and the current organizer; the struct itself carries no validation.
///
/// [`EventDraft`]: super::EventDraft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "eventType")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "eventLink", default, skip_serializing_if = "Option::is_none")]
    pub event_link: Option<String>,
    #[serde(rename = "startDateTime")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endDateTime")]
    pub end: DateTime<Utc>,
    pub category: Category,
    pub organizer: Organizer,
}

impl Event {
    /// The event's `[start, end)` time span.
    pub fn span(&self) -> TimeRange {
        TimeRange {
            start: self.start,
            end: self.end,
        }
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}
