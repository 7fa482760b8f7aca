use thiserror::Error;

/// Errors raised when a candidate event fails field-level or cross-field
/// invariants. Raised before the store is touched; each variant names the
/// offending field so callers can surface the message inline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Description is required")]
    EmptyDescription,
    #[error("Location is required for in person events")]
    MissingLocation,
    #[error("Event link is required for online events")]
    MissingEventLink,
    #[error("Event end date/time must be after start date/time")]
    EndNotAfterStart,
}

impl ValidationError {
    /// The field the error should be presented next to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyDescription => "description",
            Self::MissingLocation => "location",
            Self::MissingEventLink => "event_link",
            Self::EndNotAfterStart => "end",
        }
    }
}
