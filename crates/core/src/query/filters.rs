use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::{Category, EventType};

/// Conjunctive filter state for the event table.
///
/// Ephemeral view state, not domain data: it is only ever mirrored into the
/// flat string map of [`params`](super::params) so filters survive reload
/// and sharing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
    pub event_type: Option<EventType>,
    pub category: Option<Category>,
    /// Inclusive lower day bound on the event's span.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper day bound on the event's span.
    pub date_to: Option<NaiveDate>,
}

impl Filters {
    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.event_type.is_none()
            && self.category.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

/// Sortable columns of the event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Title,
    Description,
    Category,
    EventType,
    Location,
    #[serde(rename = "startDateTime")]
    Start,
    #[serde(rename = "endDateTime")]
    End,
    Organizer,
}

impl SortKey {
    /// The flat-map token for this key, matching the table's column
    /// accessor names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Category => "category",
            Self::EventType => "eventType",
            Self::Location => "location",
            Self::Start => "startDateTime",
            Self::End => "endDateTime",
            Self::Organizer => "organizer",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "category" => Ok(Self::Category),
            "eventType" => Ok(Self::EventType),
            "location" => Ok(Self::Location),
            "startDateTime" | "start" => Ok(Self::Start),
            "endDateTime" | "end" => Ok(Self::End),
            "organizer" => Ok(Self::Organizer),
            unknown => Err(format!("unknown sort key: {unknown}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            unknown => Err(format!("unknown sort direction: {unknown}")),
        }
    }
}

/// The single active sort, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub dir: SortDir,
}

/// Advances the sort state for a click on a column header.
///
/// A new column starts descending; a second click on the same column flips
/// to ascending; a third clears the sort entirely.
pub fn next_sort(current: Option<SortSpec>, clicked: SortKey) -> Option<SortSpec> {
    match current {
        Some(SortSpec { key, dir }) if key == clicked => match dir {
            SortDir::Desc => Some(SortSpec {
                key,
                dir: SortDir::Asc,
            }),
            SortDir::Asc => None,
        },
        _ => Some(SortSpec {
            key: clicked,
            dir: SortDir::Desc,
        }),
    }
}

/// A page request: 1-based index, fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

impl Page {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    /// The first page at the given size.
    pub fn first(size: usize) -> Self {
        Self { index: 1, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_are_empty() {
        assert!(Filters::default().is_empty());

        let filters = Filters {
            search: Some("rust".to_string()),
            ..Filters::default()
        };
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_sort_cycle_desc_asc_cleared() {
        let first = next_sort(None, SortKey::Title);
        assert_eq!(
            first,
            Some(SortSpec {
                key: SortKey::Title,
                dir: SortDir::Desc,
            })
        );

        let second = next_sort(first, SortKey::Title);
        assert_eq!(
            second,
            Some(SortSpec {
                key: SortKey::Title,
                dir: SortDir::Asc,
            })
        );

        assert_eq!(next_sort(second, SortKey::Title), None);
    }

    #[test]
    fn test_clicking_another_column_resets_to_desc() {
        let current = next_sort(next_sort(None, SortKey::Title), SortKey::Title);
        assert_eq!(current.unwrap().dir, SortDir::Asc);

        let switched = next_sort(current, SortKey::Start);
        assert_eq!(
            switched,
            Some(SortSpec {
                key: SortKey::Start,
                dir: SortDir::Desc,
            })
        );
    }

    #[test]
    fn test_sort_key_tokens_round_trip() {
        for key in [
            SortKey::Title,
            SortKey::Description,
            SortKey::Category,
            SortKey::EventType,
            SortKey::Location,
            SortKey::Start,
            SortKey::End,
            SortKey::Organizer,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
    }
}
