//! Filter-state mirroring.
//!
//! Filter and sort state is ephemeral, but it survives reload and sharing by
//! being mirrored into the host's addressable navigation state. The mirror
//! format is a flat string-keyed map, shaped like URL query parameters.

use std::collections::BTreeMap;

use super::filters::{Filters, SortSpec};

/// The navigable portion of the query state: filters plus the active sort.
///
/// The page index is deliberately not mirrored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub filters: Filters,
    pub sort: Option<SortSpec>,
}

const SEARCH: &str = "search";
const EVENT_TYPE: &str = "eventType";
const CATEGORY: &str = "category";
const START_DATE: &str = "startDate";
const END_DATE: &str = "endDate";
const SORT_KEY: &str = "sortKey";
const SORT_DIR: &str = "sortDir";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serializes the state into a flat string map; inactive entries are
/// omitted entirely.
pub fn serialize_query_state(state: &QueryState) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    if let Some(search) = state.filters.search.as_deref() {
        if !search.is_empty() {
            map.insert(SEARCH.to_string(), search.to_string());
        }
    }
    if let Some(event_type) = state.filters.event_type {
        map.insert(EVENT_TYPE.to_string(), event_type.as_str().to_string());
    }
    if let Some(category) = state.filters.category {
        map.insert(CATEGORY.to_string(), category.as_str().to_string());
    }
    if let Some(from) = state.filters.date_from {
        map.insert(START_DATE.to_string(), from.format(DATE_FORMAT).to_string());
    }
    if let Some(to) = state.filters.date_to {
        map.insert(END_DATE.to_string(), to.format(DATE_FORMAT).to_string());
    }
    if let Some(sort) = state.sort {
        map.insert(SORT_KEY.to_string(), sort.key.as_str().to_string());
        map.insert(SORT_DIR.to_string(), sort.dir.as_str().to_string());
    }

    map
}

/// Rebuilds the state from a flat string map.
///
/// Tolerant by design: unknown keys are ignored and unparseable values are
/// dropped, so a hand-edited or stale mirror never fails outright. A sort is
/// only restored when both its key and direction are present and valid.
pub fn deserialize_query_state(map: &BTreeMap<String, String>) -> QueryState {
    let get = |key: &str| map.get(key).map(String::as_str).filter(|v| !v.is_empty());

    let filters = Filters {
        search: get(SEARCH).map(str::to_string),
        event_type: get(EVENT_TYPE).and_then(|v| v.parse().ok()),
        category: get(CATEGORY).and_then(|v| v.parse().ok()),
        date_from: get(START_DATE)
            .and_then(|v| chrono::NaiveDate::parse_from_str(v, DATE_FORMAT).ok()),
        date_to: get(END_DATE)
            .and_then(|v| chrono::NaiveDate::parse_from_str(v, DATE_FORMAT).ok()),
    };

    let sort = match (
        get(SORT_KEY).and_then(|v| v.parse().ok()),
        get(SORT_DIR).and_then(|v| v.parse().ok()),
    ) {
        (Some(key), Some(dir)) => Some(SortSpec { key, dir }),
        _ => None,
    };

    QueryState { filters, sort }
}
