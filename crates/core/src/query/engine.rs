//! Pure view derivation over a snapshot of the event collection.
//!
//! The engine never mutates and never persists: the host calls [`query`]
//! with the store's current snapshot whenever filter, sort, or page state
//! changes, and renders the returned rows.

use std::cmp::Ordering;

use crate::event::Event;

use super::filters::{Filters, Page, SortDir, SortKey, SortSpec};

/// One derived page of the event table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// The rows of the requested page, post-filter and post-sort.
    pub rows: Vec<Event>,
    /// Post-filter, pre-pagination count, for computing page counts.
    pub total: usize,
}

/// Filters, sorts, and paginates a snapshot of the collection.
///
/// Filtering is conjunctive; an unsorted query preserves the snapshot's
/// insertion order, and the sort is stable so equal keys keep it too.
pub fn query(
    events: &[Event],
    filters: &Filters,
    sort: Option<SortSpec>,
    page: Page,
) -> QueryResult {
    let mut matched: Vec<&Event> = events.iter().filter(|e| matches(e, filters)).collect();

    if let Some(spec) = sort {
        matched.sort_by(|a, b| {
            let ordering = compare(a, b, spec.key);
            match spec.dir {
                SortDir::Asc => ordering,
                SortDir::Desc => ordering.reverse(),
            }
        });
    }

    let total = matched.len();
    let start = page.index.saturating_sub(1).saturating_mul(page.size);
    let rows = matched
        .into_iter()
        .skip(start)
        .take(page.size)
        .cloned()
        .collect();

    QueryResult { rows, total }
}

fn matches(event: &Event, filters: &Filters) -> bool {
    if let Some(search) = filters.search.as_deref() {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty()
            && !event.title.to_lowercase().contains(&needle)
            && !event.description.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if filters
        .event_type
        .is_some_and(|t| t != event.event_type)
    {
        return false;
    }

    if filters.category.is_some_and(|c| c != event.category) {
        return false;
    }

    // Inclusive day-granularity overlap of the event span with the bounds.
    if filters
        .date_from
        .is_some_and(|from| event.end.date_naive() < from)
    {
        return false;
    }
    if filters
        .date_to
        .is_some_and(|to| event.start.date_naive() > to)
    {
        return false;
    }

    true
}

/// Compares two events on a single column.
///
/// Date columns compare by instant; text columns case-insensitively.
fn compare(a: &Event, b: &Event, key: SortKey) -> Ordering {
    match key {
        SortKey::Start => a.start.cmp(&b.start),
        SortKey::End => a.end.cmp(&b.end),
        SortKey::Title => text(&a.title).cmp(&text(&b.title)),
        SortKey::Description => text(&a.description).cmp(&text(&b.description)),
        SortKey::Category => text(&a.category.to_string()).cmp(&text(&b.category.to_string())),
        SortKey::EventType => {
            text(&a.event_type.to_string()).cmp(&text(&b.event_type.to_string()))
        }
        SortKey::Location => text(a.location.as_deref().unwrap_or_default())
            .cmp(&text(b.location.as_deref().unwrap_or_default())),
        SortKey::Organizer => text(&a.organizer.user_name).cmp(&text(&b.organizer.user_name)),
    }
}

fn text(value: &str) -> String {
    value.to_lowercase()
}
