//! Conflict detection for candidate events.
//!
//! A pure query over the current collection: no side effects, no mutation.
//! The caller decides how to present a conflict and is responsible for
//! aborting the write.
//!
//! Scope policy: full-range. The candidate is compared against every event
//! whose interval intersects the candidate's `[start, end)` span, and the
//! suggested free slots cover the candidate's entire span day by day.

use uuid::Uuid;

use crate::event::Event;

use super::range::TimeRange;
use super::slots::{find_free_slots_by_day, DaySlot};

/// Outcome of checking a candidate event against the existing collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictCheck {
    /// No existing event overlaps the candidate.
    Clear,
    /// The candidate overlaps one or more existing events.
    Conflict {
        /// Ids of the overlapping events, in collection order.
        with: Vec<Uuid>,
        /// Free slots over the candidate's span, to guide rescheduling.
        suggestions: Vec<DaySlot>,
    },
}

impl ConflictCheck {
    /// Returns true if the candidate overlaps an existing event.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictCheck::Conflict { .. })
    }

    /// The suggested free slots; empty when the check came back clear.
    pub fn suggestions(&self) -> &[DaySlot] {
        match self {
            ConflictCheck::Clear => &[],
            ConflictCheck::Conflict { suggestions, .. } => suggestions,
        }
    }
}

/// Checks a candidate event against the existing collection.
///
/// `exclude` removes one event id from the comparison set: pass the
/// candidate's own id when editing, so an event never conflicts with its
/// own prior version.
///
/// Suggestions are computed with the candidate's interval itself marked
/// busy, so no suggested slot contains the disputed time.
pub fn check_conflict(
    candidate: &Event,
    existing: &[Event],
    exclude: Option<Uuid>,
) -> ConflictCheck {
    let span = candidate.span();

    let others: Vec<&Event> = existing
        .iter()
        .filter(|e| exclude != Some(e.id))
        .collect();

    let with: Vec<Uuid> = others
        .iter()
        .filter(|e| e.span().overlaps(&span))
        .map(|e| e.id)
        .collect();

    if with.is_empty() {
        return ConflictCheck::Clear;
    }

    // Expand the candidate's span to whole calendar days, then sweep each
    // day with every busy interval (clipping discards the rest).
    let window = day_expanded(&span);
    let mut busy: Vec<TimeRange> = others.iter().map(|e| e.span()).collect();
    busy.push(span);

    ConflictCheck::Conflict {
        with,
        suggestions: find_free_slots_by_day(&window, &busy),
    }
}

/// Renders the suggestion list as the user-facing conflict message.
///
/// One line per slot; dates are included only when the suggestions span
/// more than one calendar day.
pub fn suggestion_message(suggestions: &[DaySlot]) -> String {
    let mut message = String::from(
        "The selected time overlaps with another event. \
         Please select from these available slots:",
    );

    let multi_day = suggestions
        .windows(2)
        .any(|pair| pair[0].date != pair[1].date);

    for day_slot in suggestions {
        message.push('\n');
        if multi_day {
            message.push_str(&format!("  {day_slot}"));
        } else {
            message.push_str(&format!("  {}", day_slot.slot));
        }
    }

    message
}

fn day_expanded(span: &TimeRange) -> TimeRange {
    let first = TimeRange::day(span.start.date_naive());
    // The end instant itself is exclusive, so a span ending exactly at
    // midnight does not touch the following day.
    let last_date = span
        .end
        .date_naive()
        .pred_opt()
        .filter(|prev| TimeRange::day(*prev).end == span.end)
        .unwrap_or_else(|| span.end.date_naive());

    TimeRange {
        start: first.start,
        end: TimeRange::day(last_date).end,
    }
}
