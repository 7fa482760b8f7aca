//! Free-slot computation.
//!
//! Given a window and a set of busy intervals, a left-to-right sweep emits
//! the gaps: busy intervals are clipped to the window, sorted by start, and
//! a cursor advances past each one, recording `[cursor, start)` whenever a
//! busy interval begins strictly after it. Overlapping busy intervals merge
//! implicitly because the cursor only ever moves forward.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::range::TimeRange;

/// A contiguous free interval within a window, bounded by adjacent busy
/// intervals or the window edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Slot {
    /// 12-hour clock rendering of the start, e.g. `09:00 AM`.
    pub fn from_label(&self) -> String {
        self.from.format("%I:%M %p").to_string()
    }

    /// 12-hour clock rendering of the end, e.g. `05:30 PM`.
    pub fn to_label(&self) -> String {
        self.to.format("%I:%M %p").to_string()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.from_label(), self.to_label())
    }
}

/// A free slot tagged with its calendar day, for multi-day windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub slot: Slot,
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date.format("%d/%m/%Y"), self.slot)
    }
}

/// Computes the free slots left inside `window` by the `busy` intervals.
///
/// Zero busy intervals yield the entire window as one slot; busy intervals
/// covering the window yield none.
pub fn find_free_slots(window: &TimeRange, busy: &[TimeRange]) -> Vec<Slot> {
    let mut clipped: Vec<TimeRange> = busy.iter().filter_map(|b| b.clip(window)).collect();
    clipped.sort_by_key(|r| r.start);

    let mut slots = Vec::new();
    let mut cursor = window.start;

    for interval in clipped {
        if interval.start > cursor {
            slots.push(Slot {
                from: cursor,
                to: interval.start,
            });
        }
        cursor = cursor.max(interval.end);
    }

    if cursor < window.end {
        slots.push(Slot {
            from: cursor,
            to: window.end,
        });
    }

    slots
}

/// Runs the single-day sweep independently for every calendar day the
/// `window` touches, tagging each emitted slot with its date.
///
/// Only the portion of each day inside `window` is considered, and only
/// busy intervals intersecting that day contribute to its sweep.
pub fn find_free_slots_by_day(window: &TimeRange, busy: &[TimeRange]) -> Vec<DaySlot> {
    let mut slots = Vec::new();
    let mut date = window.start.date_naive();

    loop {
        let Some(day_window) = TimeRange::day(date).clip(window) else {
            break;
        };
        slots.extend(
            find_free_slots(&day_window, busy)
                .into_iter()
                .map(|slot| DaySlot { date, slot }),
        );
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    slots
}
