use anyhow::{bail, Result};
use chrono::NaiveDate;

use eventdesk_core::schedule::{find_free_slots, find_free_slots_by_day, TimeRange};

use crate::store::EventStore;

/// Prints the free slots for a day, or day by day over a date range.
pub fn slots(store: &EventStore, from: NaiveDate, to: Option<NaiveDate>) -> Result<()> {
    let to = to.unwrap_or(from);
    if to < from {
        bail!("--to must not be before --from");
    }

    let busy: Vec<TimeRange> = store.events().iter().map(|e| e.span()).collect();

    if from == to {
        let day = TimeRange::day(from);
        let free = find_free_slots(&day, &busy);
        if free.is_empty() {
            println!("No free time on {}.", from.format("%d/%m/%Y"));
        }
        for slot in free {
            println!("{slot}");
        }
    } else {
        let window = TimeRange {
            start: TimeRange::day(from).start,
            end: TimeRange::day(to).end,
        };
        let free = find_free_slots_by_day(&window, &busy);
        if free.is_empty() {
            println!(
                "No free time between {} and {}.",
                from.format("%d/%m/%Y"),
                to.format("%d/%m/%Y")
            );
        }
        for day_slot in free {
            println!("{day_slot}");
        }
    }

    Ok(())
}
