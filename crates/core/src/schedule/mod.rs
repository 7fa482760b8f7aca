mod conflict;
mod range;
mod slots;

pub use conflict::{check_conflict, suggestion_message, ConflictCheck};
pub use range::{TimeRange, TimeRangeError};
pub use slots::{find_free_slots, find_free_slots_by_day, DaySlot, Slot};
