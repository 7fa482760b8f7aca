//! CLI command handlers.
//!
//! Each handler follows the same shape: resolve inputs, run the pure core
//! (validation, conflict check, query), then mutate the store and report.
//! Validation and conflict failures abort before any write.

mod events;
mod session;
mod slots;

pub use events::{add, delete, edit, list, show, EventArgs, ListArgs};
pub use session::{login, logout, seed};
pub use slots::slots;
