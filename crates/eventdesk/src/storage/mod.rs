//! Durable key-value backends.
//!
//! The file backend is the real local store; the memory backend exists for
//! tests and for running without a writable disk.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
