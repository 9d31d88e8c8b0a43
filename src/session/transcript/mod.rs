//! Transcript entries and the append-only store that owns them.

pub mod entry;
pub mod store;

pub use entry::{ChatEntry, ChatRole};
pub use store::Transcript;
