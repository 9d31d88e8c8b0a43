//! Append-only in-memory transcript.

use std::sync::{PoisonError, RwLock};

use crate::session::core::ids::{EntryId, Sequence};
use crate::session::simulator::ports::Clock;
use crate::session::transcript::entry::{ChatEntry, ChatRole};

/// Ordered, append-only log of chat entries for one session.
///
/// There is no operation that removes or edits an entry.
#[derive(Debug, Default)]
pub struct Transcript {
    ids: Sequence,
    entries: RwLock<Vec<ChatEntry>>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with `clock.now()` and return a copy of it.
    pub fn append(&self, clock: &dyn Clock, role: ChatRole, text: impl Into<String>) -> ChatEntry {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Allocated under the write lock so ids follow insertion order.
        let id: EntryId = self.ids.next_id();
        let entry = ChatEntry::new(id, role, text.into(), clock.now());
        entries.push(entry.clone());
        entry
    }

    /// Snapshot of every entry in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<ChatEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no entry was appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<ChatEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::simulator::ports::TokioClock;

    #[test]
    fn test_append_preserves_order_and_ids() {
        let clock = TokioClock;
        let transcript = Transcript::new();
        assert!(transcript.is_empty());

        let first = transcript.append(&clock, ChatRole::User, "Hello");
        let second = transcript.append(&clock, ChatRole::Assistant, "Hi there!");

        assert!(first.id() < second.id());
        let entries = transcript.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], first);
        assert_eq!(entries[1], second);
        assert_eq!(transcript.last(), Some(second));
    }

    #[test]
    fn test_snapshots_are_restartable_and_unaffected_by_later_appends() {
        let clock = TokioClock;
        let transcript = Transcript::new();
        transcript.append(&clock, ChatRole::User, "A");

        let before = transcript.entries();
        transcript.append(&clock, ChatRole::Assistant, "B");
        let after = transcript.entries();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(before[0], after[0]);
        assert_eq!(transcript.entries(), after);
    }

    #[test]
    fn test_no_dedup() {
        let clock = TokioClock;
        let transcript = Transcript::new();
        transcript.append(&clock, ChatRole::User, "same");
        transcript.append(&clock, ChatRole::User, "same");
        assert_eq!(transcript.len(), 2);
    }
}
