use core_text::{Document, Position};
use std::collections::VecDeque;
use tracing::trace;

/// Default number of snapshots retained in undo history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Full copy of the document lines plus cursor, captured before a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub lines: Vec<String>,
    pub cursor: Position,
}

impl Snapshot {
    pub fn capture(document: &Document, cursor: Position) -> Self {
        Self {
            lines: document.lines().to_vec(),
            cursor,
        }
    }
}

/// Bounded snapshot ring with a redo boundary.
///
/// Invariant: `write_pos <= snapshots.len() <= capacity`. Entries at or past
/// `write_pos` are stale forward states; they survive until the next
/// `record`, which truncates them. Nothing re-applies them.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    write_pos: usize,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            write_pos: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of snapshots held, including stale forward entries.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of undo steps currently available.
    pub fn undo_depth(&self) -> usize {
        self.write_pos
    }

    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    /// Push a pre-mutation snapshot: drop forward entries, evict the oldest
    /// entry when full, append, then move the boundary to the end.
    pub fn record(&mut self, snapshot: Snapshot) {
        let discarded = self.snapshots.len() - self.write_pos;
        self.snapshots.truncate(self.write_pos);
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
            trace!(target: "state.history", capacity = self.capacity, "history_evict_oldest");
        }
        self.snapshots.push_back(snapshot);
        self.write_pos = self.snapshots.len();
        trace!(target: "state.history", write_pos = self.write_pos, discarded, "record");
    }

    /// Step the boundary back and return the snapshot to restore, or `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.write_pos == 0 {
            trace!(target: "state.history", "undo_empty");
            return None;
        }
        self.write_pos -= 1;
        trace!(target: "state.history", write_pos = self.write_pos, len = self.snapshots.len(), "undo");
        self.snapshots.get(self.write_pos).cloned()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.write_pos = 0;
        trace!(target: "state.history", "history_cleared");
    }
}
