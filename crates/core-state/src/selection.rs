//! Anchor/head text selection.
//!
//! A selection is created by a pointer press or a shift-extended motion and
//! tracks the fixed `anchor` plus the moving `head`. Membership is computed
//! on the ordered endpoints, so dragging backwards selects the same region
//! as dragging forwards.

use core_text::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub active: bool,
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    /// Start a gesture: anchor and head both at `point`.
    pub fn begin(&mut self, point: Position) {
        self.active = true;
        self.anchor = point;
        self.head = point;
    }

    /// Move the head. An inactive selection is first anchored at `from`.
    pub fn extend(&mut self, from: Position, to: Position) {
        if !self.active {
            self.begin(from);
        }
        self.head = to;
    }

    /// End of a pointer gesture: an empty selection collapses to inactive.
    pub fn release(&mut self) {
        if self.anchor == self.head {
            self.active = false;
        }
    }

    pub fn clear(&mut self) {
        self.active = false;
    }

    /// Endpoints ordered by (row, col).
    pub fn ordered(&self) -> (Position, Position) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    /// True when column `col` of row `row` falls inside the active selection
    /// (both endpoints inclusive).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        if !self.active {
            return false;
        }
        let (start, end) = self.ordered();
        if row < start.row || row > end.row {
            return false;
        }
        if start.row == end.row {
            return col >= start.col && col <= end.col;
        }
        if row == start.row {
            return col >= start.col;
        }
        if row == end.row {
            return col <= end.col;
        }
        true
    }
}
