//! Frame projection of the editor session onto the terminal grid.
//!
//! Rendering is a pure function of `EditorState` plus two scroll offsets kept
//! by `RenderEngine`. Each frame is composed into a `Frame` of cells and then
//! emitted row by row through the queued `Writer`.
//!
//! Screen layout (top to bottom):
//! - text rows: optional browser pane, line-number gutter, document text
//! - status bar: mode, file name, modified marker, position, line count
//! - message row: `:` / `/` input line or the status message
//!
//! Invariants:
//! - Leader cells carry a printable char and width >= 1; continuation cells
//!   (width 0) follow a double-width leader and never print.
//! - Text columns are character indices; display width comes from
//!   `unicode-width` and only affects placement.

use bitflags::bitflags;

pub mod layout;
pub mod render_engine;
pub mod status;
pub mod viewport;
pub mod writer;

pub use layout::{HitTarget, Layout};
pub use render_engine::{PointerTarget, RenderEngine};
pub use viewport::Viewport;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const REVERSE = 0b0000_0001; // selection, status bar, focused browser row
        const BOLD    = 0b0000_0010; // cursor line number, directories
        const DIM     = 0b0000_0100; // filler rows past end of document
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// Visual width in terminal columns. `0` designates a continuation cell.
    pub width: u8,
    pub flags: CellFlags,
}

impl Cell {
    #[inline]
    pub fn leader(ch: char, width: u8, flags: CellFlags) -> Self {
        Self {
            ch,
            width: width.max(1),
            flags,
        }
    }
    #[inline]
    pub fn continuation(flags: CellFlags) -> Self {
        Self {
            ch: ' ',
            width: 0,
            flags,
        }
    }
    #[inline]
    pub fn is_leader(&self) -> bool {
        self.width > 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::leader(' ', 1, CellFlags::empty())
    }
}

/// Display width of `ch`; control and zero-width chars render as one cell.
pub fn char_width(ch: char) -> u16 {
    unicode_width::UnicodeWidthChar::width(ch)
        .unwrap_or(1)
        .clamp(1, 2) as u16
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Place `ch` at (x,y). Returns the columns consumed, 0 if it does not
    /// fit (a double-width char never straddles the right edge).
    pub fn set_char(&mut self, x: u16, y: u16, ch: char, flags: CellFlags) -> u16 {
        let w = char_width(ch);
        if y >= self.height || x.saturating_add(w) > self.width {
            return 0;
        }
        let ch = if ch.is_control() { ' ' } else { ch };
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::leader(ch, w as u8, flags);
        }
        for dx in 1..w {
            if let Some(idx) = self.index(x + dx, y) {
                self.cells[idx] = Cell::continuation(flags);
            }
        }
        w
    }

    /// Write `text` from (x,y), clipped at `max_x`. Returns the next free column.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_x: u16, flags: CellFlags) -> u16 {
        let mut cx = x;
        for ch in text.chars() {
            if cx >= max_x.min(self.width) {
                break;
            }
            let w = char_width(ch);
            if cx + w > max_x {
                break;
            }
            cx += self.set_char(cx, y, ch, flags).max(1);
        }
        cx
    }

    /// Paint `flags` over columns `[x, x+len)` of row `y`.
    pub fn fill(&mut self, x: u16, y: u16, len: u16, flags: CellFlags) {
        for dx in 0..len {
            if let Some(idx) = self.index(x.saturating_add(dx), y) {
                self.cells[idx] = Cell::leader(' ', 1, flags);
            }
        }
    }

    /// Row text from leader cells (testing / diagnostics).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|c| c.is_leader())
            .map(|c| c.ch)
            .collect()
    }
}
