//! Scroll offsets into the document.
//!
//! `first_line` is the topmost rendered row; `first_col` the leftmost
//! rendered character column. `follow` keeps the cursor inside the visible
//! window after every dispatch.

use crate::char_width;
use core_text::{Document, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub first_line: usize,
    pub first_col: usize,
}

impl Viewport {
    pub fn new(first_line: usize, first_col: usize) -> Self {
        Self {
            first_line,
            first_col,
        }
    }

    /// Scroll so `cursor` lies within `rows` x `width` display cells.
    pub fn follow(&mut self, doc: &Document, cursor: Position, rows: usize, width: usize) {
        if rows > 0 {
            if cursor.row < self.first_line {
                self.first_line = cursor.row;
            } else if cursor.row >= self.first_line + rows {
                self.first_line = cursor.row + 1 - rows;
            }
        }
        if cursor.col < self.first_col {
            self.first_col = cursor.col;
        }
        if width == 0 {
            return;
        }
        let line = doc.line(cursor.row).unwrap_or_default();
        // Advance until the cursor cell (one column past the text at end of line) fits.
        while self.first_col < cursor.col {
            let used: usize = line
                .chars()
                .skip(self.first_col)
                .take(cursor.col - self.first_col)
                .map(|c| char_width(c) as usize)
                .sum();
            if used < width {
                break;
            }
            self.first_col += 1;
        }
    }

    /// Display column of `cursor` relative to the text origin.
    pub fn cursor_x(&self, doc: &Document, cursor: Position) -> usize {
        doc.line(cursor.row)
            .unwrap_or_default()
            .chars()
            .skip(self.first_col)
            .take(cursor.col.saturating_sub(self.first_col))
            .map(|c| char_width(c) as usize)
            .sum()
    }

    /// Map a text-area cell to a document position. The column is resolved
    /// through display widths; the result is not clamped.
    pub fn to_document(&self, doc: &Document, x: u16, y: u16) -> Position {
        let row = self.first_line + y as usize;
        let mut col = self.first_col;
        if let Some(line) = doc.line(row) {
            let mut used = 0usize;
            let mut inside = false;
            for ch in line.chars().skip(self.first_col) {
                let w = char_width(ch) as usize;
                if used + w > x as usize {
                    inside = true;
                    break;
                }
                used += w;
                col += 1;
            }
            // Past the end of the line every cell counts as one column.
            if !inside {
                col += x as usize - used;
            }
        } else {
            col += x as usize;
        }
        Position::new(row, col)
    }
}
