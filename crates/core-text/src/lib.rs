//! Line-array text document.
//!
//! The document is an ordered `Vec<String>` of lines without terminators. It
//! always holds at least one line; an empty document is a single empty line.
//! Columns are character indices (not bytes) so every operation here maps a
//! `(row, col)` pair onto a byte offset before touching the underlying string.

/// A position inside a document expressed as (row index, character column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.row = 0;
            self.col = 0;
            return;
        }
        if self.row >= line_count {
            self.row = line_count - 1;
        }
        let max_len = line_len_fn(self.row);
        if self.col > max_len {
            self.col = max_len;
        }
    }
}

pub mod motion;
pub mod search;

/// Ordered line array. Invariant: `line_count() >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document (one empty line).
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build from owned lines. An empty vector yields one empty line.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            return Self::new();
        }
        Self { lines }
    }

    /// Split `content` on line terminators (`\n` or `\r\n`); a trailing
    /// terminator does not produce an extra empty line.
    pub fn from_text(content: &str) -> Self {
        Self::from_lines(
            content
                .lines()
                .map(|l| l.trim_end_matches('\r').to_string())
                .collect(),
        )
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Length of a line in characters; 0 for out-of-range rows.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Swap in a new line array wholesale (file open, undo restore).
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        *self = Self::from_lines(lines);
    }

    /// Clamp a position into document bounds.
    pub fn clamp(&self, mut pos: Position) -> Position {
        pos.clamp_to(self.line_count(), |r| self.line_len(r));
        pos
    }

    /// Insert `ch` at `pos`. Returns false (no change) when `pos` is out of bounds.
    pub fn insert_char(&mut self, pos: Position, ch: char) -> bool {
        let Some(line) = self.lines.get_mut(pos.row) else {
            return false;
        };
        let Some(at) = byte_index(line, pos.col) else {
            return false;
        };
        line.insert(at, ch);
        true
    }

    /// Backspace. Returns the new cursor when something changed:
    /// `col > 0` removes the char to the left, `col == 0` joins onto the
    /// previous line. `None` at document start.
    pub fn delete_char_before(&mut self, pos: Position) -> Option<Position> {
        if pos.row >= self.lines.len() {
            return None;
        }
        if pos.col > 0 {
            let line = &mut self.lines[pos.row];
            let start = byte_index(line, pos.col - 1)?;
            let end = byte_index(line, pos.col)?;
            line.replace_range(start..end, "");
            return Some(Position::new(pos.row, pos.col - 1));
        }
        if pos.row == 0 {
            return None;
        }
        let tail = self.lines.remove(pos.row);
        let prev = &mut self.lines[pos.row - 1];
        let joined_at = prev.chars().count();
        prev.push_str(&tail);
        Some(Position::new(pos.row - 1, joined_at))
    }

    /// Delete the char at `pos`. No-op (false) at or past end of line; never joins forward.
    pub fn delete_char_after(&mut self, pos: Position) -> bool {
        let Some(line) = self.lines.get_mut(pos.row) else {
            return false;
        };
        let (Some(start), Some(end)) = (byte_index(line, pos.col), byte_index(line, pos.col + 1))
        else {
            return false;
        };
        line.replace_range(start..end, "");
        true
    }

    /// Split `lines[row]` at `col`; the tail becomes a new line below.
    pub fn split_line(&mut self, pos: Position) -> bool {
        let Some(line) = self.lines.get_mut(pos.row) else {
            return false;
        };
        let Some(at) = byte_index(line, pos.col) else {
            return false;
        };
        let tail = line.split_off(at);
        self.lines.insert(pos.row + 1, tail);
        true
    }

    /// Remove `lines[row]` and return its text. The sole line is emptied in
    /// place instead so the document never becomes empty.
    pub fn remove_line(&mut self, row: usize) -> Option<String> {
        if row >= self.lines.len() {
            return None;
        }
        if self.lines.len() == 1 {
            return Some(std::mem::take(&mut self.lines[0]));
        }
        Some(self.lines.remove(row))
    }

    /// Insert a new line holding `text` directly after `row` (clamped to the end).
    pub fn insert_line_after(&mut self, row: usize, text: impl Into<String>) {
        let at = (row + 1).min(self.lines.len());
        self.lines.insert(at, text.into());
    }
}

/// Byte offset of character column `col` in `line`; `col == len` maps to
/// `line.len()`. `None` past the end.
pub fn byte_index(line: &str, col: usize) -> Option<usize> {
    if col == 0 {
        return Some(0);
    }
    match line.char_indices().nth(col) {
        Some((b, _)) => Some(b),
        None if line.chars().count() == col => Some(line.len()),
        None => None,
    }
}

/// Character column of byte offset `byte` in `line` (clamped to the line).
pub fn char_col(line: &str, byte: usize) -> usize {
    let byte = byte.min(line.len());
    line.char_indices().take_while(|(b, _)| *b < byte).count()
}
