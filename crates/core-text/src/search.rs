//! Literal substring search with wraparound.

use crate::{Document, Position, byte_index, char_col};

/// Find the next occurrence of `pattern` after `from`.
///
/// Scanning starts one character after the cursor on the cursor's row and
/// continues to the last line. If nothing matches it wraps to row 0 and scans
/// up to and including the starting row, where a match only counts if it
/// begins strictly before the original start column. Matching is
/// case-sensitive; an empty pattern never matches.
pub fn find_next(doc: &Document, from: Position, pattern: &str) -> Option<Position> {
    if pattern.is_empty() {
        return None;
    }
    let start_row = from.row.min(doc.line_count().saturating_sub(1));
    let start_col = from.col + 1;

    for row in start_row..doc.line_count() {
        let line = doc.line(row)?;
        let offset = if row == start_row {
            match byte_index(line, start_col) {
                Some(b) => b,
                None => continue,
            }
        } else {
            0
        };
        if let Some(idx) = line[offset..].find(pattern) {
            return Some(Position::new(row, char_col(line, offset + idx)));
        }
    }

    for row in 0..=start_row {
        let line = doc.line(row)?;
        if let Some(idx) = line.find(pattern) {
            let col = char_col(line, idx);
            if row < start_row || col < start_col {
                return Some(Position::new(row, col));
            }
        }
    }
    None
}
