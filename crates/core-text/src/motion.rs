//! Cursor motion helpers.
//!
//! These operate purely on a `Document` + `Position` pair and are free of
//! editor state. Vertical motions clamp the column to the destination line
//! (there is no sticky column).

use crate::{Document, Position};

/// Move left one character (stops at column 0).
pub fn left(_doc: &Document, pos: &mut Position) {
    pos.col = pos.col.saturating_sub(1);
}

/// Move right one character (may rest one past the last character).
pub fn right(doc: &Document, pos: &mut Position) {
    if pos.col < doc.line_len(pos.row) {
        pos.col += 1;
    }
}

/// Move to start of line.
pub fn line_start(_doc: &Document, pos: &mut Position) {
    pos.col = 0;
}

/// Move to end of line (after last character).
pub fn line_end(doc: &Document, pos: &mut Position) {
    pos.col = doc.line_len(pos.row);
}

pub fn up(doc: &Document, pos: &mut Position) {
    if pos.row > 0 {
        pos.row -= 1;
        clamp_col(doc, pos);
    }
}

pub fn down(doc: &Document, pos: &mut Position) {
    if pos.row + 1 < doc.line_count() {
        pos.row += 1;
        clamp_col(doc, pos);
    }
}

/// Jump `rows` lines up, stopping at the first line.
pub fn page_up(doc: &Document, pos: &mut Position, rows: usize) {
    pos.row = pos.row.saturating_sub(rows.max(1));
    clamp_col(doc, pos);
}

/// Jump `rows` lines down, stopping at the last line.
pub fn page_down(doc: &Document, pos: &mut Position, rows: usize) {
    let last = doc.line_count().saturating_sub(1);
    pos.row = pos.row.saturating_add(rows.max(1)).min(last);
    clamp_col(doc, pos);
}

/// Skip the current non-whitespace run, then the following whitespace run.
/// Reaching end of line wraps to the first non-whitespace character of the
/// next line; on the last line the cursor stays at end of line.
pub fn word_forward(doc: &Document, pos: &mut Position) {
    let chars = line_chars(doc, pos.row);
    let len = chars.len();
    let mut col = pos.col.min(len);
    while col < len && !chars[col].is_whitespace() {
        col += 1;
    }
    while col < len && chars[col].is_whitespace() {
        col += 1;
    }
    if col >= len && pos.row + 1 < doc.line_count() {
        pos.row += 1;
        let next = line_chars(doc, pos.row);
        col = next.iter().take_while(|c| c.is_whitespace()).count();
    }
    pos.col = col;
}

/// Mirror of `word_forward`: lands on the first character of the previous
/// word. At column 0 it first moves to the end of the previous line.
pub fn word_backward(doc: &Document, pos: &mut Position) {
    if pos.col == 0 && pos.row > 0 {
        pos.row -= 1;
        pos.col = doc.line_len(pos.row);
    }
    let chars = line_chars(doc, pos.row);
    let mut col = pos.col.min(chars.len());
    if col > 0 {
        col -= 1;
    }
    while col > 0 && chars.get(col).is_some_and(|c| c.is_whitespace()) {
        col -= 1;
    }
    while col > 0 && !chars[col - 1].is_whitespace() {
        col -= 1;
    }
    pos.col = col;
}

/// Jump to row `row` (0-based), column 0. Returns false and leaves the
/// cursor alone when the row does not exist.
pub fn goto_row(doc: &Document, pos: &mut Position, row: usize) -> bool {
    if row >= doc.line_count() {
        return false;
    }
    *pos = Position::new(row, 0);
    true
}

pub fn goto_first(_doc: &Document, pos: &mut Position) {
    *pos = Position::origin();
}

pub fn goto_last(doc: &Document, pos: &mut Position) {
    *pos = Position::new(doc.line_count().saturating_sub(1), 0);
}

fn clamp_col(doc: &Document, pos: &mut Position) {
    pos.col = pos.col.min(doc.line_len(pos.row));
}

fn line_chars(doc: &Document, row: usize) -> Vec<char> {
    doc.line(row).map(|l| l.chars().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn word_forward_skips_leading_whitespace_then_word() {
        let d = doc(&["  foo bar"]);
        let mut p = Position::new(0, 0);
        word_forward(&d, &mut p);
        assert_eq!(p.col, 2);
        word_forward(&d, &mut p);
        assert_eq!(p.col, 6);
    }

    #[test]
    fn word_forward_wraps_to_next_line_first_word() {
        let d = doc(&["foo", "   bar"]);
        let mut p = Position::new(0, 0);
        word_forward(&d, &mut p);
        assert_eq!(p, Position::new(1, 3));
    }

    #[test]
    fn word_forward_stays_at_end_of_last_line() {
        let d = doc(&["foo"]);
        let mut p = Position::new(0, 1);
        word_forward(&d, &mut p);
        assert_eq!(p, Position::new(0, 3));
    }

    #[test]
    fn word_backward_lands_on_word_start() {
        let d = doc(&["foo  bar"]);
        let mut p = Position::new(0, 7);
        word_backward(&d, &mut p);
        assert_eq!(p.col, 5);
        word_backward(&d, &mut p);
        assert_eq!(p.col, 0);
    }

    #[test]
    fn word_backward_from_col_zero_goes_to_previous_line() {
        let d = doc(&["one two", "x"]);
        let mut p = Position::new(1, 0);
        word_backward(&d, &mut p);
        assert_eq!(p, Position::new(0, 4));
    }

    #[test]
    fn vertical_moves_clamp_column_without_memory() {
        let d = doc(&["long line", "ab", "long line"]);
        let mut p = Position::new(0, 8);
        down(&d, &mut p);
        assert_eq!(p, Position::new(1, 2));
        down(&d, &mut p);
        assert_eq!(p, Position::new(2, 2));
        up(&d, &mut p);
        up(&d, &mut p);
        up(&d, &mut p);
        assert_eq!(p, Position::new(0, 2));
    }

    #[test]
    fn paging_stops_at_document_edges() {
        let d = doc(&["a", "b", "c", "d", "e"]);
        let mut p = Position::new(1, 0);
        page_down(&d, &mut p, 3);
        assert_eq!(p.row, 4);
        page_down(&d, &mut p, 3);
        assert_eq!(p.row, 4);
        page_up(&d, &mut p, 3);
        assert_eq!(p.row, 1);
        page_up(&d, &mut p, 3);
        assert_eq!(p.row, 0);
    }

    #[test]
    fn goto_row_rejects_out_of_range() {
        let d = doc(&["a", "bc"]);
        let mut p = Position::new(0, 1);
        assert!(!goto_row(&d, &mut p, 2));
        assert_eq!(p, Position::new(0, 1));
        assert!(goto_row(&d, &mut p, 1));
        assert_eq!(p, Position::new(1, 0));
        goto_first(&d, &mut p);
        assert_eq!(p, Position::origin());
        goto_last(&d, &mut p);
        assert_eq!(p, Position::new(1, 0));
    }

    #[test]
    fn right_may_rest_past_last_char() {
        let d = doc(&["ab"]);
        let mut p = Position::new(0, 1);
        right(&d, &mut p);
        right(&d, &mut p);
        assert_eq!(p.col, 2);
        line_start(&d, &mut p);
        assert_eq!(p.col, 0);
        left(&d, &mut p);
        assert_eq!(p.col, 0);
        line_end(&d, &mut p);
        assert_eq!(p.col, 2);
    }
}
