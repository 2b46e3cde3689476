//! Text edit action handling (insert/backspace/delete/newline) plus the
//! line register operations (`dd`, `yy`, `p`).
//!
//! Every mutation runs through `EditorState::apply_edit`, so a history
//! entry is recorded only when the document actually changes.

use super::DispatchResult;
use crate::EditKind;
use core_state::{EditorError, EditorState};
use core_text::Position;

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor;
    let changed = match kind {
        EditKind::InsertChar(ch) => insert_char(state, ch),
        EditKind::InsertTab => {
            let mut any = false;
            for _ in 0..state.tab_size {
                any |= insert_char(state, ' ');
            }
            any
        }
        EditKind::SplitLine => state.apply_edit("split_line", |doc, cur| {
            if !doc.split_line(*cur) {
                return false;
            }
            *cur = Position::new(cur.row + 1, 0);
            true
        }),
        EditKind::Backspace => state.apply_edit("backspace", |doc, cur| {
            match doc.delete_char_before(*cur) {
                Some(to) => {
                    *cur = to;
                    true
                }
                None => false,
            }
        }),
        EditKind::DeleteAfter => {
            state.apply_edit("delete_after", |doc, cur| doc.delete_char_after(*cur))
        }
        EditKind::DeleteLine => delete_line(state),
    };
    tracing::trace!(
        target: "actions.dispatch",
        op = ?kind,
        changed,
        line = before.row,
        col = before.col,
        to_line = state.cursor.row,
        to_col = state.cursor.col,
        "edit"
    );
    if changed {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

fn insert_char(state: &mut EditorState, ch: char) -> bool {
    state.apply_edit("insert_char", |doc, cur| {
        if !doc.insert_char(*cur, ch) {
            return false;
        }
        cur.col += 1;
        true
    })
}

/// Cut the cursor line into the register. The sole line is emptied in place
/// and still recorded, even when it was already empty.
fn delete_line(state: &mut EditorState) -> bool {
    let mut removed = None;
    let changed = state.apply_edit("delete_line", |doc, cur| {
        removed = doc.remove_line(cur.row);
        removed.is_some()
    });
    if let Some(text) = removed {
        state.register.set(text);
    }
    changed
}

pub(crate) fn yank_line(state: &mut EditorState) -> DispatchResult {
    let line = state.document.line(state.cursor.row).unwrap_or_default().to_string();
    tracing::trace!(target: "actions.dispatch", line = state.cursor.row, "yank_line");
    state.register.set(line);
    state.set_status("Line yanked");
    DispatchResult::dirty()
}

/// Insert the register as a new line below the cursor.
pub(crate) fn paste(state: &mut EditorState) -> DispatchResult {
    let Some(text) = state.register.get().map(str::to_owned) else {
        state.report(&EditorError::NothingToPaste);
        return DispatchResult::dirty();
    };
    state.apply_edit("paste", |doc, cur| {
        doc.insert_line_after(cur.row, text);
        *cur = Position::new(cur.row + 1, 0);
        true
    });
    state.set_status("Pasted");
    DispatchResult::dirty()
}
