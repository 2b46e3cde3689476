//! Mode transitions and Command/Search line editing.
//!
//! Semantics:
//! * Entering Insert positions the cursor per `InsertEntry`; `o`/`O` open a
//!   line through a single recorded `split_line`.
//! * Leaving Insert steps the cursor left one column (if possible) and
//!   clears the status slot.
//! * Command/Search: Escape, or Backspace on an empty buffer, return to
//!   Normal with the status cleared. Submit returns to Normal first and then
//!   executes, so the executed command may switch modes again.

use super::{DispatchResult, command, search};
use crate::{InsertEntry, LineEdit, ModeChange};
use core_state::{EditorState, LineInput, Mode};
use core_text::Position;

pub(crate) const INSERT_STATUS: &str = "-- INSERT --";

pub(crate) fn handle_mode_change(mc: ModeChange, state: &mut EditorState) -> DispatchResult {
    let from = state.mode.label();
    match mc {
        ModeChange::EnterInsert(entry) => {
            enter_insert(entry, state);
            state.mode = Mode::Insert;
            state.set_status(INSERT_STATUS);
        }
        ModeChange::LeaveInsert => {
            if state.cursor.col > 0 {
                state.cursor.col -= 1;
            }
            state.mode = Mode::normal();
            state.clear_status();
        }
        ModeChange::EnterCommand => state.mode = Mode::Command(LineInput::new()),
        ModeChange::EnterSearch => state.mode = Mode::Search(LineInput::new()),
    }
    tracing::trace!(target: "actions.dispatch", from, to = state.mode.label(), "mode_change");
    DispatchResult::dirty()
}

fn enter_insert(entry: InsertEntry, state: &mut EditorState) {
    let len = state.document.line_len(state.cursor.row);
    match entry {
        InsertEntry::AtCursor => {}
        InsertEntry::AfterCursor => {
            if state.cursor.col < len {
                state.cursor.col += 1;
            }
        }
        InsertEntry::LineEnd => state.cursor.col = len,
        InsertEntry::LineStart => state.cursor.col = 0,
        InsertEntry::OpenBelow => {
            state.apply_edit("open_below", |doc, cur| {
                let at = Position::new(cur.row, doc.line_len(cur.row));
                if !doc.split_line(at) {
                    return false;
                }
                *cur = Position::new(cur.row + 1, 0);
                true
            });
        }
        InsertEntry::OpenAbove => {
            state.apply_edit("open_above", |doc, cur| {
                *cur = Position::new(cur.row, 0);
                doc.split_line(*cur)
            });
        }
    }
}

pub(crate) fn handle_line_edit(edit: LineEdit, state: &mut EditorState) -> DispatchResult {
    let input = match &mut state.mode {
        Mode::Command(input) | Mode::Search(input) => input,
        _ => return DispatchResult::clean(),
    };
    match edit {
        LineEdit::Char(ch) => {
            input.push(ch);
            DispatchResult::dirty()
        }
        LineEdit::Backspace => {
            if !input.backspace() {
                leave_line_input(state);
            }
            DispatchResult::dirty()
        }
        LineEdit::Cancel => {
            leave_line_input(state);
            DispatchResult::dirty()
        }
        LineEdit::Submit => match std::mem::replace(&mut state.mode, Mode::normal()) {
            Mode::Command(input) => command::execute_command(input.as_str(), state),
            Mode::Search(input) => search::submit_search(input.into_string(), state),
            _ => DispatchResult::clean(),
        },
    }
}

fn leave_line_input(state: &mut EditorState) {
    state.mode = Mode::normal();
    state.clear_status();
}
