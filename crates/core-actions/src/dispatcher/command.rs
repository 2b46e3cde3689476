//! Command line execution (`:q`, `:w`, `:e <file>`, `:N`, ...).
//!
//! Parsing lives in `command_parser`; this module performs the side effects
//! and routes every outcome, success or failure, into the status slot.

use super::DispatchResult;
use super::command_parser::{CommandParser, ParsedCommand};
use crate::io_ops::{OpenFileResult, open_file, write_file};
use core_state::{EditorError, EditorState};
use core_text::motion;
use std::path::Path;

pub(crate) const HELP_TEXT: &str = "h/j/k/l:move i:insert :w:save :q:quit /:search Tab:browser";

pub(crate) fn execute_command(raw: &str, state: &mut EditorState) -> DispatchResult {
    let parsed = CommandParser::parse(raw);
    tracing::info!(target: "actions.command", cmd = raw, ?parsed, "execute");
    match parsed {
        ParsedCommand::Empty => DispatchResult::dirty(),
        ParsedCommand::Quit => quit(state),
        ParsedCommand::ForceQuit => DispatchResult::quit(),
        ParsedCommand::Write(target) => save(state, target.as_deref()),
        ParsedCommand::WriteQuit => {
            if write_and_report(state, None) {
                DispatchResult::quit()
            } else {
                DispatchResult::dirty()
            }
        }
        ParsedCommand::Edit(path) => open_and_report(state, &path),
        ParsedCommand::Help => {
            state.set_status(HELP_TEXT);
            DispatchResult::dirty()
        }
        ParsedCommand::GotoLine(line) => goto_line(line, state),
        ParsedCommand::Unknown(cmd) => {
            state.report(&EditorError::UnknownCommand(cmd));
            DispatchResult::dirty()
        }
    }
}

/// Quit unless there are unsaved changes.
pub(crate) fn quit(state: &mut EditorState) -> DispatchResult {
    if state.modified {
        state.report(&EditorError::UnsavedChanges);
        return DispatchResult::dirty();
    }
    DispatchResult::quit()
}

pub(crate) fn save(state: &mut EditorState, target: Option<&Path>) -> DispatchResult {
    write_and_report(state, target);
    DispatchResult::dirty()
}

/// Write the document and report the outcome in the status slot. Returns
/// whether the write succeeded.
fn write_and_report(state: &mut EditorState, target: Option<&Path>) -> bool {
    match write_file(state, target) {
        Ok(bytes) => {
            let name = state.display_name();
            state.set_status(format!("Saved: {name} ({bytes} bytes)"));
            true
        }
        Err(e) => {
            tracing::error!(target: "actions.command", error = %e, "save_failed");
            state.report(&e);
            false
        }
    }
}

/// Open `path` into the session and report the outcome. Used by `:e`, the
/// file browser and the host at startup.
pub fn open_and_report(state: &mut EditorState, path: &Path) -> DispatchResult {
    match open_file(state, path) {
        Ok(OpenFileResult::Opened { lines }) => {
            state.set_status(format!("Opened: {} ({lines} lines)", path.display()));
            DispatchResult::buffer_replaced()
        }
        Ok(OpenFileResult::NewFile) => {
            state.report(&EditorError::FileNotFound(path.to_path_buf()));
            DispatchResult::buffer_replaced()
        }
        Err(e) => {
            state.report(&e);
            DispatchResult::dirty()
        }
    }
}

/// 1-based goto. Zero or past-the-end line numbers are ignored.
fn goto_line(line: usize, state: &mut EditorState) -> DispatchResult {
    let Some(row) = line.checked_sub(1) else {
        return DispatchResult::dirty();
    };
    let mut pos = state.cursor;
    if motion::goto_row(&state.document, &mut pos, row) {
        state.cursor = pos;
        state.selection.clear();
        state.set_status(format!("Line {line}"));
    }
    DispatchResult::dirty()
}
