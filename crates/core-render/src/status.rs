//! Status bar and message row composition.
//!
//! Status bar format:
//! ` [MODE] <name>[ [+]] | Ln <row>, Col <col> | <n> lines`
//! * `<name>` is the file path as given, or `[No Name]`.
//! * ` [+]` appears only when the document has unsaved changes.
//! * Row and column are 1-based.
//!
//! The message row shows the live `:` / `/` input while those modes are
//! active, otherwise the status message (if any).

use core_state::{EditorState, Mode};

pub fn status_line(state: &EditorState) -> String {
    format!(
        " [{}] {}{} | Ln {}, Col {} | {} lines",
        state.mode.label(),
        state.display_name(),
        if state.modified { " [+]" } else { "" },
        state.cursor.row + 1,
        state.cursor.col + 1,
        state.document.line_count()
    )
}

pub fn message_line(state: &EditorState) -> String {
    match &state.mode {
        Mode::Command(input) => format!(":{}", input.as_str()),
        Mode::Search(input) => format!("/{}", input.as_str()),
        _ => match state.status() {
            Some(msg) => format!(" {msg}"),
            None => String::new(),
        },
    }
}
