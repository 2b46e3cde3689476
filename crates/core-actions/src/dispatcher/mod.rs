//! Dispatcher applying `Action` to mutable editor state.
//!
//! Decomposed into focused sub-modules:
//! * `motion`  - cursor movement and shift-extended selection
//! * `edit`    - text mutation, line yank/cut/paste
//! * `mode`    - mode transitions and Command/Search line editing
//! * `command` - `:` command execution (quit, write, edit, goto)
//! * `search`  - `/` search and `n` repeat
//! * `browse`  - file browser pane
//! * `pointer` - press/drag/release selection gestures
//! * `undo`    - history restore
//!
//! Every action except `Prefix` consumes a pending Normal-mode prefix key.

use crate::{Action, DirectoryLister};
use core_state::{EditorState, Mode};

mod browse;
mod command;
mod command_parser;
mod edit;
mod mode;
mod motion;
mod pointer;
mod search;
mod undo;

pub use command::open_and_report;
pub use command_parser::{CommandParser, ParsedCommand};

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
    /// The document was replaced wholesale (file open); the renderer must
    /// reset its scroll offsets.
    pub buffer_replaced: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
            buffer_replaced: false,
        }
    }
    pub fn buffer_replaced() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: true,
        }
    }
}

/// Apply an action to editor state. Returns `DispatchResult` describing whether
/// a render is needed (`dirty`) or the editor should exit (`quit`).
pub fn dispatch(
    action: Action,
    state: &mut EditorState,
    lister: &dyn DirectoryLister,
) -> DispatchResult {
    if !matches!(action, Action::Prefix(_))
        && let Mode::Normal { pending } = &mut state.mode
    {
        *pending = None;
    }

    let result = match action {
        Action::Motion { kind, extend } => motion::handle_motion(kind, extend, state),
        Action::Edit(kind) => edit::handle_edit(kind, state),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, state),
        Action::Prefix(prefix) => {
            if let Mode::Normal { pending } = &mut state.mode {
                *pending = Some(prefix);
            }
            DispatchResult::clean()
        }
        Action::ClearPending => DispatchResult::clean(),
        Action::ClearSelection => {
            state.selection.clear();
            DispatchResult::dirty()
        }
        Action::YankLine => edit::yank_line(state),
        Action::Paste => edit::paste(state),
        Action::Undo => undo::handle_undo(state),
        Action::RepeatSearch => search::repeat_search(state),
        Action::ToggleBrowser => browse::toggle_browser(state, lister),
        Action::Save => command::save(state, None),
        Action::Quit => command::quit(state),
        Action::Input(edit) => mode::handle_line_edit(edit, state),
        Action::Browse(ba) => browse::handle_browse(ba, state, lister),
        Action::Pointer { phase, at } => pointer::handle_pointer(phase, at, state),
    };
    tracing::trace!(
        target: "actions.dispatch",
        ?action,
        mode = state.mode.label(),
        row = state.cursor.row,
        col = state.cursor.col,
        dirty = result.dirty,
        quit = result.quit,
        "dispatch"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditKind, MotionKind};
    use core_state::{DirEntry, PrefixKey};
    use core_text::{Document, Position};
    use std::io;
    use std::path::Path;

    struct NoDirs;
    impl DirectoryLister for NoDirs {
        fn list(&self, _path: &Path) -> io::Result<Vec<DirEntry>> {
            Ok(Vec::new())
        }
    }

    fn state(lines: &[&str]) -> EditorState {
        EditorState::new(Document::from_lines(
            lines.iter().map(|s| s.to_string()).collect(),
        ))
    }

    #[test]
    fn prefix_is_stored_then_consumed() {
        let mut st = state(&["a", "b"]);
        dispatch(Action::Prefix(PrefixKey::D), &mut st, &NoDirs);
        assert_eq!(st.mode.pending_prefix(), Some(PrefixKey::D));
        dispatch(Action::motion(MotionKind::Down), &mut st, &NoDirs);
        assert_eq!(st.mode.pending_prefix(), None);
        assert_eq!(st.cursor, Position::new(1, 0));
    }

    #[test]
    fn clear_pending_touches_nothing_else() {
        let mut st = state(&["a"]);
        dispatch(Action::Prefix(PrefixKey::G), &mut st, &NoDirs);
        let res = dispatch(Action::ClearPending, &mut st, &NoDirs);
        assert_eq!(res, DispatchResult::clean());
        assert_eq!(st.mode, Mode::normal());
    }

    #[test]
    fn delete_line_result_is_dirty() {
        let mut st = state(&["a", "b"]);
        let res = dispatch(Action::Edit(EditKind::DeleteLine), &mut st, &NoDirs);
        assert!(res.dirty);
        assert!(!res.quit);
        assert_eq!(st.document.lines(), ["b"]);
    }
}
