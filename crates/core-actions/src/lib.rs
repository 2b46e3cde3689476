//! Action model, key translation and dispatch for the az editing core.
//!
//! Input flows one way: the host decodes a terminal event, `translate_key`
//! turns it into an `Action` against the current `Mode`, and
//! `dispatcher::dispatch` applies that action to the `EditorState`. Nothing
//! calls back into the translator.

use core_events::GesturePhase;
use core_state::PrefixKey;
use core_text::Position;

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;
pub mod listing;

pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::translate_key;
pub use listing::{DirectoryLister, FsLister};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    WordForward,
    WordBackward,
    FirstLine,
    LastLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    /// Insert `tab_size` spaces, one undo step per space.
    InsertTab,
    SplitLine,
    Backspace,
    /// Delete the character under the cursor (`x`, Delete). Never joins lines.
    DeleteAfter,
    /// Cut the cursor line into the register (`dd`).
    DeleteLine,
}

/// Where the cursor lands when entering Insert mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertEntry {
    /// `i`
    AtCursor,
    /// `a`
    AfterCursor,
    /// `A`
    LineEnd,
    /// `I`
    LineStart,
    /// `o`
    OpenBelow,
    /// `O`
    OpenAbove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert(InsertEntry),
    LeaveInsert,
    EnterCommand,
    EnterSearch,
}

/// Editing of the Command / Search line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit {
    Char(char),
    Backspace,
    Cancel,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Up,
    Down,
    /// Open the selected entry (directory, `..`, or file).
    Open,
    /// List the parent directory.
    Parent,
    /// Return focus to the text, browser stays visible.
    Leave,
    /// Hide the browser and return to Normal.
    Hide,
    /// Pointer click on a listing row: move the list cursor there and focus the pane.
    Select(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Cursor motion; `extend` grows the selection instead of clearing it.
    Motion { kind: MotionKind, extend: bool },
    Edit(EditKind),
    ModeChange(ModeChange),
    /// First key of a two-key Normal command.
    Prefix(PrefixKey),
    /// Drop a pending prefix key without doing anything else.
    ClearPending,
    /// Escape in Normal: clear selection (and any pending prefix).
    ClearSelection,
    YankLine,
    Paste,
    Undo,
    RepeatSearch,
    ToggleBrowser,
    Save,
    /// Quit unless the document has unsaved changes.
    Quit,
    Input(LineEdit),
    Browse(BrowseAction),
    /// Pointer gesture at a document point (host maps screen cells).
    Pointer { phase: GesturePhase, at: Position },
}

impl Action {
    pub fn motion(kind: MotionKind) -> Self {
        Self::Motion {
            kind,
            extend: false,
        }
    }
}
