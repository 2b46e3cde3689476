//! Editor session state: document, cursor, mode, history, selection,
//! register, status slot and file browser.
//!
//! One `EditorState` value is owned by the host loop and threaded through
//! every dispatch call; there are no globals.
//!
//! Snapshot policy:
//! - Every mutating edit goes through `EditorState::apply_edit`, which
//!   captures the pre-edit lines and cursor and records them in `History`
//!   only if the edit actually changed something. No coalescing: each typed
//!   character is its own undo step.
//! - `undo` restores the snapshot wholesale and clamps the cursor. There is
//!   no redo surface; forward entries are discarded by the next edit.
//!
//! Status slot:
//! - A single optional message. Setting a new one overwrites the previous
//!   message; there is no queue. Errors surface here via `report`.

use core_text::{Document, Position};
use std::path::PathBuf;
use tracing::{debug, trace};

pub mod browser;
pub mod error;
pub mod history;
pub mod selection;

pub use browser::{DirEntry, FileBrowser, PARENT_ENTRY};
pub use error::EditorError;
pub use history::{DEFAULT_HISTORY_CAPACITY, History, Snapshot};
pub use selection::Selection;

/// Default page height before the host reports the real text area size.
pub const DEFAULT_PAGE_ROWS: usize = 20;
/// Default number of spaces inserted by Tab in Insert mode.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// First key of a two-key Normal-mode command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixKey {
    G,
    D,
    Y,
}

impl PrefixKey {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(Self::G),
            'd' => Some(Self::D),
            'y' => Some(Self::Y),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::G => 'g',
            Self::D => 'd',
            Self::Y => 'y',
        }
    }
}

/// Current editor mode. Line-editing modes own their input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Navigation and commands; `pending` holds the first key of `gg`/`dd`/`yy`.
    Normal { pending: Option<PrefixKey> },
    Insert,
    /// `:` command line being typed.
    Command(LineInput),
    /// `/` search pattern being typed.
    Search(LineInput),
    /// Keyboard focus on the file browser pane.
    Browse,
}

impl Default for Mode {
    fn default() -> Self {
        Self::normal()
    }
}

impl Mode {
    pub fn normal() -> Self {
        Self::Normal { pending: None }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal { .. } => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command(_) => "COMMAND",
            Self::Search(_) => "SEARCH",
            Self::Browse => "BROWSE",
        }
    }

    pub fn pending_prefix(&self) -> Option<PrefixKey> {
        match self {
            Self::Normal { pending } => *pending,
            _ => None,
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal { .. })
    }
}

/// Single-line text input used by Command and Search modes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    buf: String,
}

impl LineInput {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn as_str(&self) -> &str {
        &self.buf
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    pub fn push(&mut self, ch: char) {
        self.buf.push(ch);
    }
    /// Remove the last character. Returns false if the buffer was already empty.
    pub fn backspace(&mut self) -> bool {
        self.buf.pop().is_some()
    }
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl From<&str> for LineInput {
    fn from(s: &str) -> Self {
        Self { buf: s.to_string() }
    }
}

/// Single-slot clipboard holding one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Register {
    content: Option<String>,
}

impl Register {
    pub fn set(&mut self, text: impl Into<String>) {
        self.content = Some(text.into());
    }
    pub fn get(&self) -> Option<&str> {
        self.content.as_deref()
    }
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// Top-level editor session.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub document: Document,
    pub cursor: Position,
    pub mode: Mode,
    pub selection: Selection,
    pub register: Register,
    history: History,
    status: Option<String>,
    pub modified: bool,
    pub file_name: Option<PathBuf>,
    /// Rows jumped by PageUp/PageDown (host updates it from the text area height).
    pub page_rows: usize,
    pub tab_size: usize,
    /// Pattern of the last executed search (repeated by `n`).
    pub last_search: Option<String>,
    pub browser: FileBrowser,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self::with_history_capacity(document, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(document: Document, capacity: usize) -> Self {
        Self {
            document,
            cursor: Position::origin(),
            mode: Mode::normal(),
            selection: Selection::default(),
            register: Register::default(),
            history: History::new(capacity),
            status: None,
            modified: false,
            file_name: None,
            page_rows: DEFAULT_PAGE_ROWS,
            tab_size: DEFAULT_TAB_SIZE,
            last_search: None,
            browser: FileBrowser::default(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        trace!(target: "state.status", status = %msg, "set_status");
        self.status = Some(msg);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Surface an error through the status slot.
    pub fn report(&mut self, err: &EditorError) {
        debug!(target: "state.status", error = ?err, "report");
        self.status = Some(err.to_string());
    }

    /// Run a document mutation with undo bookkeeping.
    ///
    /// `edit` receives the document and a working cursor and returns whether
    /// it changed anything. On change the pre-edit snapshot is recorded, the
    /// cursor is clamped and committed, and the session is marked modified.
    /// On no change nothing is recorded and the cursor is left alone.
    pub fn apply_edit<F>(&mut self, op: &'static str, edit: F) -> bool
    where
        F: FnOnce(&mut Document, &mut Position) -> bool,
    {
        let before = Snapshot::capture(&self.document, self.cursor);
        let mut cursor = self.cursor;
        if !edit(&mut self.document, &mut cursor) {
            trace!(target: "state.edit", op, "edit_noop");
            return false;
        }
        self.history.record(before);
        self.cursor = self.document.clamp(cursor);
        self.modified = true;
        trace!(
            target: "state.edit",
            op,
            row = self.cursor.row,
            col = self.cursor.col,
            lines = self.document.line_count(),
            "edit"
        );
        true
    }

    /// Restore the most recent snapshot.
    pub fn undo(&mut self) -> Result<(), EditorError> {
        let snap = self.history.undo().ok_or(EditorError::NothingToUndo)?;
        self.document.replace_lines(snap.lines);
        self.cursor = self.document.clamp(snap.cursor);
        self.modified = true;
        Ok(())
    }

    /// Replace the document wholesale (file open). Resets cursor, selection
    /// and history; the new document starts unmodified.
    pub fn load_document(&mut self, document: Document, file_name: Option<PathBuf>) {
        self.document = document;
        self.file_name = file_name;
        self.cursor = Position::origin();
        self.selection.clear();
        self.history.clear();
        self.modified = false;
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor = self.document.clamp(self.cursor);
    }

    /// Display name for the status bar.
    pub fn display_name(&self) -> String {
        self.file_name
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string())
    }
}
