#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DirectoryLister, DispatchResult, dispatch, translate_key};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::{DirEntry, EditorState};
use core_text::Document;
use std::io;
use std::path::Path;

/// Lister for tests that never touch the browser.
pub struct EmptyLister;

impl DirectoryLister for EmptyLister {
    fn list(&self, _path: &Path) -> io::Result<Vec<DirEntry>> {
        Ok(Vec::new())
    }
}

pub fn state(lines: &[&str]) -> EditorState {
    EditorState::new(Document::from_lines(
        lines.iter().map(|s| s.to_string()).collect(),
    ))
}

pub fn kc(c: char) -> KeyEvent {
    KeyEvent::plain(KeyCode::Char(c))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::plain(code)
}

pub fn shift(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

/// Translate and dispatch one key the way the host loop does.
pub fn press(state: &mut EditorState, ev: KeyEvent) -> Option<DispatchResult> {
    press_with(state, ev, &EmptyLister)
}

pub fn press_with(
    state: &mut EditorState,
    ev: KeyEvent,
    lister: &dyn DirectoryLister,
) -> Option<DispatchResult> {
    let action = translate_key(&state.mode, &ev)?;
    Some(dispatch(action, state, lister))
}

/// Feed plain characters one by one (`"dd"`, `"ihello"`).
pub fn type_str(state: &mut EditorState, text: &str) -> Option<DispatchResult> {
    let mut last = None;
    for c in text.chars() {
        last = press(state, kc(c)).or(last);
    }
    last
}

/// Run `:cmd<Enter>` from Normal mode.
pub fn command(state: &mut EditorState, cmd: &str) -> Option<DispatchResult> {
    press(state, kc(':'));
    type_str(state, cmd);
    press(state, key(KeyCode::Enter))
}

pub fn lines(state: &EditorState) -> Vec<String> {
    state.document.lines().to_vec()
}
