//! File browser pane: toggling, list navigation and opening entries.
//!
//! Directory reads go through `DirectoryLister`. A failed read leaves the
//! previous listing in place and reports through the status slot.

use super::DispatchResult;
use super::command::open_and_report;
use crate::{BrowseAction, DirectoryLister};
use core_state::browser::parent_of;
use core_state::{EditorError, EditorState, Mode};
use std::path::{Path, PathBuf};

/// Tab in Normal: show the browser (focusing it) or hide it.
pub(crate) fn toggle_browser(state: &mut EditorState, lister: &dyn DirectoryLister) -> DispatchResult {
    if state.browser.visible {
        state.browser.visible = false;
        if matches!(state.mode, Mode::Browse) {
            state.mode = Mode::normal();
        }
        tracing::debug!(target: "actions.browse", "hide");
        return DispatchResult::dirty();
    }
    let dir = if state.browser.cwd().as_os_str().is_empty() {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    } else {
        state.browser.cwd().to_path_buf()
    };
    load_dir(state, lister, &dir);
    state.browser.visible = true;
    state.mode = Mode::Browse;
    tracing::debug!(target: "actions.browse", dir = %dir.display(), "show");
    DispatchResult::dirty()
}

pub(crate) fn handle_browse(
    action: BrowseAction,
    state: &mut EditorState,
    lister: &dyn DirectoryLister,
) -> DispatchResult {
    match action {
        BrowseAction::Up => state.browser.move_up(),
        BrowseAction::Down => state.browser.move_down(),
        BrowseAction::Open => return open_selected(state, lister),
        BrowseAction::Parent => {
            let parent = parent_of(state.browser.cwd());
            load_dir(state, lister, &parent);
        }
        BrowseAction::Leave => state.mode = Mode::normal(),
        BrowseAction::Hide => {
            state.browser.visible = false;
            state.mode = Mode::normal();
        }
        BrowseAction::Select(index) => {
            if !state.browser.visible || !state.browser.select(index) {
                return DispatchResult::clean();
            }
            state.mode = Mode::Browse;
        }
    }
    DispatchResult::dirty()
}

fn open_selected(state: &mut EditorState, lister: &dyn DirectoryLister) -> DispatchResult {
    let (Some(entry), Some(path)) = (state.browser.selected().cloned(), state.browser.selected_path())
    else {
        return DispatchResult::clean();
    };
    if entry.is_dir {
        load_dir(state, lister, &path);
        return DispatchResult::dirty();
    }
    tracing::info!(target: "actions.browse", path = %path.display(), "open_file");
    let result = open_and_report(state, &path);
    state.mode = Mode::normal();
    result
}

/// Replace the listing with the contents of `dir`.
fn load_dir(state: &mut EditorState, lister: &dyn DirectoryLister, dir: &Path) {
    let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    match lister.list(&dir) {
        Ok(entries) => {
            tracing::debug!(target: "actions.browse", dir = %dir.display(), count = entries.len(), "listing");
            state.browser.set_listing(dir, entries);
        }
        Err(e) => {
            tracing::warn!(target: "actions.browse", dir = %dir.display(), ?e, "list_failed");
            state.report(&EditorError::io("open", dir, e));
        }
    }
}
