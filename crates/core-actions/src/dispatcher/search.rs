//! Literal substring search (`/pattern`, `n`).

use super::DispatchResult;
use core_state::{EditorError, EditorState};
use core_text::search::find_next;

/// Run a submitted search line. An empty pattern does nothing.
pub(crate) fn submit_search(pattern: String, state: &mut EditorState) -> DispatchResult {
    if pattern.is_empty() {
        return DispatchResult::dirty();
    }
    state.last_search = Some(pattern.clone());
    run_search(&pattern, state)
}

pub(crate) fn repeat_search(state: &mut EditorState) -> DispatchResult {
    match state.last_search.clone() {
        Some(pattern) => run_search(&pattern, state),
        None => DispatchResult::clean(),
    }
}

fn run_search(pattern: &str, state: &mut EditorState) -> DispatchResult {
    match find_next(&state.document, state.cursor, pattern) {
        Some(pos) => {
            tracing::debug!(target: "actions.dispatch", pattern, row = pos.row, col = pos.col, "search_hit");
            state.cursor = pos;
            state.set_status(format!("Found: '{pattern}'"));
        }
        None => {
            tracing::debug!(target: "actions.dispatch", pattern, "search_miss");
            state.report(&EditorError::NotFound(pattern.to_string()));
        }
    }
    DispatchResult::dirty()
}
