//! Undo dispatch. Redo is not exposed; forward history is discarded by the
//! next recorded edit.

use super::DispatchResult;
use core_state::EditorState;

pub(crate) fn handle_undo(state: &mut EditorState) -> DispatchResult {
    match state.undo() {
        Ok(()) => {
            tracing::trace!(target: "actions.dispatch", depth = state.undo_depth(), "undo");
            state.selection.clear();
            state.set_status("Undo");
            DispatchResult::dirty()
        }
        Err(e) => {
            state.report(&e);
            DispatchResult::dirty()
        }
    }
}
