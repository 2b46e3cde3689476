//! Pointer gestures driving the selection.
//!
//! Press anchors a fresh selection at the clamped point and moves the cursor
//! there; drag moves the head with the cursor; release collapses an empty
//! selection. A press while the browser has focus returns to Normal.

use super::DispatchResult;
use core_events::GesturePhase;
use core_state::{EditorState, Mode};
use core_text::Position;

pub(crate) fn handle_pointer(phase: GesturePhase, at: Position, state: &mut EditorState) -> DispatchResult {
    if matches!(state.mode, Mode::Command(_) | Mode::Search(_)) {
        return DispatchResult::clean();
    }
    let point = state.document.clamp(at);
    match phase {
        GesturePhase::Press => {
            if matches!(state.mode, Mode::Browse) {
                state.mode = Mode::normal();
            }
            state.cursor = point;
            state.selection.begin(point);
        }
        GesturePhase::Drag => {
            if !state.selection.active {
                return DispatchResult::clean();
            }
            state.cursor = point;
            state.selection.head = point;
        }
        GesturePhase::Release => state.selection.release(),
    }
    tracing::trace!(target: "actions.dispatch", ?phase, row = point.row, col = point.col, "pointer");
    DispatchResult::dirty()
}
