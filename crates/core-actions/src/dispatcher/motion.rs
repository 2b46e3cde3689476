//! Motion sub-dispatch (cursor movement).
//!
//! Delegates to `core_text::motion`. Vertical moves clamp the column; there
//! is no sticky column. An unextended move clears the selection; an extended
//! one anchors it at the pre-move cursor and moves the head.

use super::DispatchResult;
use crate::MotionKind;
use core_state::EditorState;
use core_text::motion;

pub(crate) fn handle_motion(kind: MotionKind, extend: bool, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor;
    let doc = &state.document;
    let mut pos = before;
    match kind {
        MotionKind::Left => motion::left(doc, &mut pos),
        MotionKind::Right => motion::right(doc, &mut pos),
        MotionKind::Up => motion::up(doc, &mut pos),
        MotionKind::Down => motion::down(doc, &mut pos),
        MotionKind::LineStart => motion::line_start(doc, &mut pos),
        MotionKind::LineEnd => motion::line_end(doc, &mut pos),
        MotionKind::PageUp => motion::page_up(doc, &mut pos, state.page_rows),
        MotionKind::PageDown => motion::page_down(doc, &mut pos, state.page_rows),
        MotionKind::WordForward => motion::word_forward(doc, &mut pos),
        MotionKind::WordBackward => motion::word_backward(doc, &mut pos),
        MotionKind::FirstLine => motion::goto_first(doc, &mut pos),
        MotionKind::LastLine => motion::goto_last(doc, &mut pos),
    }
    state.cursor = pos;
    if extend {
        state.selection.extend(before, pos);
    } else {
        state.selection.clear();
    }
    tracing::trace!(
        target: "actions.dispatch",
        ?kind,
        extend,
        from_row = before.row,
        from_col = before.col,
        row = pos.row,
        col = pos.col,
        "motion"
    );
    DispatchResult::dirty()
}
