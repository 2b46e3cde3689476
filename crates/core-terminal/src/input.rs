//! crossterm event decoding into `core-events` types.

use anyhow::Result;
use core_events::{
    InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::event::{
    self as ct, Event as CEvent, KeyCode as CKeyCode, KeyEventKind, KeyModifiers as CMods,
    MouseButton as CButton, MouseEventKind as CMouseKind,
};

/// Block until the next event the editor understands arrives.
pub fn read_event() -> Result<InputEvent> {
    loop {
        let raw = ct::read()?;
        if let Some(ev) = convert_event(raw) {
            tracing::trace!(target: "input.event", ?ev, "event");
            return Ok(ev);
        }
    }
}

/// Map a crossterm event. Key releases, focus changes, paste and
/// unsupported keys yield `None`.
pub fn convert_event(ev: CEvent) -> Option<InputEvent> {
    match ev {
        CEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            let code = map_key_code(key.code)?;
            Some(InputEvent::Key(KeyEvent::new(code, map_mods(key.modifiers))))
        }
        CEvent::Mouse(m) => Some(InputEvent::Mouse(MouseEvent {
            kind: map_mouse_kind(m.kind),
            column: m.column,
            row: m.row,
            mods: map_mods(m.modifiers),
        })),
        CEvent::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        _ => None,
    }
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

fn map_key_code(code: CKeyCode) -> Option<KeyCode> {
    Some(match code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        _ => return None,
    })
}

fn map_button(b: CButton) -> MouseButton {
    match b {
        CButton::Left => MouseButton::Left,
        CButton::Middle => MouseButton::Middle,
        CButton::Right => MouseButton::Right,
    }
}

fn map_mouse_kind(kind: CMouseKind) -> MouseEventKind {
    match kind {
        CMouseKind::Down(b) => MouseEventKind::Down(map_button(b)),
        CMouseKind::Up(b) => MouseEventKind::Up(map_button(b)),
        CMouseKind::Drag(b) => MouseEventKind::Drag(map_button(b)),
        CMouseKind::ScrollUp => MouseEventKind::ScrollUp,
        CMouseKind::ScrollDown => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    }
}
