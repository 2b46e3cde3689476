//! Mode-aware key -> Action translation.
//!
//! Each `Mode` variant has its own translation function. Translation is pure:
//! it reads the mode (including any pending prefix key) and never mutates
//! state. The dispatcher owns every transition.
//!
//! Two-key sequences (`gg`, `dd`, `yy`):
//! * First key yields `Action::Prefix`; the dispatcher stores it in
//!   `Mode::Normal { pending }`.
//! * A matching second key yields the combined action.
//! * Any other second key is translated as a fresh Normal key. If that key
//!   is unbound the result is `ClearPending`, so the prefix never lingers.

use crate::{
    Action, BrowseAction, EditKind, InsertEntry, LineEdit, ModeChange, MotionKind,
};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::{Mode, PrefixKey};

/// Translate `key` against `mode`. `None` means the key is ignored.
pub fn translate_key(mode: &Mode, key: &KeyEvent) -> Option<Action> {
    let action = match mode {
        Mode::Normal { pending } => translate_normal(*pending, key),
        Mode::Insert => translate_insert(key),
        Mode::Command(_) | Mode::Search(_) => translate_line_input(key),
        Mode::Browse => translate_browse(key),
    };
    tracing::trace!(target: "actions.translate", mode = mode.label(), key = %key, ?action, "translate");
    action
}

pub fn translate_normal(pending: Option<PrefixKey>, key: &KeyEvent) -> Option<Action> {
    if let Some(prefix) = pending
        && let Some(action) = complete_prefix(prefix, key)
    {
        return Some(action);
    }
    match translate_normal_fresh(key) {
        Some(action) => Some(action),
        None if pending.is_some() => Some(Action::ClearPending),
        None => None,
    }
}

fn complete_prefix(prefix: PrefixKey, key: &KeyEvent) -> Option<Action> {
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    if key.code != KeyCode::Char(prefix.as_char()) {
        return None;
    }
    Some(match prefix {
        PrefixKey::G => Action::motion(MotionKind::FirstLine),
        PrefixKey::D => Action::Edit(EditKind::DeleteLine),
        PrefixKey::Y => Action::YankLine,
    })
}

fn translate_normal_fresh(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Save),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        };
    }
    if let Some(kind) = navigation_key(key.code) {
        return Some(Action::Motion {
            kind,
            extend: key.is_shift(),
        });
    }
    let action = match key.code {
        KeyCode::Esc => Action::ClearSelection,
        KeyCode::Tab => Action::ToggleBrowser,
        KeyCode::Char(c) => match c {
            'h' => Action::motion(MotionKind::Left),
            'j' => Action::motion(MotionKind::Down),
            'k' => Action::motion(MotionKind::Up),
            'l' => Action::motion(MotionKind::Right),
            '0' => Action::motion(MotionKind::LineStart),
            '$' => Action::motion(MotionKind::LineEnd),
            'w' => Action::motion(MotionKind::WordForward),
            'b' => Action::motion(MotionKind::WordBackward),
            'G' => Action::motion(MotionKind::LastLine),
            'i' => Action::ModeChange(ModeChange::EnterInsert(InsertEntry::AtCursor)),
            'a' => Action::ModeChange(ModeChange::EnterInsert(InsertEntry::AfterCursor)),
            'A' => Action::ModeChange(ModeChange::EnterInsert(InsertEntry::LineEnd)),
            'I' => Action::ModeChange(ModeChange::EnterInsert(InsertEntry::LineStart)),
            'o' => Action::ModeChange(ModeChange::EnterInsert(InsertEntry::OpenBelow)),
            'O' => Action::ModeChange(ModeChange::EnterInsert(InsertEntry::OpenAbove)),
            ':' => Action::ModeChange(ModeChange::EnterCommand),
            '/' => Action::ModeChange(ModeChange::EnterSearch),
            'n' => Action::RepeatSearch,
            'x' => Action::Edit(EditKind::DeleteAfter),
            'p' => Action::Paste,
            'u' => Action::Undo,
            other => Action::Prefix(PrefixKey::from_char(other)?),
        },
        _ => return None,
    };
    Some(action)
}

pub fn translate_insert(key: &KeyEvent) -> Option<Action> {
    if let Some(kind) = navigation_key(key.code) {
        return Some(Action::Motion {
            kind,
            extend: key.is_shift(),
        });
    }
    let action = match key.code {
        KeyCode::Esc => Action::ModeChange(ModeChange::LeaveInsert),
        KeyCode::Enter => Action::Edit(EditKind::SplitLine),
        KeyCode::Backspace => Action::Edit(EditKind::Backspace),
        KeyCode::Delete => Action::Edit(EditKind::DeleteAfter),
        KeyCode::Tab => Action::Edit(EditKind::InsertTab),
        KeyCode::Char(c) if is_text_input(c, key.mods) => Action::Edit(EditKind::InsertChar(c)),
        _ => return None,
    };
    Some(action)
}

/// Shared by Command and Search modes.
pub fn translate_line_input(key: &KeyEvent) -> Option<Action> {
    let edit = match key.code {
        KeyCode::Esc => LineEdit::Cancel,
        KeyCode::Enter => LineEdit::Submit,
        KeyCode::Backspace => LineEdit::Backspace,
        KeyCode::Char(c) if is_text_input(c, key.mods) => LineEdit::Char(c),
        _ => return None,
    };
    Some(Action::Input(edit))
}

pub fn translate_browse(key: &KeyEvent) -> Option<Action> {
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    let action = match key.code {
        KeyCode::Esc | KeyCode::Tab => BrowseAction::Leave,
        KeyCode::Up | KeyCode::Char('k') => BrowseAction::Up,
        KeyCode::Down | KeyCode::Char('j') => BrowseAction::Down,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => BrowseAction::Open,
        KeyCode::Left | KeyCode::Char('h') => BrowseAction::Parent,
        KeyCode::Char('q') => BrowseAction::Hide,
        _ => return None,
    };
    Some(Action::Browse(action))
}

/// Arrow / Home / End / Page keys, shared by Normal and Insert.
fn navigation_key(code: KeyCode) -> Option<MotionKind> {
    Some(match code {
        KeyCode::Left => MotionKind::Left,
        KeyCode::Right => MotionKind::Right,
        KeyCode::Up => MotionKind::Up,
        KeyCode::Down => MotionKind::Down,
        KeyCode::Home => MotionKind::LineStart,
        KeyCode::End => MotionKind::LineEnd,
        KeyCode::PageUp => MotionKind::PageUp,
        KeyCode::PageDown => MotionKind::PageDown,
        _ => return None,
    })
}

fn is_text_input(c: char, mods: KeyModifiers) -> bool {
    !c.is_control() && !mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::LineInput;

    fn kc(c: char) -> KeyEvent {
        KeyEvent::plain(KeyCode::Char(c))
    }

    fn pending(p: PrefixKey) -> Mode {
        Mode::Normal { pending: Some(p) }
    }

    #[test]
    fn prefix_keys_start_sequences() {
        let m = Mode::normal();
        assert_eq!(translate_key(&m, &kc('g')), Some(Action::Prefix(PrefixKey::G)));
        assert_eq!(translate_key(&m, &kc('d')), Some(Action::Prefix(PrefixKey::D)));
        assert_eq!(translate_key(&m, &kc('y')), Some(Action::Prefix(PrefixKey::Y)));
    }

    #[test]
    fn matching_second_key_completes_sequence() {
        assert_eq!(
            translate_key(&pending(PrefixKey::G), &kc('g')),
            Some(Action::motion(MotionKind::FirstLine))
        );
        assert_eq!(
            translate_key(&pending(PrefixKey::D), &kc('d')),
            Some(Action::Edit(EditKind::DeleteLine))
        );
        assert_eq!(
            translate_key(&pending(PrefixKey::Y), &kc('y')),
            Some(Action::YankLine)
        );
    }

    #[test]
    fn mismatched_second_key_is_reprocessed() {
        assert_eq!(
            translate_key(&pending(PrefixKey::D), &kc('j')),
            Some(Action::motion(MotionKind::Down))
        );
        assert_eq!(
            translate_key(&pending(PrefixKey::G), &kc('d')),
            Some(Action::Prefix(PrefixKey::D))
        );
    }

    #[test]
    fn unbound_second_key_clears_prefix() {
        assert_eq!(
            translate_key(&pending(PrefixKey::Y), &kc('z')),
            Some(Action::ClearPending)
        );
        assert_eq!(translate_key(&Mode::normal(), &kc('z')), None);
    }

    #[test]
    fn shift_arrows_extend_selection() {
        let ev = KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT);
        assert_eq!(
            translate_key(&Mode::normal(), &ev),
            Some(Action::Motion {
                kind: MotionKind::Right,
                extend: true
            })
        );
        assert_eq!(
            translate_key(&Mode::Insert, &ev),
            Some(Action::Motion {
                kind: MotionKind::Right,
                extend: true
            })
        );
    }

    #[test]
    fn shifted_letters_are_not_extensions() {
        let ev = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(
            translate_key(&Mode::normal(), &ev),
            Some(Action::motion(MotionKind::LastLine))
        );
    }

    #[test]
    fn ctrl_bindings_in_normal() {
        assert_eq!(translate_key(&Mode::normal(), &KeyEvent::ctrl('s')), Some(Action::Save));
        assert_eq!(translate_key(&Mode::normal(), &KeyEvent::ctrl('q')), Some(Action::Quit));
        assert_eq!(translate_key(&Mode::normal(), &KeyEvent::ctrl('x')), None);
    }

    #[test]
    fn insert_mode_keys() {
        assert_eq!(
            translate_key(&Mode::Insert, &kc('h')),
            Some(Action::Edit(EditKind::InsertChar('h')))
        );
        assert_eq!(
            translate_key(&Mode::Insert, &KeyEvent::plain(KeyCode::Tab)),
            Some(Action::Edit(EditKind::InsertTab))
        );
        assert_eq!(
            translate_key(&Mode::Insert, &KeyEvent::plain(KeyCode::Esc)),
            Some(Action::ModeChange(ModeChange::LeaveInsert))
        );
        assert_eq!(translate_key(&Mode::Insert, &KeyEvent::ctrl('s')), None);
    }

    #[test]
    fn line_input_keys() {
        let m = Mode::Search(LineInput::new());
        assert_eq!(
            translate_key(&m, &kc('q')),
            Some(Action::Input(LineEdit::Char('q')))
        );
        assert_eq!(
            translate_key(&m, &KeyEvent::plain(KeyCode::Enter)),
            Some(Action::Input(LineEdit::Submit))
        );
        assert_eq!(translate_key(&m, &KeyEvent::plain(KeyCode::Up)), None);
    }

    #[test]
    fn browse_keys() {
        let m = Mode::Browse;
        assert_eq!(
            translate_key(&m, &kc('q')),
            Some(Action::Browse(BrowseAction::Hide))
        );
        assert_eq!(
            translate_key(&m, &KeyEvent::plain(KeyCode::Tab)),
            Some(Action::Browse(BrowseAction::Leave))
        );
        assert_eq!(
            translate_key(&m, &kc('h')),
            Some(Action::Browse(BrowseAction::Parent))
        );
        assert_eq!(
            translate_key(&m, &KeyEvent::plain(KeyCode::Enter)),
            Some(Action::Browse(BrowseAction::Open))
        );
    }
}
