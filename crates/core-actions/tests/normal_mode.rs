mod common;
use common::*;

use core_events::{KeyCode, KeyEvent};
use core_text::Position;
use pretty_assertions::assert_eq;

#[test]
fn word_motion_skips_runs() {
    let mut st = state(&["  foo bar"]);
    press(&mut st, kc('w'));
    assert_eq!(st.cursor, Position::new(0, 2));
    press(&mut st, kc('w'));
    assert_eq!(st.cursor, Position::new(0, 6));
    press(&mut st, kc('b'));
    assert_eq!(st.cursor, Position::new(0, 2));
}

#[test]
fn search_wraps_to_top() {
    let mut st = state(&["alpha", "beta", "alpha"]);
    st.cursor = Position::new(2, 0);
    press(&mut st, kc('/'));
    type_str(&mut st, "alpha");
    press(&mut st, key(KeyCode::Enter));
    assert_eq!(st.cursor, Position::new(0, 0));
    assert!(st.mode.is_normal());
    press(&mut st, kc('n'));
    assert_eq!(st.cursor, Position::new(2, 0));
}

#[test]
fn shift_motions_build_selection() {
    let mut st = state(&["abcdefg", "abcdefg"]);
    st.cursor = Position::new(0, 2);
    press(&mut st, shift(KeyCode::Down));
    press(&mut st, shift(KeyCode::Left));
    assert_eq!(st.selection.anchor, Position::new(0, 2));
    assert_eq!(st.selection.head, Position::new(1, 1));
    assert!(st.selection.contains(0, 5));
    assert!(!st.selection.contains(1, 3));

    press(&mut st, key(KeyCode::Esc));
    assert!(!st.selection.active);
}

#[test]
fn delete_line_on_sole_empty_line() {
    let mut st = state(&[""]);
    type_str(&mut st, "dd");
    assert_eq!(lines(&st), [""]);
    assert_eq!(st.register.get(), Some(""));
}

#[test]
fn cut_and_paste_line() {
    let mut st = state(&["one", "two", "three"]);
    type_str(&mut st, "dd");
    assert_eq!(lines(&st), ["two", "three"]);
    type_str(&mut st, "jp");
    assert_eq!(lines(&st), ["two", "three", "one"]);
    assert_eq!(st.cursor, Position::new(2, 0));
}

#[test]
fn mismatched_prefix_key_is_reprocessed() {
    let mut st = state(&["one", "two", "three"]);
    type_str(&mut st, "dj");
    assert_eq!(lines(&st), ["one", "two", "three"]);
    assert_eq!(st.cursor, Position::new(1, 0));
    type_str(&mut st, "yG");
    assert_eq!(st.cursor, Position::new(2, 0));
    assert!(st.register.is_empty());
    type_str(&mut st, "gg");
    assert_eq!(st.cursor, Position::new(0, 0));
    assert_eq!(st.mode.pending_prefix(), None);
}

#[test]
fn open_lines_enter_insert() {
    let mut st = state(&["ab"]);
    press(&mut st, kc('o'));
    type_str(&mut st, "cd");
    press(&mut st, key(KeyCode::Esc));
    press(&mut st, kc('O'));
    type_str(&mut st, "x");
    press(&mut st, key(KeyCode::Esc));
    assert_eq!(lines(&st), ["ab", "x", "cd"]);
    assert!(st.mode.is_normal());
}

#[test]
fn insert_status_and_escape_step_back() {
    let mut st = state(&["ab"]);
    press(&mut st, kc('A'));
    assert_eq!(st.status(), Some("-- INSERT --"));
    type_str(&mut st, "c");
    press(&mut st, key(KeyCode::Tab));
    press(&mut st, key(KeyCode::Esc));
    assert_eq!(lines(&st), ["abc    "]);
    assert_eq!(st.cursor, Position::new(0, 6));
    assert_eq!(st.status(), None);
}

#[test]
fn ctrl_q_respects_unsaved_changes() {
    let mut st = state(&["ab"]);
    assert!(press(&mut st, KeyEvent::ctrl('q')).is_some_and(|r| r.quit));
    press(&mut st, kc('x'));
    let res = press(&mut st, KeyEvent::ctrl('q'));
    assert!(res.is_some_and(|r| !r.quit));
    assert_eq!(
        st.status(),
        Some("Unsaved changes! Use :q! to force quit or :w to save")
    );
}

#[test]
fn command_line_escape_and_goto() {
    let mut st = state(&["a", "b", "c"]);
    press(&mut st, kc(':'));
    type_str(&mut st, "q");
    press(&mut st, key(KeyCode::Esc));
    assert!(st.mode.is_normal());

    let res = command(&mut st, "2");
    assert!(res.is_some_and(|r| !r.quit));
    assert_eq!(st.cursor, Position::new(1, 0));
    assert_eq!(st.status(), Some("Line 2"));

    let res = command(&mut st, "q");
    assert!(res.is_some_and(|r| r.quit));
}
