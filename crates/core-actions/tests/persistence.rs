mod common;
use common::*;

use core_actions::dispatcher::open_and_report;
use core_actions::io_ops::{load_lines, save_lines};
use core_events::{KeyCode, KeyEvent};
use core_state::EditorState;
use pretty_assertions::assert_eq;

#[test]
fn save_then_load_round_trips_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.txt");
    let original = vec![
        "first".to_string(),
        String::new(),
        "  indented".to_string(),
        "ünïcødé".to_string(),
    ];
    save_lines(&path, &original).unwrap();
    assert_eq!(load_lines(&path).unwrap(), original);
}

#[test]
fn write_command_then_edit_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmd.txt");
    let mut st = state(&[""]);
    type_str(&mut st, "ihi");
    press(&mut st, key(KeyCode::Enter));
    type_str(&mut st, "there");
    press(&mut st, key(KeyCode::Esc));
    command(&mut st, &format!("w {}", path.display()));
    assert!(!st.modified);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi\nthere\n");

    let mut other = EditorState::default();
    let res = command(&mut other, &format!("e {}", path.display()));
    assert!(res.is_some_and(|r| r.buffer_replaced));
    assert_eq!(lines(&other), ["hi", "there"]);
    assert_eq!(other.file_name.as_deref(), Some(path.as_path()));
}

#[test]
fn ctrl_s_saves_to_current_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ctrl_s.txt");
    std::fs::write(&path, "abc\n").unwrap();
    let mut st = EditorState::default();
    open_and_report(&mut st, &path);
    press(&mut st, kc('x'));
    assert!(st.modified);
    press(&mut st, KeyEvent::ctrl('s'));
    assert!(!st.modified);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "bc\n");
    assert_eq!(
        st.status(),
        Some(format!("Saved: {} (3 bytes)", path.display()).as_str())
    );
}

#[test]
fn opening_missing_file_starts_new_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brand_new.txt");
    let mut st = EditorState::default();
    open_and_report(&mut st, &path);
    assert_eq!(lines(&st), [""]);
    assert_eq!(
        st.status(),
        Some(format!("New file: {}", path.display()).as_str())
    );
    type_str(&mut st, "ix");
    press(&mut st, key(KeyCode::Esc));
    command(&mut st, "wq");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\n");
}

#[test]
fn failed_save_keeps_name_for_next_write() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("missing_dir");
    let path = sub.join("out.txt");
    let mut st = state(&["keep"]);
    st.modified = true;
    let res = command(&mut st, &format!("wq {}", path.display()));
    // `wq` takes no argument; the whole line is an unknown command.
    assert!(res.is_some_and(|r| !r.quit));
    assert_eq!(st.file_name, None);

    command(&mut st, &format!("w {}", path.display()));
    assert_eq!(st.status(), Some("Error: Cannot save file!"));
    assert!(st.modified);
    assert_eq!(st.file_name.as_deref(), Some(path.as_path()));

    std::fs::create_dir(&sub).unwrap();
    command(&mut st, "w");
    assert!(!st.modified);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep\n");
    assert_eq!(
        st.status(),
        Some(format!("Saved: {} (5 bytes)", path.display()).as_str())
    );
}

#[test]
fn open_non_utf8_file_decodes_lossily() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    std::fs::write(&path, b"caf\xe9\nline two\n").unwrap();
    let mut st = state(&["old"]);
    let res = open_and_report(&mut st, &path);
    assert!(res.buffer_replaced);
    assert_eq!(lines(&st), ["caf\u{FFFD}", "line two"]);
    assert_eq!(
        st.status(),
        Some(format!("Opened: {} (2 lines)", path.display()).as_str())
    );
}
