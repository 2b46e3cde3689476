//! File persistence for the dispatcher.
//!
//! Synchronous and line-oriented: a file is read into a line array with
//! `\n` / `\r\n` terminators stripped, and written back as `line + "\n"` for
//! every line. The helpers here return `EditorError` so the caller can route
//! failures straight into the status slot.

use core_state::{EditorError, EditorState};
use core_text::Document;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of opening a path into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenFileResult {
    /// File existed and was loaded.
    Opened { lines: usize },
    /// File did not exist; the session now holds an empty buffer named after it.
    NewFile,
}

/// Read `path` into lines. An empty file yields one empty line. Bytes that
/// are not valid UTF-8 decode to U+FFFD instead of failing the open.
pub fn load_lines(path: &Path) -> Result<Vec<String>, EditorError> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            Ok(Document::from_text(&content).lines().to_vec())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(EditorError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => {
            tracing::error!(target: "io", path = %path.display(), ?e, "file_open_error");
            Err(EditorError::io("open", path, e))
        }
    }
}

/// Write every line followed by `\n`. Returns the number of bytes written.
pub fn save_lines(path: &Path, lines: &[String]) -> Result<usize, EditorError> {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    std::fs::write(path, content.as_bytes()).map_err(|e| {
        tracing::error!(target: "io", path = %path.display(), ?e, "file_write_error");
        EditorError::io("save", path, e)
    })?;
    Ok(content.len())
}

/// Replace the session document with the contents of `path`.
///
/// A missing file still switches the session to an empty buffer named
/// `path`. Any other IO failure leaves the session untouched.
pub fn open_file(state: &mut EditorState, path: &Path) -> Result<OpenFileResult, EditorError> {
    match load_lines(path) {
        Ok(lines) => {
            let count = lines.len();
            state.load_document(Document::from_lines(lines), Some(path.to_path_buf()));
            tracing::info!(target: "io", path = %path.display(), lines = count, "file_opened");
            Ok(OpenFileResult::Opened { lines: count })
        }
        Err(EditorError::FileNotFound(_)) => {
            state.load_document(Document::new(), Some(path.to_path_buf()));
            tracing::info!(target: "io", path = %path.display(), "new_file");
            Ok(OpenFileResult::NewFile)
        }
        Err(e) => Err(e),
    }
}

/// Save the document to `target`, or to the session's file name.
///
/// `target` becomes the session file name before the write is attempted, so
/// a failed `:w name` still leaves the name for the next bare `:w`. Only a
/// successful write clears the modified flag.
pub fn write_file(state: &mut EditorState, target: Option<&Path>) -> Result<usize, EditorError> {
    if let Some(p) = target {
        state.file_name = Some(p.to_path_buf());
    }
    let path = state.file_name.clone().ok_or(EditorError::NoFilename)?;
    let bytes = save_lines(&path, state.document.lines())?;
    tracing::info!(target: "io", path = %path.display(), bytes, "file_saved");
    state.modified = false;
    Ok(bytes)
}
