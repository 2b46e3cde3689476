use std::path::PathBuf;
use thiserror::Error;

/// User-facing editor errors. The `Display` text is exactly what lands in
/// the status slot.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("New file: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Error: Cannot {action} file!")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No filename! Use :w <filename>")]
    NoFilename,
    #[error("Unsaved changes! Use :q! to force quit or :w to save")]
    UnsavedChanges,
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Nothing to paste")]
    NothingToPaste,
    #[error("Not found: '{0}'")]
    NotFound(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl EditorError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
