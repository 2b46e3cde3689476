//! File browser pane model (directory listing + list cursor).

use std::path::{Path, PathBuf};

/// Name of the synthetic parent-navigation entry.
pub const PARENT_ENTRY: &str = "..";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }

    pub fn parent() -> Self {
        Self::new(PARENT_ENTRY, true)
    }

    pub fn is_parent(&self) -> bool {
        self.name == PARENT_ENTRY
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileBrowser {
    pub visible: bool,
    cwd: PathBuf,
    entries: Vec<DirEntry>,
    selected: usize,
}

impl FileBrowser {
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&DirEntry> {
        self.entries.get(self.selected)
    }

    /// Replace the listing. The `..` entry is always first and the list
    /// cursor resets to it.
    pub fn set_listing(&mut self, cwd: PathBuf, entries: Vec<DirEntry>) {
        self.cwd = cwd;
        self.entries = std::iter::once(DirEntry::parent())
            .chain(entries.into_iter().filter(|e| !e.is_parent()))
            .collect();
        self.selected = 0;
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    /// Jump the list cursor to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Path the selected entry refers to (`..` resolves to the parent of `cwd`).
    pub fn selected_path(&self) -> Option<PathBuf> {
        let entry = self.selected()?;
        if entry.is_parent() {
            return Some(parent_of(&self.cwd));
        }
        Some(self.cwd.join(&entry.name))
    }
}

/// Parent directory, falling back to `cwd/..` when the path has no parent
/// component (e.g. `.`).
pub fn parent_of(cwd: &Path) -> PathBuf {
    match cwd.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => cwd.join(PARENT_ENTRY),
    }
}
