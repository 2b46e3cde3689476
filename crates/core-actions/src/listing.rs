//! Directory enumeration for the file browser pane.
//!
//! The dispatcher only sees the `DirectoryLister` trait so scenario tests can
//! feed a fixed listing; `FsLister` is the real filesystem implementation.

use core_state::DirEntry;
use std::io;
use std::path::Path;

pub trait DirectoryLister {
    /// Entries of `path` sorted by name, without the synthetic `..` entry.
    fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}

#[derive(Debug, Clone, Copy)]
pub struct FsLister {
    pub show_hidden: bool,
}

impl Default for FsLister {
    fn default() -> Self {
        Self { show_hidden: true }
    }
}

impl FsLister {
    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }
}

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.show_hidden && name.starts_with('.') {
                continue;
            }
            // Broken symlinks and races with deletion list as plain files.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
                || entry.path().is_dir();
            entries.push(DirEntry::new(name, is_dir));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(target: "io", path = %path.display(), count = entries.len(), "list_dir");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sorted_and_flags_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join(".hidden"), "").unwrap();

        let all = FsLister::new(true).list(dir.path()).unwrap();
        let names: Vec<_> = all.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, [".hidden", "a.txt", "b.txt", "sub"]);
        assert!(all[3].is_dir);
        assert!(!all[1].is_dir);

        let visible = FsLister::new(false).list(dir.path()).unwrap();
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsLister::default().list(&dir.path().join("nope")).is_err());
    }
}
