use std::fs;
use std::path::{Path, PathBuf};

/// Classification of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file, or a symlink that resolves to one
    File,
    /// Directories, dangling symlinks, sockets and everything else
    Other,
}

impl EntryKind {
    /// Classify a path with a status check that follows symlinks.
    /// A failed status check counts as `Other`.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        }
    }
}

/// One child of a listed directory
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Entry name as reported by the listing (lossy if not UTF-8)
    pub name: String,
    /// Path used to open the entry
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
