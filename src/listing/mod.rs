mod entry;

pub use entry::{DirEntry, EntryKind};

use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// List the immediate children of `dir` without recursing.
///
/// Entries come back in whatever order the filesystem hands them out.
/// Symlinks are not followed for traversal, only for classification.
/// Only a failure to read `dir` itself is an error; a child that cannot
/// be inspected is logged and left out.
pub fn list_entries(dir: &Path) -> Result<Vec<DirEntry>, walkdir::Error> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
            Err(err) => return Err(err),
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.into_path();
        let kind = EntryKind::of(&path);

        entries.push(DirEntry { name, path, kind });
    }

    Ok(entries)
}
