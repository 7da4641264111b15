use std::path::{Path, PathBuf};

use locsync_core::{FileRecord, SyncError};
use walkdir::WalkDir;

/// Lazy, single-pass sequence of the regular files and symbolic links under
/// one root. Links are yielded with [`FileRecord::is_link`] set and are never
/// followed.
///
/// Items are `Err` for entries that could not be visited. A
/// [`SyncError::Traversal`] means the root itself is unusable; the walk ends
/// right after it. Other errors concern one entry and the walk goes on.
pub struct FileWalk {
    root: PathBuf,
    base: String,
    inner: walkdir::IntoIter,
    done: bool,
}

pub fn walk_files(root: &Path, base: &str) -> FileWalk {
    FileWalk {
        root: root.to_path_buf(),
        base: base.to_string(),
        inner: WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter(),
        done: false,
    }
}

impl Iterator for FileWalk {
    type Item = Result<FileRecord, SyncError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => {
                    self.done = true;
                    return Some(Err(SyncError::Traversal {
                        root: self.root.clone(),
                        source,
                    }));
                }
                Err(source) => {
                    return Some(Err(SyncError::Entry {
                        root: self.root.clone(),
                        source,
                    }))
                }
            };

            let file_type = entry.file_type();
            if !file_type.is_file() && !file_type.is_symlink() {
                continue;
            }
            let mut record = locsync_naming::parse(entry.path(), &self.base);
            record.is_link = file_type.is_symlink();
            return Some(Ok(record));
        }
    }
}
