use std::fs;
use std::path::Path;

use locsync_core::SyncError;
use tracing::{debug, info, warn};

use crate::{walk::walk_files, RootReport};

/// Delete every regular file under `root` that is not a base-language file.
/// Symbolic links with such names are unlinked; their targets stay.
/// Directories stay. A root that cannot be walked ends this pass only.
pub fn prune_root(root: &Path, base: &str, dry_run: bool, report: &mut RootReport) {
    debug!(event = "prune_start", root = %root.display(), base = base, dry_run = dry_run);

    for item in walk_files(root, base) {
        let record = match item {
            Ok(record) => record,
            Err(err) => {
                let fatal = matches!(err, SyncError::Traversal { .. });
                report.record(err);
                if fatal {
                    return;
                }
                continue;
            }
        };
        if record.is_base() {
            continue;
        }

        if dry_run {
            info!(event = "would_remove", "Would remove file: {}", record.path.display());
            report.removed.push(record.path);
            continue;
        }
        if record.is_link {
            warn!(event = "remove_link", "Removing symbolic link {} without touching its target", record.path.display());
        }
        match fs::remove_file(&record.path) {
            Ok(()) => {
                info!(event = "removed", "Removed file: {}", record.path.display());
                report.removed.push(record.path);
            }
            Err(source) => report.record(SyncError::FileDelete {
                path: record.path,
                source,
            }),
        }
    }
}
