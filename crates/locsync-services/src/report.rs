use std::path::PathBuf;

use locsync_core::SyncError;

/// What happened under one root across both phases.
#[derive(Debug)]
pub struct RootReport {
    pub root: PathBuf,
    pub removed: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    /// Jobs skipped because the target locale is the base locale.
    pub skipped_self: usize,
    pub errors: Vec<SyncError>,
}

impl RootReport {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            removed: Vec::new(),
            written: Vec::new(),
            skipped_self: 0,
            errors: Vec::new(),
        }
    }

    /// Log the error as a diagnostic and keep it.
    pub fn record(&mut self, err: SyncError) {
        match &err {
            SyncError::SymbolicLink { .. } => {
                tracing::warn!(event = "skipped", kind = err.kind(), "{}", err)
            }
            _ => tracing::error!(event = "failed", kind = err.kind(), "{}", err),
        }
        self.errors.push(err);
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub roots: Vec<RootReport>,
}

impl RunReport {
    pub fn removed_count(&self) -> usize {
        self.roots.iter().map(|r| r.removed.len()).sum()
    }

    pub fn written_count(&self) -> usize {
        self.roots.iter().map(|r| r.written.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.roots.iter().map(|r| r.errors.len()).sum()
    }

    pub fn errors(&self) -> impl Iterator<Item = &SyncError> {
        self.roots.iter().flat_map(|r| r.errors.iter())
    }
}
