use std::path::{Path, PathBuf};

use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Base locale plus the ordered list of locales to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    pub base: String,
    pub targets: Vec<String>,
}

impl LocaleSet {
    pub fn new(base: impl Into<String>, targets: Vec<String>) -> Self {
        Self {
            base: base.into(),
            targets,
        }
    }

    /// Exact (case-sensitive) match against the base locale.
    pub fn is_base(&self, locale: &str) -> bool {
        locale == self.base
    }
}

/// A discovered file, split into the parts the naming rules care about.
/// Lives only for the duration of one walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Filename without extension and without a recognised base-locale suffix.
    pub stem: String,
    /// Extension including the leading dot, empty when the name has none.
    pub ext: String,
    /// `Some(base)` when the name marks the file as base-language.
    pub locale: Option<String>,
    /// The entry itself is a symbolic link. Links are removed or skipped,
    /// never read or written through.
    pub is_link: bool,
}

impl FileRecord {
    pub fn is_base(&self) -> bool {
        self.locale.is_some()
    }

    /// Directory the file lives in; outputs are written next to it.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Failures reported by a translation backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("backend answered with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("backend returned no answer")]
    EmptyResponse,
}

/// Everything that can go wrong below the configuration check.
/// None of these stop sibling work; they are logged and collected.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("cannot walk {}: {source}", .root.display())]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("cannot visit entry under {}: {source}", .root.display())]
    Entry {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("skipping symbolic link {}", .path.display())]
    SymbolicLink { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write translated file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to remove old translation file {}: {source}", .path.display())]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to translate {} to {locale}: {source}", .path.display())]
    Backend {
        path: PathBuf,
        locale: String,
        #[source]
        source: BackendError,
    },
}

impl SyncError {
    /// Short machine-readable tag, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::Traversal { .. } => "traversal",
            SyncError::Entry { .. } => "entry",
            SyncError::SymbolicLink { .. } => "symlink",
            SyncError::FileRead { .. } => "read",
            SyncError::FileWrite { .. } => "write",
            SyncError::FileDelete { .. } => "delete",
            SyncError::Backend { source, .. } => match source {
                BackendError::EmptyResponse => "backend-empty",
                _ => "backend-request",
            },
        }
    }
}
