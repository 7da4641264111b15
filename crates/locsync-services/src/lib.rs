//! Orchestration layer: walk roots, prune stale translations, regenerate
//! the current ones. Used by the CLI; keeps no state between runs.

pub mod prune;
pub mod report;
pub mod run;
pub mod sync;
mod walk;

#[cfg(test)]
pub(crate) mod test_support;

pub use locsync_core::{FileRecord, LocaleSet, Result, SyncError};
pub use prune::prune_root;
pub use report::{RootReport, RunReport};
pub use run::run;
pub use sync::translate_root;
