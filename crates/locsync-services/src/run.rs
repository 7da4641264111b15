use locsync_config::SyncSettings;
use locsync_translate::Translator;
use tracing::{debug, info};

use crate::{prune::prune_root, sync::translate_root, RootReport, RunReport};

/// Prune every root, then translate every root.
///
/// Pruning is fully finished before the first output is written. Failures
/// are logged and collected per root; the run itself never stops early.
pub fn run(settings: &SyncSettings, translator: &mut dyn Translator) -> RunReport {
    let mut report = RunReport {
        roots: settings
            .roots
            .iter()
            .cloned()
            .map(RootReport::new)
            .collect(),
    };

    if settings.prune {
        for root in report.roots.iter_mut() {
            let path = root.root.clone();
            prune_root(&path, &settings.locales.base, settings.dry_run, root);
        }
    } else {
        info!(event = "prune_disabled", "Stale translation pruning is disabled");
    }

    for root in report.roots.iter_mut() {
        let path = root.root.clone();
        translate_root(&path, &settings.locales, translator, settings.dry_run, root);
    }

    debug!(
        event = "run_summary",
        roots = report.roots.len(),
        removed = report.removed_count(),
        written = report.written_count(),
        errors = report.error_count()
    );
    report
}
