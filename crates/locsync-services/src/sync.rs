use std::fs;
use std::io;
use std::path::Path;

use locsync_core::{FileRecord, LocaleSet, SyncError};
use locsync_naming::output_path;
use locsync_translate::{strip_code_fences, Translator};
use tracing::{debug, info, warn};

use crate::{walk::walk_files, RootReport};

/// Regenerate every target-locale sibling of every base file under `root`.
///
/// Base files are collected before the first job runs, so outputs written
/// by this pass are never picked up as inputs. Files that are not
/// base-language are left alone.
pub fn translate_root(
    root: &Path,
    locales: &LocaleSet,
    translator: &mut dyn Translator,
    dry_run: bool,
    report: &mut RootReport,
) {
    debug!(event = "translate_start", root = %root.display(), targets = ?locales.targets, dry_run = dry_run);

    let mut sources: Vec<FileRecord> = Vec::new();
    for item in walk_files(root, &locales.base) {
        match item {
            Ok(record) if record.is_base() && record.is_link => {
                report.record(SyncError::SymbolicLink { path: record.path })
            }
            Ok(record) if record.is_base() => sources.push(record),
            Ok(_) => {}
            Err(err) => {
                let fatal = matches!(err, SyncError::Traversal { .. });
                report.record(err);
                if fatal {
                    return;
                }
            }
        }
    }
    debug!(event = "translate_plan", root = %root.display(), files = sources.len());

    for record in &sources {
        translate_file(record, locales, translator, dry_run, report);
    }
}

fn translate_file(
    record: &FileRecord,
    locales: &LocaleSet,
    translator: &mut dyn Translator,
    dry_run: bool,
    report: &mut RootReport,
) {
    let mut targets = Vec::with_capacity(locales.targets.len());
    for target in &locales.targets {
        if locales.is_base(target) {
            report.skipped_self += 1;
        } else {
            targets.push(target.as_str());
        }
    }
    if targets.is_empty() {
        return;
    }

    if dry_run {
        for target in targets {
            let out = output_path(record, target, &locales.base);
            info!(event = "would_write", source = %record.path.display(), locale = target, "Would write {}", out.display());
            report.written.push(out);
        }
        return;
    }

    let content = match fs::read_to_string(&record.path) {
        Ok(content) => content,
        Err(source) => {
            report.record(SyncError::FileRead {
                path: record.path.clone(),
                source,
            });
            return;
        }
    };

    for target in targets {
        let answer = match translator.translate(&content, target) {
            Ok(answer) => answer,
            Err(source) => {
                report.record(SyncError::Backend {
                    path: record.path.clone(),
                    locale: target.to_string(),
                    source,
                });
                continue;
            }
        };
        let cleaned = strip_code_fences(&answer);
        let out = output_path(record, target, &locales.base);
        if let Err(source) = unlink_symlink(&out) {
            report.record(SyncError::FileWrite { path: out, source });
            continue;
        }
        match fs::write(&out, cleaned.as_bytes()) {
            Ok(()) => {
                info!(event = "written", locale = target, "Translated {} -> {}", record.path.display(), out.display());
                report.written.push(out);
            }
            Err(source) => report.record(SyncError::FileWrite { path: out, source }),
        }
    }
}

/// An output path that is a symbolic link gets replaced, not written through.
fn unlink_symlink(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            warn!(event = "replace_link", "Replacing symbolic link {}", path.display());
            fs::remove_file(path)
        }
        _ => Ok(()),
    }
}
