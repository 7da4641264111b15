//! Filename rules for localized siblings.
//!
//! Two base-file shapes are recognised:
//! - dotted: `greeting.en.txt`, the locale is the last dot-segment of the stem;
//! - bare: `en.txt`, the whole stem is the locale (compared case-insensitively).
//!
//! Anything else is treated as a translation or a foreign file.

use std::path::{Path, PathBuf};

pub use locsync_core::FileRecord;

/// Split a filename at its final dot. The extension keeps the dot and is
/// empty when there is none.
pub fn split_ext(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(i) => (&file_name[..i], &file_name[i..]),
        None => (file_name, ""),
    }
}

/// True exactly when a file with this raw stem is a base-language file.
pub fn is_base_file(raw_stem: &str, _ext: &str, base: &str) -> bool {
    has_base_suffix(raw_stem, base).is_some() || raw_stem.eq_ignore_ascii_case(base)
}

fn has_base_suffix<'a>(raw_stem: &'a str, base: &str) -> Option<&'a str> {
    raw_stem
        .strip_suffix(base)
        .and_then(|rest| rest.strip_suffix('.'))
}

/// Classify `path` against `base`.
pub fn parse(path: &Path, base: &str) -> FileRecord {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (raw_stem, ext) = split_ext(&file_name);

    if !is_base_file(raw_stem, ext, base) {
        return FileRecord {
            path: path.to_path_buf(),
            stem: raw_stem.to_string(),
            ext: ext.to_string(),
            locale: None,
            is_link: false,
        };
    }
    // dotted form keeps its own stem, bare form is named after the locale
    let stem = has_base_suffix(raw_stem, base).unwrap_or(base);
    FileRecord {
        path: path.to_path_buf(),
        stem: stem.to_string(),
        ext: ext.to_string(),
        locale: Some(base.to_string()),
        is_link: false,
    }
}

/// Output filename for `target`. A bare base file has no stem of its own,
/// so the locale replaces it.
pub fn derive_output_name(stem: &str, target: &str, ext: &str, base: &str) -> String {
    if stem == base {
        format!("{target}{ext}")
    } else {
        format!("{stem}.{target}{ext}")
    }
}

/// Full path of the sibling written for `target`.
pub fn output_path(record: &FileRecord, target: &str, base: &str) -> PathBuf {
    record
        .dir()
        .join(derive_output_name(&record.stem, target, &record.ext, base))
}
