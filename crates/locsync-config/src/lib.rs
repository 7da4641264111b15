use std::path::{Path, PathBuf};

use locsync_core::LocaleSet;
use locsync_translate::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_MS};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "locsync.toml";

/// Raw, partially filled configuration. The same shape is produced from
/// command-line flags/environment and from `locsync.toml`, then merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocSyncConfig {
    /// Comma-separated roots.
    pub translations_folder: Option<String>,
    pub base_language: Option<String>,
    /// Comma-separated target locales.
    pub target_languages: Option<String>,
    pub prune: Option<bool>,
    pub log_dir: Option<String>,
    pub backend: Option<BackendCfg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendCfg {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{setting} not set")]
    Missing { setting: &'static str },
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Search order: `--config` when given, otherwise CWD/locsync.toml then
/// `<config dir>/locsync/locsync.toml`. Earlier files win.
pub fn load_config(explicit: Option<&Path>) -> Result<LocSyncConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_file(path);
    }
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(CONFIG_FILE));
    }
    if let Some(base) = dirs::config_dir() {
        candidates.push(base.join("locsync").join(CONFIG_FILE));
    }
    load_from_paths(&candidates)
}

/// Merge every existing file in `paths`; absent files are skipped.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<LocSyncConfig, ConfigError> {
    let mut merged = LocSyncConfig::default();
    for path in paths.iter().filter(|p| p.is_file()) {
        merged = merge(merged, read_file(path)?);
    }
    Ok(merged)
}

fn read_file(path: &Path) -> Result<LocSyncConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Fill gaps in `a` from `b`.
pub fn merge(mut a: LocSyncConfig, b: LocSyncConfig) -> LocSyncConfig {
    if a.translations_folder.is_none() {
        a.translations_folder = b.translations_folder;
    }
    if a.base_language.is_none() {
        a.base_language = b.base_language;
    }
    if a.target_languages.is_none() {
        a.target_languages = b.target_languages;
    }
    if a.prune.is_none() {
        a.prune = b.prune;
    }
    if a.log_dir.is_none() {
        a.log_dir = b.log_dir;
    }
    a.backend = match (a.backend, b.backend) {
        (Some(a), Some(b)) => Some(merge_backend(a, b)),
        (a, b) => a.or(b),
    };
    a
}

fn merge_backend(mut a: BackendCfg, b: BackendCfg) -> BackendCfg {
    if a.api_key.is_none() {
        a.api_key = b.api_key;
    }
    if a.model.is_none() {
        a.model = b.model;
    }
    if a.base_url.is_none() {
        a.base_url = b.base_url;
    }
    if a.timeout_ms.is_none() {
        a.timeout_ms = b.timeout_ms;
    }
    a
}

/// Split a comma-separated setting, trimming items and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone)]
pub struct BackendSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl std::fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Validated settings for one run. Built once, then passed by reference.
#[derive(Debug, Clone)]
pub struct SyncSettings {
    pub roots: Vec<PathBuf>,
    pub locales: LocaleSet,
    pub prune: bool,
    pub dry_run: bool,
    pub backend: BackendSettings,
    pub log_dir: Option<PathBuf>,
}

impl SyncSettings {
    /// Validate a merged configuration. The credential is only required when
    /// the run will actually call the backend.
    pub fn resolve(cfg: LocSyncConfig, dry_run: bool) -> Result<Self, ConfigError> {
        let roots = required_list(cfg.translations_folder.as_deref(), "translations_folder")?;
        let base = cfg
            .base_language
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing {
                setting: "base_language",
            })?
            .to_string();
        let targets = required_list(cfg.target_languages.as_deref(), "target_languages")?;

        let backend = cfg.backend.unwrap_or_default();
        let api_key = backend
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let api_key = match api_key {
            Some(k) => k,
            None if dry_run => String::new(),
            None => {
                return Err(ConfigError::Missing {
                    setting: "openai_api_key",
                })
            }
        };

        Ok(Self {
            roots: roots.into_iter().map(PathBuf::from).collect(),
            locales: LocaleSet::new(base, targets),
            prune: cfg.prune.unwrap_or(true),
            dry_run,
            backend: BackendSettings {
                api_key,
                model: backend.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: backend
                    .base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout_ms: backend.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
            },
            log_dir: cfg.log_dir.map(PathBuf::from),
        })
    }
}

fn required_list(raw: Option<&str>, setting: &'static str) -> Result<Vec<String>, ConfigError> {
    let items = raw.map(split_list).unwrap_or_default();
    if items.is_empty() {
        return Err(ConfigError::Missing { setting });
    }
    Ok(items)
}
