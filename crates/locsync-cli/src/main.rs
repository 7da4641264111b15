mod ui;

use clap::Parser;
use locsync_config::{load_config, merge, BackendCfg, LocSyncConfig, SyncSettings};
use locsync_services::Result;
use locsync_translate::{OpenAiOptions, OpenAiTranslator};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(
    name = "locsync",
    version,
    about = "Regenerate translated siblings of base-language files and drop stale ones"
)]
struct Cli {
    /// Comma-separated directories to process
    #[arg(long, env = "translations_folder")]
    translations_folder: Option<String>,

    /// Base language identifier, e.g. `en`
    #[arg(long, env = "base_language")]
    base_language: Option<String>,

    /// Comma-separated target languages, e.g. `es,fr,de`
    #[arg(long, env = "target_languages")]
    target_languages: Option<String>,

    /// Credential for the translation backend
    #[arg(long, env = "openai_api_key", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// Chat model used for translation
    #[arg(long, env = "openai_model")]
    model: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "openai_base_url")]
    base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "request_timeout_ms")]
    timeout_ms: Option<u64>,

    /// Delete files that are not base-language before translating (default: true)
    #[arg(long, env = "prune_stale", value_parser = clap::builder::BoolishValueParser::new())]
    prune_stale: Option<bool>,

    /// Shorthand for `--prune-stale false`
    #[arg(long)]
    no_prune: bool,

    /// Walk and report, but delete, call and write nothing
    #[arg(long)]
    dry_run: bool,

    /// Read settings from this file instead of the default search
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write debug logs to daily files in this directory
    #[arg(long, env = "log_dir")]
    log_dir: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn overrides(&self) -> LocSyncConfig {
        let backend = BackendCfg {
            api_key: self.openai_api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout_ms: self.timeout_ms,
        };
        LocSyncConfig {
            translations_folder: self.translations_folder.clone(),
            base_language: self.base_language.clone(),
            target_languages: self.target_languages.clone(),
            prune: if self.no_prune {
                Some(false)
            } else {
                self.prune_stale
            },
            log_dir: self.log_dir.clone(),
            backend: Some(backend),
        }
    }
}

fn init_tracing(log_dir: Option<&Path>, use_color: bool) -> Option<WorkerGuard> {
    let console_layer = fmt::layer()
        .with_target(false)
        .with_ansi(use_color)
        .with_writer(std::io::stdout)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let (file_writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, "locsync.log"));
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(file_writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    let file_cfg = load_config(cli.config.as_deref())?;
    let settings = SyncSettings::resolve(merge(cli.overrides(), file_cfg), cli.dry_run)?;
    let _guard = init_tracing(settings.log_dir.as_deref(), use_color);

    info!(
        event = "run_start",
        roots = ?settings.roots,
        base = %settings.locales.base,
        targets = ?settings.locales.targets,
        prune = settings.prune,
        dry_run = settings.dry_run
    );

    let mut translator = OpenAiTranslator::new(OpenAiOptions {
        api_key: settings.backend.api_key.clone(),
        model: settings.backend.model.clone(),
        base_url: settings.backend.base_url.clone(),
        timeout: Duration::from_millis(settings.backend.timeout_ms),
    })?;

    locsync_services::run(&settings, &mut translator);

    if settings.dry_run {
        ui_ok!(use_color, "DRY-RUN: nothing was changed");
    } else {
        ui_ok!(use_color, "Translation completed successfully!");
    }
    Ok(())
}
