//! File logging for the CLI. Stdout stays reserved for command output.

use std::path::{Path, PathBuf};

use notepad::kernel::services::adapters::ensure_log_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Overrides the default `notepad=info` filter, e.g. `NOTEPAD_LOG=notepad=debug`.
pub const FILTER_ENV: &str = "NOTEPAD_LOG";
const FILE_PREFIX: &str = "notepad.log";

/// Keeps the background writer alive; dropping it flushes pending lines.
pub struct LogSession {
    _guard: WorkerGuard,
    dir: PathBuf,
}

impl LogSession {
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// App data log dir, or a temp dir when that cannot be created.
fn resolve_dir() -> Option<PathBuf> {
    ensure_log_dir()
        .or_else(|_| {
            let dir = std::env::temp_dir().join("notepad").join("logs");
            std::fs::create_dir_all(&dir).map(|_| dir)
        })
        .ok()
}

pub fn init() -> Option<LogSession> {
    let dir = resolve_dir()?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, FILE_PREFIX));

    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("notepad=info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "panic");
    }));
    tracing::debug!(dir = %dir.display(), "logging to file");

    Some(LogSession { _guard: guard, dir })
}
