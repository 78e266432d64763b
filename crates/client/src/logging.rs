//! Session log setup.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Send tracing output to a per-session log file.
///
/// Stdout carries the match itself, so nothing is logged to the terminal.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "cogfight.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/cogfight.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for logs
///
/// - macOS: `~/Library/Caches/cogfight/logs`
/// - Linux: `~/.cache/cogfight/logs` (or `$XDG_CACHE_HOME/cogfight/logs`)
/// - Windows: `%LOCALAPPDATA%\cogfight\cache\logs`
/// - Fallback: `/tmp/cogfight/logs`
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "cogfight")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/cogfight"))
        .join("logs")
}
