use std::fs;
use std::path::Path;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes tracing with a stdout layer and a daily-rolling file layer.
///
/// The returned guard must be held for the lifetime of the process or the
/// file layer stops flushing.
pub fn init(log_file: &str, log_level: &str) -> WorkerGuard {
    let path = Path::new(log_file);
    let dir = path.parent().unwrap_or_else(|| Path::new("logs"));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "api.log".into());

    fs::create_dir_all(dir).ok();

    let file_appender = rolling::daily(dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    guard
}
