//! Logging Infrastructure
//!
//! Structured logging via `tracing`. `RUST_LOG` wins over the configured
//! level when set.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with default settings (info, stdout)
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON output and daily rolling file output
///
/// File output is only used when `log_dir` exists.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("kitchen_server={level},tower_http={level}").into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "kitchen-server");
            subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .init();
            return;
        }
        eprintln!("Log directory {dir} does not exist, logging to stdout");
    }

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
