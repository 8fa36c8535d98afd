use std::path::Path;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};

use jot::cli::commands::Cli;
use jot::io::config_io;
use jot::tui::{self, App};

fn main() {
    let cli = Cli::parse();

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // Flags win over the config file
    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    let log_file = cli.log_file.as_deref().or(config.log.file.as_deref());
    let _log_guard = match init_logging(level, log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::from_config(&config, cli.filter, cli.empty);
    if let Err(e) = tui::run(app) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Set up file logging. The terminal belongs to the TUI, so nothing goes to
/// stdout. Hold the returned guard until exit so buffered lines get flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Result<Option<WorkerGuard>, InitError> {
    let default_path = std::env::temp_dir().join("jot.log");
    let log_path = file_path.unwrap_or(&default_path);

    let Some(file_appender) = log_appender(log_path)? else {
        return Ok(None);
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

/// Non-rotating appender writing to `log_path`. `None` when the path has no
/// file name.
fn log_appender(log_path: &Path) -> Result<Option<RollingFileAppender>, InitError> {
    let (Some(log_dir), Some(file_name)) = (
        log_path.parent(),
        log_path.file_name().and_then(|name| name.to_str()),
    ) else {
        return Ok(None);
    };
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)
        .map(Some)
}
