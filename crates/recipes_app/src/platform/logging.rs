//! Logger setup for recipes_app.
//!
//! The TUI owns the terminal, so everything goes to a log file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

/// Installs the global logger writing to `path` (truncated on start).
pub fn initialize(path: &Path, level: LevelFilter) {
    let config = build_config();

    let Some(file_logger) = create_file_logger(path, level, config) else {
        return;
    };
    let loggers: Vec<Box<dyn SharedLogger>> = vec![file_logger];

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("rustls")
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
