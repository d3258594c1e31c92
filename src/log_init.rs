//! File-backed logging for synthesis passes.
//!
//! Rule compilation logs at `debug`, per-selector construction at `trace`.
//! Nothing is written until a logger is installed.

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Appends `debug` and more severe records to the file at `path`.
pub fn init_logger(path: &str) -> Result<(), SetLoggerError> {
    init_logger_with_level(path, LevelFilter::Debug)
}

/// Like [`init_logger`], with an explicit maximum level.
///
/// Fails if a logger is already installed for the process.
pub fn init_logger_with_level(path: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        path: PathBuf::from(path),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
