//! Routes records from the `log` facade through a lightlog [`Logger`].
//!
//! Facade records are gated, indented and subject to the terminate threshold
//! exactly like records from lightlog's own macros.

use log::{LevelFilter, Log, Metadata, Record as FacadeRecord, SetLoggerError};

use crate::format::Origin;
use crate::level::Level;
use crate::local::Logger;

/// File column of facade records without a `'static` file path.
pub const UNKNOWN_FILE: &str = "<log>";

/// Maps a facade level onto a lightlog level.
#[must_use]
pub const fn from_facade(l: log::Level) -> Level {
    match l {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Verbose,
    }
}

/// The most verbose facade filter that still reaches `l`.
#[must_use]
pub const fn to_filter(l: Level) -> LevelFilter {
    match l {
        Level::Fatal | Level::Error => LevelFilter::Error,
        Level::Warning => LevelFilter::Warn,
        Level::Info => LevelFilter::Info,
        Level::Debug => LevelFilter::Debug,
        Level::Verbose => LevelFilter::Trace,
    }
}

/// `log::Log` implementation over a lightlog logger.
///
/// The file column needs a `'static` path. Records that only carry a borrowed
/// one (built at runtime rather than by the `log` macros) show [`UNKNOWN_FILE`] there,
/// and their line number shows as `0` when absent.
#[derive(Debug, Clone, Copy)]
pub struct LogBridge {
    logger: &'static Logger,
}

impl LogBridge {
    /// Bridge to `logger`.
    #[must_use]
    pub const fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger.enabled(from_facade(metadata.level()))
    }

    fn log(&self, record: &FacadeRecord<'_>) {
        let level = from_facade(record.level());
        if !self.logger.enabled(level) {
            return;
        }
        let mut origin = Origin::new(
            record.file_static().unwrap_or(UNKNOWN_FILE),
            record.line().unwrap_or(0),
        );
        if let Some(module) = record.module_path_static() {
            origin = origin.with_function(module);
        }
        self.logger.emit(level, origin, *record.args());
    }

    fn flush(&self) {}
}

/// Sends `log` facade records to the global lightlog logger.
/// # Errors
/// Fails if another facade logger is already installed.
pub fn install() -> Result<(), SetLoggerError> {
    install_with(crate::logger())
}

/// Sends `log` facade records to `logger`.
/// # Errors
/// Fails if another facade logger is already installed.
pub fn install_with(logger: &'static Logger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(to_filter(logger.level()));
    Ok(())
}
