//! Routes records from the `log` facade into termlog categories, so dependencies that log
//! through `log::warn!` and friends show up as the same short status lines.

use crate::category::Category;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// `log::Log` adapter. Stateless; all settings live in the process-wide emitter.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bridge;

/// Debug and trace have no category of their own and fall back to info.
#[must_use]
pub const fn category_for(level: Level) -> Category {
    match level {
        Level::Error => Category::Error,
        Level::Warn => Category::Warning,
        Level::Info | Level::Debug | Level::Trace => Category::Info,
    }
}

impl Log for Bridge {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        category_for(record.level()).logf(*record.args());
    }

    fn flush(&self) {
        crate::logger::flush();
    }
}

static BRIDGE: Bridge = Bridge;

/// Installs the bridge as the global `log` logger with every level passed through.
///
/// # Errors
/// Fails if another `log` logger was already installed.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
