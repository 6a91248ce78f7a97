//! Console logger
//!
//! Backs the `log` facade with the PutChar syscall. Records share the
//! console with the interactive protocol, so the default level only lets
//! warnings through.

use core::fmt::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Mutex;

use crate::syscall::{Sys, Trap};

/// `log` backend writing `[LEVEL] target: message` lines
pub struct ConsoleLogger<T> {
    console: Mutex<Sys<T>>,
}

impl<T> ConsoleLogger<T> {
    pub const fn new(trap: T) -> Self {
        Self {
            console: Mutex::new(Sys::new(trap)),
        }
    }

    #[cfg(test)]
    pub(crate) fn console(&self) -> spin::MutexGuard<'_, Sys<T>> {
        self.console.lock()
    }
}

impl<T: Trap + Send> Log for ConsoleLogger<T> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut console = self.console.lock();
        let _ = writeln!(
            console,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Install `logger` as the global logger.
///
/// # Errors
/// Fails if a logger was already installed.
pub fn init(logger: &'static dyn Log, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
