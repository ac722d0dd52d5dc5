//! Process-wide default logger.
//!
//! One shared `Logger` slot behind a mutex, so any part of a process
//! can log without threading a logger through every call. The lock
//! covers only the slot access; encoding and the stdout write happen
//! on a snapshot taken outside it, so slow I/O never serializes
//! through the slot lock.

use lazy_static::lazy_static;
use parking_lot::Mutex;
use serde_json::Value;

use crate::encode::color::Color;
use crate::logger::Logger;

// Global default logger slot with thread-safe access.
lazy_static! {
    static ref DEFAULT_LOGGER: Mutex<Logger> = Mutex::new(Logger::keyval(Color::None));
}

/// Snapshot the current default logger.
fn current() -> Logger {
    DEFAULT_LOGGER.lock().clone()
}

/// Replace the process-wide default logger.
pub fn set_logger(logger: Logger) {
    *DEFAULT_LOGGER.lock() = logger;
}

/// Bind fields onto the current default logger.
///
/// A `set_logger` racing this call means the returned logger is either
/// the old or the new generation, never a mix of the two.
pub fn with(kv: Vec<Value>) -> Logger {
    current().with(kv)
}

/// Emit one record through the current default logger.
pub fn print(message: &str, kv: Vec<Value>) {
    current().print(message, kv);
}
