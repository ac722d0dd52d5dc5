//! kvlog - Immutable structured key-value logging.
//!
//! A logger here is an immutable value: binding fields with `with`
//! returns a new logger and leaves the receiver untouched, which makes
//! any instance freely shareable across threads. Each `print` emits
//! one line to stdout carrying `time` and `message` plus the
//! accumulated fields, newest binding first.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `encode` - field sets and the two line encodings (JSON, key=value)
//! - `logger` - the `Logger` value type and its three variants
//! - `facade` - the process-wide default logger and free functions
//! - `bridge` - `log` crate integration
//!
//! ## Usage
//!
//! ```
//! use kvlog::{kv, Color, Logger};
//!
//! let logger = Logger::keyval(Color::None).with(kv!["service", "api"]);
//! logger.print("listening", kv!["port", 8080]);
//! ```

pub mod bridge;
pub mod encode;
pub mod facade;
pub mod logger;

pub use encode::color::Color;
pub use encode::fields::{field, FieldSet};
pub use facade::{print, set_logger, with};
pub use logger::Logger;

// Field values are `serde_json` values; re-exported for the `kv!` macro
// and for callers constructing fields directly.
pub use serde_json::Value;
