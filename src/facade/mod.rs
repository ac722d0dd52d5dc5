//! Default-logger facade.
//!
//! Package-level `with`/`print`/`set_logger` operating on the shared
//! default logger.

pub mod default;

pub use default::*;
