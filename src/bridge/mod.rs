//! `log` crate bridge.
//!
//! Optional one-time hookup that forwards `log::info!` and friends to
//! the default logger.

pub mod adapter;

pub use adapter::*;
