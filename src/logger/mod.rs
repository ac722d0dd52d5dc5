//! Logger abstraction.
//!
//! One value type, three closed variants: JSON, key=value, no-op.
//! Instances are immutable; `with` chains produce new values.

pub mod variants;

pub use variants::*;
