//! Output encodings for log records.
//!
//! Pure functions that turn an ordered field set into a single output
//! line:
//! - `json` - line-delimited JSON objects
//! - `keyval` - colorized `key=value` console output
//!
//! Supporting types: the field set itself (`fields`) and the terminal
//! color palette (`color`).

pub mod color;
pub mod fields;
pub mod json;
pub mod keyval;

pub use color::*;
pub use fields::*;
pub use json::*;
pub use keyval::*;
