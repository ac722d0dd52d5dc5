//! Field set construction and normalization.
//!
//! A field set is an ordered, flat sequence of alternating key/value
//! entries. It is deliberately not a map: duplicate keys are preserved,
//! and newly bound fields go in front so the most recent binding is
//! encoded first.

use serde::Serialize;
use serde_json::Value;

/// Ordered sequence of alternating key/value entries.
///
/// The length is always even: construction drops a trailing unpaired
/// key before storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    entries: Vec<Value>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field set from a flat key/value sequence.
    ///
    /// An odd-length input loses its last entry, so a dangling key is
    /// never stored.
    pub fn from_kv(mut kv: Vec<Value>) -> Self {
        if kv.len() % 2 != 0 {
            kv.pop();
        }
        Self { entries: kv }
    }

    /// Return a new field set with `kv` (normalized) in front of the
    /// existing entries. The receiver is left untouched.
    pub fn prepend(&self, kv: Vec<Value>) -> Self {
        let mut entries = Self::from_kv(kv).entries;
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    /// Iterate the entries as (key, value) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.entries.len() / 2
    }
}

/// Convert any serializable value into a field value.
///
/// A value that fails to serialize degrades to `Value::Null`, so a bad
/// field can never abort a log call.
pub fn field<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Build a flat key/value list for `with`/`print`/`fatal`.
///
/// ```
/// use kvlog::kv;
///
/// let fields = kv!["code", 200, "path", "/admin"];
/// assert_eq!(fields.len(), 4);
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($entry:expr),+ $(,)?) => {
        ::std::vec![$($crate::encode::fields::field($entry)),+]
    };
}
