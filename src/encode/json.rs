//! JSON line encoding.
//!
//! Emits one field set as a single-line JSON object. Duplicate keys are
//! preserved as repeated members, matching the field set's ordering
//! semantics rather than map semantics.

use serde_json::Value;

use crate::encode::fields::FieldSet;

/// Encode a field set as a single-line JSON object.
///
/// An element that fails to serialize encodes as `null`; the line is
/// always produced.
pub fn encode_json(fields: &FieldSet) -> String {
    let mut buf = String::from("{");
    for (i, (key, value)) in fields.pairs().enumerate() {
        if i != 0 {
            buf.push(',');
        }
        buf.push_str(&encode_value(key));
        buf.push(':');
        buf.push_str(&encode_value(value));
    }
    buf.push('}');
    buf
}

/// JSON-encode a single element, degrading to `null` on failure.
pub(crate) fn encode_value(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
