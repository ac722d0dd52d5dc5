//! Colorized key=value line encoding.
//!
//! Human-readable console encoding: `key=value` pairs joined by single
//! spaces. Values go through JSON encoding so strings stay quoted and
//! unambiguous to parse back; keys can be wrapped in an ANSI color.

use serde_json::Value;

use crate::encode::color::Color;
use crate::encode::fields::FieldSet;
use crate::encode::json::encode_value;

/// Encode a field set as `key=value` pairs joined by single spaces.
///
/// An empty field set encodes as the empty string. With a key color
/// other than `Color::None`, each key is wrapped in the color escape
/// and the reset sequence; the color is cosmetic only.
pub fn encode_keyval(fields: &FieldSet, key_color: Color) -> String {
    let mut buf = String::new();
    for (i, (key, value)) in fields.pairs().enumerate() {
        if i != 0 {
            buf.push(' ');
        }
        match key_color {
            Color::None => buf.push_str(&render_key(key)),
            color => {
                buf.push_str(color.code());
                buf.push_str(&render_key(key));
                buf.push_str(Color::None.code());
            }
        }
        buf.push('=');
        buf.push_str(&encode_value(value));
    }
    buf
}

/// String keys render bare; anything else renders as its JSON text.
fn render_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
