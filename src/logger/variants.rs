//! The logger value type and its three variants.

use std::io::Write;
use std::process;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::encode::color::Color;
use crate::encode::fields::FieldSet;
use crate::encode::json::encode_json;
use crate::encode::keyval::encode_keyval;

/// An immutable structured logger.
///
/// Binding fields with `with` returns a new logger and never touches
/// the receiver, so any instance can be shared across threads without
/// synchronization. The variant set is closed: JSON output, colorized
/// key=value output, or no output.
#[derive(Debug, Clone)]
pub enum Logger {
    /// Line-delimited JSON objects; the usual choice for structured
    /// pipelines.
    Json { fields: FieldSet },
    /// Human-readable `key=value` console output with an optional key
    /// color.
    Keyval { fields: FieldSet, key_color: Color },
    /// Emits nothing. `fatal` still terminates the process.
    Nil,
}

impl Logger {
    /// New JSON logger with no bound fields.
    pub fn json() -> Self {
        Logger::Json {
            fields: FieldSet::new(),
        }
    }

    /// New key=value logger with no bound fields.
    pub fn keyval(key_color: Color) -> Self {
        Logger::Keyval {
            fields: FieldSet::new(),
            key_color,
        }
    }

    /// New no-op logger.
    pub fn nil() -> Self {
        Logger::Nil
    }

    /// Return a new logger with `kv` bound in front of the existing
    /// fields. Duplicates are kept; a trailing unpaired key is dropped.
    pub fn with(&self, kv: Vec<Value>) -> Logger {
        match self {
            Logger::Json { fields } => Logger::Json {
                fields: fields.prepend(kv),
            },
            Logger::Keyval { fields, key_color } => Logger::Keyval {
                fields: fields.prepend(kv),
                key_color: *key_color,
            },
            Logger::Nil => Logger::Nil,
        }
    }

    /// Emit one record line to stdout.
    ///
    /// The record carries `time` (UTC, RFC3339) and `message` first,
    /// then the call-site fields, then the bound fields, newest first.
    /// Never fails observably; write errors are dropped.
    pub fn print(&self, message: &str, kv: Vec<Value>) {
        if let Some(line) = self.render(message, kv) {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "{}", line);
        }
    }

    /// Emit one record line, flush stdout, and terminate the process
    /// with a non-zero exit status. The no-op logger exits without
    /// emitting anything.
    pub fn fatal(&self, message: &str, kv: Vec<Value>) -> ! {
        if let Some(line) = self.render(message, kv) {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
        process::exit(1);
    }

    fn render(&self, message: &str, kv: Vec<Value>) -> Option<String> {
        let time = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        self.render_at(&time, message, kv)
    }

    /// Render one record line with an injected timestamp. `None` for
    /// the no-op variant.
    pub(crate) fn render_at(&self, time: &str, message: &str, kv: Vec<Value>) -> Option<String> {
        if matches!(self, Logger::Nil) {
            return None;
        }

        let mut record = vec![
            Value::from("time"),
            Value::from(time),
            Value::from("message"),
            Value::from(message),
        ];
        record.extend(kv);

        match self {
            Logger::Json { fields } => Some(encode_json(&fields.prepend(record))),
            Logger::Keyval { fields, key_color } => {
                Some(encode_keyval(&fields.prepend(record), *key_color))
            }
            Logger::Nil => None,
        }
    }
}
