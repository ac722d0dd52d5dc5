//! `log` facade integration.
//!
//! Routes records from the `log` macros through the process-wide
//! default logger, so libraries written against `log` share the same
//! structured output. No level filtering happens here: the maximum
//! level is opened up and every record is forwarded with its level
//! bound as an ordinary field.

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use serde_json::Value;

use crate::encode::fields::field;
use crate::facade;

/// Adapter forwarding `log` records to the default logger.
struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        facade::print(&record.args().to_string(), record_fields(record));
    }

    fn flush(&self) {}
}

/// Field list attached to every forwarded record.
fn record_fields(record: &Record) -> Vec<Value> {
    vec![
        field("level"),
        field(record.level().to_string().to_lowercase()),
        field("target"),
        field(record.target()),
    ]
}

/// Register the bridge as the global `log` logger.
///
/// Call once at process start. A second install surfaces `log`'s own
/// error to the caller.
pub fn install() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv;
    use log::Level;

    #[test]
    fn test_record_fields_mapping() {
        let fields = record_fields(
            &Record::builder()
                .args(format_args!("boom"))
                .level(Level::Warn)
                .target("app")
                .build(),
        );
        assert_eq!(fields, kv!["level", "warn", "target", "app"]);
    }
}
