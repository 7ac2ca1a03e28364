use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use super::{ClockSettings, KeyValueStorage, SettingsField};

/// Key the settings record is stored under.
pub const STORAGE_KEY: &str = "mechanical-clock-settings";

/// Loads the persisted settings, merged over the defaults.
///
/// The merge is field by field: fields absent from the stored record keep
/// their default value, unknown fields are ignored and a field holding a
/// value of the wrong type is skipped without affecting the others. A read
/// failure or a record that is not a JSON object yields the defaults. Scale
/// factors outside the accepted range are clamped.
#[instrument(skip(storage))]
pub fn load_settings(storage: &dyn KeyValueStorage) -> ClockSettings {
    let stored = match storage.get_item(STORAGE_KEY) {
        Ok(Some(stored)) => stored,
        Ok(None) => {
            debug!("No stored settings, using defaults");
            return ClockSettings::default();
        }
        Err(e) => {
            warn!(error = %e, "Failed to read stored settings, using defaults");
            return ClockSettings::default();
        }
    };

    let record = match serde_json::from_str::<Value>(&stored) {
        Ok(Value::Object(record)) => record,
        Ok(other) => {
            warn!(kind = json_kind(&other), "Stored settings are not an object, using defaults");
            return ClockSettings::default();
        }
        Err(e) => {
            warn!(error = %e, "Invalid stored settings, using defaults");
            return ClockSettings::default();
        }
    };

    merge_over_defaults(&record).sanitized()
}

fn merge_over_defaults(record: &Map<String, Value>) -> ClockSettings {
    SettingsField::ALL
        .into_iter()
        .fold(ClockSettings::default(), |settings, field| {
            let Some(value) = record.get(field.key()) else {
                return settings;
            };

            match settings.with_stored_value(field, value) {
                Ok(next) => next,
                Err(e) => {
                    warn!(field = field.key(), error = %e, "Ignoring invalid stored field");
                    settings
                }
            }
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Writes the full settings record under [`STORAGE_KEY`].
///
/// Failures are logged and otherwise ignored; the caller keeps working with
/// its in-memory copy.
#[instrument(skip(storage, settings))]
pub fn save_settings(storage: &dyn KeyValueStorage, settings: &ClockSettings) {
    let serialized = match serde_json::to_string(settings) {
        Ok(serialized) => serialized,
        Err(e) => {
            warn!(error = %e, "Failed to serialize settings");
            return;
        }
    };

    if let Err(e) = storage.set_item(STORAGE_KEY, &serialized) {
        warn!(error = %e, "Failed to persist settings, keeping them in memory");
    }
}

/// The canonical default settings. The caller is responsible for persisting them.
pub fn reset_to_defaults() -> ClockSettings {
    ClockSettings::default()
}
