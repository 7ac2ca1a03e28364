//! Unit tests for settings persistence.
//! In-memory and failing storage only, no filesystem.

use std::sync::Arc;

use futures::StreamExt;

use crate::settings::{
    ClockSettings, DisplayKind, KeyValueStorage, MemoryStorage, STORAGE_KEY, SettingsStore,
    StorageError, Theme, load_settings, reset_to_defaults, save_settings,
};

/// Storage that rejects every operation, like a browser with storage disabled.
struct DisabledStorage;

impl KeyValueStorage for DisabledStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

fn storage_with(record: &str) -> MemoryStorage {
    let storage = MemoryStorage::new();
    storage.set_item(STORAGE_KEY, record).unwrap();
    storage
}

#[test]
fn load_from_empty_storage_returns_defaults() {
    let storage = MemoryStorage::new();

    assert_eq!(load_settings(&storage), ClockSettings::default());
}

#[test]
fn load_partial_record_overrides_only_present_fields() {
    let storage = storage_with(r#"{ "theme": "dark" }"#);

    let expected = ClockSettings {
        theme: Theme::Dark,
        ..ClockSettings::default()
    };
    assert_eq!(load_settings(&storage), expected);
}

#[test]
fn load_corrupt_json_returns_defaults() {
    let storage = storage_with("{ \"showDigital\": tru");

    assert_eq!(load_settings(&storage), ClockSettings::default());
}

#[test]
fn load_non_object_record_returns_defaults() {
    assert_eq!(load_settings(&storage_with("42")), ClockSettings::default());
    assert_eq!(load_settings(&storage_with("null")), ClockSettings::default());
}

#[test]
fn load_skips_only_the_wrongly_typed_field() {
    let storage = storage_with(r#"{ "showDate": true, "theme": 7 }"#);

    let expected = ClockSettings {
        show_date: true,
        ..ClockSettings::default()
    };
    assert_eq!(load_settings(&storage), expected);
}

#[test]
fn load_keeps_valid_fields_next_to_unknown_theme() {
    let storage = storage_with(r#"{ "showDigital": true, "dateScale": 2, "theme": "sepia" }"#);

    let expected = ClockSettings {
        show_digital: true,
        date_scale: 2.0,
        ..ClockSettings::default()
    };
    assert_eq!(load_settings(&storage), expected);
}

#[test]
fn load_treats_null_and_stringly_values_as_missing() {
    let storage = storage_with(r#"{ "showDate": true, "analogScale": null, "showAnalog": "false" }"#);

    let expected = ClockSettings {
        show_date: true,
        ..ClockSettings::default()
    };
    assert_eq!(load_settings(&storage), expected);
}

#[test]
fn non_finite_scale_survives_a_save_as_the_default() {
    let storage = MemoryStorage::new();
    let settings = ClockSettings {
        show_digital: true,
        digital_scale: f64::NAN,
        theme: Theme::Dark,
        ..ClockSettings::default()
    };

    save_settings(&storage, &settings);

    let expected = ClockSettings {
        show_digital: true,
        theme: Theme::Dark,
        ..ClockSettings::default()
    };
    assert_eq!(load_settings(&storage), expected);
}

#[test]
fn load_ignores_unknown_fields() {
    let storage = storage_with(r#"{ "showDate": true, "alarm": "07:00" }"#);

    let settings = load_settings(&storage);
    assert!(settings.show_date);
    assert!(settings.show_analog);
}

#[test]
fn load_clamps_out_of_range_scales() {
    let storage = storage_with(r#"{ "analogScale": 12, "dateScale": 0.01 }"#);

    let settings = load_settings(&storage);
    assert_eq!(settings.analog_scale, 3.0);
    assert_eq!(settings.date_scale, 0.5);
    assert_eq!(settings.digital_scale, 1.0);
}

#[test]
fn load_from_unreadable_storage_returns_defaults() {
    assert_eq!(load_settings(&DisabledStorage), ClockSettings::default());
}

#[test]
fn save_then_load_round_trips() {
    let storage = MemoryStorage::new();
    let settings = ClockSettings {
        show_analog: false,
        show_digital: true,
        show_date: true,
        analog_scale: 2.5,
        digital_scale: 0.75,
        date_scale: 1.25,
        theme: Theme::Light,
    };

    save_settings(&storage, &settings);

    assert_eq!(load_settings(&storage), settings);
}

#[test]
fn save_writes_the_full_record() {
    let storage = MemoryStorage::new();
    save_settings(&storage, &ClockSettings::default());

    let stored = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 7);
    for key in [
        "showAnalog",
        "showDigital",
        "showDate",
        "analogScale",
        "digitalScale",
        "dateScale",
        "theme",
    ] {
        assert!(object.contains_key(key), "missing {key}");
    }
}

#[test]
fn save_to_failing_storage_is_silent() {
    save_settings(&DisabledStorage, &ClockSettings::default());
}

#[test]
fn reset_returns_canonical_defaults() {
    let defaults = reset_to_defaults();

    assert!(defaults.show_analog);
    assert!(!defaults.show_digital);
    assert!(!defaults.show_date);
    assert_eq!(defaults.theme, Theme::Auto);
}

#[test]
fn toggling_digital_survives_reload() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let store = SettingsStore::open(storage.clone());

    assert_eq!(store.current(), ClockSettings::default());

    store.update(|s| s.with_toggled(DisplayKind::Digital));

    let reloaded = SettingsStore::open(storage).current();
    let expected = ClockSettings {
        show_digital: true,
        ..ClockSettings::default()
    };
    assert_eq!(reloaded, expected);
}

#[test]
fn store_keeps_changes_in_memory_when_storage_fails() {
    let store = SettingsStore::open(Arc::new(DisabledStorage));

    let updated = store.update(|s| s.with_theme(Theme::Dark));

    assert_eq!(updated.theme, Theme::Dark);
    assert_eq!(store.current().theme, Theme::Dark);
}

#[test]
fn store_reset_persists_defaults() {
    let storage: Arc<dyn KeyValueStorage> =
        Arc::new(storage_with(r#"{ "showAnalog": false, "theme": "light" }"#));
    let store = SettingsStore::open(storage.clone());
    assert!(!store.current().show_analog);

    store.reset();

    assert_eq!(store.current(), ClockSettings::default());
    assert_eq!(load_settings(storage.as_ref()), ClockSettings::default());
}

#[test]
fn store_reload_picks_up_external_writes() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let store = SettingsStore::open(storage.clone());

    storage
        .set_item(STORAGE_KEY, r#"{ "showDate": true }"#)
        .unwrap();

    assert!(!store.current().show_date);
    assert!(store.reload().show_date);
}

#[tokio::test]
async fn store_watch_yields_current_then_changes() {
    let store = SettingsStore::open(Arc::new(MemoryStorage::new()));
    let mut stream = Box::pin(store.watch());

    assert_eq!(stream.next().await, Some(ClockSettings::default()));

    store.update(|s| s.with_scale(DisplayKind::Analog, 2.0));

    let next = stream.next().await.unwrap();
    assert_eq!(next.analog_scale, 2.0);
}
