//! Unit tests for CLI module
//!
//! Commands run against in-memory storage and a fixed clock.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use crate::{
    cli::{CliError, CliService},
    services::TimeSource,
    settings::{
        ClockSettings, KeyValueStorage, MemoryStorage, STORAGE_KEY, SettingsStore, Theme,
        load_settings,
    },
};

struct FixedClock(NaiveDateTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn half_past_two() -> Arc<dyn TimeSource> {
    Arc::new(FixedClock(
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 30, 30)
            .unwrap(),
    ))
}

fn service_with(storage: Arc<dyn KeyValueStorage>) -> CliService {
    CliService::new(SettingsStore::open(storage), half_past_two())
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn lists_both_categories() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let listed = service.list_all();

    assert_eq!(
        listed,
        vec![
            (
                "clock".to_string(),
                args(&["show", "svg", "watch"])
            ),
            (
                "settings".to_string(),
                args(&["get", "reset", "schema", "set", "toggle"])
            ),
        ]
    );
}

#[tokio::test]
async fn help_mentions_every_command() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let help = service.execute_command("help", "", &[]).await.unwrap();

    for name in ["show", "svg", "watch", "get", "set", "toggle", "reset", "schema"] {
        assert!(help.contains(name), "help is missing {name}");
    }
}

#[tokio::test]
async fn unknown_category_and_command_are_reported() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let result = service.execute_command("alarm", "set", &[]).await;
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));

    let result = service.execute_command("settings", "delete", &[]).await;
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[tokio::test]
async fn argument_count_is_validated() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let result = service.execute_command("settings", "set", &args(&["theme"])).await;
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));

    let result = service
        .execute_command("settings", "reset", &args(&["now"]))
        .await;
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn settings_get_prints_defaults() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let output = service.execute_command("settings", "get", &[]).await.unwrap();
    assert!(output.contains("showAnalog: true"));
    assert!(output.contains("showDigital: false"));
    assert!(output.contains("theme: auto"));

    let output = service
        .execute_command("settings", "get", &args(&["analogScale"]))
        .await
        .unwrap();
    assert_eq!(output, "analogScale: 1");
}

#[tokio::test]
async fn settings_set_persists_one_field() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let service = service_with(storage.clone());

    let output = service
        .execute_command("settings", "set", &args(&["theme", "dark"]))
        .await
        .unwrap();
    assert_eq!(output, "theme: dark");

    let expected = ClockSettings {
        theme: Theme::Dark,
        ..ClockSettings::default()
    };
    assert_eq!(load_settings(storage.as_ref()), expected);
}

#[tokio::test]
async fn settings_set_clamps_scales() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let output = service
        .execute_command("settings", "set", &args(&["dateScale", "9"]))
        .await
        .unwrap();

    assert_eq!(output, "dateScale: 3");
}

#[tokio::test]
async fn settings_set_rejects_bad_values() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let result = service
        .execute_command("settings", "set", &args(&["showDate", "sometimes"]))
        .await;
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));

    let result = service
        .execute_command("settings", "set", &args(&["alarm", "07:00"]))
        .await;
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn toggling_digital_then_reloading_keeps_other_defaults() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let service = service_with(storage.clone());

    let output = service
        .execute_command("settings", "toggle", &args(&["digital"]))
        .await
        .unwrap();
    assert_eq!(output, "Digital display shown");

    let reloaded = SettingsStore::open(storage).current();
    assert_eq!(
        reloaded,
        ClockSettings {
            show_digital: true,
            ..ClockSettings::default()
        }
    );
}

#[tokio::test]
async fn settings_reset_restores_defaults() {
    let storage = MemoryStorage::new();
    storage
        .set_item(STORAGE_KEY, r#"{ "showAnalog": false, "showDate": true }"#)
        .unwrap();
    let storage: Arc<dyn KeyValueStorage> = Arc::new(storage);
    let service = service_with(storage.clone());

    service.execute_command("settings", "reset", &[]).await.unwrap();

    assert_eq!(load_settings(storage.as_ref()), ClockSettings::default());
}

#[tokio::test]
async fn settings_schema_describes_persisted_keys() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let schema = service
        .execute_command("settings", "schema", &[])
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&schema).unwrap();
    let properties = json["properties"].as_object().unwrap();
    assert!(properties.contains_key("showAnalog"));
    assert!(properties.contains_key("dateScale"));
    assert!(properties.contains_key("theme"));
}

#[tokio::test]
async fn clock_show_prints_visible_displays() {
    let storage = MemoryStorage::new();
    storage
        .set_item(STORAGE_KEY, r#"{ "showDigital": true, "showDate": true }"#)
        .unwrap();
    let service = service_with(Arc::new(storage));

    let output = service.execute_command("clock", "show", &[]).await.unwrap();

    assert!(output.contains("hour 75° minute 183° second 180°"));
    assert!(output.contains("14:30:30"));
    assert!(output.contains("Saturday, March 9, 2024"));
    assert!(output.contains("auto"));
}

#[tokio::test]
async fn clock_show_with_everything_hidden() {
    let storage = MemoryStorage::new();
    storage
        .set_item(STORAGE_KEY, r#"{ "showAnalog": false }"#)
        .unwrap();
    let service = service_with(Arc::new(storage));

    let output = service.execute_command("clock", "show", &[]).await.unwrap();

    assert!(output.starts_with("All displays are hidden"));
}

#[tokio::test]
async fn clock_svg_writes_the_face() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("face.svg");
    let service = service_with(Arc::new(MemoryStorage::new()));

    service
        .execute_command("clock", "svg", &args(&[path.to_str().unwrap()]))
        .await
        .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("rotate(75, 100, 100)"));
}

#[tokio::test]
async fn clock_svg_without_file_returns_document() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let svg = service.execute_command("clock", "svg", &[]).await.unwrap();

    assert!(svg.contains(r#"data-theme="auto""#));
}

#[tokio::test(start_paused = true)]
async fn clock_watch_stops_after_tick_limit() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let output = service
        .execute_command("clock", "watch", &args(&["1"]))
        .await
        .unwrap();

    assert_eq!(output, "Watch ended after 1 ticks");
}

#[tokio::test]
async fn clock_watch_rejects_non_numeric_limit() {
    let service = service_with(Arc::new(MemoryStorage::new()));

    let result = service
        .execute_command("clock", "watch", &args(&["forever"]))
        .await;

    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}
