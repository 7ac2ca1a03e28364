use std::sync::Arc;

use futures::Stream;
use tracing::info;

use crate::services::common::Property;

use super::{ClockSettings, KeyValueStorage, load_settings, reset_to_defaults, save_settings};

/// Single owner of the live settings record.
///
/// Holds the storage backend and the current [`ClockSettings`]. Every change
/// replaces the whole record, persists it and notifies watchers. Persistence
/// failures leave the new record in memory for the rest of the session.
#[derive(Clone)]
pub struct SettingsStore {
    storage: Arc<dyn KeyValueStorage>,
    current: Property<ClockSettings>,
}

impl SettingsStore {
    /// Opens the store, loading whatever `storage` holds merged over the defaults.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        let settings = load_settings(storage.as_ref());
        Self {
            storage,
            current: Property::new(settings),
        }
    }

    /// Returns a copy of the current settings.
    pub fn current(&self) -> ClockSettings {
        self.current.get()
    }

    /// Replaces the current settings and persists them.
    ///
    /// Returns the record now in effect.
    pub fn replace(&self, settings: ClockSettings) -> ClockSettings {
        save_settings(self.storage.as_ref(), &settings);
        self.current.set(settings.clone());
        settings
    }

    /// Applies `change` to a copy of the current settings and stores the result.
    pub fn update<F>(&self, change: F) -> ClockSettings
    where
        F: FnOnce(&ClockSettings) -> ClockSettings,
    {
        let next = change(&self.current());
        self.replace(next)
    }

    /// Restores and persists the default settings.
    pub fn reset(&self) -> ClockSettings {
        info!("Resetting settings to defaults");
        self.replace(reset_to_defaults())
    }

    /// Re-reads the storage, e.g. after another process changed it.
    pub fn reload(&self) -> ClockSettings {
        let settings = load_settings(self.storage.as_ref());
        self.current.set(settings.clone());
        settings
    }

    /// Stream of settings: the current record first, then every change.
    pub fn watch(&self) -> impl Stream<Item = ClockSettings> + Send {
        self.current.watch()
    }
}
