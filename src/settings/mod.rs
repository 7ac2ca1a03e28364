//! Persisted user settings.
//!
//! The settings record lives as JSON under a fixed key in a key-value
//! storage. Loading merges the stored record over the defaults, saving writes
//! the full record, and neither ever fails: storage problems are logged and
//! the clock keeps running on defaults or in-memory settings.

mod model;
mod persistence;
mod storage;
mod store;

#[cfg(test)]
mod tests;

pub use model::{
    ClockSettings, DisplayKind, MAX_SCALE, MIN_SCALE, SettingsField, Theme, clamp_scale,
};
pub use persistence::{STORAGE_KEY, load_settings, reset_to_defaults, save_settings};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::SettingsStore;
