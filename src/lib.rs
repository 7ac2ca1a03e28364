//! mechclock - an analog, digital and date clock with persisted display settings.
//!
//! - Hand angles and the SVG clock face derived from a time sample
//! - A once-per-second wall-clock sampler with structured teardown
//! - Settings stored as JSON in a key-value storage, merged over defaults
//! - CLI interface for viewing the clock and editing settings
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mechclock::{
//!     face::HandAngles,
//!     services::{SystemClock, TimeData, TimeSource},
//!     settings::{DisplayKind, MemoryStorage, SettingsStore},
//! };
//!
//! let store = SettingsStore::open(Arc::new(MemoryStorage::new()));
//! store.update(|s| s.with_toggled(DisplayKind::Digital));
//!
//! let time = TimeData::from(SystemClock.now());
//! let angles = HandAngles::from_time(&time);
//! println!("hour hand at {}°", angles.hour);
//! ```

/// Application paths and log level.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Persisted display settings.
pub mod settings;

/// Hand angles, dial layout, SVG face and text readouts.
pub mod face;

/// Command-line interface for the clock and its settings.
pub mod cli;

/// Reactive services, including the clock sampler.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{ClockError, Result};
