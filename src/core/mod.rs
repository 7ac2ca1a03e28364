use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Error types for the mechclock application.
///
/// Covers the fallible edges of the crate: locating directories, writing
/// rendered output and initializing logging. Settings persistence never
/// surfaces here; it degrades to defaults instead.
#[derive(Error, Debug)]
pub enum ClockError {
    /// Neither XDG nor HOME environment variables could be resolved
    #[error("failed to resolve {directory} directory: {details}")]
    Paths {
        /// Which directory was being resolved (config, data, logs)
        directory: String,
        /// Resolution error details
        details: String,
    },

    /// I/O operation error with path context
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Failed to produce output for a display surface
    #[error("failed to render {surface}: {details}")]
    Render {
        /// The surface being rendered (svg, digital, date)
        surface: String,
        /// Render error details
        details: String,
    },

    /// Logging could not be initialized
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// A specialized `Result` type for mechclock operations.
pub type Result<T> = result::Result<T, ClockError>;

impl ClockError {
    /// Creates an I/O error carrying the path it occurred on.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying I/O error
    /// * `path` - Path of the file or directory being accessed
    pub fn io_at(error: &io::Error, path: impl Into<PathBuf>) -> Self {
        ClockError::IoError {
            path: path.into(),
            details: error.to_string(),
        }
    }
}
