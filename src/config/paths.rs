use std::{env, fs, path::PathBuf};

use crate::{ClockError, Result};

/// File name of the key-value storage inside the config directory.
const STORAGE_FILE_NAME: &str = "local-storage.json";

/// Utility struct for locating mechclock's directories and files
///
/// Follows the XDG Base Directory specification
pub struct AppPaths;

impl AppPaths {
    /// Returns the configuration directory path for the application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "mechclock" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| ClockError::Paths {
                directory: "config".to_string(),
                details: "Neither XDG_CONFIG_HOME nor HOME environment variable found".to_string(),
            })?;

        Ok(PathBuf::from(config_home).join("mechclock"))
    }

    /// Returns the path of the file backing the settings key-value storage
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be resolved
    pub fn storage_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(STORAGE_FILE_NAME))
    }

    /// Returns the application data directory path
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if HOME environment variable is not set or directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf> {
        let data_home = env::var("XDG_DATA_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.local/share")))
            .map_err(|_| ClockError::Paths {
                directory: "data".to_string(),
                details: "Neither XDG_DATA_HOME nor HOME environment variable found".to_string(),
            })?;

        let app_dir = PathBuf::from(data_home).join("mechclock");

        if !app_dir.exists() {
            fs::create_dir_all(&app_dir).map_err(|e| ClockError::io_at(&e, &app_dir))?;
        }

        Ok(app_dir)
    }

    /// Get the application log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if directory cannot be created
    pub fn log_dir() -> Result<PathBuf> {
        let log_dir = Self::app_data_dir()?.join("logs");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir).map_err(|e| ClockError::io_at(&e, &log_dir))?;
        }

        Ok(log_dir)
    }
}
