//! Application paths and logging configuration.
//!
//! Resolves where mechclock keeps its settings storage and log files, and
//! defines the log level accepted on the command line.

mod log_level;
mod paths;

pub use log_level::LogLevel;
pub use paths::AppPaths;
