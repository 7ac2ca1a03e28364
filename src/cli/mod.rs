//! Command-line interface for the clock and its settings.
//!
//! Commands are organized by category (`settings`, `clock`) in a
//! registry that also generates the help text from their metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
