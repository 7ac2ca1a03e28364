use std::sync::Arc;

use crate::{services::TimeSource, settings::SettingsStore};

use super::{CliError, CommandRegistry};

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and execution.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `settings` - Settings store shared by every command
    /// * `time_source` - Clock the display commands read from
    pub fn new(settings: SettingsStore, time_source: Arc<dyn TimeSource>) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(settings), time_source);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help` (or no category at all) returns the help text.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Returns other `CliError` variants if the command fails during execution.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if matches!(category, "help" | "--help" | "-h" | "") {
            return Ok(self.registry.help_text());
        }

        self.registry.execute(category, command_name, args).await
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }
}
