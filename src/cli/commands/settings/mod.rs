//! Settings management commands.
mod get;
mod reset;
mod schema;
mod set;
mod toggle;

use std::sync::Arc;

pub use get::GetCommand;
pub use reset::ResetCommand;
pub use schema::SchemaCommand;
pub use set::SetCommand;
pub use toggle::ToggleCommand;

use crate::{cli::CommandRegistry, settings::SettingsStore};

/// Registers all settings-related commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `settings` - Shared settings store for the commands
pub fn register_commands(registry: &mut CommandRegistry, settings: Arc<SettingsStore>) {
    const CATEGORY_NAME: &str = "settings";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(settings.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand::new(settings.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ToggleCommand::new(settings.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ResetCommand::new(settings)));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
}
