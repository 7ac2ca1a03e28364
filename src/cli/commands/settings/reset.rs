use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::format_settings,
        types::CommandMetadata,
    },
    settings::SettingsStore,
};

/// Command for restoring the default settings.
pub struct ResetCommand {
    settings: Arc<SettingsStore>,
}

impl ResetCommand {
    /// Creates a new ResetCommand with the provided settings store.
    pub fn new(settings: Arc<SettingsStore>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Command for ResetCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let defaults = self.settings.reset();
        Ok(format!("Settings reset to defaults\n{}", format_settings(&defaults)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "reset".to_string(),
            description: "Restore default settings".to_string(),
            category: "settings".to_string(),
            args: vec![],
            examples: vec!["mechclock settings reset".to_string()],
        }
    }
}
