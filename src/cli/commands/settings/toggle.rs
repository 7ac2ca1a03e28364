use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    settings::{DisplayKind, SettingsStore},
};

/// Command for showing or hiding one of the displays.
pub struct ToggleCommand {
    settings: Arc<SettingsStore>,
}

impl ToggleCommand {
    /// Creates a new ToggleCommand with the provided settings store.
    pub fn new(settings: Arc<SettingsStore>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Command for ToggleCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let name = args.first().ok_or_else(|| {
            CliError::InvalidArguments(
                "Expected <display> argument for 'toggle' command".to_string(),
            )
        })?;
        let display: DisplayKind = name.parse().map_err(CliError::InvalidArguments)?;

        let applied = self.settings.update(|s| s.with_toggled(display));
        let state = if applied.is_visible(display) {
            "shown"
        } else {
            "hidden"
        };

        Ok(format!("{} display {state}", display.label()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "toggle".to_string(),
            description: "Show or hide a display".to_string(),
            category: "settings".to_string(),
            args: vec![CommandArg {
                name: "display".to_string(),
                description: "Display to toggle".to_string(),
                required: true,
                value_type: ArgType::Display,
            }],
            examples: vec!["mechclock settings toggle digital".to_string()],
        }
    }
}
