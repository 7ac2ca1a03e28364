use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_field,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    settings::{SettingsField, SettingsStore},
};

/// Command for changing a single settings field.
///
/// Scales outside 0.5 to 3.0 are clamped, like the range slider they stand in for.
pub struct SetCommand {
    settings: Arc<SettingsStore>,
}

impl SetCommand {
    /// Creates a new SetCommand with the provided settings store.
    pub fn new(settings: Arc<SettingsStore>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Command for SetCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let name = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <field> argument for 'set' command".to_string())
        })?;
        let raw = args.get(1).ok_or_else(|| {
            CliError::InvalidArguments("Expected <value> argument for 'set' command".to_string())
        })?;

        let field: SettingsField = name.parse().map_err(CliError::InvalidArguments)?;
        let next = self
            .settings
            .current()
            .with_field(field, raw)
            .map_err(|e| CliError::InvalidArguments(format!("{field}: {e}")))?;

        let applied = self.settings.replace(next);
        info!(%field, value = %applied.field_value(field), "Updated setting");

        Ok(format_field(&applied, field))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Change one settings field".to_string(),
            category: "settings".to_string(),
            args: vec![
                CommandArg {
                    name: "field".to_string(),
                    description: "Settings field (showAnalog, analogScale, theme, ...)".to_string(),
                    required: true,
                    value_type: ArgType::Field,
                },
                CommandArg {
                    name: "value".to_string(),
                    description: "New value: true/false, a scale between 0.5 and 3, or auto/light/dark"
                        .to_string(),
                    required: true,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "mechclock settings set theme dark".to_string(),
                "mechclock settings set digitalScale 1.5".to_string(),
            ],
        }
    }
}
