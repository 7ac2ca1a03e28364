use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::{format_field, format_settings},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    settings::{SettingsField, SettingsStore},
};

/// Command for printing the current settings.
///
/// # Example Usage
///
/// ```bash
/// mechclock settings get
/// mechclock settings get showDigital
/// ```
pub struct GetCommand {
    settings: Arc<SettingsStore>,
}

impl GetCommand {
    /// Creates a new GetCommand with the provided settings store.
    pub fn new(settings: Arc<SettingsStore>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Command for GetCommand {
    /// Prints one field, or every field when no field name is given.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If the field name is unknown
    async fn execute(&self, args: &[String]) -> CommandResult {
        let current = self.settings.current();

        let Some(name) = args.first() else {
            return Ok(format_settings(&current));
        };

        let field: SettingsField = name.parse().map_err(CliError::InvalidArguments)?;
        Ok(format_field(&current, field))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Show current settings".to_string(),
            category: "settings".to_string(),
            args: vec![CommandArg {
                name: "field".to_string(),
                description: "Settings field to show (e.g., showDigital); all fields if omitted"
                    .to_string(),
                required: false,
                value_type: ArgType::Field,
            }],
            examples: vec![
                "mechclock settings get".to_string(),
                "mechclock settings get theme".to_string(),
            ],
        }
    }
}
