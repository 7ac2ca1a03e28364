use async_trait::async_trait;
use schemars::schema_for;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    settings::ClockSettings,
};

/// Command for printing the JSON schema of the persisted settings record.
pub struct SchemaCommand;

#[async_trait]
impl Command for SchemaCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schema_for!(ClockSettings);

        serde_json::to_string_pretty(&schema)
            .map_err(|e| CliError::SettingsError(format!("failed to serialize schema: {e}")))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema of the stored settings".to_string(),
            category: "settings".to_string(),
            args: vec![],
            examples: vec!["mechclock settings schema".to_string()],
        }
    }
}
