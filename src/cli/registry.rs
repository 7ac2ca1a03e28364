use std::{collections::HashMap, sync::Arc};

use crate::{services::TimeSource, settings::SettingsStore};

use super::{
    CliError, Command,
    commands::{clock, settings},
    formatting::{format_category, format_command, format_description, format_header, format_usage},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// ```text
/// registry
/// ├── settings
/// │   ├── get
/// │   ├── reset
/// │   ├── schema
/// │   ├── set
/// │   └── toggle
/// └── clock
///     ├── show
///     ├── svg
///     └── watch
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    settings: Arc<SettingsStore>,
    time_source: Arc<dyn TimeSource>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands are added with `register_command` or `register_all_commands`.
    pub fn new(settings: Arc<SettingsStore>, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            categories: HashMap::new(),
            settings,
            time_source,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's name (from its metadata) is used as the key within the
    /// category. A command with the same name is replaced.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or the command
    /// doesn't exist, `CliError::InvalidArguments` if the argument count does
    /// not match the command's metadata. Other errors come from the command.
    pub async fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in category '{category}'"
            ))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args).await
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Builds the help text listing every category and command.
    pub fn help_text(&self) -> String {
        let mut lines = vec![
            format_header("mechclock"),
            format_description("Analog, digital and date clock with persisted display settings"),
            String::new(),
        ];

        for (category, commands) in self.list_commands() {
            lines.push(format_category(&category));

            for name in commands {
                let Some(metadata) = self
                    .categories
                    .get(&category)
                    .and_then(|cmds| cmds.get(&name))
                    .map(|cmd| cmd.metadata())
                else {
                    continue;
                };

                let usage: Vec<String> = metadata
                    .args
                    .iter()
                    .map(|arg| {
                        if arg.required {
                            format!("<{}>", arg.name)
                        } else {
                            format!("[{}]", arg.name)
                        }
                    })
                    .collect();

                lines.push(format!(
                    "  {} {}  {}",
                    format_command(&name),
                    usage.join(" "),
                    format_description(&metadata.description)
                ));

                for arg in &metadata.args {
                    lines.push(format!(
                        "      {} ({}): {}",
                        arg.name,
                        arg.value_type.hint(),
                        format_description(&arg.description)
                    ));
                }

                if let Some(example) = metadata.examples.first() {
                    lines.push(format!("      {}", format_usage(example)));
                }
            }

            lines.push(String::new());
        }

        lines.join("\n").trim_end().to_string()
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        settings::register_commands(self, self.settings.clone());
        clock::register_commands(self, self.settings.clone(), self.time_source.clone());
    }
}
