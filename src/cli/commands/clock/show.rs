use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_description, format_subheader},
        types::CommandMetadata,
    },
    face::{date_font_size, digital_font_size},
    services::{TimeData, TimeSource},
    settings::{DisplayKind, SettingsStore},
};

use super::visible_readouts;

/// Command printing every visible display for the current instant.
pub struct ShowCommand {
    settings: Arc<SettingsStore>,
    time_source: Arc<dyn TimeSource>,
}

impl ShowCommand {
    /// Creates a new ShowCommand.
    pub fn new(settings: Arc<SettingsStore>, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            settings,
            time_source,
        }
    }
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let settings = self.settings.current();
        let time = TimeData::from(self.time_source.now());

        let readouts = visible_readouts(&settings, &time);
        if readouts.is_empty() {
            return Ok(format!(
                "All displays are hidden\n{}",
                format_description("Enable one with: mechclock settings toggle analog")
            ));
        }

        let mut lines = Vec::with_capacity(readouts.len() + 1);
        for (display, text) in readouts {
            let size = match display {
                DisplayKind::Analog => format!("{}x", settings.analog_scale),
                DisplayKind::Digital => digital_font_size(settings.digital_scale),
                DisplayKind::Date => date_font_size(settings.date_scale),
            };
            lines.push(format!(
                "{} {}  {}",
                format_subheader(&format!("{:<8}", display.label())),
                text,
                format_description(&size)
            ));
        }
        lines.push(format!(
            "{} {}",
            format_subheader(&format!("{:<8}", "Theme")),
            settings.theme
        ));

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Print the visible displays for the current time".to_string(),
            category: "clock".to_string(),
            args: vec![],
            examples: vec!["mechclock clock show".to_string()],
        }
    }
}
