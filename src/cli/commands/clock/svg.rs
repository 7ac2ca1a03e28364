use std::{fs, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tracing::info;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    face::render_face,
    services::{TimeData, TimeSource},
    settings::SettingsStore,
};

/// Command rendering the analog face for the current instant as SVG.
pub struct SvgCommand {
    settings: Arc<SettingsStore>,
    time_source: Arc<dyn TimeSource>,
}

impl SvgCommand {
    /// Creates a new SvgCommand.
    pub fn new(settings: Arc<SettingsStore>, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            settings,
            time_source,
        }
    }
}

#[async_trait]
impl Command for SvgCommand {
    /// Writes the SVG to the given file, or returns it when no file is given.
    ///
    /// # Errors
    ///
    /// * `CliError::ServiceError` - If the face cannot be rendered
    /// * `CliError::IoError` - If the file cannot be written
    async fn execute(&self, args: &[String]) -> CommandResult {
        let settings = self.settings.current();
        let time = TimeData::from(self.time_source.now());

        let svg = render_face(&time, settings.analog_scale, settings.theme)
            .map_err(|e| CliError::ServiceError(e.to_string()))?;

        let Some(path) = args.first().map(PathBuf::from) else {
            return Ok(svg);
        };

        fs::write(&path, svg)?;
        info!(path = %path.display(), "Wrote clock face");

        Ok(format!("Wrote clock face to '{}'", path.display()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "svg".to_string(),
            description: "Render the analog face as SVG".to_string(),
            category: "clock".to_string(),
            args: vec![CommandArg {
                name: "file".to_string(),
                description: "File to write; prints to stdout if omitted".to_string(),
                required: false,
                value_type: ArgType::Path,
            }],
            examples: vec!["mechclock clock svg face.svg".to_string()],
        }
    }
}
