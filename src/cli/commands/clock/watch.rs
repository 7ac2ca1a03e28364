use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, info};

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::{ClockService, TimeSource},
    settings::SettingsStore,
};

use super::visible_readouts;

/// Command running the clock live, one line per second.
///
/// Settings are re-read from storage on every tick, so toggles made from
/// another terminal show up immediately.
pub struct WatchCommand {
    settings: Arc<SettingsStore>,
    time_source: Arc<dyn TimeSource>,
}

impl WatchCommand {
    /// Creates a new WatchCommand.
    pub fn new(settings: Arc<SettingsStore>, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            settings,
            time_source,
        }
    }
}

#[async_trait]
impl Command for WatchCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let limit = args
            .first()
            .map(|raw| {
                raw.parse::<usize>().map_err(|_| {
                    CliError::InvalidArguments(format!("Expected a tick count, got '{raw}'"))
                })
            })
            .transpose()?;

        let service = ClockService::with_source(self.time_source.clone());
        let mut samples = Box::pin(service.watch());
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        info!(?limit, "Watching clock");
        let mut ticks = 0usize;

        loop {
            tokio::select! {
                sample = samples.next() => {
                    let Some(time) = sample else {
                        break;
                    };

                    let settings = self.settings.reload();
                    let line = visible_readouts(&settings, &time)
                        .into_iter()
                        .map(|(_, text)| text)
                        .collect::<Vec<_>>()
                        .join("  |  ");
                    println!("{line}");

                    ticks += 1;
                    if limit.is_some_and(|limit| ticks >= limit) {
                        break;
                    }
                }
                _ = &mut ctrl_c => {
                    debug!("Interrupted");
                    break;
                }
            }
        }

        service.stop();
        Ok(format!("Watch ended after {ticks} ticks"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "watch".to_string(),
            description: "Run the clock live until Ctrl+C".to_string(),
            category: "clock".to_string(),
            args: vec![CommandArg {
                name: "ticks".to_string(),
                description: "Stop after this many samples".to_string(),
                required: false,
                value_type: ArgType::Number,
            }],
            examples: vec![
                "mechclock clock watch".to_string(),
                "mechclock clock watch 10".to_string(),
            ],
        }
    }
}
