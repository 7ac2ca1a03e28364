//! Clock display commands.
mod show;
mod svg;
mod watch;

use std::sync::Arc;

pub use show::ShowCommand;
pub use svg::SvgCommand;
pub use watch::WatchCommand;

use crate::{
    cli::{CommandRegistry, formatting::format_angles},
    face::{HandAngles, date_readout, digital_readout},
    services::{TimeData, TimeSource},
    settings::{ClockSettings, DisplayKind, SettingsStore},
};

/// Registers all clock display commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `settings` - Shared settings store deciding which displays are visible
/// * `time_source` - Clock the displays read from
pub fn register_commands(
    registry: &mut CommandRegistry,
    settings: Arc<SettingsStore>,
    time_source: Arc<dyn TimeSource>,
) {
    const CATEGORY_NAME: &str = "clock";

    registry.register_command(
        CATEGORY_NAME,
        Box::new(ShowCommand::new(settings.clone(), time_source.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(SvgCommand::new(settings.clone(), time_source.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(WatchCommand::new(settings, time_source)),
    );
}

/// One readout per visible display, in on-screen order.
fn visible_readouts(settings: &ClockSettings, time: &TimeData) -> Vec<(DisplayKind, String)> {
    DisplayKind::ALL
        .into_iter()
        .filter(|&display| settings.is_visible(display))
        .map(|display| {
            let text = match display {
                DisplayKind::Analog => format_angles(&HandAngles::from_time(time)),
                DisplayKind::Digital => digital_readout(time),
                DisplayKind::Date => date_readout(time),
            };
            (display, text)
        })
        .collect()
}
