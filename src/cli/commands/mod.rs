/// Clock display commands.
pub mod clock;
/// Settings management commands.
pub mod settings;
