//! Formatting utilities for CLI output.
//!
//! Consistent styling for help text, readouts and errors.

use crate::{
    face::HandAngles,
    settings::{ClockSettings, SettingsField},
};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats usage examples with styling
pub fn format_usage(text: &str) -> String {
    format!("{}$ {}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats one settings field as `key: value`.
///
/// # Examples
///
/// ```
/// use mechclock::cli::formatting::format_field;
/// use mechclock::settings::{ClockSettings, SettingsField};
///
/// let settings = ClockSettings::default();
/// assert_eq!(format_field(&settings, SettingsField::ShowDigital), "showDigital: false");
/// assert_eq!(format_field(&settings, SettingsField::Theme), "theme: auto");
/// ```
pub fn format_field(settings: &ClockSettings, field: SettingsField) -> String {
    format!("{}: {}", field.key(), settings.field_value(field))
}

/// Formats every settings field, one per line.
pub fn format_settings(settings: &ClockSettings) -> String {
    SettingsField::ALL
        .iter()
        .map(|&field| format_field(settings, field))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats hand angles as `hour 75° minute 183° second 180°`.
pub fn format_angles(angles: &HandAngles) -> String {
    format!(
        "hour {}° minute {}° second {}°",
        trim_angle(angles.hour),
        trim_angle(angles.minute),
        trim_angle(angles.second)
    )
}

fn trim_angle(angle: f64) -> f64 {
    (angle * 10.0).round() / 10.0
}
