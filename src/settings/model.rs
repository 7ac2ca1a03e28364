use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest scale factor the settings surface accepts.
pub const MIN_SCALE: f64 = 0.5;

/// Largest scale factor the settings surface accepts.
pub const MAX_SCALE: f64 = 3.0;

/// Color theme applied to every display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the host's light/dark preference.
    #[default]
    Auto,

    /// Always light.
    Light,

    /// Always dark.
    Dark,
}

impl Theme {
    /// Value the presentation layer applies as its global theme attribute.
    pub fn as_attribute(&self) -> &'static str {
        match self {
            Theme::Auto => "auto",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attribute())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Theme::Auto),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}', expected auto, light or dark")),
        }
    }
}

/// One of the three displays the widget can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    /// The SVG clock face.
    Analog,
    /// The `HH:MM:SS` readout.
    Digital,
    /// The long-form date readout.
    Date,
}

impl DisplayKind {
    /// All displays in the order they are stacked on screen.
    pub const ALL: [DisplayKind; 3] = [DisplayKind::Analog, DisplayKind::Digital, DisplayKind::Date];

    /// Label shown next to the display's toggle.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayKind::Analog => "Analog",
            DisplayKind::Digital => "Digital",
            DisplayKind::Date => "Date",
        }
    }
}

impl FromStr for DisplayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "analog" => Ok(DisplayKind::Analog),
            "digital" => Ok(DisplayKind::Digital),
            "date" => Ok(DisplayKind::Date),
            other => Err(format!(
                "unknown display '{other}', expected analog, digital or date"
            )),
        }
    }
}

/// Names a single field of [`ClockSettings`] by its persisted key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    /// `showAnalog`
    ShowAnalog,
    /// `showDigital`
    ShowDigital,
    /// `showDate`
    ShowDate,
    /// `analogScale`
    AnalogScale,
    /// `digitalScale`
    DigitalScale,
    /// `dateScale`
    DateScale,
    /// `theme`
    Theme,
}

impl SettingsField {
    /// Every field, in declaration order.
    pub const ALL: [SettingsField; 7] = [
        SettingsField::ShowAnalog,
        SettingsField::ShowDigital,
        SettingsField::ShowDate,
        SettingsField::AnalogScale,
        SettingsField::DigitalScale,
        SettingsField::DateScale,
        SettingsField::Theme,
    ];

    /// The JSON key this field is persisted under.
    pub fn key(&self) -> &'static str {
        match self {
            SettingsField::ShowAnalog => "showAnalog",
            SettingsField::ShowDigital => "showDigital",
            SettingsField::ShowDate => "showDate",
            SettingsField::AnalogScale => "analogScale",
            SettingsField::DigitalScale => "digitalScale",
            SettingsField::DateScale => "dateScale",
            SettingsField::Theme => "theme",
        }
    }
}

impl FromStr for SettingsField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingsField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = SettingsField::ALL.iter().map(|f| f.key()).collect();
                format!("unknown field '{s}', expected one of: {}", known.join(", "))
            })
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// User preferences for which displays are visible and how they look.
///
/// Fields missing from a persisted record are filled from [`Default`] and
/// unknown fields are ignored, so records written by older or newer versions
/// still load.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockSettings {
    /// Whether the analog clock face is shown.
    pub show_analog: bool,

    /// Whether the digital `HH:MM:SS` readout is shown.
    pub show_digital: bool,

    /// Whether the date readout is shown.
    pub show_date: bool,

    /// Size multiplier for the analog face (0.5 to 3.0).
    pub analog_scale: f64,

    /// Size multiplier for the digital readout (0.5 to 3.0).
    pub digital_scale: f64,

    /// Size multiplier for the date readout (0.5 to 3.0).
    pub date_scale: f64,

    /// Color theme.
    pub theme: Theme,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            show_analog: true,
            show_digital: false,
            show_date: false,
            analog_scale: 1.0,
            digital_scale: 1.0,
            date_scale: 1.0,
            theme: Theme::Auto,
        }
    }
}

impl ClockSettings {
    /// Whether `display` is currently visible.
    pub fn is_visible(&self, display: DisplayKind) -> bool {
        match display {
            DisplayKind::Analog => self.show_analog,
            DisplayKind::Digital => self.show_digital,
            DisplayKind::Date => self.show_date,
        }
    }

    /// Size multiplier of `display`.
    pub fn scale(&self, display: DisplayKind) -> f64 {
        match display {
            DisplayKind::Analog => self.analog_scale,
            DisplayKind::Digital => self.digital_scale,
            DisplayKind::Date => self.date_scale,
        }
    }

    /// Copy of these settings with the visibility of `display` set to `visible`.
    pub fn with_visibility(&self, display: DisplayKind, visible: bool) -> Self {
        let mut next = self.clone();
        match display {
            DisplayKind::Analog => next.show_analog = visible,
            DisplayKind::Digital => next.show_digital = visible,
            DisplayKind::Date => next.show_date = visible,
        }
        next
    }

    /// Copy of these settings with the visibility of `display` flipped.
    pub fn with_toggled(&self, display: DisplayKind) -> Self {
        self.with_visibility(display, !self.is_visible(display))
    }

    /// Copy of these settings with the scale of `display` set to `scale`,
    /// clamped into the accepted range.
    pub fn with_scale(&self, display: DisplayKind, scale: f64) -> Self {
        let scale = clamp_scale(scale);
        let mut next = self.clone();
        match display {
            DisplayKind::Analog => next.analog_scale = scale,
            DisplayKind::Digital => next.digital_scale = scale,
            DisplayKind::Date => next.date_scale = scale,
        }
        next
    }

    /// Copy of these settings with a different theme.
    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    /// Copy of these settings with `field` parsed from `raw`.
    ///
    /// Booleans accept `true`/`false`/`on`/`off`, scales accept any number and
    /// are clamped, themes accept `auto`/`light`/`dark`.
    ///
    /// # Errors
    /// Returns a description of the problem if `raw` is not valid for `field`.
    pub fn with_field(&self, field: SettingsField, raw: &str) -> Result<Self, String> {
        match field {
            SettingsField::ShowAnalog => Ok(self.with_visibility(DisplayKind::Analog, parse_flag(raw)?)),
            SettingsField::ShowDigital => {
                Ok(self.with_visibility(DisplayKind::Digital, parse_flag(raw)?))
            }
            SettingsField::ShowDate => Ok(self.with_visibility(DisplayKind::Date, parse_flag(raw)?)),
            SettingsField::AnalogScale => Ok(self.with_scale(DisplayKind::Analog, parse_scale(raw)?)),
            SettingsField::DigitalScale => {
                Ok(self.with_scale(DisplayKind::Digital, parse_scale(raw)?))
            }
            SettingsField::DateScale => Ok(self.with_scale(DisplayKind::Date, parse_scale(raw)?)),
            SettingsField::Theme => Ok(self.with_theme(raw.parse()?)),
        }
    }

    /// Copy of these settings with `field` taken from a stored JSON value.
    ///
    /// Scales are taken as stored; [`ClockSettings::sanitized`] clamps them.
    ///
    /// # Errors
    /// Returns the deserialization error if `value` has the wrong type for `field`.
    pub fn with_stored_value(
        &self,
        field: SettingsField,
        value: &serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        let mut next = self.clone();
        match field {
            SettingsField::ShowAnalog => next.show_analog = bool::deserialize(value)?,
            SettingsField::ShowDigital => next.show_digital = bool::deserialize(value)?,
            SettingsField::ShowDate => next.show_date = bool::deserialize(value)?,
            SettingsField::AnalogScale => next.analog_scale = f64::deserialize(value)?,
            SettingsField::DigitalScale => next.digital_scale = f64::deserialize(value)?,
            SettingsField::DateScale => next.date_scale = f64::deserialize(value)?,
            SettingsField::Theme => next.theme = Theme::deserialize(value)?,
        }
        Ok(next)
    }

    /// Human-readable value of `field`.
    pub fn field_value(&self, field: SettingsField) -> String {
        match field {
            SettingsField::ShowAnalog => self.show_analog.to_string(),
            SettingsField::ShowDigital => self.show_digital.to_string(),
            SettingsField::ShowDate => self.show_date.to_string(),
            SettingsField::AnalogScale => self.analog_scale.to_string(),
            SettingsField::DigitalScale => self.digital_scale.to_string(),
            SettingsField::DateScale => self.date_scale.to_string(),
            SettingsField::Theme => self.theme.to_string(),
        }
    }

    /// Copy of these settings with every scale forced into the accepted range.
    pub fn sanitized(&self) -> Self {
        Self {
            analog_scale: clamp_scale(self.analog_scale),
            digital_scale: clamp_scale(self.digital_scale),
            date_scale: clamp_scale(self.date_scale),
            ..self.clone()
        }
    }
}

/// Forces a scale factor into `[MIN_SCALE, MAX_SCALE]`; NaN and infinities
/// fall back to 1.0.
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    } else {
        1.0
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(format!("expected true or false, got '{other}'")),
    }
}

fn parse_scale(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("expected a number, got '{raw}'"))
}
