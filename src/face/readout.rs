use crate::services::TimeData;

/// Zero-padded `HH:MM:SS` in 24-hour time.
pub fn digital_readout(time: &TimeData) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hours, time.minutes, time.seconds
    )
}

/// Long-form date, e.g. `Saturday, March 9, 2024`.
pub fn date_readout(time: &TimeData) -> String {
    time.date.format("%A, %B %-d, %Y").to_string()
}

/// Responsive CSS font size for the digital readout at `scale`.
pub fn digital_font_size(scale: f64) -> String {
    font_size(scale, 2.0, 8.0, 4.0)
}

/// Responsive CSS font size for the date readout at `scale`.
pub fn date_font_size(scale: f64) -> String {
    font_size(scale, 0.85, 2.5, 1.1)
}

fn font_size(scale: f64, min_rem: f64, preferred_vw: f64, max_rem: f64) -> String {
    format!(
        "clamp({}rem, {}vw, {}rem)",
        round3(min_rem * scale),
        round3(preferred_vw * scale),
        round3(max_rem * scale)
    )
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
