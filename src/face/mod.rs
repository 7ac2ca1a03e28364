//! Everything drawn from a time sample.
//!
//! Hand angles, the fixed dial layout, the SVG face and the text readouts.
//! None of it reads the clock or the settings on its own; callers pass in a
//! [`TimeData`](crate::services::TimeData) and the relevant scale and theme.

mod angles;
pub mod dial;
mod readout;
mod svg;

pub use angles::{HandAngles, hour_angle, minute_angle, second_angle};
pub use readout::{date_font_size, date_readout, digital_font_size, digital_readout};
pub use svg::render_face;
