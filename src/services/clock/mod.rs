//! Wall-clock sampling.
//!
//! [`ClockService`] publishes a fresh [`TimeData`] every second for as long as
//! a display surface holds it.

mod service;
mod source;
mod time_data;

#[cfg(test)]
mod tests;

pub use service::ClockService;
pub use source::{SystemClock, TimeSource};
pub use time_data::TimeData;
