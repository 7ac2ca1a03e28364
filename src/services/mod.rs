/// Wall-clock sampling service
pub mod clock;
/// Reactive properties shared by services
pub mod common;

pub use clock::{ClockService, SystemClock, TimeData, TimeSource};
