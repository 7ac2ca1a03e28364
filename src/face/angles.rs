use crate::services::TimeData;

/// Degrees the second hand turns per second, and the minute hand per minute.
const DEGREES_PER_TICK: f64 = 6.0;

/// Degrees the hour hand turns per hour.
const DEGREES_PER_HOUR: f64 = 30.0;

/// Rotation of each hand, in degrees clockwise from twelve o'clock.
///
/// Values are not wrapped modulo 360; rotation transforms accept any angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    /// Hour hand rotation.
    pub hour: f64,
    /// Minute hand rotation.
    pub minute: f64,
    /// Second hand rotation.
    pub second: f64,
}

impl HandAngles {
    /// Hand rotations for the given sample.
    pub fn from_time(time: &TimeData) -> Self {
        Self {
            hour: hour_angle(time.hours, time.minutes),
            minute: minute_angle(time.minutes, time.seconds),
            second: second_angle(time.seconds),
        }
    }
}

/// 6° per second.
pub fn second_angle(seconds: u32) -> f64 {
    f64::from(seconds) * DEGREES_PER_TICK
}

/// 6° per minute, plus 0.1° per second so the hand creeps between minutes.
pub fn minute_angle(minutes: u32, seconds: u32) -> f64 {
    f64::from(minutes) * DEGREES_PER_TICK + f64::from(seconds) / 10.0
}

/// 30° per hour on a 12-hour dial, plus 0.5° per minute.
pub fn hour_angle(hours: u32, minutes: u32) -> f64 {
    f64::from(hours % 12) * DEGREES_PER_HOUR + f64::from(minutes) / 2.0
}
