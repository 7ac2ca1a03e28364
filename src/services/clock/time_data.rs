use chrono::{NaiveDateTime, Timelike};

/// One sample of the host's local wall clock.
///
/// Replaced wholesale on every tick; the hand angles and readouts are all
/// derived from a single snapshot so they never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeData {
    /// Hour of the day, 0-23.
    pub hours: u32,
    /// Minute of the hour, 0-59.
    pub minutes: u32,
    /// Second of the minute, 0-59.
    pub seconds: u32,
    /// The full local date-time the fields were taken from.
    pub date: NaiveDateTime,
}

impl TimeData {
    /// Builds a snapshot from a local date-time.
    pub fn from_datetime(date: NaiveDateTime) -> Self {
        Self {
            hours: date.hour(),
            minutes: date.minute(),
            seconds: date.second(),
            date,
        }
    }
}

impl From<NaiveDateTime> for TimeData {
    fn from(date: NaiveDateTime) -> Self {
        Self::from_datetime(date)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn splits_datetime_into_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(23, 5, 41)
            .unwrap();

        let time = TimeData::from(date);

        assert_eq!(time.hours, 23);
        assert_eq!(time.minutes, 5);
        assert_eq!(time.seconds, 41);
        assert_eq!(time.date, date);
    }
}
