use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

/// Read-only access to the current local date-time.
pub trait TimeSource: Send + Sync + 'static {
    /// The current local date-time.
    fn now(&self) -> NaiveDateTime;
}

/// The host's wall clock in its configured local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
