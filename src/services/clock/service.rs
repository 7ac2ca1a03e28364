use std::{sync::Arc, time::Duration};

use chrono::Timelike;
use futures::{Stream, stream};
use tracing::{info, trace};

use crate::services::common::PolledProperty;

use super::{TimeData, TimeSource};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Samples the wall clock once per second.
///
/// Each tick sleeps until the next whole second of the time source and then
/// re-reads it, so the samples stay aligned to the wall clock instead of
/// drifting from the moment the service started. Dropping the service (or
/// calling [`ClockService::stop`]) cancels the sampling task.
pub struct ClockService {
    time: PolledProperty<TimeData>,
}

impl ClockService {
    /// Starts sampling `source`, e.g. [`SystemClock`](super::SystemClock) for the host clock.
    ///
    /// Must be called within a tokio runtime.
    pub fn with_source<S: TimeSource>(source: S) -> Self {
        let source: Arc<dyn TimeSource> = Arc::new(source);
        let initial = TimeData::from(source.now());
        let sampler = source.clone();

        let time = PolledProperty::spawn(
            initial,
            Box::pin(second_boundaries(source)),
            move || {
                let time = TimeData::from(sampler.now());
                trace!(
                    hours = time.hours,
                    minutes = time.minutes,
                    seconds = time.seconds,
                    "Clock tick"
                );
                time
            },
        );

        info!("Clock sampler started");
        Self { time }
    }

    /// The most recent sample.
    pub fn current(&self) -> TimeData {
        self.time.get()
    }

    /// Stream of samples: the current one first, then one per tick.
    ///
    /// The stream ends once the service is dropped.
    pub fn watch(&self) -> impl Stream<Item = TimeData> + Send + use<> {
        self.time.watch()
    }

    /// Stops sampling. The last sample stays readable through [`ClockService::current`].
    pub fn stop(&self) {
        info!("Clock sampler stopped");
        self.time.stop();
    }

    /// Whether the sampling task is still alive.
    pub fn is_running(&self) -> bool {
        self.time.is_running()
    }
}

/// Yields once at every whole-second boundary of `source`.
fn second_boundaries(source: Arc<dyn TimeSource>) -> impl Stream<Item = ()> + Send {
    stream::unfold(source, |source| async move {
        tokio::time::sleep(until_next_second(&*source)).await;
        Some(((), source))
    })
}

fn until_next_second(source: &dyn TimeSource) -> Duration {
    // Leap seconds report nanoseconds past one full second.
    let into_second = source.now().nanosecond() % NANOS_PER_SECOND;
    Duration::from_nanos(u64::from(NANOS_PER_SECOND - into_second))
}
