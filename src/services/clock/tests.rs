use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use futures::StreamExt;
use tokio::time::{Instant, timeout};

use super::{ClockService, SystemClock, TimeSource};

/// Wall clock that follows tokio's (pausable) clock from a fixed starting point.
struct PausedClock {
    base: NaiveDateTime,
    started: Instant,
}

impl PausedClock {
    fn at(hour: u32, minute: u32, second: u32) -> Self {
        Self::at_millis(hour, minute, second, 0)
    }

    fn at_millis(hour: u32, minute: u32, second: u32, millis: u32) -> Self {
        Self {
            base: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_milli_opt(hour, minute, second, millis)
                .unwrap(),
            started: Instant::now(),
        }
    }
}

impl TimeSource for PausedClock {
    fn now(&self) -> NaiveDateTime {
        let elapsed = chrono::Duration::from_std(self.started.elapsed()).unwrap();
        self.base + elapsed
    }
}

#[tokio::test(start_paused = true)]
async fn samples_once_per_second() {
    let service = ClockService::with_source(PausedClock::at(10, 15, 58));
    let mut stream = Box::pin(service.watch());

    let first = stream.next().await.unwrap();
    assert_eq!((first.hours, first.minutes, first.seconds), (10, 15, 58));

    let second = stream.next().await.unwrap();
    assert_eq!((second.hours, second.minutes, second.seconds), (10, 15, 59));

    let third = stream.next().await.unwrap();
    assert_eq!((third.hours, third.minutes, third.seconds), (10, 16, 0));

    assert_eq!(service.current(), third);
}

#[tokio::test(start_paused = true)]
async fn ticks_align_to_whole_seconds_of_the_source() {
    let service = ClockService::with_source(PausedClock::at_millis(15, 58, 59, 700));
    let mut stream = Box::pin(service.watch());
    let started = Instant::now();

    let first = stream.next().await.unwrap();
    assert_eq!((first.hours, first.minutes, first.seconds), (15, 58, 59));

    let next = stream.next().await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(300));
    assert_eq!((next.hours, next.minutes, next.seconds), (15, 59, 0));

    let after = stream.next().await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(1300));
    assert_eq!((after.hours, after.minutes, after.seconds), (15, 59, 1));
}

#[tokio::test]
async fn samples_the_host_clock() {
    let service = ClockService::with_source(SystemClock);

    let time = service.current();
    assert!(time.hours < 24 && time.minutes < 60 && time.seconds < 60);
    assert!(service.is_running());

    service.stop();
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_the_sampling_task() {
    let service = ClockService::with_source(PausedClock::at(8, 0, 0));
    assert!(service.is_running());

    service.stop();
    for _ in 0..10 {
        if !service.is_running() {
            break;
        }
        tokio::task::yield_now().await;
    }

    assert!(!service.is_running());

    let last = service.current();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(service.current(), last);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_service_ends_its_stream() {
    let service = ClockService::with_source(PausedClock::at(12, 0, 0));
    let stream = service.watch();

    drop(service);

    let drained = timeout(Duration::from_secs(10), stream.collect::<Vec<_>>()).await;
    assert!(drained.is_ok(), "stream kept ticking after the service was dropped");
}
