//! Wall-clock source for finish-time estimates

use chrono::{Duration, NaiveTime, Timelike};

const SECONDS_PER_DAY: i64 = 86_400;

/// Source of the current local time of day
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// The system's local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// A clock stopped at a fixed time, for previews and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Time of day `seconds` from `now`, truncated to whole seconds
///
/// Fractional seconds of the offset are dropped and the result wraps
/// around midnight.
pub fn time_after(now: NaiveTime, seconds: f64) -> NaiveTime {
    let within_day = (seconds.trunc() as i64) % SECONDS_PER_DAY;
    let (at, _) = now.overflowing_add_signed(Duration::seconds(within_day));
    at.with_nanosecond(0).unwrap_or(at)
}

/// Format a time of day as `HH:MM:SS`
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
