use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use embedded_hal::blocking::delay::DelayMs;

///
/// Time source used for read deadlines, reading timestamps and settle delays
///
pub trait Clock: DelayMs<u32> {
    /// Monotonic time, compared against read deadlines.
    fn now(&self) -> Instant;

    /// Wall-clock time stamped onto readings.
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Clock backed by `std::time` and `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl Clock for StdClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl DelayMs<u32> for StdClock {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
