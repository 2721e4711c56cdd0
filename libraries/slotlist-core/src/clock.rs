//! Wall-clock abstraction
//!
//! Everything that asks "which slot is active right now" goes through a
//! [`Clock`] so tests can pin the time of day instead of reading the real
//! clock.

use chrono::{Local, NaiveTime, Timelike};

/// Number of minutes in the repeating daily cycle
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Source of the current local time of day
pub trait Clock: Send + Sync {
    /// Current local wall-clock time
    fn now(&self) -> NaiveTime;

    /// Current minute of the day, in `0..MINUTES_PER_DAY`
    fn minute_of_day(&self) -> u32 {
        let now = self.now();
        now.hour() * 60 + now.minute()
    }
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock frozen at a fixed time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    /// Freeze the clock at the given time
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Freeze the clock at `hour:minute`
    ///
    /// Out-of-range values fall back to midnight.
    pub fn at(hour: u32, minute: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
