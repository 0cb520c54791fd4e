//! Wall-clock capability.
//!
//! Everything time-sensitive (sunlight analysis, production prediction,
//! greeting period, observation time stamps) reads the time through a
//! [`Clock`] so tests can pin the hour.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Local hour of day, 0-23.
    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// Real time, expressed in the building's time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Jakarta)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.tz).fixed_offset()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Clock at `hour`:00 local time (UTC+7) on an arbitrary fixed date.
    pub fn at_hour(hour: u32) -> Self {
        let naive = NaiveDate::from_ymd_opt(2024, 6, 15)
            .and_then(|d| d.and_hms_opt(hour % 24, 0, 0))
            .unwrap_or_default();
        let dt = FixedOffset::east_opt(7 * 3600)
            .and_then(|offset| naive.and_local_timezone(offset).single())
            .unwrap_or_else(|| naive.and_utc().fixed_offset());
        Self(dt)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
