//! Hour-of-day classification.

use serde::Serialize;

use crate::clock::Clock;
use crate::domain::{DayPeriod, TimeContext};

pub fn classify_time(hour: u32) -> DayPeriod {
    match hour % 24 {
        5..=11 => DayPeriod::Morning,
        12..=17 => DayPeriod::Afternoon,
        18..=21 => DayPeriod::Evening,
        _ => DayPeriod::Night,
    }
}

pub fn time_context(clock: &dyn Clock) -> TimeContext {
    TimeContext::for_hour(clock.hour())
}

/// What the dashboard header shows for "now".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDay {
    pub period: DayPeriod,
    pub greeting: &'static str,
    pub context: TimeContext,
}

impl TimeOfDay {
    pub fn now(clock: &dyn Clock) -> Self {
        let context = time_context(clock);
        let period = classify_time(context.current_hour);
        Self {
            period,
            greeting: period.greeting(),
            context,
        }
    }
}
