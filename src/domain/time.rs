use serde::{Deserialize, Serialize};

pub const SUNRISE_HOUR: u32 = 6;
pub const SUNSET_HOUR: u32 = 18;

/// Day/night context for a wall-clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeContext {
    pub is_daytime: bool,
    pub current_hour: u32,
    pub sunrise_hour: u32,
    pub sunset_hour: u32,
    pub daylight_hours: u32,
}

impl TimeContext {
    pub fn for_hour(hour: u32) -> Self {
        let current_hour = hour % 24;
        Self {
            is_daytime: (SUNRISE_HOUR..SUNSET_HOUR).contains(&current_hour),
            current_hour,
            sunrise_hour: SUNRISE_HOUR,
            sunset_hour: SUNSET_HOUR,
            daylight_hours: SUNSET_HOUR - SUNRISE_HOUR,
        }
    }
}

/// Greeting period of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    /// Localized (Indonesian) greeting for the period.
    pub fn greeting(self) -> &'static str {
        match self {
            DayPeriod::Morning => "Selamat Pagi",
            DayPeriod::Afternoon => "Selamat Siang",
            DayPeriod::Evening => "Selamat Sore",
            DayPeriod::Night => "Selamat Malam",
        }
    }
}
