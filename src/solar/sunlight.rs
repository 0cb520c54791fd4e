//! # Sunlight Analysis
//!
//! Classifies the current weather into sunlight availability and intensity
//! for the building's solar installation, with short operating advice.

use std::sync::Arc;

use crate::clock::Clock;
use crate::domain::{SunlightAssessment, SunlightIntensity, TimeContext, WeatherCondition, WeatherObservation};

const NIGHT_ACTIONS: &[&str] = &[
    "Solar panels are idle; the building is running on grid supply",
    "Shift water pumping and laundry loads to tomorrow's daylight window",
    "Switch off corridor and parking lighting that motion sensors do not cover",
];

const CLEAR_ACTIONS: &[&str] = &[
    "Excellent conditions for solar generation",
    "Schedule energy-intensive equipment between 09:00 and 15:00",
    "Pre-cool the building while solar output is high",
];

const CLOUDS_ACTIONS: &[&str] = &[
    "Moderate solar output expected",
    "Prioritise essential loads during the brightest hours",
    "Monitor production and draw from the grid if it drops",
];

const RAIN_ACTIONS: &[&str] = &[
    "Little usable sunlight; rely on grid supply",
    "Defer non-essential loads until the rain clears",
];

const THUNDERSTORM_ACTIONS: &[&str] = &[
    "No solar production expected during the storm",
    "Protect sensitive equipment against power surges",
    "Postpone any rooftop panel maintenance",
];

const DIFFUSE_ACTIONS: &[&str] = &[
    "Sunlight is diffused by haze or mist; expect reduced output",
    "Clean panels after haze or dust episodes to recover output",
];

/// Clear-sky intensity for an hour of the day.
pub fn intensity_by_hour(hour: u32) -> SunlightIntensity {
    match hour {
        10..=14 => SunlightIntensity::High,
        8 | 9 | 15 | 16 => SunlightIntensity::Medium,
        _ => SunlightIntensity::Low,
    }
}

/// Assessment for a weather observation at a given time context.
pub fn assess(obs: &WeatherObservation, time: TimeContext) -> SunlightAssessment {
    if !time.is_daytime {
        return SunlightAssessment::dark(NIGHT_ACTIONS);
    }

    match obs.condition {
        WeatherCondition::Clear => SunlightAssessment::new(
            true,
            intensity_by_hour(time.current_hour),
            8.0,
            CLEAR_ACTIONS,
        ),
        WeatherCondition::Clouds => {
            SunlightAssessment::new(true, SunlightIntensity::Medium, 4.0, CLOUDS_ACTIONS)
        }
        // "no sunlight" wins over the low/1h figures: the assessment type
        // normalises it to none/0h.
        WeatherCondition::Rain | WeatherCondition::Drizzle => {
            SunlightAssessment::new(false, SunlightIntensity::Low, 1.0, RAIN_ACTIONS)
        }
        WeatherCondition::Thunderstorm => SunlightAssessment::dark(THUNDERSTORM_ACTIONS),
        _ => SunlightAssessment::new(true, SunlightIntensity::Low, 2.0, DIFFUSE_ACTIONS),
    }
}

/// Sunlight analyzer bound to a clock.
#[derive(Clone)]
pub struct SunlightAnalyzer {
    clock: Arc<dyn Clock>,
}

impl SunlightAnalyzer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn time_context(&self) -> TimeContext {
        TimeContext::for_hour(self.clock.hour())
    }

    pub fn analyze_sunlight(&self, obs: &WeatherObservation) -> SunlightAssessment {
        assess(obs, self.time_context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    fn obs(condition: WeatherCondition) -> WeatherObservation {
        WeatherObservation {
            temperature_celsius: 31.0,
            humidity_percent: 75.0,
            solar_irradiance_wm2: 500.0,
            condition,
            location_name: "Jakarta".to_string(),
            observed_at: FixedClock::at_hour(12).0,
        }
    }

    fn analyze_at(hour: u32, condition: WeatherCondition) -> SunlightAssessment {
        SunlightAnalyzer::new(Arc::new(FixedClock::at_hour(hour))).analyze_sunlight(&obs(condition))
    }

    #[test]
    fn test_clear_intensity_follows_hour() {
        assert_eq!(analyze_at(12, WeatherCondition::Clear).intensity, SunlightIntensity::High);
        assert_eq!(analyze_at(9, WeatherCondition::Clear).intensity, SunlightIntensity::Medium);
        assert_eq!(analyze_at(16, WeatherCondition::Clear).intensity, SunlightIntensity::Medium);
        assert_eq!(analyze_at(7, WeatherCondition::Clear).intensity, SunlightIntensity::Low);
        assert_eq!(analyze_at(17, WeatherCondition::Clear).intensity, SunlightIntensity::Low);
        assert_eq!(analyze_at(12, WeatherCondition::Clear).estimated_sun_hours, 8.0);
    }

    #[test]
    fn test_clouds() {
        let a = analyze_at(11, WeatherCondition::Clouds);
        assert!(a.has_sunlight);
        assert_eq!(a.intensity, SunlightIntensity::Medium);
        assert_eq!(a.estimated_sun_hours, 4.0);
    }

    #[test]
    fn test_rain_and_storm_are_dark() {
        for c in [WeatherCondition::Rain, WeatherCondition::Drizzle, WeatherCondition::Thunderstorm] {
            let a = analyze_at(12, c);
            assert!(!a.has_sunlight);
            assert_eq!(a.intensity, SunlightIntensity::None);
            assert_eq!(a.estimated_sun_hours, 0.0);
            assert!(!a.recommended_actions.is_empty());
        }
    }

    #[test]
    fn test_other_conditions_low() {
        let a = analyze_at(10, WeatherCondition::Haze);
        assert!(a.has_sunlight);
        assert_eq!(a.intensity, SunlightIntensity::Low);
        assert_eq!(a.estimated_sun_hours, 2.0);
    }

    #[test]
    fn test_night_overrides_condition() {
        let a = analyze_at(22, WeatherCondition::Clear);
        assert!(!a.has_sunlight);
        assert_eq!(a.recommended_actions[0], NIGHT_ACTIONS[0]);
    }

    #[test]
    fn test_optimal_hours_always_fixed() {
        let a = analyze_at(3, WeatherCondition::Rain);
        assert_eq!(a.optimal_hours.iter().copied().collect::<Vec<_>>(), vec![9, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_invariant_all_conditions_and_hours() {
        for condition in WeatherCondition::iter() {
            for hour in 0..24 {
                let a = analyze_at(hour, condition);
                if !a.has_sunlight {
                    assert_eq!(a.intensity, SunlightIntensity::None, "{condition} at {hour}");
                    assert_eq!(a.estimated_sun_hours, 0.0, "{condition} at {hour}");
                }
                assert!((0.0..=8.0).contains(&a.estimated_sun_hours));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_no_sunlight_means_no_intensity(hour in 0u32..48, idx in 0usize..10) {
            let condition = WeatherCondition::iter().nth(idx).unwrap();
            let a = assess(&obs(condition), TimeContext::for_hour(hour));
            if !a.has_sunlight {
                prop_assert_eq!(a.intensity, SunlightIntensity::None);
                prop_assert_eq!(a.estimated_sun_hours, 0.0);
            }
        }
    }
}
