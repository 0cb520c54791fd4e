use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::sunlight::assess;
use crate::clock::Clock;
use crate::domain::{SolarProductionForecast, SunlightIntensity, TimeContext, WeatherObservation};

/// Relative panel output per hour of the day, starting at `first_hour`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourEfficiencyCurve {
    pub first_hour: u32,
    pub factors: Vec<f64>,
}

impl Default for HourEfficiencyCurve {
    fn default() -> Self {
        Self {
            first_hour: 6,
            factors: vec![0.3, 0.5, 0.7, 0.85, 0.95, 0.98, 1.0, 1.0, 0.95, 0.85, 0.6, 0.3],
        }
    }
}

impl HourEfficiencyCurve {
    /// Factor for `hour`; zero outside the curve.
    pub fn factor(&self, hour: u32) -> f64 {
        hour.checked_sub(self.first_hour)
            .and_then(|i| self.factors.get(i as usize))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Base efficiency and forecast confidence for one intensity level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityEfficiency {
    pub efficiency: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityTable {
    pub high: IntensityEfficiency,
    pub medium: IntensityEfficiency,
    pub low: IntensityEfficiency,
    pub none: IntensityEfficiency,
}

impl Default for IntensityTable {
    fn default() -> Self {
        Self {
            high: IntensityEfficiency { efficiency: 0.85, confidence: 0.90 },
            medium: IntensityEfficiency { efficiency: 0.60, confidence: 0.80 },
            low: IntensityEfficiency { efficiency: 0.25, confidence: 0.60 },
            none: IntensityEfficiency { efficiency: 0.0, confidence: 0.95 },
        }
    }
}

impl IntensityTable {
    pub fn get(&self, intensity: SunlightIntensity) -> IntensityEfficiency {
        match intensity {
            SunlightIntensity::High => self.high,
            SunlightIntensity::Medium => self.medium,
            SunlightIntensity::Low => self.low,
            SunlightIntensity::None => self.none,
        }
    }
}

/// Same-day production forecast for the installed panel capacity.
#[derive(Clone)]
pub struct SolarProductionPredictor {
    clock: Arc<dyn Clock>,
    curve: HourEfficiencyCurve,
    intensities: IntensityTable,
}

impl SolarProductionPredictor {
    pub fn new(clock: Arc<dyn Clock>, curve: HourEfficiencyCurve, intensities: IntensityTable) -> Self {
        Self {
            clock,
            curve,
            intensities,
        }
    }

    pub fn with_defaults(clock: Arc<dyn Clock>) -> Self {
        Self::new(clock, HourEfficiencyCurve::default(), IntensityTable::default())
    }

    pub fn predict_solar_production(
        &self,
        obs: &WeatherObservation,
        panel_capacity_kwp: f64,
    ) -> SolarProductionForecast {
        self.predict_at(obs, panel_capacity_kwp, TimeContext::for_hour(self.clock.hour()))
    }

    fn predict_at(
        &self,
        obs: &WeatherObservation,
        panel_capacity_kwp: f64,
        time: TimeContext,
    ) -> SolarProductionForecast {
        let sunlight = assess(obs, time);
        let base = self.intensities.get(sunlight.intensity);
        let adjusted = base.efficiency * self.curve.factor(time.current_hour);

        SolarProductionForecast {
            predicted_production_kwh: (panel_capacity_kwp * sunlight.estimated_sun_hours * adjusted)
                .round(),
            efficiency_percent: (adjusted * 100.0).round(),
            confidence_percent: (base.confidence * 100.0).round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::WeatherCondition;

    fn obs(condition: WeatherCondition) -> WeatherObservation {
        WeatherObservation {
            temperature_celsius: 32.0,
            humidity_percent: 65.0,
            solar_irradiance_wm2: 800.0,
            condition,
            location_name: "Jakarta".to_string(),
            observed_at: FixedClock::at_hour(12).0,
        }
    }

    fn predictor(hour: u32) -> SolarProductionPredictor {
        SolarProductionPredictor::with_defaults(Arc::new(FixedClock::at_hour(hour)))
    }

    #[test]
    fn test_curve_edges() {
        let curve = HourEfficiencyCurve::default();
        assert_eq!(curve.factors.len(), 12);
        assert_eq!(curve.factor(5), 0.0);
        assert_eq!(curve.factor(6), 0.3);
        assert_eq!(curve.factor(12), 1.0);
        assert_eq!(curve.factor(13), 1.0);
        assert_eq!(curve.factor(17), 0.3);
        assert_eq!(curve.factor(18), 0.0);
    }

    #[test]
    fn test_clear_noon() {
        // 100 kWp * 8 h * 0.85 * 1.0
        let f = predictor(12).predict_solar_production(&obs(WeatherCondition::Clear), 100.0);
        assert_eq!(f.predicted_production_kwh, 680.0);
        assert_eq!(f.efficiency_percent, 85.0);
        assert_eq!(f.confidence_percent, 90.0);
    }

    #[test]
    fn test_clouds_morning() {
        // 50 kWp * 4 h * 0.60 * 0.85 = 102
        let f = predictor(9).predict_solar_production(&obs(WeatherCondition::Clouds), 50.0);
        assert_eq!(f.predicted_production_kwh, 102.0);
        assert_eq!(f.efficiency_percent, 51.0);
        assert_eq!(f.confidence_percent, 80.0);
    }

    #[test]
    fn test_night_produces_nothing() {
        let f = predictor(23).predict_solar_production(&obs(WeatherCondition::Clear), 186.62);
        assert_eq!(f.predicted_production_kwh, 0.0);
        assert_eq!(f.efficiency_percent, 0.0);
        assert_eq!(f.confidence_percent, 95.0);
    }

    #[test]
    fn test_thunderstorm_produces_nothing() {
        let f = predictor(12).predict_solar_production(&obs(WeatherCondition::Thunderstorm), 186.62);
        assert_eq!(f.predicted_production_kwh, 0.0);
        assert_eq!(f.confidence_percent, 95.0);
    }
}
