//! # Simulated Weather
//!
//! Plausible tropical conditions for the known cities, used whenever the live
//! weather service is not configured or fails.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::sync::Arc;

use super::{IrradianceTable, WeatherError, WeatherSource};
use crate::clock::Clock;
use crate::domain::{Location, LocationKey, WeatherCondition, WeatherObservation};

/// Base temperature (°C) before jitter.
pub fn base_temperature(key: LocationKey) -> f64 {
    match key {
        LocationKey::Known(Location::Jakarta) => 32.0,
        LocationKey::Known(Location::Surabaya) => 34.0,
        LocationKey::Known(Location::Bandung) => 28.0,
        LocationKey::Known(Location::Medan) => 30.0,
        LocationKey::Unknown => 30.0,
    }
}

pub struct SimulatedWeather {
    rng: Mutex<StdRng>,
    clock: Arc<dyn Clock>,
    irradiance: IrradianceTable,
}

impl SimulatedWeather {
    pub fn new(clock: Arc<dyn Clock>, irradiance: IrradianceTable) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            clock,
            irradiance,
        }
    }

    /// Reproducible sequence of observations.
    pub fn with_seed(seed: u64, clock: Arc<dyn Clock>, irradiance: IrradianceTable) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            clock,
            irradiance,
        }
    }

    /// Generate an observation for `key`. Never fails.
    pub fn observe(&self, key: LocationKey) -> WeatherObservation {
        let mut rng = self.rng.lock();

        let jitter = rng.gen_range(-2i32..2);
        let humidity = rng.gen_range(60u32..90);
        let condition = *WeatherCondition::SIMULATED
            .choose(&mut *rng)
            .unwrap_or(&WeatherCondition::Clear);

        WeatherObservation {
            temperature_celsius: base_temperature(key) + f64::from(jitter),
            humidity_percent: f64::from(humidity),
            solar_irradiance_wm2: self.irradiance.estimate(condition),
            condition,
            location_name: key.resolve().display_name().to_string(),
            observed_at: self.clock.now(),
        }
    }
}

#[async_trait]
impl WeatherSource for SimulatedWeather {
    async fn current(&self, key: LocationKey) -> Result<WeatherObservation, WeatherError> {
        Ok(self.observe(key))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
