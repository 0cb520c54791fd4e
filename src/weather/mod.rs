//! Weather provider
//!
//! Resolves a location key to current conditions. A live source is tried
//! first when one is configured; any failure of it is replaced by simulated
//! data, so callers always receive an observation.

pub mod irradiance;
pub mod openweather;
pub mod simulated;

pub use irradiance::IrradianceTable;
pub use openweather::OpenWeatherClient;
pub use simulated::SimulatedWeather;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::clock::Clock;
use crate::config::WeatherConfig;
use crate::domain::{LocationKey, WeatherObservation};

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("no weather API credential configured")]
    MissingCredential,

    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather API error: HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed weather payload: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self, key: LocationKey) -> Result<WeatherObservation, WeatherError>;

    fn name(&self) -> &'static str;
}

/// Live source with simulated fallback.
pub struct WeatherProvider {
    live: Option<Box<dyn WeatherSource>>,
    fallback: SimulatedWeather,
}

impl WeatherProvider {
    pub fn new(live: Option<Box<dyn WeatherSource>>, fallback: SimulatedWeather) -> Self {
        Self { live, fallback }
    }

    /// Simulated data only.
    pub fn simulated(fallback: SimulatedWeather) -> Self {
        Self::new(None, fallback)
    }

    /// Wire the provider from configuration. A missing credential is not an
    /// error: the provider simply runs in simulated mode.
    pub fn from_config(
        cfg: &WeatherConfig,
        irradiance: IrradianceTable,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, WeatherError> {
        let fallback = SimulatedWeather::new(clock.clone(), irradiance);
        let live = match OpenWeatherClient::new(cfg, irradiance, clock) {
            Ok(client) => Some(Box::new(client) as Box<dyn WeatherSource>),
            Err(WeatherError::MissingCredential) => None,
            Err(e) => return Err(e),
        };
        Ok(Self::new(live, fallback))
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Current conditions for `location`. Never fails.
    pub async fn get_weather(&self, location: &str) -> WeatherObservation {
        let key = LocationKey::parse(location);
        if let Some(live) = &self.live {
            match live.current(key).await {
                Ok(obs) => return obs,
                Err(e) => {
                    warn!(source = live.name(), %location, error = %e, "live weather failed, serving simulated data");
                }
            }
        }
        self.fallback.observe(key)
    }

    /// Simulated conditions for `location`, bypassing the live source.
    pub fn fallback_weather(&self, location: &str) -> WeatherObservation {
        self.fallback.observe(LocationKey::parse(location))
    }
}
