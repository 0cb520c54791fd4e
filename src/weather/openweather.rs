//! Current-weather integration (OpenWeatherMap)

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{
    header::{HeaderMap, HeaderValue, USER_AGENT},
    Client,
};
use serde::Deserialize;
use std::{sync::Arc, time::Duration};
use tracing::{debug, error, info};

use super::{IrradianceTable, WeatherError, WeatherSource};
use crate::clock::Clock;
use crate::config::WeatherConfig;
use crate::domain::{LocationKey, WeatherCondition, WeatherObservation};

/// OpenWeatherMap client for current conditions
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: String,
    lang: String,
    irradiance: IrradianceTable,
    clock: Arc<dyn Clock>,
}

impl OpenWeatherClient {
    /// Build a client from configuration. Fails if no credential is configured.
    pub fn new(
        cfg: &WeatherConfig,
        irradiance: IrradianceTable,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, WeatherError> {
        let api_key = cfg
            .credential()
            .ok_or(WeatherError::MissingCredential)?
            .to_string();

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("building-energy-monitor/", env!("CARGO_PKG_VERSION"))),
        );
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_seconds))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key,
            units: cfg.units.clone(),
            lang: cfg.lang.clone(),
            irradiance,
            clock,
        })
    }

    /// Fetch current weather for a location key
    pub async fn fetch_current(&self, key: LocationKey) -> Result<WeatherObservation, WeatherError> {
        let location = key.resolve();
        let coords = location.coordinates();
        let url = format!("{}/data/2.5/weather", self.base_url);

        debug!(%location, lat = coords.latitude, lon = coords.longitude, "fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", self.units.clone()),
                ("lang", self.lang.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "weather API returned error status");
            return Err(WeatherError::Status(status));
        }

        let body = response.text().await?;
        let raw: OwmResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Malformed(e.to_string()))?;

        let observation = self.parse_observation(raw, location.display_name())?;
        info!(
            location = %observation.location_name,
            condition = %observation.condition,
            temperature = observation.temperature_celsius,
            "fetched current weather"
        );
        Ok(observation)
    }

    /// Map the API payload onto our observation
    fn parse_observation(
        &self,
        raw: OwmResponse,
        fallback_name: &str,
    ) -> Result<WeatherObservation, WeatherError> {
        let main = raw
            .weather
            .first()
            .map(|w| w.main.as_str())
            .ok_or_else(|| WeatherError::Malformed("empty weather array".to_string()))?;
        let condition = WeatherCondition::from_provider(main);

        let location_name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string());

        let observed_at = raw
            .dt
            .and_then(|dt| DateTime::from_timestamp(dt, 0))
            .map(|dt| dt.with_timezone(self.clock.now().offset()))
            .unwrap_or_else(|| self.clock.now());

        Ok(WeatherObservation {
            temperature_celsius: raw.main.temp.round(),
            humidity_percent: raw.main.humidity.clamp(0.0, 100.0),
            solar_irradiance_wm2: self.irradiance.estimate(condition),
            condition,
            location_name,
            observed_at,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, key: LocationKey) -> Result<WeatherObservation, WeatherError> {
        self.fetch_current(key).await
    }

    fn name(&self) -> &'static str {
        "openweathermap"
    }
}

// OpenWeatherMap response structures
#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmWeather>,
    name: Option<String>,
    dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
}
