use anyhow::{Context, Result};
use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub weather: WeatherConfig,
    pub clock: ClockConfig,
    pub solar: SolarConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            enable_cors: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap credential. Absent or blank means simulated weather only.
    pub api_key: Option<String>,
    pub base_url: String,
    pub http_timeout_seconds: u64,
    pub units: String,
    pub lang: String,
    pub default_location: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openweathermap.org".to_string(),
            http_timeout_seconds: 10,
            units: "metric".to_string(),
            lang: "id".to_string(),
            default_location: "jakarta".to_string(),
        }
    }
}

impl WeatherConfig {
    /// The credential, if one is actually configured.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// IANA zone of the building, e.g. `Asia/Jakarta`.
    pub timezone: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: "Asia/Jakarta".to_string(),
        }
    }
}

impl ClockConfig {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("invalid clock.timezone {:?}: {e}", self.timezone))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarConfig {
    pub panel_capacity_kwp: f64,
    pub panel_area_m2: f64,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            panel_capacity_kwp: 186.62,
            panel_area_m2: 500.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let cfg: Self = Self::figment()
            .extract()
            .context("failed to load configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// The live weather call must give up before the request timeout fires,
    /// otherwise the simulated fallback never gets to answer.
    pub fn validate(&self) -> Result<()> {
        if self.weather.http_timeout_seconds >= self.server.request_timeout_secs {
            anyhow::bail!(
                "weather.http_timeout_seconds ({}) must be shorter than server.request_timeout_secs ({})",
                self.weather.http_timeout_seconds,
                self.server.request_timeout_secs
            );
        }
        Ok(())
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(
                Env::raw()
                    .only(&["OPENWEATHER_API_KEY"])
                    .map(|_| "weather.api_key".into()),
            )
            .merge(Env::prefixed("BEM__").split("__"))
    }
}
