use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::domain::Baseline;
use crate::emissions::{ComparisonHistory, ComparisonSampler, EmissionCalculator};
use crate::savings::{DashboardSimulator, EnergyCalculator, SavingsAssumptions};
use crate::solar::{SolarProductionPredictor, SunlightAnalyzer};
use crate::weather::{IrradianceTable, WeatherProvider};

/// Everything the HTTP handlers need, shared behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub clock: Arc<dyn Clock>,
    pub weather: Arc<WeatherProvider>,
    pub sunlight: SunlightAnalyzer,
    pub production: SolarProductionPredictor,
    pub savings: Arc<EnergyCalculator>,
    pub emissions: EmissionCalculator,
    pub sampler: Arc<ComparisonSampler>,
    pub history: Arc<Mutex<ComparisonHistory>>,
    pub dashboard: Arc<DashboardSimulator>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(cfg.clock.tz()?));
        let weather = WeatherProvider::from_config(&cfg.weather, IrradianceTable::default(), clock.clone())
            .context("failed to build weather client")?;
        info!(live = weather.is_live(), "weather provider ready");
        Ok(Self::with_parts(cfg, clock, weather))
    }

    /// Assemble the state around an explicit clock and weather provider.
    pub fn with_parts(cfg: Config, clock: Arc<dyn Clock>, weather: WeatherProvider) -> Self {
        let baseline = Baseline::default();
        let assumptions = SavingsAssumptions::default();
        let emissions = EmissionCalculator::default();
        Self {
            sunlight: SunlightAnalyzer::new(clock.clone()),
            production: SolarProductionPredictor::with_defaults(clock.clone()),
            savings: Arc::new(EnergyCalculator::new(baseline, assumptions)),
            emissions,
            sampler: Arc::new(ComparisonSampler::new(emissions, clock.clone())),
            history: Arc::new(Mutex::new(ComparisonHistory::new())),
            dashboard: Arc::new(DashboardSimulator::new(baseline, assumptions)),
            weather: Arc::new(weather),
            clock,
            cfg,
        }
    }
}
