//! # Solar & Sunlight Analysis
//!
//! - **sunlight**: sunlight availability and intensity from weather + hour
//! - **production**: same-day production forecast for an installed capacity
//! - **estimators**: irradiance-based yield and the simulated annual profile

pub mod estimators;
pub mod production;
pub mod sunlight;

pub use estimators::{
    monthly_profile, solar_potential, solar_production_from_irradiance, DEFAULT_PANEL_EFFICIENCY,
};
pub use production::{HourEfficiencyCurve, IntensityEfficiency, IntensityTable, SolarProductionPredictor};
pub use sunlight::{intensity_by_hour, SunlightAnalyzer};
