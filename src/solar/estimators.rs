//! Rule-of-thumb solar yield estimates used by the dashboard panels.

use rand::Rng;
use std::f64::consts::PI;

use crate::domain::{MonthlySolarProduction, SolarPotential, WeatherObservation};

/// Typical module efficiency.
pub const DEFAULT_PANEL_EFFICIENCY: f64 = 0.18;

/// Peak sun hours assumed for a 1000 W/m² day.
const REFERENCE_SUN_HOURS: f64 = 8.0;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Daily yield (kWh) of `panel_area_m2` of panels under `irradiance_wm2`.
pub fn solar_production_from_irradiance(irradiance_wm2: f64, panel_area_m2: f64, efficiency: f64) -> f64 {
    let peak_sun_hours = irradiance_wm2 / 1000.0 * REFERENCE_SUN_HOURS;
    panel_area_m2 * efficiency * peak_sun_hours
}

/// Daily/monthly/yearly yield for the current weather.
pub fn solar_potential(obs: &WeatherObservation, panel_area_m2: f64) -> SolarPotential {
    let daily =
        solar_production_from_irradiance(obs.solar_irradiance_wm2, panel_area_m2, DEFAULT_PANEL_EFFICIENCY);
    SolarPotential {
        daily: daily.round(),
        monthly: (daily * 30.0).round(),
        yearly: (daily * 365.0).round(),
    }
}

/// Simulated production over a year: seasonal swing of ±30 % around
/// `base_kwh_per_month`, plus ±10 % noise. Potential is the noise-free
/// seasonal value with 40 % headroom.
pub fn monthly_profile<R: Rng>(rng: &mut R, base_kwh_per_month: f64) -> Vec<MonthlySolarProduction> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let seasonal = (i as f64 / 12.0 * 2.0 * PI).sin() * 0.3;
            let noise = rng.gen_range(-0.1..0.1);
            MonthlySolarProduction {
                month: month.to_string(),
                production: (base_kwh_per_month * (1.0 + seasonal + noise)).round(),
                potential: (base_kwh_per_month * (1.0 + seasonal + 0.4)).round(),
            }
        })
        .collect()
}
