//! Simulated real-time comparison feed and its rolling history.

use parking_lot::Mutex;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;

use super::EmissionCalculator;
use crate::clock::Clock;
use crate::domain::{ComparisonPoint, EmissionStats, EnergyComparison};
use crate::utils::FixedRingBuffer;

/// Points kept for the comparison chart.
pub const HISTORY_LEN: usize = 12;

pub type ComparisonHistory = FixedRingBuffer<ComparisonPoint, HISTORY_LEN>;

/// One refresh tick: the comparison plus the CO₂ avoided by using the grid
/// mix instead of diesel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSnapshot {
    pub comparison: EnergyComparison,
    pub emission_stats: EmissionStats,
}

pub struct ComparisonSampler {
    calculator: EmissionCalculator,
    clock: Arc<dyn Clock>,
    rng: Mutex<StdRng>,
}

impl ComparisonSampler {
    pub fn new(calculator: EmissionCalculator, clock: Arc<dyn Clock>) -> Self {
        Self {
            calculator,
            clock,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(calculator: EmissionCalculator, clock: Arc<dyn Clock>, seed: u64) -> Self {
        Self {
            calculator,
            clock,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Consumption 2000-2500 kWh, solar 800-1200 kWh.
    pub fn sample(&self) -> ComparisonSnapshot {
        let (base_consumption, solar_production) = {
            let mut rng = self.rng.lock();
            (rng.gen_range(2_000.0..2_500.0), rng.gen_range(800.0..1_200.0))
        };
        self.snapshot(base_consumption, solar_production)
    }

    pub fn snapshot(&self, base_consumption: f64, solar_production: f64) -> ComparisonSnapshot {
        let comparison =
            self.calculator
                .generate_comparison(base_consumption, solar_production, self.clock.now());
        let emission_stats = self.calculator.emission_stats(
            comparison.fossil_fuel.co2_emission,
            comparison.fossil_fuel.co2_emission - comparison.grid_mix.co2_emission,
        );
        ComparisonSnapshot {
            comparison,
            emission_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use approx::assert_relative_eq;

    fn sampler(seed: u64) -> ComparisonSampler {
        ComparisonSampler::with_seed(EmissionCalculator::default(), Arc::new(FixedClock::at_hour(13)), seed)
    }

    #[test]
    fn test_sample_ranges() {
        let s = sampler(4);
        for _ in 0..100 {
            let snap = s.sample();
            let c = snap.comparison;
            assert!((2_000.0..2_500.0).contains(&c.fossil_fuel.consumption));
            assert!((800.0..1_200.0).contains(&c.solar_energy.production));
            assert!(c.grid_mix.consumption > 0.0);
            assert!(snap.emission_stats.saved_co2 > 0.0);
        }
    }

    #[test]
    fn test_snapshot_saved_co2() {
        let snap = sampler(1).snapshot(2_000.0, 800.0);
        assert_relative_eq!(snap.emission_stats.total_co2, 1_640.0, epsilon = 1e-9);
        // 1640 - 1200 * 0.65
        assert_relative_eq!(snap.emission_stats.saved_co2, 860.0, epsilon = 1e-9);
    }

    #[test]
    fn test_history_keeps_last_twelve() {
        let s = sampler(8);
        let mut history = ComparisonHistory::new();
        let mut last = None;
        for _ in 0..20 {
            let snap = s.sample();
            let point = ComparisonPoint::from(&snap.comparison);
            history.push(point);
            last = Some(point);
        }
        assert_eq!(history.len(), HISTORY_LEN);
        assert_eq!(history.iter().last().copied(), last);
    }
}
