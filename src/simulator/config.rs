//! Simulation configuration.

use crate::catalog::{ClassId, RaceId};

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of complete runs to simulate.
    pub num_runs: u32,

    /// Random seed for reproducibility (None = entropy).
    pub seed: Option<u64>,

    /// Fix the race for every run; None cycles through the catalog.
    pub race: Option<RaceId>,

    /// Fix the class for every run; None cycles through the catalog.
    pub class: Option<ClassId>,

    /// Bot flees combat at or below this health.
    pub flee_health_floor: i32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run lines).
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1_000,
            seed: None,
            race: None,
            class: None,
            flee_health_floor: 25,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick smoke-test batch.
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }
}
