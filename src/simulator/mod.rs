//! Balance simulator for Monte Carlo analysis.
//!
//! Runs thousands of complete games with a deterministic bot policy in
//! place of player choice, to analyze win/bankruptcy/death rates and
//! score distributions per race and class. Runs are independent; each
//! gets its own seeded RNG, so a report is reproducible from one seed.

mod config;
mod policy;
mod report;
mod runner;

pub use config::SimConfig;
pub use policy::Policy;
pub use report::SimReport;
pub use runner::run_simulation;
