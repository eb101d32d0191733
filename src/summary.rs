//! The completed-run record handed to the logging/leaderboard layer.
//! The core only produces this; delivery is someone else's job.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::state::{CombatStats, DeathCause, GameState, RunStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub race: String,
    pub class: String,
    pub status: RunStatus,
    pub cause: Option<DeathCause>,
    /// Last day the run reached.
    pub days: u32,
    /// Clamped leaderboard score.
    pub score: i64,
    pub combat: CombatStats,
    /// Unix timestamp of record creation.
    pub finished_at: i64,
}

impl RunSummary {
    pub fn from_state(catalog: &Catalog, state: &GameState) -> Self {
        Self {
            run_id: state.run_id.clone(),
            race: catalog.races[state.race_id].slug.to_string(),
            class: catalog.classes[state.class_id].slug.to_string(),
            status: state.status,
            cause: state.cause,
            days: state.day,
            score: state.score(),
            combat: state.combat_stats,
            finished_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_summary_reflects_state() {
        let catalog = Catalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(61);
        let dwarf = catalog.race_id("dwarf").unwrap();
        let smuggler = catalog.class_id("smuggler").unwrap();
        let mut state = GameState::new(&catalog, dwarf, smuggler, &mut rng);
        state.money = 4_000;
        state.debt = 1_000;
        state.status = RunStatus::Won;
        state.combat_stats.wins = 3;

        let summary = RunSummary::from_state(&catalog, &state);
        assert_eq!(summary.race, "dwarf");
        assert_eq!(summary.class, "smuggler");
        assert_eq!(summary.score, 3_000);
        assert_eq!(summary.combat.wins, 3);
        assert_eq!(summary.status, RunStatus::Won);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let catalog = Catalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(62);
        let state = GameState::new(&catalog, 0, 0, &mut rng);
        let summary = RunSummary::from_state(&catalog, &state);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"race\":\"human\""));
        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.run_id, summary.run_id);
    }
}
