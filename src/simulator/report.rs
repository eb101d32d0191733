//! Aggregation of run summaries into a balance report.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::state::{DeathCause, RunStatus};
use crate::summary::RunSummary;

/// Per-race or per-class slice of the batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupStats {
    pub runs: u32,
    pub wins: u32,
    pub avg_score: f64,
}

/// Aggregated results from a simulation batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub wins: u32,
    pub bankruptcies: u32,
    pub deaths: u32,
    pub quits: u32,

    /// Average over scored runs (quits excluded).
    pub avg_score: f64,
    pub median_score: i64,
    pub min_score: i64,
    pub max_score: i64,
    pub avg_days: f64,

    pub total_combat_wins: u32,
    pub total_combat_losses: u32,
    pub total_flees: u32,

    pub deaths_by_cause: BTreeMap<String, u32>,
    pub by_race: BTreeMap<String, GroupStats>,
    pub by_class: BTreeMap<String, GroupStats>,

    /// Individual records for detailed analysis.
    pub runs: Vec<RunSummary>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunSummary>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |status: RunStatus| runs.iter().filter(|r| r.status == status).count() as u32;
        let wins = count(RunStatus::Won);
        let bankruptcies = count(RunStatus::Bankrupt);
        let deaths = count(RunStatus::Dead);
        let quits = count(RunStatus::Quit);

        // Quit runs are logged but excluded from score statistics.
        let mut scores: Vec<i64> = runs
            .iter()
            .filter(|r| r.status != RunStatus::Quit)
            .map(|r| r.score)
            .collect();
        scores.sort_unstable();

        let scored = scores.len().max(1) as f64;
        let avg_score = scores.iter().sum::<i64>() as f64 / scored;
        let median_score = scores.get(scores.len() / 2).copied().unwrap_or(0);
        let min_score = scores.first().copied().unwrap_or(0);
        let max_score = scores.last().copied().unwrap_or(0);
        let avg_days =
            runs.iter().map(|r| r.days as f64).sum::<f64>() / (num_runs.max(1)) as f64;

        let mut deaths_by_cause = BTreeMap::new();
        for run in runs.iter().filter(|r| r.status == RunStatus::Dead) {
            let cause = match run.cause {
                Some(DeathCause::Bleed) => "Bleed",
                Some(DeathCause::EventDeath) => "Event Death",
                Some(DeathCause::DebtCollection) => "Debt Collection",
                None => "Unknown",
            };
            *deaths_by_cause.entry(cause.to_string()).or_insert(0) += 1;
        }

        let by_race = group_by(&runs, |r| r.race.clone());
        let by_class = group_by(&runs, |r| r.class.clone());

        Self {
            num_runs,
            wins,
            bankruptcies,
            deaths,
            quits,
            avg_score,
            median_score,
            min_score,
            max_score,
            avg_days,
            total_combat_wins: runs.iter().map(|r| r.combat.wins).sum(),
            total_combat_losses: runs.iter().map(|r| r.combat.losses).sum(),
            total_flees: runs.iter().map(|r| r.combat.flees).sum(),
            deaths_by_cause,
            by_race,
            by_class,
            runs,
        }
    }

    /// Human-readable report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let pct = |n: u32| 100.0 * n as f64 / self.num_runs.max(1) as f64;

        out.push_str("=== OUTCOMES ===\n");
        out.push_str(&format!(
            "Runs:      {}\nWon:       {} ({:.1}%)\nBankrupt:  {} ({:.1}%)\nDead:      {} ({:.1}%)\nQuit:      {} ({:.1}%)\n",
            self.num_runs,
            self.wins,
            pct(self.wins),
            self.bankruptcies,
            pct(self.bankruptcies),
            self.deaths,
            pct(self.deaths),
            self.quits,
            pct(self.quits),
        ));

        out.push_str("\n=== SCORES (quits excluded) ===\n");
        out.push_str(&format!(
            "Average:   {:.0}\nMedian:    {}\nRange:     {} .. {}\nAvg days:  {:.1}\n",
            self.avg_score, self.median_score, self.min_score, self.max_score, self.avg_days,
        ));

        out.push_str("\n=== COMBAT ===\n");
        out.push_str(&format!(
            "Wins: {}  Losses: {}  Flees: {}\n",
            self.total_combat_wins, self.total_combat_losses, self.total_flees,
        ));

        if !self.deaths_by_cause.is_empty() {
            out.push_str("\n=== DEATHS BY CAUSE ===\n");
            for (cause, n) in &self.deaths_by_cause {
                out.push_str(&format!("{:16} {}\n", cause, n));
            }
        }

        out.push_str("\n=== BY RACE ===\n");
        for (race, stats) in &self.by_race {
            out.push_str(&format!(
                "{:10} runs {:5}  wins {:5}  avg score {:.0}\n",
                race, stats.runs, stats.wins, stats.avg_score
            ));
        }

        out.push_str("\n=== BY CLASS ===\n");
        for (class, stats) in &self.by_class {
            out.push_str(&format!(
                "{:10} runs {:5}  wins {:5}  avg score {:.0}\n",
                class, stats.runs, stats.wins, stats.avg_score
            ));
        }

        out
    }

    /// JSON report for tooling.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn group_by(runs: &[RunSummary], key: impl Fn(&RunSummary) -> String) -> BTreeMap<String, GroupStats> {
    let mut groups: BTreeMap<String, (u32, u32, i64)> = BTreeMap::new();
    for run in runs.iter().filter(|r| r.status != RunStatus::Quit) {
        let entry = groups.entry(key(run)).or_default();
        entry.0 += 1;
        if run.status == RunStatus::Won {
            entry.1 += 1;
        }
        entry.2 += run.score;
    }
    groups
        .into_iter()
        .map(|(k, (runs, wins, total))| {
            (
                k,
                GroupStats {
                    runs,
                    wins,
                    avg_score: total as f64 / runs.max(1) as f64,
                },
            )
        })
        .collect()
}
