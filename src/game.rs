//! The engine facade the presentation layer drives.
//!
//! `Game` owns one run's state and exposes every player action as a
//! pure transform plus an explicit RNG draw where one is needed. Guard
//! conditions come back as advisory outcomes, never errors, and nothing
//! in here is timing-dependent: a pending check's result is fully
//! computed the moment `resolve_roll` is called, however long the UI
//! takes to reveal it.

use rand::Rng;

use crate::catalog::{Catalog, ClassId, CommodityId, EventDef, LocationId, RaceId, UpgradeId, UpgradeKind};
use crate::combat::{self, CheckResult};
use crate::constants::{
    BLEED_DAMAGE, BLEED_THRESHOLD, DAILY_INTEREST_RATE, ODD_JOB_WAGE_BASE, ODD_JOB_WAGE_SPREAD,
};
use crate::events::{self, EventOutcome, PendingCheck};
use crate::inventory::{self, TradeOutcome};
use crate::market;
use crate::state::{DeathCause, GameState, LogTone, RunStatus};
use crate::summary::RunSummary;

/// Everything that happened during one `end_turn` call.
#[derive(Debug, Clone, Default)]
pub struct TurnReport {
    pub day: u32,
    /// Interest accrued on the outstanding debt.
    pub interest: i64,
    /// Odd-job wage granted on a no-trade day.
    pub wage: i64,
    pub moved_to: Option<LocationId>,
    /// Bleed damage was applied this turn.
    pub bled: bool,
    pub event: Option<EventOutcome>,
    /// Terminal status reached during this call, if any.
    pub ended: Option<RunStatus>,
    /// The turn could not advance (unresolved event or finished run).
    pub blocked: bool,
}

/// Outcome of an upgrade purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeOutcome {
    Purchased,
    AlreadyOwned,
    NotAllowed,
    NoFunds,
    UnknownUpgrade,
    Blocked,
}

/// Outcome of a debt payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayOutcome {
    Paid(i64),
    NoDebt,
    NoFunds,
    Blocked,
}

pub struct Game<'c> {
    catalog: &'c Catalog,
    state: GameState,
    pending: Option<PendingCheck>,
}

impl<'c> Game<'c> {
    /// Start a run from a race/class selection. `None` for ids outside
    /// the catalog.
    pub fn new(
        catalog: &'c Catalog,
        race_id: RaceId,
        class_id: ClassId,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        if race_id >= catalog.races.len() || class_id >= catalog.classes.len() {
            return None;
        }
        Some(Self {
            catalog,
            state: GameState::new(catalog, race_id, class_id, rng),
            pending: None,
        })
    }

    /// Resume from an existing state (save/load lives outside the core).
    pub fn from_state(catalog: &'c Catalog, state: GameState) -> Self {
        Self {
            catalog,
            state,
            pending: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Force a specific combat/check event into the pending slot, with
    /// its effective difficulty. Debug and test affordance; returns
    /// `None` for instant events or a finished run.
    pub fn force_event(&mut self, event_id: usize) -> Option<PendingCheck> {
        if self.state.status != RunStatus::Active || event_id >= self.catalog.events.len() {
            return None;
        }
        let dc = events::effective_dc(&self.state, self.catalog, event_id)?;
        let can_flee = matches!(
            self.catalog.events[event_id].kind,
            crate::catalog::EventKind::Combat(_)
        );
        let pending = PendingCheck {
            event_id,
            dc,
            can_flee,
        };
        self.pending = Some(pending);
        Some(pending)
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// The unresolved combat/check event, if one is waiting on a roll.
    pub fn pending(&self) -> Option<PendingCheck> {
        self.pending
    }

    /// Definition of the pending event, for presentation.
    pub fn pending_event(&self) -> Option<&EventDef> {
        self.pending.map(|p| &self.catalog.events[p.event_id])
    }

    fn actions_blocked(&self) -> bool {
        self.state.status != RunStatus::Active || self.pending.is_some()
    }

    pub fn buy(&mut self, item: CommodityId) -> TradeOutcome {
        if self.actions_blocked() {
            return TradeOutcome::Blocked;
        }
        inventory::buy_one(&mut self.state, self.catalog, item)
    }

    pub fn buy_max(&mut self, item: CommodityId) -> TradeOutcome {
        if self.actions_blocked() {
            return TradeOutcome::Blocked;
        }
        inventory::buy_max(&mut self.state, self.catalog, item)
    }

    pub fn sell(&mut self, item: CommodityId) -> TradeOutcome {
        if self.actions_blocked() {
            return TradeOutcome::Blocked;
        }
        inventory::sell_one(&mut self.state, self.catalog, item)
    }

    pub fn sell_all(&mut self, item: CommodityId) -> TradeOutcome {
        if self.actions_blocked() {
            return TradeOutcome::Blocked;
        }
        inventory::sell_all(&mut self.state, self.catalog, item)
    }

    /// Buy an upgrade if it's affordable, not owned, and open to this
    /// race/class combination.
    pub fn buy_upgrade(&mut self, upgrade_id: UpgradeId) -> UpgradeOutcome {
        if self.actions_blocked() {
            return UpgradeOutcome::Blocked;
        }
        if upgrade_id >= self.catalog.upgrades.len() {
            return UpgradeOutcome::UnknownUpgrade;
        }
        if self.state.upgrades.contains(&upgrade_id) {
            return UpgradeOutcome::AlreadyOwned;
        }
        let upgrade = &self.catalog.upgrades[upgrade_id];
        if !upgrade
            .requirement
            .allows(self.state.race_id, self.state.class_id)
        {
            return UpgradeOutcome::NotAllowed;
        }
        if self.state.money < upgrade.cost {
            return UpgradeOutcome::NoFunds;
        }

        self.state.money -= upgrade.cost;
        self.state.upgrades.push(upgrade_id);
        if upgrade.kind == UpgradeKind::MaxHealth {
            self.state.max_health += upgrade.value;
            self.state.adjust_health(upgrade.value);
        }
        self.state
            .push_log(LogTone::Good, format!("Bought {}", upgrade.name));
        UpgradeOutcome::Purchased
    }

    /// Pay the debt down as far as the purse allows.
    pub fn pay_debt(&mut self) -> PayOutcome {
        if self.actions_blocked() {
            return PayOutcome::Blocked;
        }
        if self.state.debt == 0 {
            return PayOutcome::NoDebt;
        }
        if self.state.money == 0 {
            return PayOutcome::NoFunds;
        }
        let payment = self.state.money.min(self.state.debt);
        self.state.money -= payment;
        self.state.debt -= payment;
        self.state
            .push_log(LogTone::Good, format!("Paid {} gold toward the debt", payment));
        PayOutcome::Paid(payment)
    }

    /// Advance one day: interest, wages, travel, bleed, events, prices.
    ///
    /// Bleed is evaluated at exactly one point in the turn (here, before
    /// the event roll) and nowhere else, so it can never apply twice in
    /// the same day whatever events fire.
    pub fn end_turn(&mut self, rng: &mut impl Rng) -> TurnReport {
        let mut report = TurnReport {
            day: self.state.day,
            ..Default::default()
        };

        if self.state.status != RunStatus::Active || self.pending.is_some() {
            report.blocked = true;
            report.ended = (self.state.status != RunStatus::Active).then_some(self.state.status);
            return report;
        }

        if self.state.is_final_day() {
            let status = if self.state.raw_score() >= 0 {
                RunStatus::Won
            } else {
                RunStatus::Bankrupt
            };
            self.state.status = status;
            report.ended = Some(status);
            return report;
        }

        self.state.day += 1;
        report.day = self.state.day;

        if self.state.debt > 0 {
            let interest = (self.state.debt as f64 * DAILY_INTEREST_RATE).ceil() as i64;
            self.state.debt += interest;
            report.interest = interest;
        }

        if !self.state.traded_this_turn {
            let wage = rng.gen_range(0..ODD_JOB_WAGE_SPREAD) + ODD_JOB_WAGE_BASE;
            self.state.money += wage;
            report.wage = wage;
            self.state
                .push_log(LogTone::Good, format!("Odd jobs pay {} gold", wage));
        }
        self.state.traded_this_turn = false;

        // Rejection sampling: redraw until we leave the current location.
        let location_count = self.catalog.locations.len();
        let mut next = self.state.location_id;
        while next == self.state.location_id {
            next = rng.gen_range(0..location_count);
        }
        self.state.location_id = next;
        report.moved_to = Some(next);

        if self.state.health < (self.state.max_health as f64 * BLEED_THRESHOLD) as i32 {
            self.state.adjust_health(-BLEED_DAMAGE);
            report.bled = true;
            self.state
                .push_log(LogTone::Bad, "Your wounds bleed as you travel");
            if !self.state.is_alive() {
                self.state.kill(DeathCause::Bleed);
            }
        }

        if self.state.status == RunStatus::Active {
            let outcome = events::roll_event(&mut self.state, self.catalog, rng);
            if let EventOutcome::Check(pending) = &outcome {
                self.pending = Some(*pending);
            }
            report.event = Some(outcome);
        }

        // Prices are always rolled for the new location, whatever branch
        // the event machine took.
        self.state.prices =
            market::recalc_prices(self.catalog, self.state.location_id, self.state.price_mod, rng);

        if self.state.status != RunStatus::Active {
            report.ended = Some(self.state.status);
            self.pending = None;
        }
        report
    }

    /// Resolve the pending check with an externally drawn d20
    /// (see `combat::secure_d20` for the interactive path).
    pub fn resolve_roll(&mut self, d20: u8) -> Option<CheckResult> {
        let pending = self.pending.take()?;
        let result = combat::resolve_check(&mut self.state, self.catalog, pending, d20);
        Some(result)
    }

    /// Flee the pending combat event instead of rolling. Returns false
    /// if there is nothing to flee from.
    pub fn flee(&mut self) -> bool {
        match self.pending {
            Some(pending) if pending.can_flee => {
                self.pending = None;
                combat::flee(&mut self.state, self.catalog, pending);
                true
            }
            _ => false,
        }
    }

    /// Abandon the run. Quit runs keep their log but are excluded from
    /// score statistics.
    pub fn quit(&mut self) {
        if self.state.status == RunStatus::Active {
            self.state.status = RunStatus::Quit;
            self.pending = None;
        }
    }

    /// Final classification and clamped score.
    pub fn score(&self) -> ScoreReport {
        ScoreReport {
            status: self.state.status,
            final_score: self.state.score(),
        }
    }

    /// The completed-run record handed to the logging sink.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_state(self.catalog, &self.state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub status: RunStatus,
    pub final_score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_DAYS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_game(catalog: &Catalog, seed: u64) -> Game<'_> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Game::new(catalog, 0, 0, &mut rng).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_ids() {
        let catalog = Catalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(Game::new(&catalog, 999, 0, &mut rng).is_none());
        assert!(Game::new(&catalog, 0, 999, &mut rng).is_none());
    }

    #[test]
    fn test_interest_accrues_and_compounds() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        game.state.debt = 1_000;

        let report = game.end_turn(&mut rng);
        assert_eq!(report.interest, 50);
        assert_eq!(game.state().debt, 1_050);

        // Clear any event so the next turn isn't blocked.
        if game.pending().is_some() {
            game.resolve_roll(10);
        }
        let report = game.end_turn(&mut rng);
        // ceil(1050 * 0.05) = 53
        assert_eq!(report.interest, 53);
        assert_eq!(game.state().debt, 1_103);
    }

    #[test]
    fn test_no_interest_without_debt() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        game.state.debt = 0;

        let report = game.end_turn(&mut rng);
        assert_eq!(report.interest, 0);
        assert_eq!(game.state().debt, 0);
    }

    #[test]
    fn test_wage_only_on_idle_days() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 6);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        game.state.prices[0] = 10;
        assert!(game.buy(0).traded());
        let report = game.end_turn(&mut rng);
        assert_eq!(report.wage, 0);

        if game.pending().is_some() {
            game.resolve_roll(10);
        }
        if game.state().status == RunStatus::Active {
            let report = game.end_turn(&mut rng);
            assert!((50..200).contains(&report.wage));
        }
    }

    #[test]
    fn test_travel_never_stays_put() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..20 {
            if game.state().status != RunStatus::Active {
                break;
            }
            let here = game.state().location_id;
            let report = game.end_turn(&mut rng);
            if report.blocked {
                game.resolve_roll(10);
                continue;
            }
            if let Some(there) = report.moved_to {
                assert_ne!(here, there);
            }
        }
    }

    #[test]
    fn test_turn_blocked_while_event_pending() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 10);
        game.pending = Some(crate::events::PendingCheck {
            event_id: catalog.event_id("bandit_ambush").unwrap(),
            dc: 12,
            can_flee: true,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let day = game.state().day;
        let report = game.end_turn(&mut rng);
        assert!(report.blocked);
        assert_eq!(game.state().day, day);
    }

    #[test]
    fn test_day_limit_terminates_with_classification() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 12);
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        game.state.day = MAX_DAYS;

        game.state.money = 1_200;
        game.state.debt = 500;
        let report = game.end_turn(&mut rng);
        assert_eq!(report.ended, Some(RunStatus::Won));
        assert_eq!(game.score().final_score, 700);
    }

    #[test]
    fn test_day_limit_bankrupt_when_underwater() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 14);
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        game.state.day = MAX_DAYS;
        game.state.money = 300;
        game.state.debt = 900;

        let report = game.end_turn(&mut rng);
        assert_eq!(report.ended, Some(RunStatus::Bankrupt));
        // Clamped for the leaderboard, negative internally.
        assert_eq!(game.score().final_score, 0);
        assert_eq!(game.state().raw_score(), -600);
    }

    fn calm_catalog() -> Catalog {
        let mut catalog = Catalog::standard();
        for loc in &mut catalog.locations {
            loc.risk = 0.0;
        }
        catalog
    }

    #[test]
    fn test_bleed_applies_once_per_turn() {
        let catalog = calm_catalog();
        let mut game = new_game(&catalog, 16);
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        game.state.health = 20; // under the 25% threshold of 100

        let report = game.end_turn(&mut rng);
        assert!(report.bled);
        assert_eq!(game.state().health, 15);

        // Resolving a check afterwards must not re-trigger bleed: any
        // further loss comes from the outcome effect alone.
        game.force_event(catalog.event_id("guard_shakedown").unwrap());
        game.resolve_roll(19); // success with nimbleness 1: no effect
        assert_eq!(game.state().health, 15);
    }

    #[test]
    fn test_bleed_death_cause() {
        let catalog = calm_catalog();
        let mut game = new_game(&catalog, 18);
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        game.state.health = 4;

        let report = game.end_turn(&mut rng);
        assert!(report.bled);
        assert_eq!(report.ended, Some(RunStatus::Dead));
        assert_eq!(game.state().cause, Some(DeathCause::Bleed));
    }

    #[test]
    fn test_upgrade_purchase_and_gating() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 20);
        game.state.money = 10_000;

        let mule = catalog.upgrade_id("pack_mule").unwrap();
        let cap_before = game.state().max_inventory(&catalog);
        assert_eq!(game.buy_upgrade(mule), UpgradeOutcome::Purchased);
        assert_eq!(game.buy_upgrade(mule), UpgradeOutcome::AlreadyOwned);
        assert_eq!(game.state().max_inventory(&catalog), cap_before + 20);

        // Claymore is dwarf/orc only; this run is human.
        let claymore = catalog.upgrade_id("claymore").unwrap();
        assert_eq!(game.buy_upgrade(claymore), UpgradeOutcome::NotAllowed);

        game.state.money = 0;
        let sword = catalog.upgrade_id("steel_sword").unwrap();
        assert_eq!(game.buy_upgrade(sword), UpgradeOutcome::NoFunds);
    }

    #[test]
    fn test_max_health_upgrade_raises_both_bounds() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 21);
        game.state.money = 10_000;
        let max_before = game.state().max_health;
        let health_before = game.state().health;

        let chainmail = catalog.upgrade_id("chainmail").unwrap();
        assert_eq!(game.buy_upgrade(chainmail), UpgradeOutcome::Purchased);
        assert_eq!(game.state().max_health, max_before + 25);
        assert_eq!(game.state().health, health_before + 25);
    }

    #[test]
    fn test_pay_debt_caps_at_purse() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 22);
        game.state.money = 1_000;
        game.state.debt = 5_000;

        assert_eq!(game.pay_debt(), PayOutcome::Paid(1_000));
        assert_eq!(game.state().money, 0);
        assert_eq!(game.state().debt, 4_000);
        assert_eq!(game.pay_debt(), PayOutcome::NoFunds);

        game.state.money = 10_000;
        assert_eq!(game.pay_debt(), PayOutcome::Paid(4_000));
        assert_eq!(game.pay_debt(), PayOutcome::NoDebt);
    }

    #[test]
    fn test_quit_is_terminal() {
        let catalog = Catalog::standard();
        let mut game = new_game(&catalog, 23);
        game.quit();
        assert_eq!(game.state().status, RunStatus::Quit);
        assert_eq!(game.buy(0), TradeOutcome::Blocked);
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        assert!(game.end_turn(&mut rng).blocked);
    }
}
