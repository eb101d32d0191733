//! d20 check resolution.
//!
//! A natural 20 always crit-succeeds and a natural 1 always crit-fails;
//! bonuses never override a natural roll. The interactive path must
//! draw its d20 from the OS entropy source so the roll can't be
//! predicted; the bulk simulator uses a seeded generator instead.

use rand::rngs::OsRng;
use rand::Rng;

use crate::catalog::{Catalog, CheckStat, EventId, EventKind, Outcome};
use crate::constants::{COUNTER_BONUS, D20_SIDES, FLEE_DAMAGE, NATURAL_MAX, NATURAL_MIN};
use crate::effects::{self, EffectReport};
use crate::events::PendingCheck;
use crate::state::{GameState, LogTone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKey {
    CritSuccess,
    Success,
    Fail,
    CritFail,
}

/// A resolved check: the roll, the modified total, and the applied
/// outcome.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub key: OutcomeKey,
    pub roll: u8,
    pub total: i32,
    pub text: &'static str,
    pub report: EffectReport,
}

/// d20 from any generator (simulator path).
pub fn roll_d20(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=D20_SIDES)
}

/// d20 from the OS CSPRNG (interactive path).
pub fn secure_d20() -> u8 {
    roll_d20(&mut OsRng)
}

/// Classify a roll. Natural extremes take priority over the total.
pub fn outcome_for(d20: u8, total: i32, dc: i32) -> OutcomeKey {
    if d20 == NATURAL_MAX {
        OutcomeKey::CritSuccess
    } else if d20 == NATURAL_MIN {
        OutcomeKey::CritFail
    } else if total >= dc {
        OutcomeKey::Success
    } else {
        OutcomeKey::Fail
    }
}

/// Full modifier for a check: upgrade bonus (combat checks only), the
/// governing racial stat, and the +5 counter bonus when the race has an
/// edge against this event family.
pub fn check_bonus(state: &GameState, catalog: &Catalog, event_id: EventId) -> i32 {
    let race = &catalog.races[state.race_id];
    let profile = match &catalog.events[event_id].kind {
        EventKind::Combat(p) | EventKind::Check(p) => p,
        _ => return 0,
    };

    let mut bonus = match profile.stat {
        CheckStat::Combat => state.combat_bonus(catalog) + race.combat,
        CheckStat::Nimbleness => race.nimbleness,
    };
    if let Some(tag) = profile.tag {
        if race.counters.contains(&tag) {
            bonus += COUNTER_BONUS;
        }
    }
    bonus
}

/// Resolve a pending check with an already-drawn d20 and apply the
/// selected outcome. The result is fully computed here; any reveal
/// animation is the presentation layer's problem.
pub fn resolve_check(
    state: &mut GameState,
    catalog: &Catalog,
    pending: PendingCheck,
    d20: u8,
) -> CheckResult {
    let bonus = check_bonus(state, catalog, pending.event_id);
    let total = d20 as i32 + bonus;
    let key = outcome_for(d20, total, pending.dc);

    let profile = match &catalog.events[pending.event_id].kind {
        EventKind::Combat(p) | EventKind::Check(p) => p,
        // Validated catalogs never produce a pending non-check event.
        _ => {
            return CheckResult {
                key,
                roll: d20,
                total,
                text: "",
                report: EffectReport {
                    tone: LogTone::Neutral,
                    detail: String::new(),
                },
            }
        }
    };

    let outcome: &Outcome = match key {
        OutcomeKey::CritSuccess => &profile.outcomes.crit_success,
        OutcomeKey::Success => &profile.outcomes.success,
        OutcomeKey::Fail => &profile.outcomes.fail,
        OutcomeKey::CritFail => &profile.outcomes.crit_fail,
    };

    match key {
        OutcomeKey::CritSuccess | OutcomeKey::Success => state.combat_stats.wins += 1,
        OutcomeKey::Fail | OutcomeKey::CritFail => state.combat_stats.losses += 1,
    }

    let report = effects::apply(state, catalog, outcome.effect, profile.lethal_cause);
    state.push_log(report.tone, format!("{} ({})", outcome.text, report.detail));

    CheckResult {
        key,
        roll: d20,
        total,
        text: outcome.text,
        report,
    }
}

/// Take the fixed health hit instead of rolling. Dying while running is
/// attributed to the event that was fled.
pub fn flee(state: &mut GameState, catalog: &Catalog, pending: PendingCheck) {
    state.combat_stats.flees += 1;
    state.adjust_health(-FLEE_DAMAGE);
    if !state.is_alive() {
        if let EventKind::Combat(profile) | EventKind::Check(profile) =
            &catalog.events[pending.event_id].kind
        {
            state.kill(profile.lethal_cause);
        }
    }
    state.push_log(
        LogTone::Bad,
        format!("You flee, battered but breathing (-{} health)", FLEE_DAMAGE),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DeathCause;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (Catalog, GameState) {
        let catalog = Catalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(51);
        let state = GameState::new(&catalog, 0, 0, &mut rng);
        (catalog, state)
    }

    fn pending_for(catalog: &Catalog, slug: &str, dc: i32) -> PendingCheck {
        PendingCheck {
            event_id: catalog.event_id(slug).unwrap(),
            dc,
            can_flee: true,
        }
    }

    #[test]
    fn test_natural_twenty_always_crit_succeeds() {
        // Even against an absurd DC with a negative bonus.
        assert_eq!(outcome_for(20, -5, 30), OutcomeKey::CritSuccess);
    }

    #[test]
    fn test_natural_one_always_crit_fails() {
        // Even when the total would clear the DC easily.
        assert_eq!(outcome_for(1, 50, 5), OutcomeKey::CritFail);
    }

    #[test]
    fn test_total_vs_dc_for_ordinary_rolls() {
        assert_eq!(outcome_for(10, 12, 12), OutcomeKey::Success);
        assert_eq!(outcome_for(10, 11, 12), OutcomeKey::Fail);
        assert_eq!(outcome_for(19, 19, 20), OutcomeKey::Fail);
    }

    #[test]
    fn test_counter_bonus_applies_to_matching_race() {
        let (catalog, mut state) = setup();
        let dragon = catalog.event_id("dragon_raid").unwrap();

        // Human: combat 1, no counter.
        assert_eq!(check_bonus(&state, &catalog, dragon), 1);

        // Dwarf: combat 2 plus the dragon counter.
        state.race_id = catalog.race_id("dwarf").unwrap();
        assert_eq!(check_bonus(&state, &catalog, dragon), 2 + COUNTER_BONUS);
    }

    #[test]
    fn test_nimbleness_checks_ignore_combat_upgrades() {
        let (catalog, mut state) = setup();
        let sword = catalog.upgrade_id("steel_sword").unwrap();
        state.upgrades.push(sword);

        let guard = catalog.event_id("guard_shakedown").unwrap();
        let bandits = catalog.event_id("bandit_ambush").unwrap();
        let race = &catalog.races[state.race_id];

        assert_eq!(check_bonus(&state, &catalog, guard), race.nimbleness);
        assert_eq!(check_bonus(&state, &catalog, bandits), race.combat + 2);
    }

    #[test]
    fn test_resolve_tallies_wins_and_losses() {
        let (catalog, mut state) = setup();
        let pending = pending_for(&catalog, "bandit_ambush", 12);

        resolve_check(&mut state, &catalog, pending, 20);
        assert_eq!(state.combat_stats.wins, 1);

        resolve_check(&mut state, &catalog, pending, 2);
        assert_eq!(state.combat_stats.losses, 1);
    }

    #[test]
    fn test_resolve_applies_outcome_effect() {
        let (catalog, mut state) = setup();
        let money = state.money;
        let pending = pending_for(&catalog, "bandit_ambush", 12);

        let result = resolve_check(&mut state, &catalog, pending, 20);
        assert_eq!(result.key, OutcomeKey::CritSuccess);
        assert_eq!(state.money, money + 500);
    }

    #[test]
    fn test_collector_death_attributed_to_debt_collection() {
        let (catalog, mut state) = setup();
        state.money = 0;
        state.health = 10;
        let pending = pending_for(&catalog, "debt_collector", 13);

        // Natural 1: PayOrHurt { 3000, 50 } with no money to pay.
        resolve_check(&mut state, &catalog, pending, 1);
        assert_eq!(state.cause, Some(DeathCause::DebtCollection));
    }

    #[test]
    fn test_flee_costs_health_and_tallies() {
        let (catalog, mut state) = setup();
        let health = state.health;
        let pending = pending_for(&catalog, "bandit_ambush", 12);

        flee(&mut state, &catalog, pending);
        assert_eq!(state.health, health - FLEE_DAMAGE);
        assert_eq!(state.combat_stats.flees, 1);
        assert_eq!(state.combat_stats.wins, 0);
        assert_eq!(state.combat_stats.losses, 0);
    }

    #[test]
    fn test_roll_d20_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..500 {
            let roll = roll_d20(&mut rng);
            assert!((1..=20).contains(&roll));
        }
    }
}
