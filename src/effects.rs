//! Application of event effects to the run state.

use crate::catalog::{Catalog, Effect};
use crate::state::{DeathCause, GameState, LogTone};

/// The applied effect, summarized for logs and event result display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectReport {
    pub tone: LogTone,
    pub detail: String,
}

fn report(tone: LogTone, detail: impl Into<String>) -> EffectReport {
    EffectReport {
        tone,
        detail: detail.into(),
    }
}

/// Apply `effect` to `state`. A lethal health hit marks the run dead
/// with `lethal_cause` attribution.
pub fn apply(
    state: &mut GameState,
    catalog: &Catalog,
    effect: Effect,
    lethal_cause: DeathCause,
) -> EffectReport {
    match effect {
        Effect::Nothing => report(LogTone::Neutral, "no lasting harm done"),
        Effect::Gold(delta) => {
            state.adjust_money(delta);
            if delta >= 0 {
                report(LogTone::Good, format!("+{} gold", delta))
            } else {
                report(LogTone::Bad, format!("{} gold", delta))
            }
        }
        Effect::GoldPercent(pct) => {
            let delta = (state.money as f64 * pct).round() as i64;
            state.adjust_money(delta);
            if delta >= 0 {
                report(LogTone::Good, format!("+{} gold", delta))
            } else {
                report(LogTone::Bad, format!("{} gold", delta))
            }
        }
        Effect::Health(delta) => {
            state.adjust_health(delta);
            if !state.is_alive() {
                state.kill(lethal_cause);
            }
            if delta >= 0 {
                report(LogTone::Good, format!("+{} health", delta))
            } else {
                report(LogTone::Bad, format!("{} health", delta))
            }
        }
        Effect::GrantItem { item, count } => {
            // Free goods still respect the hold: spill-over is lost.
            let space = state.max_inventory(catalog).saturating_sub(state.total_count());
            let granted = count.min(space);
            if granted > 0 {
                state.inventory[item].fill(granted, 0);
            }
            report(
                LogTone::Good,
                format!("+{} {}", granted, catalog.commodities[item].name),
            )
        }
        Effect::LoseItem { item, count } => {
            let held = state.inventory[item].count;
            let lost = count.unwrap_or(held).min(held);
            state.inventory[item].drain(lost);
            report(
                LogTone::Bad,
                format!("-{} {}", lost, catalog.commodities[item].name),
            )
        }
        Effect::ClearDebt => {
            state.debt = 0;
            report(LogTone::Good, "debt cleared")
        }
        Effect::PayOrHurt { amount, damage } => {
            if state.money >= amount {
                state.money -= amount;
                report(LogTone::Bad, format!("paid {} gold", amount))
            } else {
                state.adjust_health(-damage);
                if !state.is_alive() {
                    state.kill(lethal_cause);
                }
                report(LogTone::Bad, format!("-{} health", damage))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::state::RunStatus;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (Catalog, GameState) {
        let catalog = Catalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let state = GameState::new(&catalog, 0, 0, &mut rng);
        (catalog, state)
    }

    #[test]
    fn test_gold_debit_clamps_at_zero() {
        let (catalog, mut state) = setup();
        state.money = 100;
        let r = apply(&mut state, &catalog, Effect::Gold(-500), DeathCause::EventDeath);
        assert_eq!(state.money, 0);
        assert_eq!(r.tone, LogTone::Bad);
    }

    #[test]
    fn test_gold_percent_uses_current_money() {
        let (catalog, mut state) = setup();
        state.money = 1_000;
        apply(
            &mut state,
            &catalog,
            Effect::GoldPercent(-0.25),
            DeathCause::EventDeath,
        );
        assert_eq!(state.money, 750);
    }

    #[test]
    fn test_lethal_health_effect_attributes_cause() {
        let (catalog, mut state) = setup();
        state.health = 10;
        apply(
            &mut state,
            &catalog,
            Effect::Health(-50),
            DeathCause::DebtCollection,
        );
        assert_eq!(state.status, RunStatus::Dead);
        assert_eq!(state.cause, Some(DeathCause::DebtCollection));
    }

    #[test]
    fn test_pay_or_hurt_prefers_payment() {
        let (catalog, mut state) = setup();
        state.money = 5_000;
        let health = state.health;
        apply(
            &mut state,
            &catalog,
            Effect::PayOrHurt {
                amount: 1_000,
                damage: 25,
            },
            DeathCause::DebtCollection,
        );
        assert_eq!(state.money, 4_000);
        assert_eq!(state.health, health);
    }

    #[test]
    fn test_pay_or_hurt_hurts_when_broke() {
        let (catalog, mut state) = setup();
        state.money = 10;
        let health = state.health;
        apply(
            &mut state,
            &catalog,
            Effect::PayOrHurt {
                amount: 1_000,
                damage: 25,
            },
            DeathCause::DebtCollection,
        );
        assert_eq!(state.money, 10);
        assert_eq!(state.health, health - 25);
    }

    #[test]
    fn test_grant_respects_capacity() {
        let (catalog, mut state) = setup();
        let cap = state.max_inventory(&catalog);
        apply(
            &mut state,
            &catalog,
            Effect::GrantItem {
                item: 0,
                count: cap + 100,
            },
            DeathCause::EventDeath,
        );
        assert_eq!(state.total_count(), cap);
    }

    #[test]
    fn test_grant_lowers_average_cost() {
        let (catalog, mut state) = setup();
        state.inventory[2].fill(2, 100);
        apply(
            &mut state,
            &catalog,
            Effect::GrantItem { item: 2, count: 2 },
            DeathCause::EventDeath,
        );
        // Two paid fills at 100 plus two free ones average to 50.
        assert!((state.inventory[2].avg_cost - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_clear_debt() {
        let (catalog, mut state) = setup();
        state.debt = 9_999;
        let r = apply(&mut state, &catalog, Effect::ClearDebt, DeathCause::EventDeath);
        assert_eq!(state.debt, 0);
        assert_eq!(r.tone, LogTone::Good);
    }
}
