//! The bot standing in for player choice.
//!
//! Decisions are a pure function of the visible state, so two runs with
//! the same RNG seed make the same moves. Strategy: liquidate holdings
//! that are profitable against their average cost, clear the debt when
//! the purse covers it, then go all-in on the commodity trading
//! furthest below its base price.

use rand::Rng;

use crate::catalog::Catalog;
use crate::combat;
use crate::game::Game;
use crate::market;

#[derive(Debug, Clone, Copy)]
pub struct Policy {
    /// Flee combat at or below this health.
    pub flee_health_floor: i32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            flee_health_floor: 25,
        }
    }
}

impl Policy {
    /// One day of trading decisions, before the turn advances.
    pub fn trade_day(&self, game: &mut Game<'_>) {
        let catalog = game.catalog();

        // Sell everything sitting at a profit.
        for item in self.profitable_holdings(game, catalog) {
            game.sell_all(item);
        }

        // Interest outruns most margins; clear debt when possible.
        if game.state().debt > 0 && game.state().money >= game.state().debt {
            game.pay_debt();
        }

        // Buy whatever is deepest below its base price.
        if let Some(item) = self.best_buy(game, catalog) {
            game.buy_max(item);
        }
    }

    fn profitable_holdings(&self, game: &Game<'_>, catalog: &Catalog) -> Vec<usize> {
        let state = game.state();
        let race = &catalog.races[state.race_id];
        state
            .inventory
            .iter()
            .enumerate()
            .filter(|(item, slot)| {
                slot.count > 0
                    && market::sell_price(state.prices[*item], race) as f64 > slot.avg_cost
            })
            .map(|(item, _)| item)
            .collect()
    }

    fn best_buy(&self, game: &Game<'_>, catalog: &Catalog) -> Option<usize> {
        let state = game.state();
        let race = &catalog.races[state.race_id];
        catalog
            .commodities
            .iter()
            .enumerate()
            .filter(|(item, c)| {
                market::buy_price(state.prices[*item], race) <= state.money && c.base_price > 0
            })
            .min_by(|(a, ca), (b, cb)| {
                let ratio_a = state.prices[*a] as f64 / ca.base_price as f64;
                let ratio_b = state.prices[*b] as f64 / cb.base_price as f64;
                ratio_a.total_cmp(&ratio_b)
            })
            .map(|(item, _)| item)
    }

    /// Resolve a pending event: flee when badly hurt and fleeing is an
    /// option, roll otherwise.
    pub fn resolve_event(&self, game: &mut Game<'_>, rng: &mut impl Rng) {
        let Some(pending) = game.pending() else {
            return;
        };
        if pending.can_flee && game.state().health <= self.flee_health_floor {
            game.flee();
        } else {
            game.resolve_roll(combat::roll_d20(rng));
        }
    }
}
