//! Trading operations against the inventory ledger.
//!
//! Every guard condition (full hold, empty purse, nothing to sell) is a
//! silent no-op reported through `TradeOutcome`, never an error. Each
//! operation is atomic against one state snapshot.

use crate::catalog::{Catalog, CommodityId};
use crate::market;
use crate::state::GameState;

/// What a trade attempt did, for the caller's advisory message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeOutcome {
    Bought { qty: u32, unit_price: i64 },
    Sold { qty: u32, unit_price: i64 },
    NoSpace,
    NoFunds,
    NothingHeld,
    UnknownItem,
    /// The run is finished or an event is waiting on a roll; only the
    /// facade produces this.
    Blocked,
}

impl TradeOutcome {
    /// Did any state change happen?
    pub fn traded(&self) -> bool {
        matches!(self, TradeOutcome::Bought { .. } | TradeOutcome::Sold { .. })
    }
}

/// Buy a single unit at the current buy price.
pub fn buy_one(state: &mut GameState, catalog: &Catalog, item: CommodityId) -> TradeOutcome {
    buy(state, catalog, item, 1)
}

/// Buy as many units as space and money allow.
pub fn buy_max(state: &mut GameState, catalog: &Catalog, item: CommodityId) -> TradeOutcome {
    buy(state, catalog, item, u32::MAX)
}

fn buy(state: &mut GameState, catalog: &Catalog, item: CommodityId, want: u32) -> TradeOutcome {
    if item >= catalog.commodities.len() {
        return TradeOutcome::UnknownItem;
    }
    let race = &catalog.races[state.race_id];
    let unit_price = market::buy_price(state.prices[item], race);

    let space = state.max_inventory(catalog).saturating_sub(state.total_count());
    if space == 0 {
        return TradeOutcome::NoSpace;
    }
    let affordable = if unit_price > 0 {
        (state.money / unit_price).min(u32::MAX as i64) as u32
    } else {
        want.min(space)
    };
    if affordable == 0 {
        return TradeOutcome::NoFunds;
    }

    let qty = want.min(space).min(affordable);
    state.money -= qty as i64 * unit_price;
    state.inventory[item].fill(qty, unit_price);
    state.traded_this_turn = true;
    TradeOutcome::Bought { qty, unit_price }
}

/// Sell a single unit at the current sell price.
pub fn sell_one(state: &mut GameState, catalog: &Catalog, item: CommodityId) -> TradeOutcome {
    sell(state, catalog, item, 1)
}

/// Sell the entire holding of one commodity.
pub fn sell_all(state: &mut GameState, catalog: &Catalog, item: CommodityId) -> TradeOutcome {
    sell(state, catalog, item, u32::MAX)
}

fn sell(state: &mut GameState, catalog: &Catalog, item: CommodityId, want: u32) -> TradeOutcome {
    if item >= catalog.commodities.len() {
        return TradeOutcome::UnknownItem;
    }
    let held = state.inventory[item].count;
    if held == 0 {
        return TradeOutcome::NothingHeld;
    }

    let race = &catalog.races[state.race_id];
    let unit_price = market::sell_price(state.prices[item], race);
    let qty = want.min(held);

    state.money += qty as i64 * unit_price;
    state.inventory[item].drain(qty);
    state.traded_this_turn = true;
    TradeOutcome::Sold { qty, unit_price }
}
