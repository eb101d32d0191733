//! Spot price generation.
//!
//! Each recalculation is memoryless: volatility is drawn fresh per
//! commodity, and only the carry-over `price_mod` from price-shock
//! events links one day's prices to the next. Buy and sell prices are
//! always derived from the spot, never stored.

use rand::Rng;

use crate::catalog::{Catalog, LocationId, Race};
use crate::constants::{SELL_MARGIN, VOLATILITY_MAX, VOLATILITY_MIN};

/// Roll a full price table for `location_id`.
///
/// `price = floor(base * volatility * location_multiplier * price_mod)`
/// with volatility uniform in [0.25, 2.25).
pub fn recalc_prices(
    catalog: &Catalog,
    location_id: LocationId,
    price_mod: f64,
    rng: &mut impl Rng,
) -> Vec<i64> {
    let location = &catalog.locations[location_id];
    catalog
        .commodities
        .iter()
        .zip(&location.multipliers)
        .map(|(commodity, &multiplier)| {
            let volatility = rng.gen_range(VOLATILITY_MIN..VOLATILITY_MAX);
            (commodity.base_price as f64 * volatility * multiplier * price_mod).floor() as i64
        })
        .collect()
}

/// What the player pays per unit, after the racial haggling modifier.
pub fn buy_price(spot: i64, race: &Race) -> i64 {
    (spot as f64 * (1.0 - race.buy_mod)).ceil() as i64
}

/// What the player receives per unit: the fixed house margin below spot,
/// adjusted by the racial selling modifier.
pub fn sell_price(spot: i64, race: &Race) -> i64 {
    (spot as f64 * SELL_MARGIN * (1.0 + race.sell_mod)).floor() as i64
}
