//! The per-run economy state and its derived quantities.
//!
//! Everything a run owns lives here; the catalog is only ever referenced
//! by index. `money - debt` is allowed to go negative internally (it
//! decides Win vs Bankrupt); only the reported score clamps at zero.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Catalog, ClassId, LocationId, RaceId, UpgradeId, UpgradeKind};
use crate::constants::{BASE_CAPACITY, BASE_MAX_HEALTH, LOG_CAPACITY, MAX_DAYS};
use crate::market;

/// One commodity holding: how many units and the running weighted
/// average of every fill price paid for them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InventorySlot {
    pub count: u32,
    pub avg_cost: f64,
}

impl InventorySlot {
    /// Fold `qty` units bought at `fill_price` into the weighted average.
    pub fn fill(&mut self, qty: u32, fill_price: i64) {
        let prior = self.count as f64 * self.avg_cost;
        let added = qty as f64 * fill_price as f64;
        self.count += qty;
        self.avg_cost = (prior + added) / self.count as f64;
    }

    /// Remove `qty` units; dropping to zero resets the average.
    pub fn drain(&mut self, qty: u32) {
        self.count = self.count.saturating_sub(qty);
        if self.count == 0 {
            self.avg_cost = 0.0;
        }
    }
}

/// Running tally of resolved checks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CombatStats {
    pub wins: u32,
    pub losses: u32,
    pub flees: u32,
}

/// Where a run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Active,
    /// Day limit reached with `money - debt >= 0`.
    Won,
    /// Day limit reached still underwater.
    Bankrupt,
    Dead,
    Quit,
}

/// What killed the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Bleed,
    EventDeath,
    DebtCollection,
}

/// Display classification for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTone {
    Good,
    Bad,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLine {
    pub day: u32,
    pub tone: LogTone,
    pub text: String,
}

/// Full state of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub run_id: String,
    pub race_id: RaceId,
    pub class_id: ClassId,
    pub money: i64,
    pub debt: i64,
    pub day: u32,
    pub health: i32,
    pub max_health: i32,
    /// Multiplicative carry-over from price-shock events.
    pub price_mod: f64,
    pub location_id: LocationId,
    /// Spot prices, parallel to the commodity catalog.
    pub prices: Vec<i64>,
    /// Holdings, parallel to the commodity catalog.
    pub inventory: Vec<InventorySlot>,
    pub upgrades: Vec<UpgradeId>,
    pub traded_this_turn: bool,
    pub combat_stats: CombatStats,
    pub status: RunStatus,
    pub cause: Option<DeathCause>,
    pub log: VecDeque<LogLine>,
}

impl GameState {
    /// Fresh run from a race/class selection. Prices are rolled for a
    /// random starting location.
    pub fn new(catalog: &Catalog, race_id: RaceId, class_id: ClassId, rng: &mut impl Rng) -> Self {
        let race = &catalog.races[race_id];
        let class = &catalog.classes[class_id];
        let max_health = BASE_MAX_HEALTH + race.health_bonus;
        let location_id = rng.gen_range(0..catalog.locations.len());
        let prices = market::recalc_prices(catalog, location_id, 1.0, rng);

        Self {
            run_id: Uuid::new_v4().to_string(),
            race_id,
            class_id,
            money: class.starting_money,
            debt: class.starting_debt,
            day: 1,
            health: max_health,
            max_health,
            price_mod: 1.0,
            location_id,
            prices,
            inventory: vec![InventorySlot::default(); catalog.commodities.len()],
            upgrades: Vec::new(),
            traded_this_turn: false,
            combat_stats: CombatStats::default(),
            status: RunStatus::Active,
            cause: None,
            log: VecDeque::new(),
        }
    }

    /// Carrying capacity, derived from race and owned upgrades.
    pub fn max_inventory(&self, catalog: &Catalog) -> u32 {
        let race = &catalog.races[self.race_id];
        let upgrade_bonus: i32 = self
            .upgrades
            .iter()
            .map(|&id| &catalog.upgrades[id])
            .filter(|u| u.kind == UpgradeKind::Inventory)
            .map(|u| u.value)
            .sum();
        (BASE_CAPACITY as i32 + race.inventory_bonus + upgrade_bonus).max(0) as u32
    }

    /// Flat check bonus accumulated from combat upgrades.
    pub fn combat_bonus(&self, catalog: &Catalog) -> i32 {
        self.upgrades
            .iter()
            .map(|&id| &catalog.upgrades[id])
            .filter(|u| u.kind == UpgradeKind::Combat)
            .map(|u| u.value)
            .sum()
    }

    /// Total units held across all commodities.
    pub fn total_count(&self) -> u32 {
        self.inventory.iter().map(|s| s.count).sum()
    }

    /// Money plus the sell value of everything held, at current prices.
    pub fn net_worth(&self, catalog: &Catalog) -> i64 {
        let race = &catalog.races[self.race_id];
        let holdings: i64 = self
            .inventory
            .iter()
            .zip(&self.prices)
            .map(|(slot, &spot)| slot.count as i64 * market::sell_price(spot, race))
            .sum();
        self.money + holdings
    }

    /// Unclamped `money - debt`, used for Win/Bankrupt classification.
    pub fn raw_score(&self) -> i64 {
        self.money - self.debt
    }

    /// Leaderboard score, clamped at zero.
    pub fn score(&self) -> i64 {
        self.raw_score().max(0)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_final_day(&self) -> bool {
        self.day >= MAX_DAYS
    }

    /// Apply damage or healing, clamped to [0, max_health].
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = (self.health + delta).clamp(0, self.max_health);
    }

    /// Credit or debit money, clamped at zero.
    pub fn adjust_money(&mut self, delta: i64) {
        self.money = (self.money + delta).max(0);
    }

    pub fn push_log(&mut self, tone: LogTone, text: impl Into<String>) {
        if self.log.len() >= LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(LogLine {
            day: self.day,
            tone,
            text: text.into(),
        });
    }

    /// Mark the run dead with the given attribution. First cause wins.
    pub fn kill(&mut self, cause: DeathCause) {
        if self.status == RunStatus::Active {
            self.status = RunStatus::Dead;
            self.cause = Some(cause);
        }
    }
}
