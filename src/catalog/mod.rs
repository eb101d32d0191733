//! Fixed game data: commodities, locations, races, classes, upgrades
//! and events, loaded once at startup and treated as immutable.
//!
//! All cross-references inside the catalog are plain indices, so
//! `Catalog::validate` must be called after construction to fail fast on
//! malformed data (dangling item references, bad day ranges, multiplier
//! tables that don't cover the commodity list) instead of letting a bad
//! entry surface mid-run.

mod classes;
mod commodities;
mod events;
mod locations;
mod races;
mod upgrades;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_DAYS;

pub type CommodityId = usize;
pub type LocationId = usize;
pub type RaceId = usize;
pub type ClassId = usize;
pub type UpgradeId = usize;
pub type EventId = usize;

/// A tradeable good. Spot prices derive from `base_price`; the catalog
/// order defines the index space used by inventories and price tables.
#[derive(Debug, Clone)]
pub struct Commodity {
    pub slug: &'static str,
    pub name: &'static str,
    pub base_price: i64,
}

/// A place the player can travel to.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    /// Probability in [0, 1] that an event fires on arrival.
    pub risk: f64,
    /// Price multiplier per commodity, parallel to the commodity catalog.
    pub multipliers: Vec<f64>,
}

/// Event families a race can have an edge against (+5 on the check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterTag {
    Dragon,
    Guard,
}

#[derive(Debug, Clone)]
pub struct Race {
    pub slug: &'static str,
    pub name: &'static str,
    pub inventory_bonus: i32,
    pub health_bonus: i32,
    /// Fractional discount on buy prices (negative = pays more).
    pub buy_mod: f64,
    /// Fractional bonus on sell prices (negative = sells worse).
    pub sell_mod: f64,
    pub combat: i32,
    pub nimbleness: i32,
    pub counters: &'static [CounterTag],
}

#[derive(Debug, Clone)]
pub struct Class {
    pub slug: &'static str,
    pub name: &'static str,
    pub starting_money: i64,
    pub starting_debt: i64,
}

/// What a purchased upgrade improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    /// Extra carrying capacity.
    Inventory,
    /// Flat bonus on combat checks.
    Combat,
    /// Raises max health (and current health) when bought.
    MaxHealth,
}

/// Who may buy an upgrade. `None` means unrestricted; scalar-or-array
/// source data is normalized into sets at catalog construction.
#[derive(Debug, Clone, Default)]
pub struct Requirement {
    pub races: Option<HashSet<RaceId>>,
    pub classes: Option<HashSet<ClassId>>,
}

impl Requirement {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn races_only(ids: &[RaceId]) -> Self {
        Self {
            races: Some(ids.iter().copied().collect()),
            classes: None,
        }
    }

    pub fn classes_only(ids: &[ClassId]) -> Self {
        Self {
            races: None,
            classes: Some(ids.iter().copied().collect()),
        }
    }

    pub fn allows(&self, race: RaceId, class: ClassId) -> bool {
        let race_ok = self.races.as_ref().map_or(true, |s| s.contains(&race));
        let class_ok = self.classes.as_ref().map_or(true, |s| s.contains(&class));
        race_ok && class_ok
    }
}

#[derive(Debug, Clone)]
pub struct Upgrade {
    pub slug: &'static str,
    pub name: &'static str,
    pub cost: i64,
    pub kind: UpgradeKind,
    pub value: i32,
    pub requirement: Requirement,
}

/// Which stat governs a skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStat {
    Combat,
    Nimbleness,
}

/// State change carried by an event outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Nothing,
    /// Flat gold credit or debit (money clamps at zero).
    Gold(i64),
    /// Signed fraction of current money.
    GoldPercent(f64),
    /// Signed health change (clamped to [0, max]).
    Health(i32),
    /// Free goods (fills at price zero, so they lower average cost).
    GrantItem { item: CommodityId, count: u32 },
    /// Lose held goods; `count: None` means everything held.
    LoseItem { item: CommodityId, count: Option<u32> },
    ClearDebt,
    /// Pay up if affordable, take the damage otherwise.
    PayOrHurt { amount: i64, damage: i32 },
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub text: &'static str,
    pub effect: Effect,
}

/// Outcomes for every possible check result. A struct rather than a map,
/// so a missing key is unrepresentable.
#[derive(Debug, Clone)]
pub struct OutcomeTable {
    pub crit_success: Outcome,
    pub success: Outcome,
    pub fail: Outcome,
    pub crit_fail: Outcome,
}

/// Late-game escalation: above `net_worth` the event gains extra copies
/// in the selection pool and its difficulty is overridden.
#[derive(Debug, Clone, Copy)]
pub struct Escalation {
    pub net_worth: i64,
    pub extra_weight: u32,
    pub dc: i32,
}

/// Payload per event kind; combat and check share the roll machinery,
/// but only combat offers the flee path.
#[derive(Debug, Clone)]
pub enum EventKind {
    Combat(CheckProfile),
    Check(CheckProfile),
    Heal(i32),
    Money(i64),
    /// Multiplies the carry-over price modifier.
    PriceShock(f64),
    Flavor,
}

#[derive(Debug, Clone)]
pub struct CheckProfile {
    pub dc: i32,
    pub stat: CheckStat,
    pub tag: Option<CounterTag>,
    pub outcomes: OutcomeTable,
    /// Attribution if the outcome's effect kills the player.
    pub lethal_cause: crate::state::DeathCause,
}

#[derive(Debug, Clone)]
pub struct EventDef {
    pub slug: &'static str,
    /// Narrative shown when the event fires.
    pub text: &'static str,
    pub kind: EventKind,
    pub min_day: u32,
    pub max_day: u32,
    pub requires_debt: bool,
    pub min_net_worth: i64,
    /// Relative selection frequency (copies in the flattened pool).
    pub weight: u32,
    pub escalation: Option<Escalation>,
}

/// The full immutable data set the engine runs against.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub commodities: Vec<Commodity>,
    pub locations: Vec<Location>,
    pub races: Vec<Race>,
    pub classes: Vec<Class>,
    pub upgrades: Vec<Upgrade>,
    pub events: Vec<EventDef>,
}

impl Catalog {
    /// The standard game data, validated.
    pub fn standard() -> Self {
        let catalog = Self {
            commodities: commodities::all(),
            locations: locations::all(),
            races: races::all(),
            classes: classes::all(),
            upgrades: upgrades::all(),
            events: events::all(),
        };
        debug_assert!(catalog.validate().is_ok());
        catalog
    }

    /// Integrity check; call once at load time and fail fast.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.commodities.is_empty()
            || self.locations.is_empty()
            || self.races.is_empty()
            || self.classes.is_empty()
        {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut slugs = HashSet::new();
        for c in &self.commodities {
            if c.base_price <= 0 {
                return Err(CatalogError::BadBasePrice(c.slug));
            }
            if !slugs.insert(c.slug) {
                return Err(CatalogError::DuplicateSlug(c.slug));
            }
        }

        for loc in &self.locations {
            if !(0.0..=1.0).contains(&loc.risk) {
                return Err(CatalogError::BadRisk(loc.name));
            }
            if loc.multipliers.len() != self.commodities.len() {
                return Err(CatalogError::MultiplierMismatch(loc.name));
            }
            if loc.multipliers.iter().any(|m| *m <= 0.0) {
                return Err(CatalogError::MultiplierMismatch(loc.name));
            }
        }

        for up in &self.upgrades {
            if up.cost <= 0 || up.value <= 0 {
                return Err(CatalogError::BadUpgrade(up.slug));
            }
            if let Some(races) = &up.requirement.races {
                if races.iter().any(|r| *r >= self.races.len()) {
                    return Err(CatalogError::DanglingReference(up.slug));
                }
            }
            if let Some(classes) = &up.requirement.classes {
                if classes.iter().any(|c| *c >= self.classes.len()) {
                    return Err(CatalogError::DanglingReference(up.slug));
                }
            }
        }

        for ev in &self.events {
            if ev.weight == 0 {
                return Err(CatalogError::ZeroWeight(ev.slug));
            }
            if ev.min_day > ev.max_day || ev.min_day < 1 || ev.max_day > MAX_DAYS {
                return Err(CatalogError::BadDayRange(ev.slug));
            }
            if let EventKind::Combat(profile) | EventKind::Check(profile) = &ev.kind {
                if !(2..=30).contains(&profile.dc) {
                    return Err(CatalogError::BadDifficulty(ev.slug));
                }
                for outcome in [
                    &profile.outcomes.crit_success,
                    &profile.outcomes.success,
                    &profile.outcomes.fail,
                    &profile.outcomes.crit_fail,
                ] {
                    self.check_effect(ev.slug, &outcome.effect)?;
                }
            }
            if let Some(esc) = &ev.escalation {
                if !(2..=30).contains(&esc.dc) {
                    return Err(CatalogError::BadDifficulty(ev.slug));
                }
            }
        }

        Ok(())
    }

    fn check_effect(&self, slug: &'static str, effect: &Effect) -> Result<(), CatalogError> {
        match effect {
            Effect::GrantItem { item, .. } | Effect::LoseItem { item, .. } => {
                if *item >= self.commodities.len() {
                    return Err(CatalogError::DanglingReference(slug));
                }
            }
            Effect::GoldPercent(p) => {
                if !(-1.0..=1.0).contains(p) {
                    return Err(CatalogError::BadEffect(slug));
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn commodity_id(&self, slug: &str) -> Option<CommodityId> {
        self.commodities.iter().position(|c| c.slug == slug)
    }

    pub fn race_id(&self, slug: &str) -> Option<RaceId> {
        self.races.iter().position(|r| r.slug == slug)
    }

    pub fn class_id(&self, slug: &str) -> Option<ClassId> {
        self.classes.iter().position(|c| c.slug == slug)
    }

    pub fn event_id(&self, slug: &str) -> Option<EventId> {
        self.events.iter().position(|e| e.slug == slug)
    }

    pub fn upgrade_id(&self, slug: &str) -> Option<UpgradeId> {
        self.upgrades.iter().position(|u| u.slug == slug)
    }
}

/// Malformed catalog data, reported at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    EmptyCatalog,
    DuplicateSlug(&'static str),
    BadBasePrice(&'static str),
    BadRisk(&'static str),
    MultiplierMismatch(&'static str),
    BadUpgrade(&'static str),
    ZeroWeight(&'static str),
    BadDayRange(&'static str),
    BadDifficulty(&'static str),
    BadEffect(&'static str),
    DanglingReference(&'static str),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyCatalog => write!(f, "catalog has an empty section"),
            CatalogError::DuplicateSlug(s) => write!(f, "duplicate slug: {}", s),
            CatalogError::BadBasePrice(s) => write!(f, "non-positive base price: {}", s),
            CatalogError::BadRisk(s) => write!(f, "risk outside [0, 1]: {}", s),
            CatalogError::MultiplierMismatch(s) => {
                write!(f, "multiplier table doesn't cover commodities: {}", s)
            }
            CatalogError::BadUpgrade(s) => write!(f, "non-positive upgrade cost/value: {}", s),
            CatalogError::ZeroWeight(s) => write!(f, "event weight must be >= 1: {}", s),
            CatalogError::BadDayRange(s) => write!(f, "bad event day range: {}", s),
            CatalogError::BadDifficulty(s) => write!(f, "difficulty out of range: {}", s),
            CatalogError::BadEffect(s) => write!(f, "bad effect value: {}", s),
            CatalogError::DanglingReference(s) => write!(f, "dangling catalog reference: {}", s),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_validates() {
        assert!(Catalog::standard().validate().is_ok());
    }

    #[test]
    fn test_multiplier_mismatch_rejected() {
        let mut catalog = Catalog::standard();
        catalog.locations[0].multipliers.pop();
        let name = catalog.locations[0].name;
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MultiplierMismatch(name))
        );
    }

    #[test]
    fn test_zero_weight_rejected() {
        let mut catalog = Catalog::standard();
        catalog.events[0].weight = 0;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ZeroWeight(_))
        ));
    }

    #[test]
    fn test_dangling_item_reference_rejected() {
        let mut catalog = Catalog::standard();
        let bogus = catalog.commodities.len();
        for ev in &mut catalog.events {
            if let EventKind::Combat(profile) | EventKind::Check(profile) = &mut ev.kind {
                profile.outcomes.crit_success.effect = Effect::GrantItem {
                    item: bogus,
                    count: 1,
                };
                break;
            }
        }
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DanglingReference(_))
        ));
    }

    #[test]
    fn test_requirement_normalization() {
        let req = Requirement::races_only(&[0, 2]);
        assert!(req.allows(0, 0));
        assert!(!req.allows(1, 0));

        let req = Requirement::any();
        assert!(req.allows(3, 3));

        let req = Requirement::classes_only(&[1]);
        assert!(req.allows(0, 1));
        assert!(!req.allows(0, 0));
    }

    #[test]
    fn test_slug_lookups() {
        let catalog = Catalog::standard();
        assert!(catalog.race_id("dwarf").is_some());
        assert!(catalog.class_id("merchant").is_some());
        assert!(catalog.event_id("guard_shakedown").is_some());
        assert!(catalog.commodity_id("no_such_thing").is_none());
    }
}
