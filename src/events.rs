//! Weighted random event selection and instant-effect resolution.
//!
//! Per turn: one risk roll against the location, an eligibility filter
//! over the event catalog, then a uniform draw from a flattened pool in
//! which each event appears `weight` times. Combat and check events
//! hand back a `PendingCheck` for the roll phase; everything else
//! resolves on the spot.

use rand::Rng;

use crate::catalog::{Catalog, EventId, EventKind};
use crate::constants::FLAVOR_HEAL;
use crate::effects::{self, EffectReport};
use crate::state::{DeathCause, GameState, LogTone};

/// A combat/check event waiting on a d20, with any escalated DC already
/// baked in at selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCheck {
    pub event_id: EventId,
    pub dc: i32,
    /// Only combat events offer the flee path.
    pub can_flee: bool,
}

/// What the resolver did this turn.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Risk roll passed quietly; nothing fired.
    Quiet,
    /// An instant event fired and its effect is already applied.
    Instant {
        event_id: EventId,
        report: EffectReport,
    },
    /// A combat or check event fired; a roll is owed.
    Check(PendingCheck),
}

/// Events passing the eligibility predicate for the current state.
pub fn eligible_events(state: &GameState, catalog: &Catalog) -> Vec<EventId> {
    let net_worth = state.net_worth(catalog);
    catalog
        .events
        .iter()
        .enumerate()
        .filter(|(_, ev)| {
            net_worth >= ev.min_net_worth
                && (!ev.requires_debt || state.debt > 0)
                && (ev.min_day..=ev.max_day).contains(&state.day)
        })
        .map(|(id, _)| id)
        .collect()
}

/// Flattened selection pool: `weight` copies per eligible event, plus
/// escalation copies for events past their net-worth threshold.
fn build_pool(state: &GameState, catalog: &Catalog, eligible: &[EventId]) -> Vec<EventId> {
    let net_worth = state.net_worth(catalog);
    let mut pool = Vec::new();
    for &id in eligible {
        let ev = &catalog.events[id];
        let mut copies = ev.weight;
        if let Some(esc) = &ev.escalation {
            if net_worth > esc.net_worth {
                copies += esc.extra_weight;
            }
        }
        pool.extend(std::iter::repeat(id).take(copies as usize));
    }
    pool
}

/// Effective difficulty for a pending event, honoring escalation.
pub fn effective_dc(state: &GameState, catalog: &Catalog, event_id: EventId) -> Option<i32> {
    let ev = &catalog.events[event_id];
    let profile = match &ev.kind {
        EventKind::Combat(p) | EventKind::Check(p) => p,
        _ => return None,
    };
    if let Some(esc) = &ev.escalation {
        if state.net_worth(catalog) > esc.net_worth {
            return Some(esc.dc);
        }
    }
    Some(profile.dc)
}

/// Run the per-turn event machine. Instant effects are applied and
/// logged before returning; price recalculation stays with the caller.
pub fn roll_event(state: &mut GameState, catalog: &Catalog, rng: &mut impl Rng) -> EventOutcome {
    let risk = catalog.locations[state.location_id].risk;
    if rng.gen::<f64>() >= risk {
        return EventOutcome::Quiet;
    }

    let eligible = eligible_events(state, catalog);
    let pool = build_pool(state, catalog, &eligible);
    if pool.is_empty() {
        return EventOutcome::Quiet;
    }
    let event_id = pool[rng.gen_range(0..pool.len())];
    let ev = &catalog.events[event_id];

    match &ev.kind {
        EventKind::Combat(_) => {
            let dc = effective_dc(state, catalog, event_id).unwrap_or(10);
            state.push_log(LogTone::Neutral, ev.text);
            EventOutcome::Check(PendingCheck {
                event_id,
                dc,
                can_flee: true,
            })
        }
        EventKind::Check(_) => {
            let dc = effective_dc(state, catalog, event_id).unwrap_or(10);
            state.push_log(LogTone::Neutral, ev.text);
            EventOutcome::Check(PendingCheck {
                event_id,
                dc,
                can_flee: false,
            })
        }
        EventKind::Heal(amount) => {
            state.adjust_health(*amount);
            let report = EffectReport {
                tone: LogTone::Good,
                detail: format!("+{} health", amount),
            };
            state.push_log(report.tone, format!("{} ({})", ev.text, report.detail));
            EventOutcome::Instant { event_id, report }
        }
        EventKind::Money(amount) => {
            let report = effects::apply(
                state,
                catalog,
                crate::catalog::Effect::Gold(*amount),
                DeathCause::EventDeath,
            );
            state.push_log(report.tone, format!("{} ({})", ev.text, report.detail));
            EventOutcome::Instant { event_id, report }
        }
        EventKind::PriceShock(factor) => {
            // Shocks compound until another shock overwrites the carry-over.
            state.price_mod *= factor;
            let report = EffectReport {
                tone: LogTone::Neutral,
                detail: format!("prices x{:.2}", factor),
            };
            state.push_log(report.tone, format!("{} ({})", ev.text, report.detail));
            EventOutcome::Instant { event_id, report }
        }
        EventKind::Flavor => {
            state.adjust_health(FLAVOR_HEAL);
            let report = EffectReport {
                tone: LogTone::Neutral,
                detail: format!("+{} health", FLAVOR_HEAL),
            };
            state.push_log(report.tone, format!("{} ({})", ev.text, report.detail));
            EventOutcome::Instant { event_id, report }
        }
    }
}
