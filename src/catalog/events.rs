//! Random event definitions.
//!
//! Combat and check events carry a full outcome table; the rest resolve
//! instantly. Weights are relative copies in the selection pool. Item
//! indices follow the commodity catalog order (dragonbone = 6).

use super::{
    CheckProfile, CheckStat, CounterTag, Effect, Escalation, EventDef, EventKind, Outcome,
    OutcomeTable,
};
use crate::constants::MAX_DAYS;
use crate::state::DeathCause;

pub fn all() -> Vec<EventDef> {
    vec![
        EventDef {
            slug: "bandit_ambush",
            text: "Bandits block the road ahead, blades drawn.",
            kind: EventKind::Combat(CheckProfile {
                dc: 12,
                stat: CheckStat::Combat,
                tag: None,
                lethal_cause: DeathCause::EventDeath,
                outcomes: OutcomeTable {
                    crit_success: Outcome {
                        text: "You rout them and claim their strongbox.",
                        effect: Effect::Gold(500),
                    },
                    success: Outcome {
                        text: "You drive the bandits off.",
                        effect: Effect::Gold(150),
                    },
                    fail: Outcome {
                        text: "They beat you bloody before fleeing.",
                        effect: Effect::Health(-15),
                    },
                    crit_fail: Outcome {
                        text: "They leave you in a ditch and empty your purse.",
                        effect: Effect::GoldPercent(-0.25),
                    },
                },
            }),
            min_day: 1,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 0,
            weight: 3,
            escalation: None,
        },
        // The guard event escalates hard against very rich traders: extra
        // pool copies and a stiffer DC above the net-worth threshold.
        EventDef {
            slug: "guard_shakedown",
            text: "City guards wave your wagon down for 'inspection'.",
            kind: EventKind::Check(CheckProfile {
                dc: 12,
                stat: CheckStat::Nimbleness,
                tag: Some(CounterTag::Guard),
                lethal_cause: DeathCause::EventDeath,
                outcomes: OutcomeTable {
                    crit_success: Outcome {
                        text: "The captain waves you through with an apology.",
                        effect: Effect::Nothing,
                    },
                    success: Outcome {
                        text: "You talk your way past the checkpoint.",
                        effect: Effect::Nothing,
                    },
                    fail: Outcome {
                        text: "They levy a 'road tax' on your coin.",
                        effect: Effect::GoldPercent(-0.10),
                    },
                    crit_fail: Outcome {
                        text: "They confiscate a tenth of your coin and rough you up.",
                        effect: Effect::PayOrHurt {
                            amount: 2_000,
                            damage: 20,
                        },
                    },
                },
            }),
            min_day: 1,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 0,
            weight: 2,
            escalation: Some(Escalation {
                net_worth: 1_000_000,
                extra_weight: 10,
                dc: 16,
            }),
        },
        EventDef {
            slug: "dragon_raid",
            text: "A dragon wheels overhead, drawn by the scent of treasure.",
            kind: EventKind::Combat(CheckProfile {
                dc: 15,
                stat: CheckStat::Combat,
                tag: Some(CounterTag::Dragon),
                lethal_cause: DeathCause::EventDeath,
                outcomes: OutcomeTable {
                    crit_success: Outcome {
                        text: "You fell the beast. Dragonbone for the markets!",
                        effect: Effect::GrantItem { item: 6, count: 3 },
                    },
                    success: Outcome {
                        text: "You wound it and it retreats, dropping a talon.",
                        effect: Effect::GrantItem { item: 6, count: 1 },
                    },
                    fail: Outcome {
                        text: "Dragonfire sears you as you dive for cover.",
                        effect: Effect::Health(-30),
                    },
                    crit_fail: Outcome {
                        text: "It torches half your fortune and leaves you broken.",
                        effect: Effect::GoldPercent(-0.50),
                    },
                },
            }),
            min_day: 8,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 50_000,
            weight: 1,
            escalation: None,
        },
        EventDef {
            slug: "debt_collector",
            text: "The moneylender's enforcer has tracked you down.",
            kind: EventKind::Combat(CheckProfile {
                dc: 13,
                stat: CheckStat::Combat,
                tag: None,
                lethal_cause: DeathCause::DebtCollection,
                outcomes: OutcomeTable {
                    crit_success: Outcome {
                        text: "You take his ledger. Your slate is wiped clean.",
                        effect: Effect::ClearDebt,
                    },
                    success: Outcome {
                        text: "You send him home empty-handed.",
                        effect: Effect::Nothing,
                    },
                    fail: Outcome {
                        text: "Pay up, or his cudgel does the collecting.",
                        effect: Effect::PayOrHurt {
                            amount: 1_000,
                            damage: 25,
                        },
                    },
                    crit_fail: Outcome {
                        text: "He brought friends. This collection is not gentle.",
                        effect: Effect::PayOrHurt {
                            amount: 3_000,
                            damage: 50,
                        },
                    },
                },
            }),
            min_day: 2,
            max_day: MAX_DAYS,
            requires_debt: true,
            min_net_worth: 0,
            weight: 2,
            escalation: None,
        },
        EventDef {
            slug: "pickpocket",
            text: "A hand brushes your coin pouch in the market crowd.",
            kind: EventKind::Check(CheckProfile {
                dc: 11,
                stat: CheckStat::Nimbleness,
                tag: None,
                lethal_cause: DeathCause::EventDeath,
                outcomes: OutcomeTable {
                    crit_success: Outcome {
                        text: "You catch the thief and keep his purse too.",
                        effect: Effect::Gold(250),
                    },
                    success: Outcome {
                        text: "You slap the hand away in time.",
                        effect: Effect::Nothing,
                    },
                    fail: Outcome {
                        text: "The cutpurse melts into the crowd with your coin.",
                        effect: Effect::Gold(-300),
                    },
                    crit_fail: Outcome {
                        text: "A whole gang worked you over. The pouch is gone.",
                        effect: Effect::GoldPercent(-0.15),
                    },
                },
            }),
            min_day: 1,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 0,
            weight: 3,
            escalation: None,
        },
        EventDef {
            slug: "troll_toll",
            text: "A bridge troll names a price. Its club names another.",
            kind: EventKind::Check(CheckProfile {
                dc: 10,
                stat: CheckStat::Combat,
                tag: None,
                lethal_cause: DeathCause::EventDeath,
                outcomes: OutcomeTable {
                    crit_success: Outcome {
                        text: "The troll flees. Under the bridge: a traveler's cache.",
                        effect: Effect::Gold(400),
                    },
                    success: Outcome {
                        text: "You stare it down and cross for free.",
                        effect: Effect::Nothing,
                    },
                    fail: Outcome {
                        text: "Toll paid, the hard way or the expensive way.",
                        effect: Effect::PayOrHurt {
                            amount: 500,
                            damage: 15,
                        },
                    },
                    crit_fail: Outcome {
                        text: "It shakes you upside down over the railing.",
                        effect: Effect::GoldPercent(-0.20),
                    },
                },
            }),
            min_day: 1,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 0,
            weight: 2,
            escalation: None,
        },
        EventDef {
            slug: "herbalist",
            text: "A wandering herbalist shares a restorative draught.",
            kind: EventKind::Heal(25),
            min_day: 1,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 0,
            weight: 2,
            escalation: None,
        },
        EventDef {
            slug: "found_purse",
            text: "A fat purse lies in the mud, no owner in sight.",
            kind: EventKind::Money(300),
            min_day: 1,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 0,
            weight: 2,
            escalation: None,
        },
        EventDef {
            slug: "market_crash",
            text: "Word spreads of a glutted market. Prices tumble everywhere.",
            kind: EventKind::PriceShock(0.6),
            min_day: 3,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 0,
            weight: 1,
            escalation: None,
        },
        EventDef {
            slug: "caravan_boom",
            text: "A royal wedding has merchants paying anything for goods.",
            kind: EventKind::PriceShock(1.6),
            min_day: 1,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 0,
            weight: 1,
            escalation: None,
        },
        EventDef {
            slug: "minstrel",
            text: "A minstrel trades a song for a seat by your fire.",
            kind: EventKind::Flavor,
            min_day: 1,
            max_day: MAX_DAYS,
            requires_debt: false,
            min_net_worth: 0,
            weight: 2,
            escalation: None,
        },
    ]
}
