//! Playable races and their trading/combat leanings.

use super::{CounterTag, Race};

pub fn all() -> Vec<Race> {
    vec![
        Race {
            slug: "human",
            name: "Human",
            inventory_bonus: 0,
            health_bonus: 0,
            buy_mod: 0.0,
            sell_mod: 0.0,
            combat: 1,
            nimbleness: 1,
            counters: &[],
        },
        // Dwarves shrug off dragonfire and haul more, but haggle poorly.
        Race {
            slug: "dwarf",
            name: "Dwarf",
            inventory_bonus: 10,
            health_bonus: 20,
            buy_mod: 0.0,
            sell_mod: -0.05,
            combat: 2,
            nimbleness: -1,
            counters: &[CounterTag::Dragon],
        },
        Race {
            slug: "elf",
            name: "Elf",
            inventory_bonus: -5,
            health_bonus: -10,
            buy_mod: 0.05,
            sell_mod: 0.05,
            combat: 0,
            nimbleness: 2,
            counters: &[],
        },
        // Halflings talk their way past patrols.
        Race {
            slug: "halfling",
            name: "Halfling",
            inventory_bonus: -10,
            health_bonus: -15,
            buy_mod: 0.03,
            sell_mod: 0.02,
            combat: -1,
            nimbleness: 3,
            counters: &[CounterTag::Guard],
        },
        Race {
            slug: "orc",
            name: "Orc",
            inventory_bonus: 5,
            health_bonus: 30,
            buy_mod: -0.02,
            sell_mod: -0.05,
            combat: 3,
            nimbleness: -2,
            counters: &[],
        },
    ]
}
