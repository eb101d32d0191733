//! Purchasable upgrades.
//!
//! Requirement indices follow catalog order: races are human(0),
//! dwarf(1), elf(2), halfling(3), orc(4); classes are merchant(0),
//! noble(1), smuggler(2), pauper(3).

use super::{Requirement, Upgrade, UpgradeKind};

pub fn all() -> Vec<Upgrade> {
    vec![
        Upgrade {
            slug: "pack_mule",
            name: "Pack Mule",
            cost: 800,
            kind: UpgradeKind::Inventory,
            value: 20,
            requirement: Requirement::any(),
        },
        Upgrade {
            slug: "trade_wagon",
            name: "Trade Wagon",
            cost: 3_000,
            kind: UpgradeKind::Inventory,
            value: 50,
            requirement: Requirement::classes_only(&[0, 1]),
        },
        Upgrade {
            slug: "steel_sword",
            name: "Steel Sword",
            cost: 1_200,
            kind: UpgradeKind::Combat,
            value: 2,
            requirement: Requirement::any(),
        },
        Upgrade {
            slug: "claymore",
            name: "Dwarven Claymore",
            cost: 4_500,
            kind: UpgradeKind::Combat,
            value: 4,
            requirement: Requirement::races_only(&[1, 4]),
        },
        Upgrade {
            slug: "chainmail",
            name: "Chainmail Hauberk",
            cost: 2_500,
            kind: UpgradeKind::MaxHealth,
            value: 25,
            requirement: Requirement::any(),
        },
        Upgrade {
            slug: "hidden_pockets",
            name: "Hidden Pockets",
            cost: 1_000,
            kind: UpgradeKind::Inventory,
            value: 10,
            requirement: Requirement::classes_only(&[2]),
        },
    ]
}
