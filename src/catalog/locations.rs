//! Places on the trade circuit.
//!
//! Multipliers are ordered like the commodity catalog: trinkets,
//! elfroot, salt, moonsilk, spice, mithril, dragonbone, phoenix.

use super::Location;

pub fn all() -> Vec<Location> {
    vec![
        Location {
            name: "Riverhold",
            risk: 0.15,
            multipliers: vec![1.0, 0.9, 1.0, 1.1, 1.0, 1.0, 1.1, 1.0],
        },
        Location {
            name: "Goldport",
            risk: 0.25,
            multipliers: vec![1.1, 1.2, 0.8, 0.9, 0.85, 1.1, 1.0, 0.95],
        },
        Location {
            name: "Dunmarch",
            risk: 0.10,
            multipliers: vec![0.8, 1.0, 1.2, 1.2, 1.1, 1.05, 1.2, 1.1],
        },
        Location {
            name: "Thornwood",
            risk: 0.35,
            multipliers: vec![1.0, 0.7, 1.1, 0.8, 1.2, 1.2, 0.9, 1.05],
        },
        Location {
            name: "Ashspire",
            risk: 0.45,
            multipliers: vec![1.2, 1.1, 0.9, 1.0, 0.75, 0.8, 0.7, 0.9],
        },
        Location {
            name: "Frosthaven",
            risk: 0.30,
            multipliers: vec![0.9, 1.3, 1.3, 1.0, 1.15, 0.9, 1.05, 0.8],
        },
    ]
}
