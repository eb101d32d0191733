//! Starting loadouts: how much coin you begin with, and how much of it
//! the moneylender owns.

use super::Class;

pub fn all() -> Vec<Class> {
    vec![
        Class {
            slug: "merchant",
            name: "Merchant",
            starting_money: 2_000,
            starting_debt: 5_500,
        },
        Class {
            slug: "noble",
            name: "Noble",
            starting_money: 5_000,
            starting_debt: 9_000,
        },
        Class {
            slug: "smuggler",
            name: "Smuggler",
            starting_money: 1_500,
            starting_debt: 2_500,
        },
        Class {
            slug: "pauper",
            name: "Pauper",
            starting_money: 600,
            starting_debt: 0,
        },
    ]
}
