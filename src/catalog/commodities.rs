//! The tradeable goods, cheapest to dearest.

use super::Commodity;

pub fn all() -> Vec<Commodity> {
    vec![
        Commodity {
            slug: "trinkets",
            name: "Copper Trinkets",
            base_price: 15,
        },
        Commodity {
            slug: "elfroot",
            name: "Elfroot",
            base_price: 55,
        },
        Commodity {
            slug: "salt",
            name: "Rock Salt",
            base_price: 130,
        },
        Commodity {
            slug: "moonsilk",
            name: "Moonsilk",
            base_price: 420,
        },
        Commodity {
            slug: "spice",
            name: "Embergrain Spice",
            base_price: 900,
        },
        Commodity {
            slug: "mithril",
            name: "Mithril Dust",
            base_price: 2_400,
        },
        Commodity {
            slug: "dragonbone",
            name: "Dragonbone",
            base_price: 7_500,
        },
        Commodity {
            slug: "phoenix",
            name: "Phoenix Feathers",
            base_price: 21_000,
        },
    ]
}
