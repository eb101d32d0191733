//! Caravan - Trading Adventure Game Engine
//!
//! The deterministic economy and event-resolution core for a
//! travel-and-trade game: commodity prices, inventory accounting,
//! compounding debt, and d20 skill checks. The presentation and
//! persistence layers live elsewhere; everything here is pure state
//! transitions plus an explicit RNG, so the whole game can be unit
//! tested and bulk simulated.

pub mod catalog;
pub mod combat;
pub mod constants;
pub mod effects;
pub mod events;
pub mod game;
pub mod inventory;
pub mod market;
pub mod simulator;
pub mod state;
pub mod summary;

pub use catalog::Catalog;
pub use game::Game;
pub use state::GameState;
