//! Inventory domain module.
//!
//! This crate contains the daily quality/deadline rules for the shop's items,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod engine;
pub mod item;
pub mod quality;

pub use category::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MANA_CAKE, ItemCategory, SULFURAS,
};
pub use engine::{GildedRose, advance_one_day};
pub use item::Item;
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
