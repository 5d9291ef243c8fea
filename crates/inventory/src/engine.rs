//! Update engine: advances every item by one simulated day.
//!
//! Per item, in this order:
//! 1. legendary items are skipped entirely;
//! 2. `sell_in` is decremented;
//! 3. the category's quality rule runs against the *decremented* `sell_in`.
//!
//! Items never interact, and the engine has no failure path.

use crate::category::ItemCategory;
use crate::item::Item;
use crate::quality::{floor_sub, lower, raise};

/// Advance every item in `items` by one day, in place.
pub fn advance_one_day(items: &mut [Item]) {
    let _span = tracing::debug_span!("advance_one_day", items = items.len()).entered();
    for item in items.iter_mut() {
        item.advance_one_day();
    }
}

impl Item {
    /// Run one day's rules for this item alone.
    ///
    /// `sell_in` drops by one per call but stops at `i32::MIN` instead of
    /// overflowing, so an item already there keeps that value.
    pub fn advance_one_day(&mut self) {
        if self.category.is_legendary() {
            return;
        }

        let before = (self.sell_in, self.quality);

        // Decrement first: every rule below reads the new value.
        self.sell_in = self.sell_in.saturating_sub(1);
        self.quality = next_quality(self.category, self.sell_in, self.quality);

        tracing::trace!(
            name = %self.name,
            category = %self.category,
            sell_in_before = before.0,
            quality_before = before.1,
            sell_in = self.sell_in,
            quality = self.quality,
            "item advanced"
        );
    }
}

fn next_quality(category: ItemCategory, sell_in: i32, quality: i32) -> i32 {
    let expired = sell_in < 0;
    match category {
        ItemCategory::Legendary => quality,
        ItemCategory::Appreciating => raise(quality, if expired { 2 } else { 1 }),
        ItemCategory::EventTicket => {
            if expired {
                return 0;
            }
            let mut steps = 1;
            if sell_in < 10 {
                steps += 1;
            }
            if sell_in < 5 {
                steps += 1;
            }
            raise(quality, steps)
        }
        ItemCategory::FastDecaying => floor_sub(quality, if expired { 4 } else { 2 }),
        ItemCategory::Standard => lower(quality, if expired { 2 } else { 1 }),
    }
}

/// The shop: owns its items and advances them a day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn advance_one_day(&mut self) {
        advance_one_day(&mut self.items);
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }
}
