use serde::Serialize;

use gildedrose_inventory::{GildedRose, Item};

/// Inventory state at the start of `day` (day 0 is the initial state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

/// Every recorded state of a run, in day order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simulation {
    pub days: Vec<DaySnapshot>,
}

impl Simulation {
    /// State after the last simulated day.
    pub fn final_state(&self) -> &[Item] {
        self.days.last().map(|d| d.items.as_slice()).unwrap_or(&[])
    }
}

/// Advance `items` through `days` cycles, recording day 0 and every day after.
pub fn simulate(items: Vec<Item>, days: u32) -> Simulation {
    let _span = tracing::info_span!("simulate", items = items.len(), days).entered();

    let mut shop = GildedRose::new(items);
    let mut snapshots = Vec::with_capacity(days as usize + 1);
    snapshots.push(DaySnapshot {
        day: 0,
        items: shop.items().to_vec(),
    });

    for day in 1..=days {
        shop.advance_one_day();
        snapshots.push(DaySnapshot {
            day,
            items: shop.items().to_vec(),
        });
    }

    tracing::info!(snapshots = snapshots.len(), "simulation finished");
    Simulation { days: snapshots }
}
