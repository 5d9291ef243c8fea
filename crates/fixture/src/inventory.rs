use std::path::Path;

use gildedrose_inventory::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MANA_CAKE, Item, LEGENDARY_QUALITY, SULFURAS,
};

use crate::error::{FixtureError, FixtureResult};

/// The starter shop every simulation runs against unless told otherwise.
pub fn default_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, LEGENDARY_QUALITY),
        Item::new(SULFURAS, -1, LEGENDARY_QUALITY),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED_MANA_CAKE, 3, 6),
    ]
}

/// Parse a JSON array of `{ "name", "sell_in", "quality" }` records.
///
/// Values are taken as-is; nothing is clamped or rejected beyond the JSON shape.
pub fn parse_inventory(origin: &str, json: &str) -> FixtureResult<Vec<Item>> {
    serde_json::from_str(json).map_err(|source| FixtureError::Parse {
        origin: origin.to_string(),
        source,
    })
}

pub fn load_inventory(path: impl AsRef<Path>) -> FixtureResult<Vec<Item>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_inventory(&path.display().to_string(), &json)?;
    tracing::debug!(path = %path.display(), items = items.len(), "inventory loaded");
    Ok(items)
}
