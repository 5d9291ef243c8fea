use serde::{Deserialize, Serialize};

use crate::category::ItemCategory;

/// A shop item: a name, days left to sell it, and its current quality.
///
/// Construction accepts any values. The rule category is resolved from the
/// name here, once, and the name is never reassigned afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    pub(crate) name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
    #[serde(skip_serializing)]
    pub(crate) category: ItemCategory,
}

/// Wire shape of an item; the category is derived, never read.
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::from_name(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left before the deadline; negative once it has passed.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
