use serde::{Deserialize, Serialize};

/// The legendary item; never sold, never degrades.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Rule category an item is updated under.
///
/// Resolved once from the item name when the item is constructed. The mapping
/// is closed: any name not listed below is `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCategory {
    /// `Sulfuras, Hand of Ragnaros`: untouched by every cycle.
    Legendary,
    /// `Aged Brie`: gains quality as it ages, twice as fast past the deadline.
    Appreciating,
    /// Backstage passes: gain more as the concert approaches, worthless after it.
    EventTicket,
    /// `Conjured Mana Cake`: degrades twice as fast as a standard item.
    FastDecaying,
    Standard,
}

impl ItemCategory {
    /// Exact, case-sensitive lookup. Unknown names fall back to `Standard`.
    pub fn from_name(name: &str) -> Self {
        match name {
            SULFURAS => ItemCategory::Legendary,
            AGED_BRIE => ItemCategory::Appreciating,
            BACKSTAGE_PASSES => ItemCategory::EventTicket,
            CONJURED_MANA_CAKE => ItemCategory::FastDecaying,
            _ => ItemCategory::Standard,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == ItemCategory::Legendary
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemCategory::Legendary => "legendary",
            ItemCategory::Appreciating => "appreciating",
            ItemCategory::EventTicket => "event-ticket",
            ItemCategory::FastDecaying => "fast-decaying",
            ItemCategory::Standard => "standard",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
