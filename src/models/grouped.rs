use serde::Serialize;

use crate::models::inventory::InventoryEntry;

// ---------------------------------------------------------------------------
// GroupedCard — one display row per distinct card name
// ---------------------------------------------------------------------------

/// Aggregation of all owned printings of one card name.
///
/// `total_price` values the whole holding (unit price × copies, unknown
/// prices counting as zero); `max_card_price` ranks by the single most
/// valuable printing and deliberately ignores quantities. Display metadata
/// is snapshotted from the first-encountered printing in input order and is
/// not reconciled across printings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedCard {
    pub card_name: String,
    pub total_quantity: i64,
    pub total_foil_quantity: i64,
    pub total_price: f64,
    pub max_card_price: f64,
    pub printings: Vec<InventoryEntry>,
    pub has_multiple_printings: bool,

    // -- Display metadata from the first-encountered printing --
    pub rarity: Option<String>,
    pub cmc: f64,
    pub type_line: Option<String>,
    pub colors: Vec<String>,
    pub win_rate: Option<f64>,
    pub tier: Option<String>,
    pub draft_pick: Option<f64>,
    pub added_at: String,
    pub set_code: Option<String>,
}

impl GroupedCard {
    /// Combined foil + non-foil copies across all printings.
    pub fn total_copies(&self) -> i64 {
        self.total_quantity + self.total_foil_quantity
    }
}
