use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// InventoryEntry — one owned printing, as returned by the sidecar
// ---------------------------------------------------------------------------

/// One row of the owned-card inventory: a specific printing with quantities
/// plus the enrichment snapshot denormalized from the card database at fetch
/// time. Enrichment fields are a read-only snapshot and are never written
/// back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub card_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub foil_quantity: i64,
    /// Both present or both absent in well-formed data; identifies the printing.
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    #[serde(default)]
    pub added_at: String,

    // -- Enrichment snapshot --
    #[serde(default)]
    pub colors: Vec<String>,
    pub type_line: Option<String>,
    pub rarity: Option<String>,
    #[serde(default)]
    pub cmc: f64,
    pub win_rate: Option<f64>,
    pub tier: Option<String>,
    pub draft_pick: Option<f64>,
}

impl InventoryEntry {
    /// Non-foil plus foil copies.
    pub fn total_copies(&self) -> i64 {
        self.quantity + self.foil_quantity
    }

    /// Price-lookup / selection key for this printing.
    pub fn printing_key(&self) -> String {
        crate::models::price::printing_key(
            &self.card_name,
            self.set_code.as_deref(),
            self.collector_number.as_deref(),
        )
    }
}

// ---------------------------------------------------------------------------
// Ingestion boundary
// ---------------------------------------------------------------------------

/// Normalize a freshly fetched inventory list.
///
/// Negative quantities are clamped to zero and rows left with
/// `quantity + foilQuantity == 0` are dropped: a zero-zero row is the
/// sidecar's delete signal and must not reach the pipeline. This is the one
/// place shape is repaired; downstream stages assume well-formed entries.
pub fn normalize_entries(entries: Vec<InventoryEntry>) -> Vec<InventoryEntry> {
    entries
        .into_iter()
        .filter_map(|mut entry| {
            entry.quantity = entry.quantity.max(0);
            entry.foil_quantity = entry.foil_quantity.max(0);
            if entry.total_copies() == 0 {
                return None;
            }
            Some(entry)
        })
        .collect()
}
