use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Collection-level DTOs: stats, value history, import parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total_cards: i64,
    pub distinct_names: i64,
    pub total_foils: i64,
    pub total_value: f64,
    #[serde(default)]
    pub by_rarity: Vec<RarityCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RarityCount {
    pub rarity: String,
    pub count: i64,
}

/// One point of the collection's recorded value over time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePoint {
    pub recorded_at: String,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Import parsing — the sidecar parses pasted decklist/CSV text
// ---------------------------------------------------------------------------

/// Result of parsing pasted import text. Unrecognized lines come back in
/// `warnings`/`errors`; rows are not re-validated locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedImport {
    #[serde(default)]
    pub rows: Vec<ImportRow>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRow {
    pub card_name: String,
    pub quantity: i64,
    #[serde(default)]
    pub foil_quantity: i64,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
}

/// Requested quantity change for one printing. Both quantities at zero is
/// the delete signal for that printing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUpdate {
    pub card_name: String,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    pub quantity: i64,
    pub foil_quantity: i64,
}
