use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Deck — summary row and full deck with card list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub id: String,
    pub name: String,
    pub format: Option<String>,
    pub commander: Option<String>,
    #[serde(default)]
    pub card_count: i64,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub name: String,
    pub format: Option<String>,
    pub commander: Option<String>,
    #[serde(default)]
    pub cards: Vec<DeckCard>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCard {
    pub card_name: String,
    pub quantity: i64,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    #[serde(default)]
    pub is_foil: bool,
}

// ---------------------------------------------------------------------------
// Analysis — deck-health scoring and impact, opaque to this layer
// ---------------------------------------------------------------------------

/// Deck-health report computed by the sidecar. Scores and archetype labels
/// are consumed for display only; their semantics live server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckAnalysis {
    pub deck_id: String,
    pub health_score: Option<f64>,
    pub archetype: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub curve: Vec<CurvePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub cmc: f64,
    pub count: i64,
}

/// What adding one card would do to a deck's analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImpact {
    pub card_name: String,
    pub score_delta: Option<f64>,
    #[serde(default)]
    pub notes: Vec<String>,
}
