use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Suggestion DTOs — synergies, combos, recommendations
// ---------------------------------------------------------------------------
// All scoring is computed by the sidecar; these are display contracts only.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synergy {
    pub card_name: String,
    pub partner_name: String,
    pub score: f64,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combo {
    #[serde(default)]
    pub pieces: Vec<String>,
    pub result: Option<String>,
    pub color_identity: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommanderSuggestion {
    pub card_name: String,
    pub score: f64,
    #[serde(default)]
    pub owned_support: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeSuggestion {
    pub archetype: String,
    pub score: f64,
    #[serde(default)]
    pub key_cards: Vec<String>,
}

/// A suggested replacement: swap `cut_name` for `add_name` in a deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeSuggestion {
    pub cut_name: String,
    pub add_name: String,
    pub score_delta: Option<f64>,
    pub reason: Option<String>,
}
