//! Suggestion endpoints: synergies, combos, and recommendations.

use serde_json::json;

use crate::client::Bridge;
use crate::error::Result;
use crate::models::suggest::{
    ArchetypeSuggestion, Combo, CommanderSuggestion, Synergy, UpgradeSuggestion,
};

/// Query interface for the sidecar's suggestion engines.
pub struct SuggestionQuery<'a> {
    bridge: &'a Bridge,
}

impl<'a> SuggestionQuery<'a> {
    /// Create a new `SuggestionQuery` bound to the given bridge.
    pub fn new(bridge: &'a Bridge) -> Self {
        Self { bridge }
    }

    /// Synergy partners for one card, scored by the sidecar.
    pub fn synergies(&self, card_name: &str) -> Result<Vec<Synergy>> {
        self.bridge
            .call_into("synergies.for_card", json!({"cardName": card_name}))
    }

    /// Combos present within a set of card names (a deck or the whole
    /// collection).
    pub fn combos(&self, card_names: &[String]) -> Result<Vec<Combo>> {
        self.bridge
            .call_into("combos.detect", json!({"cardNames": card_names}))
    }

    /// Commander candidates ranked against the owned collection.
    pub fn commanders(&self) -> Result<Vec<CommanderSuggestion>> {
        self.bridge
            .call_into("recommendations.commanders", json!({}))
    }

    /// Archetypes the collection already supports.
    pub fn archetypes(&self) -> Result<Vec<ArchetypeSuggestion>> {
        self.bridge
            .call_into("recommendations.archetypes", json!({}))
    }

    /// Card upgrades for a deck (cut/add pairs).
    pub fn upgrades(&self, deck_id: &str) -> Result<Vec<UpgradeSuggestion>> {
        self.bridge
            .call_into("recommendations.upgrades", json!({"deckId": deck_id}))
    }
}
