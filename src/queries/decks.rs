//! Deck operations: CRUD, card membership, analysis, and bulk add.

use log::debug;
use serde_json::json;

use crate::client::Bridge;
use crate::error::Result;
use crate::models::deck::{CardImpact, Deck, DeckAnalysis, DeckSummary};
use crate::models::inventory::InventoryEntry;
use crate::queries::BatchOutcome;
use crate::selection::QuantityOverrides;

// ---------------------------------------------------------------------------
// DeckQuery
// ---------------------------------------------------------------------------

/// Query interface for decks managed by the sidecar.
pub struct DeckQuery<'a> {
    bridge: &'a Bridge,
}

impl<'a> DeckQuery<'a> {
    /// Create a new `DeckQuery` bound to the given bridge.
    pub fn new(bridge: &'a Bridge) -> Self {
        Self { bridge }
    }

    // -- CRUD --------------------------------------------------------------

    pub fn list(&self) -> Result<Vec<DeckSummary>> {
        self.bridge.call_into("decks.list", json!({}))
    }

    pub fn get(&self, deck_id: &str) -> Result<Deck> {
        self.bridge.call_into("decks.get", json!({"id": deck_id}))
    }

    pub fn create(&self, name: &str, format: Option<&str>) -> Result<Deck> {
        self.bridge
            .call_into("decks.create", json!({"name": name, "format": format}))
    }

    pub fn rename(&self, deck_id: &str, name: &str) -> Result<()> {
        self.bridge
            .call("decks.rename", json!({"id": deck_id, "name": name}))?;
        Ok(())
    }

    pub fn delete(&self, deck_id: &str) -> Result<()> {
        self.bridge.call("decks.delete", json!({"id": deck_id}))?;
        Ok(())
    }

    // -- Card membership ---------------------------------------------------

    pub fn add_card(
        &self,
        deck_id: &str,
        card_name: &str,
        quantity: i64,
        set_code: Option<&str>,
        collector_number: Option<&str>,
    ) -> Result<()> {
        self.bridge.call(
            "decks.add_card",
            json!({
                "id": deck_id,
                "cardName": card_name,
                "quantity": quantity,
                "setCode": set_code,
                "collectorNumber": collector_number,
            }),
        )?;
        Ok(())
    }

    pub fn remove_card(&self, deck_id: &str, card_name: &str) -> Result<()> {
        self.bridge.call(
            "decks.remove_card",
            json!({"id": deck_id, "cardName": card_name}),
        )?;
        Ok(())
    }

    pub fn set_quantity(&self, deck_id: &str, card_name: &str, quantity: i64) -> Result<()> {
        self.bridge.call(
            "decks.set_quantity",
            json!({"id": deck_id, "cardName": card_name, "quantity": quantity}),
        )?;
        Ok(())
    }

    // -- Analysis ----------------------------------------------------------

    /// Deck-health report for a deck.
    pub fn analyze(&self, deck_id: &str) -> Result<DeckAnalysis> {
        self.bridge.call_into("decks.analyze", json!({"id": deck_id}))
    }

    /// What adding one card would do to the deck's analysis.
    pub fn impact(&self, deck_id: &str, card_name: &str) -> Result<CardImpact> {
        self.bridge
            .call_into("decks.impact", json!({"id": deck_id, "cardName": card_name}))
    }

    // -- Bulk --------------------------------------------------------------

    /// Add every entry in the batch to a deck, one call per entry.
    ///
    /// Quantities come from the override map, capped at the copies owned;
    /// entries whose resolved quantity is zero are skipped without a call.
    /// No rollback: earlier additions stay applied if a later call fails.
    pub fn bulk_add(
        &self,
        deck_id: &str,
        entries: &[&InventoryEntry],
        overrides: &QuantityOverrides,
    ) -> BatchOutcome {
        let mut attempted = 0;
        let mut succeeded = 0;
        let mut failures = Vec::new();

        for entry in entries {
            let quantity = overrides.quantity_for(entry);
            if quantity == 0 {
                continue;
            }
            attempted += 1;
            let result = self.add_card(
                deck_id,
                &entry.card_name,
                quantity,
                entry.set_code.as_deref(),
                entry.collector_number.as_deref(),
            );
            match result {
                Ok(()) => succeeded += 1,
                Err(e) => {
                    debug!("bulk add failed for {}: {}", entry.printing_key(), e);
                    failures.push((entry.printing_key(), e.to_string()));
                }
            }
        }

        BatchOutcome::summarize("Added", attempted, succeeded, failures)
    }
}
