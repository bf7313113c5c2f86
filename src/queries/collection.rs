//! Collection operations: inventory fetch, stats, valuation, price data,
//! import parsing, quantity updates, and bulk deletion.

use log::debug;
use serde_json::json;

use crate::client::Bridge;
use crate::error::Result;
use crate::models::collection::{CollectionStats, ImportRow, ParsedImport, QuantityUpdate, ValuePoint};
use crate::models::inventory::{normalize_entries, InventoryEntry};
use crate::models::price::{PriceIndex, PricedCard};
use crate::queries::BatchOutcome;

// ---------------------------------------------------------------------------
// CollectionQuery
// ---------------------------------------------------------------------------

/// Query interface for the owned-card collection.
pub struct CollectionQuery<'a> {
    bridge: &'a Bridge,
}

impl<'a> CollectionQuery<'a> {
    /// Create a new `CollectionQuery` bound to the given bridge.
    pub fn new(bridge: &'a Bridge) -> Self {
        Self { bridge }
    }

    // -- Inventory ---------------------------------------------------------

    /// Fetch the full inventory, normalized at the ingestion boundary
    /// (negative quantities clamped, zero-zero rows dropped).
    pub fn list(&self) -> Result<Vec<InventoryEntry>> {
        let entries: Vec<InventoryEntry> = self.bridge.call_into("collection.list", json!({}))?;
        Ok(normalize_entries(entries))
    }

    /// Aggregate counts computed by the sidecar.
    pub fn stats(&self) -> Result<CollectionStats> {
        self.bridge.call_into("collection.stats", json!({}))
    }

    /// Current total collection value.
    pub fn value(&self) -> Result<f64> {
        self.bridge.call_into("collection.value", json!({}))
    }

    // -- Prices ------------------------------------------------------------

    /// The sidecar's priced-card list for the collection.
    pub fn priced_cards(&self) -> Result<Vec<PricedCard>> {
        self.bridge.call_into("collection.prices", json!({}))
    }

    /// Fetch prices and build the lookup index in one step.
    pub fn price_index(&self) -> Result<PriceIndex> {
        let cards = self.priced_cards()?;
        Ok(PriceIndex::build(&cards))
    }

    /// Recorded collection value over time, optionally bounded by ISO dates.
    pub fn history(&self, from: Option<&str>, to: Option<&str>) -> Result<Vec<ValuePoint>> {
        self.bridge
            .call_into("collection.history", json!({"from": from, "to": to}))
    }

    /// Snapshot current prices into the value history. Returns the number
    /// of printings recorded.
    pub fn record_prices(&self) -> Result<i64> {
        self.bridge.call_into("collection.record_prices", json!({}))
    }

    // -- Import ------------------------------------------------------------

    /// Parse pasted import text on the sidecar. Unrecognized lines come
    /// back in the result's warnings/errors arrays; rows are not
    /// re-validated here.
    pub fn parse_import(&self, text: &str) -> Result<ParsedImport> {
        self.bridge
            .call_into("collection.parse", json!({"text": text}))
    }

    /// Import parsed rows. Returns the number of rows applied.
    pub fn import(&self, rows: &[ImportRow]) -> Result<i64> {
        self.bridge
            .call_into("collection.import", json!({"rows": rows}))
    }

    // -- Mutations ---------------------------------------------------------

    /// Set the owned quantities for one printing. Both quantities at zero
    /// is the delete signal for that printing.
    pub fn update_quantities(&self, update: &QuantityUpdate) -> Result<()> {
        self.bridge
            .call("collection.update", serde_json::to_value(update)?)?;
        Ok(())
    }

    /// Delete one printing from the collection.
    pub fn delete(&self, entry: &InventoryEntry) -> Result<()> {
        self.bridge.call(
            "collection.delete",
            json!({
                "cardName": entry.card_name,
                "setCode": entry.set_code,
                "collectorNumber": entry.collector_number,
            }),
        )?;
        Ok(())
    }

    // -- Bulk --------------------------------------------------------------

    /// Delete every entry in the batch, one call per entry.
    ///
    /// Each call is issued independently; a failure does not roll back the
    /// deletions that already happened, and the whole batch is reported in
    /// one status string.
    pub fn bulk_delete(&self, entries: &[&InventoryEntry]) -> BatchOutcome {
        let mut succeeded = 0;
        let mut failures = Vec::new();

        for entry in entries {
            match self.delete(entry) {
                Ok(()) => succeeded += 1,
                Err(e) => {
                    debug!("bulk delete failed for {}: {}", entry.printing_key(), e);
                    failures.push((entry.printing_key(), e.to_string()));
                }
            }
        }

        BatchOutcome::summarize("Deleted", entries.len(), succeeded, failures)
    }
}
