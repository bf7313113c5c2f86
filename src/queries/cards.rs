//! Card-database search against the sidecar's search engine.

use serde::Serialize;
use serde_json::{json, Value};

use crate::client::Bridge;
use crate::error::Result;

// ---------------------------------------------------------------------------
// CardSearchParams
// ---------------------------------------------------------------------------

/// Parameters for card search. All fields are optional; when `None`, the
/// corresponding filter is skipped by the search engine.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmc_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmc_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for the card database behind the sidecar.
pub struct CardQuery<'a> {
    bridge: &'a Bridge,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given bridge.
    pub fn new(bridge: &'a Bridge) -> Self {
        Self { bridge }
    }

    /// Search the card database. Rows are returned as opaque JSON objects;
    /// the card schema belongs to the sidecar.
    pub fn search(&self, params: &CardSearchParams) -> Result<Vec<Value>> {
        self.bridge
            .call_into("cards.search", serde_json::to_value(params)?)
    }

    /// Card-name completions for a prefix.
    pub fn autocomplete(&self, prefix: &str, limit: usize) -> Result<Vec<String>> {
        self.bridge.call_into(
            "cards.autocomplete",
            json!({"prefix": prefix, "limit": limit}),
        )
    }
}
