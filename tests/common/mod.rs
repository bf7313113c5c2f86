//! Shared test fixtures for the collection SDK integration tests.
//!
//! Provides inventory/price sample data for the aggregation pipeline and a
//! scripted [`MockTransport`] so the query interfaces can be exercised
//! without a sidecar process.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use collection_sdk::models::inventory::InventoryEntry;
use collection_sdk::models::price::{PriceIndex, PricedCard};
use collection_sdk::{CollectionError, CollectionSdk, MemoryBackend, Transport};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Inventory fixtures
// ---------------------------------------------------------------------------

/// A minimal inventory entry; tests adjust fields directly as needed.
pub fn entry(
    name: &str,
    quantity: i64,
    foil_quantity: i64,
    set_code: Option<&str>,
    collector_number: Option<&str>,
) -> InventoryEntry {
    InventoryEntry {
        card_name: name.to_string(),
        quantity,
        foil_quantity,
        set_code: set_code.map(str::to_string),
        collector_number: collector_number.map(str::to_string),
        added_at: "2024-01-01T00:00:00Z".to_string(),
        colors: Vec::new(),
        type_line: None,
        rarity: None,
        cmc: 0.0,
        win_rate: None,
        tier: None,
        draft_pick: None,
    }
}

/// The two-printing Sol Ring inventory used by the aggregation examples:
/// 2 non-foil C21 copies at $2.00 and 1 foil CMR copy at $5.00.
pub fn sol_ring_inventory() -> Vec<InventoryEntry> {
    vec![
        entry("Sol Ring", 2, 0, Some("C21"), Some("263")),
        entry("Sol Ring", 0, 1, Some("CMR"), Some("350")),
    ]
}

pub fn sol_ring_prices() -> PriceIndex {
    PriceIndex::build(&[
        priced("Sol Ring", Some("C21"), Some("263"), Some(2.0)),
        priced("Sol Ring", Some("CMR"), Some("350"), Some(5.0)),
    ])
}

pub fn priced(
    name: &str,
    set_code: Option<&str>,
    collector_number: Option<&str>,
    price: Option<f64>,
) -> PricedCard {
    PricedCard {
        card_name: name.to_string(),
        set_code: set_code.map(str::to_string),
        collector_number: collector_number.map(str::to_string),
        price,
    }
}

// ---------------------------------------------------------------------------
// MockTransport
// ---------------------------------------------------------------------------

/// Log of `(path, body)` pairs the transport received, shared with the test.
pub type CallLog = Arc<Mutex<Vec<(String, Value)>>>;

/// Scripted transport: responses are queued per endpoint path and consumed
/// in order. Responses use the sidecar envelope, so a scripted
/// `{"ok": false, ...}` surfaces as an API error exactly like production.
pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<Value>>>,
    log: CallLog,
}

impl MockTransport {
    pub fn new() -> (Self, CallLog) {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                responses: Mutex::new(HashMap::new()),
                log: log.clone(),
            },
            log,
        )
    }

    /// Queue a response envelope for an endpoint path.
    pub fn push(&self, path: &str, response: Value) {
        self.responses
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
    }

    /// Queue a successful `data` payload.
    pub fn push_ok(&self, path: &str, data: Value) {
        self.push(path, serde_json::json!({"ok": true, "data": data}));
    }

    /// Queue an error envelope.
    pub fn push_err(&self, path: &str, message: &str) {
        self.push(path, serde_json::json!({"ok": false, "error": message}));
    }
}

impl Transport for MockTransport {
    fn post(&self, path: &str, body: &Value) -> collection_sdk::Result<Value> {
        self.log.lock().unwrap().push((path.to_string(), body.clone()));
        self.responses
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                CollectionError::NotFound(format!("no scripted response for {}", path))
            })
    }
}

/// Build an SDK over a scripted transport and an in-memory store.
pub fn sdk_with(transport: MockTransport) -> CollectionSdk {
    CollectionSdk::builder()
        .transport(Box::new(transport))
        .store_backend(Box::new(MemoryBackend::default()))
        .build()
        .unwrap()
}
