//! Search pacing tests: debounce readiness and stale-response discard.

mod common;

use std::time::Duration;

use collection_sdk::{Debouncer, SearchSession};
use common::{sdk_with, MockTransport};
use serde_json::json;

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

#[test]
fn debouncer_only_fires_once_per_poke() {
    let mut debouncer = Debouncer::new(Duration::from_millis(0));
    debouncer.poke();
    assert!(debouncer.ready());
    assert!(!debouncer.ready());
    assert!(!debouncer.pending());
}

#[test]
fn keystrokes_keep_the_timer_pending() {
    let mut debouncer = Debouncer::new(Duration::from_secs(30));
    debouncer.poke();
    debouncer.poke();
    assert!(debouncer.pending());
    assert!(!debouncer.ready());
}

// ---------------------------------------------------------------------------
// Supersession
// ---------------------------------------------------------------------------

#[test]
fn stale_search_response_is_discarded() {
    // Two searches race; the older response arrives after the newer request
    // was issued and must not overwrite its results.
    let (transport, _log) = MockTransport::new();
    transport.push_ok("/cards/search", json!([{"name": "Goblin Guide"}]));
    transport.push_ok("/cards/search", json!([{"name": "Goblin King"}]));
    let sdk = sdk_with(transport);

    let mut session = SearchSession::new();
    let mut shown: Vec<String> = Vec::new();

    let first_gen = session.begin();
    let first_results = sdk
        .cards()
        .search(&collection_sdk::queries::CardSearchParams {
            name: Some("Goblin G".to_string()),
            ..Default::default()
        })
        .unwrap();

    // The user keeps typing before the first response is applied.
    let second_gen = session.begin();
    let second_results = sdk
        .cards()
        .search(&collection_sdk::queries::CardSearchParams {
            name: Some("Goblin Ki".to_string()),
            ..Default::default()
        })
        .unwrap();

    // Responses resolve newest-first: apply the current one...
    if session.accept(second_gen) {
        shown = second_results
            .iter()
            .filter_map(|c| c["name"].as_str().map(str::to_string))
            .collect();
    }
    // ...and the stale one is dropped instead of overwriting.
    if session.accept(first_gen) {
        shown = first_results
            .iter()
            .filter_map(|c| c["name"].as_str().map(str::to_string))
            .collect();
    }

    assert_eq!(shown, vec!["Goblin King"]);
}

#[test]
fn autocomplete_returns_names() {
    let (transport, log) = MockTransport::new();
    transport.push_ok("/cards/autocomplete", json!(["Sol Ring", "Solemn Simulacrum"]));
    let sdk = sdk_with(transport);

    let names = sdk.cards().autocomplete("Sol", 10).unwrap();
    assert_eq!(names.len(), 2);

    let calls = log.lock().unwrap();
    assert_eq!(calls[0].1["prefix"], "Sol");
    assert_eq!(calls[0].1["limit"], 10);
}
