//! Deck, suggestion, set, and setup query tests over a scripted transport.

mod common;

use common::{sdk_with, MockTransport};
use serde_json::json;

// ---------------------------------------------------------------------------
// Deck CRUD and analysis
// ---------------------------------------------------------------------------

#[test]
fn deck_list_and_get_deserialize() {
    let (transport, _log) = MockTransport::new();
    transport.push_ok(
        "/decks/list",
        json!([{"id": "d1", "name": "Mono Red", "format": "modern", "cardCount": 60}]),
    );
    transport.push_ok(
        "/decks/get",
        json!({
            "id": "d1",
            "name": "Mono Red",
            "format": "modern",
            "cards": [{"cardName": "Lightning Bolt", "quantity": 4}]
        }),
    );
    let sdk = sdk_with(transport);

    let decks = sdk.decks().list().unwrap();
    assert_eq!(decks.len(), 1);
    assert_eq!(decks[0].card_count, 60);

    let deck = sdk.decks().get("d1").unwrap();
    assert_eq!(deck.cards.len(), 1);
    assert_eq!(deck.cards[0].quantity, 4);
}

#[test]
fn analysis_and_impact_parse_nullable_scores() {
    let (transport, log) = MockTransport::new();
    transport.push_ok(
        "/decks/analyze",
        json!({
            "deckId": "d1",
            "healthScore": 72.5,
            "archetype": "burn",
            "warnings": ["low land count"],
            "curve": [{"cmc": 1.0, "count": 20}]
        }),
    );
    transport.push_ok(
        "/decks/impact",
        json!({"cardName": "Skewer the Critics", "scoreDelta": null, "notes": []}),
    );
    let sdk = sdk_with(transport);

    let analysis = sdk.decks().analyze("d1").unwrap();
    assert_eq!(analysis.health_score, Some(72.5));
    assert_eq!(analysis.warnings.len(), 1);

    let impact = sdk.decks().impact("d1", "Skewer the Critics").unwrap();
    assert!(impact.score_delta.is_none());

    let calls = log.lock().unwrap();
    assert_eq!(calls[1].1["id"], "d1");
    assert_eq!(calls[1].1["cardName"], "Skewer the Critics");
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[test]
fn suggestion_endpoints_deserialize() {
    let (transport, _log) = MockTransport::new();
    transport.push_ok(
        "/synergies/for-card",
        json!([{"cardName": "Krenko", "partnerName": "Goblin Chieftain", "score": 0.9}]),
    );
    transport.push_ok(
        "/recommendations/commanders",
        json!([{"cardName": "Krenko, Mob Boss", "score": 0.8, "ownedSupport": 24}]),
    );
    transport.push_ok(
        "/recommendations/upgrades",
        json!([{"cutName": "Shock", "addName": "Lightning Bolt", "scoreDelta": 0.2}]),
    );
    let sdk = sdk_with(transport);

    let synergies = sdk.suggestions().synergies("Krenko").unwrap();
    assert_eq!(synergies[0].score, 0.9);

    let commanders = sdk.suggestions().commanders().unwrap();
    assert_eq!(commanders[0].owned_support, 24);

    let upgrades = sdk.suggestions().upgrades("d1").unwrap();
    assert_eq!(upgrades[0].add_name, "Lightning Bolt");
}

// ---------------------------------------------------------------------------
// Sets and artists
// ---------------------------------------------------------------------------

#[test]
fn set_and_artist_listings_deserialize() {
    let (transport, _log) = MockTransport::new();
    transport.push_ok(
        "/sets/list",
        json!([{"code": "MH3", "name": "Modern Horizons 3", "type": "draft_innovation"}]),
    );
    transport.push_ok("/artists/list", json!([{"name": "Rebecca Guay", "cardCount": 150}]));
    let sdk = sdk_with(transport);

    let sets = sdk.sets().list().unwrap();
    assert_eq!(sets[0].set_type.as_deref(), Some("draft_innovation"));

    let artists = sdk.sets().artists().unwrap();
    assert_eq!(artists[0].card_count, 150);
}

// ---------------------------------------------------------------------------
// Setup provisioning
// ---------------------------------------------------------------------------

#[test]
fn setup_run_forwards_progress_until_done() {
    let (transport, _log) = MockTransport::new();
    transport.push_ok("/setup/start", json!({}));
    transport.push_ok(
        "/setup/progress",
        json!({"stage": "download", "percent": 100.0, "done": true}),
    );
    let sdk = sdk_with(transport);

    let mut events = Vec::new();
    let last = sdk
        .setup()
        .run(|event| events.push(event.stage.clone()))
        .unwrap();
    assert!(last.done);
    assert_eq!(events, vec!["download"]);
}
