//! Preference-store tests: round-trips, persistence, recent searches.

mod common;

use std::collections::HashSet;

use collection_sdk::pipeline::{FilterCriteria, SortField, SortOrder};
use collection_sdk::store::keys;
use collection_sdk::{JsonFileBackend, MemoryBackend, PrefStore};

fn memory_store() -> PrefStore {
    PrefStore::new(Box::new(MemoryBackend::default())).unwrap()
}

// ---------------------------------------------------------------------------
// Round-trips
// ---------------------------------------------------------------------------

#[test]
fn set_then_get_round_trips_values() {
    let store = memory_store();
    store.set(keys::ACTIVE_TAB, &"decks").unwrap();
    assert_eq!(store.get::<String>(keys::ACTIVE_TAB).as_deref(), Some("decks"));
    assert!(store.get::<String>("missing.key").is_none());
}

#[test]
fn filter_criteria_and_sort_selection_round_trip() {
    let store = memory_store();

    let criteria = FilterCriteria {
        search: "bolt".to_string(),
        rarities: HashSet::from(["uncommon".to_string()]),
        foil_only: true,
        price_max: Some(10.0),
        ..Default::default()
    };
    store.set(keys::FILTERS, &criteria).unwrap();
    store.set(keys::SORT_FIELD, &SortField::Price).unwrap();
    store.set(keys::SORT_ORDER, &SortOrder::Desc).unwrap();

    let loaded: FilterCriteria = store.get(keys::FILTERS).unwrap();
    assert_eq!(loaded.search, "bolt");
    assert!(loaded.foil_only);
    assert_eq!(loaded.price_max, Some(10.0));
    assert_eq!(store.get::<SortField>(keys::SORT_FIELD), Some(SortField::Price));
    assert_eq!(store.get::<SortOrder>(keys::SORT_ORDER), Some(SortOrder::Desc));
}

#[test]
fn remove_deletes_a_key() {
    let store = memory_store();
    store.set(keys::ACTIVE_TAB, &"collection").unwrap();
    assert!(store.contains(keys::ACTIVE_TAB));
    store.remove(keys::ACTIVE_TAB).unwrap();
    assert!(!store.contains(keys::ACTIVE_TAB));
}

// ---------------------------------------------------------------------------
// File backend
// ---------------------------------------------------------------------------

#[test]
fn file_backend_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let store = PrefStore::new(Box::new(JsonFileBackend::new(path.clone()))).unwrap();
        store.set(keys::ACTIVE_TAB, &"suggestions").unwrap();
    }

    let reloaded = PrefStore::new(Box::new(JsonFileBackend::new(path))).unwrap();
    assert_eq!(
        reloaded.get::<String>(keys::ACTIVE_TAB).as_deref(),
        Some("suggestions")
    );
}

#[test]
fn corrupt_store_file_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{not json!").unwrap();

    let store = PrefStore::new(Box::new(JsonFileBackend::new(path))).unwrap();
    assert!(!store.contains(keys::ACTIVE_TAB));
}

// ---------------------------------------------------------------------------
// Recent searches
// ---------------------------------------------------------------------------

#[test]
fn recent_searches_dedupe_case_insensitively_newest_first() {
    let store = memory_store();
    store.push_recent_search("Sol Ring").unwrap();
    store.push_recent_search("Lightning Bolt").unwrap();
    store.push_recent_search("sol ring").unwrap();

    let recent = store.recent_searches();
    let queries: Vec<&str> = recent.iter().map(|r| r.query.as_str()).collect();
    assert_eq!(queries, vec!["sol ring", "Lightning Bolt"]);
}

#[test]
fn recent_searches_are_bounded() {
    let store = memory_store();
    for i in 0..40 {
        store.push_recent_search(&format!("query {}", i)).unwrap();
    }
    let recent = store.recent_searches();
    assert_eq!(recent.len(), collection_sdk::config::RECENT_SEARCH_LIMIT);
    assert_eq!(recent[0].query, "query 39");
}

#[test]
fn blank_queries_are_not_recorded() {
    let store = memory_store();
    store.push_recent_search("   ").unwrap();
    assert!(store.recent_searches().is_empty());
}
