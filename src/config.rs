use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the analysis sidecar started alongside the app.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:4781";

/// Default HTTP timeout for sidecar calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay applied to search-as-you-type before a request is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// How many recent searches the preference store retains.
pub const RECENT_SEARCH_LIMIT: usize = 20;

/// Endpoint paths on the sidecar, keyed by logical operation name.
///
/// Grouped the way the bridge groups them: collection, decks, card search
/// and suggestions, sets/artists, setup.
pub fn endpoints() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        // Collection
        ("collection.list", "/collection/list"),
        ("collection.stats", "/collection/stats"),
        ("collection.value", "/collection/value"),
        ("collection.prices", "/collection/prices"),
        ("collection.history", "/collection/history"),
        ("collection.record_prices", "/collection/record-prices"),
        ("collection.parse", "/collection/parse"),
        ("collection.import", "/collection/import"),
        ("collection.update", "/collection/update"),
        ("collection.delete", "/collection/delete"),
        // Decks
        ("decks.list", "/decks/list"),
        ("decks.get", "/decks/get"),
        ("decks.create", "/decks/create"),
        ("decks.rename", "/decks/rename"),
        ("decks.delete", "/decks/delete"),
        ("decks.add_card", "/decks/add-card"),
        ("decks.remove_card", "/decks/remove-card"),
        ("decks.set_quantity", "/decks/set-quantity"),
        ("decks.analyze", "/decks/analyze"),
        ("decks.impact", "/decks/impact"),
        // Card search and suggestions
        ("cards.search", "/cards/search"),
        ("cards.autocomplete", "/cards/autocomplete"),
        ("synergies.for_card", "/synergies/for-card"),
        ("combos.detect", "/combos/detect"),
        ("recommendations.commanders", "/recommendations/commanders"),
        ("recommendations.archetypes", "/recommendations/archetypes"),
        ("recommendations.upgrades", "/recommendations/upgrades"),
        // Sets and artists
        ("sets.list", "/sets/list"),
        ("artists.list", "/artists/list"),
        // First-run provisioning
        ("setup.start", "/setup/start"),
        ("setup.progress", "/setup/progress"),
    ])
}

/// Platform config directory for the preference store.
pub fn default_store_dir() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("collection-sdk")
    } else {
        PathBuf::from(".collection-sdk")
    }
}
