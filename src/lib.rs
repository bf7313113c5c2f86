//! Collection SDK for a Magic: The Gathering collection manager.
//!
//! Provides the local data layer of the app: a pure aggregation pipeline
//! (filter → group → sort) over the owned-card inventory, printing-key
//! identity and price lookup, selection sets with bulk batching, a
//! preference store, debounced search pacing, and a typed client for the
//! analysis sidecar that owns search, pricing, deck scoring, and
//! recommendations.
//!
//! # Quick start
//!
//! ```no_run
//! use collection_sdk::pipeline::{aggregate, FilterCriteria, SortField, SortOrder};
//! use collection_sdk::CollectionSdk;
//!
//! let sdk = CollectionSdk::builder().build().unwrap();
//!
//! // Fetch inventory and prices, then aggregate locally
//! let entries = sdk.collection().list().unwrap();
//! let prices = sdk.collection().price_index().unwrap();
//! let groups = aggregate(
//!     &entries,
//!     &FilterCriteria::default(),
//!     &prices,
//!     SortField::Price,
//!     SortOrder::Desc,
//! );
//!
//! // Ask the sidecar for commander suggestions
//! let commanders = sdk.suggestions().commanders().unwrap();
//! # let _ = (groups, commanders);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod queries;
pub mod search;
pub mod selection;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncCollectionSdk;
pub use client::{Bridge, HttpTransport, Transport};
pub use error::{CollectionError, Result};
pub use search::{Debouncer, SearchSession};
pub use selection::{QuantityOverrides, Selection};
pub use store::{JsonFileBackend, MemoryBackend, PrefStore, StoreBackend};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CollectionSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CollectionSdk`] instance.
///
/// Use [`CollectionSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CollectionSdkBuilder::build) to create the SDK.
pub struct CollectionSdkBuilder {
    base_url: String,
    timeout: Duration,
    transport: Option<Box<dyn Transport>>,
    store_backend: Option<Box<dyn StoreBackend>>,
}

impl Default for CollectionSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            transport: None,
            store_backend: None,
        }
    }
}

impl CollectionSdkBuilder {
    /// Set the sidecar base URL.
    ///
    /// Defaults to the loopback address the app launches the sidecar on.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout for sidecar calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the transport entirely. Used by tests to script responses
    /// without a network; overrides `base_url`/`timeout`.
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the preference-store backend.
    ///
    /// Defaults to a JSON file under the platform config directory.
    pub fn store_backend(mut self, backend: Box<dyn StoreBackend>) -> Self {
        self.store_backend = Some(backend);
        self
    }

    /// Build the SDK, loading the preference store.
    ///
    /// Does not contact the sidecar; the HTTP client is created lazily on
    /// the first call.
    pub fn build(self) -> Result<CollectionSdk> {
        let transport = self
            .transport
            .unwrap_or_else(|| Box::new(HttpTransport::new(self.base_url.clone(), self.timeout)));
        let backend = self
            .store_backend
            .unwrap_or_else(|| Box::new(JsonFileBackend::default_location()));
        let store = PrefStore::new(backend)?;
        Ok(CollectionSdk {
            base_url: self.base_url,
            bridge: Bridge::new(transport),
            store,
        })
    }
}

// ---------------------------------------------------------------------------
// CollectionSdk
// ---------------------------------------------------------------------------

/// The main entry point for the collection SDK.
///
/// Wraps the sidecar [`Bridge`] and the [`PrefStore`] and exposes
/// domain-specific query interfaces as lightweight borrowing wrappers.
///
/// Created via [`CollectionSdk::builder()`].
pub struct CollectionSdk {
    base_url: String,
    bridge: Bridge,
    store: PrefStore,
}

impl CollectionSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CollectionSdkBuilder {
        CollectionSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the collection query interface (inventory, stats, prices,
    /// import, bulk deletion).
    pub fn collection(&self) -> queries::collection::CollectionQuery<'_> {
        queries::collection::CollectionQuery::new(&self.bridge)
    }

    /// Access the deck query interface (CRUD, membership, analysis).
    pub fn decks(&self) -> queries::decks::DeckQuery<'_> {
        queries::decks::DeckQuery::new(&self.bridge)
    }

    /// Access the card-database search interface.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(&self.bridge)
    }

    /// Access the suggestion interface (synergies, combos, recommendations).
    pub fn suggestions(&self) -> queries::suggestions::SuggestionQuery<'_> {
        queries::suggestions::SuggestionQuery::new(&self.bridge)
    }

    /// Access the set/artist metadata interface.
    pub fn sets(&self) -> queries::sets::SetQuery<'_> {
        queries::sets::SetQuery::new(&self.bridge)
    }

    /// Access the first-run provisioning interface.
    pub fn setup(&self) -> queries::setup::SetupQuery<'_> {
        queries::setup::SetupQuery::new(&self.bridge)
    }

    // -- State -------------------------------------------------------------

    /// The preference store for session-persisted UI state.
    pub fn store(&self) -> &PrefStore {
        &self.store
    }

    /// Low-level access to the bridge for operations not covered by the
    /// domain interfaces.
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CollectionSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CollectionSdk(base_url={})", self.base_url)
    }
}
