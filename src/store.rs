//! Key/value preference store for UI state that survives navigation:
//! saved filters, sort selection, active tab, recent searches.
//!
//! The backend is a port so the pipeline and its callers are testable
//! without real storage: [`JsonFileBackend`] persists one JSON document
//! under the platform config dir (written via temp file + rename, so an
//! interrupted write never leaves a corrupt store behind), and
//! [`MemoryBackend`] keeps everything in memory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config;
use crate::error::Result;

/// Well-known store keys.
pub mod keys {
    pub const FILTERS: &str = "collection.filters";
    pub const SORT_FIELD: &str = "collection.sortField";
    pub const SORT_ORDER: &str = "collection.sortOrder";
    pub const ACTIVE_TAB: &str = "ui.activeTab";
    pub const RECENT_SEARCHES: &str = "search.recent";
}

// ---------------------------------------------------------------------------
// Backends
// ---------------------------------------------------------------------------

pub trait StoreBackend: Send {
    fn load(&self) -> Result<HashMap<String, Value>>;
    fn save(&self, map: &HashMap<String, Value>) -> Result<()>;
}

/// One JSON document on disk.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `prefs.json` under the platform config directory.
    pub fn default_location() -> Self {
        Self::new(config::default_store_dir().join("prefs.json"))
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self) -> Result<HashMap<String, Value>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(map) => Ok(map),
            Err(e) => {
                // A corrupt store is not worth failing startup over.
                warn!("Corrupt preference store {}: {}", self.path.display(), e);
                Ok(HashMap::new())
            }
        }
    }

    fn save(&self, map: &HashMap<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(map)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    map: RefCell<HashMap<String, Value>>,
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Result<HashMap<String, Value>> {
        Ok(self.map.borrow().clone())
    }

    fn save(&self, map: &HashMap<String, Value>) -> Result<()> {
        *self.map.borrow_mut() = map.clone();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PrefStore
// ---------------------------------------------------------------------------

/// One recent-search entry, most recent first in the stored list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSearch {
    pub query: String,
    pub searched_at: String,
}

/// Write-through preference store: the map is loaded once and every `set`
/// saves the whole document back through the backend.
pub struct PrefStore {
    backend: Box<dyn StoreBackend>,
    map: RefCell<HashMap<String, Value>>,
}

impl PrefStore {
    pub fn new(backend: Box<dyn StoreBackend>) -> Result<Self> {
        let map = backend.load()?;
        Ok(Self {
            backend,
            map: RefCell::new(map),
        })
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let map = self.map.borrow();
        let value = map.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut map = self.map.borrow_mut();
        map.insert(key.to_string(), serde_json::to_value(value)?);
        self.backend.save(&map)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.map.borrow_mut();
        if map.remove(key).is_some() {
            self.backend.save(&map)?;
        }
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.borrow().contains_key(key)
    }

    // -- Recent searches ---------------------------------------------------

    /// Record a search query: deduplicated case-insensitively, newest
    /// first, bounded to [`config::RECENT_SEARCH_LIMIT`].
    pub fn push_recent_search(&self, query: &str) -> Result<()> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        let mut recent: Vec<RecentSearch> = self.get(keys::RECENT_SEARCHES).unwrap_or_default();
        recent.retain(|r| !r.query.eq_ignore_ascii_case(trimmed));
        recent.insert(
            0,
            RecentSearch {
                query: trimmed.to_string(),
                searched_at: Utc::now().to_rfc3339(),
            },
        );
        recent.truncate(config::RECENT_SEARCH_LIMIT);
        self.set(keys::RECENT_SEARCHES, &recent)
    }

    pub fn recent_searches(&self) -> Vec<RecentSearch> {
        self.get(keys::RECENT_SEARCHES).unwrap_or_default()
    }
}
