//! Set and artist listings.

use serde_json::json;

use crate::client::Bridge;
use crate::error::Result;
use crate::models::set::{ArtistInfo, SetInfo};

/// Query interface for set and artist metadata.
pub struct SetQuery<'a> {
    bridge: &'a Bridge,
}

impl<'a> SetQuery<'a> {
    /// Create a new `SetQuery` bound to the given bridge.
    pub fn new(bridge: &'a Bridge) -> Self {
        Self { bridge }
    }

    /// All known sets.
    pub fn list(&self) -> Result<Vec<SetInfo>> {
        self.bridge.call_into("sets.list", json!({}))
    }

    /// All artists with cards in the database.
    pub fn artists(&self) -> Result<Vec<ArtistInfo>> {
        self.bridge.call_into("artists.list", json!({}))
    }
}
