//! Printing-level selection state for bulk actions.
//!
//! Selection is tracked per printing key, not per group: a grouped row can
//! have some printings selected and others not. Toggling a group header
//! toggles every printing key inside the group at once.

use std::collections::{HashMap, HashSet};

use crate::models::grouped::GroupedCard;
use crate::models::inventory::InventoryEntry;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Selection {
    keys: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn toggle(&mut self, key: &str) {
        if !self.keys.remove(key) {
            self.keys.insert(key.to_string());
        }
    }

    /// Toggle all printings of a group together. A fully selected group is
    /// cleared; anything less (including a mixed state) becomes fully
    /// selected.
    pub fn toggle_group(&mut self, group: &GroupedCard) {
        let keys: Vec<String> = group
            .printings
            .iter()
            .map(InventoryEntry::printing_key)
            .collect();
        let all_selected = keys.iter().all(|k| self.keys.contains(k));
        for key in keys {
            if all_selected {
                self.keys.remove(&key);
            } else {
                self.keys.insert(key);
            }
        }
    }

    /// True when every printing of the group is selected.
    pub fn group_selected(&self, group: &GroupedCard) -> bool {
        group
            .printings
            .iter()
            .all(|p| self.keys.contains(&p.printing_key()))
    }

    /// Resolve the selection against an inventory list, in list order.
    pub fn resolve<'a>(&self, entries: &'a [InventoryEntry]) -> Vec<&'a InventoryEntry> {
        entries
            .iter()
            .filter(|entry| self.keys.contains(&entry.printing_key()))
            .collect()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ---------------------------------------------------------------------------
// QuantityOverrides
// ---------------------------------------------------------------------------

/// Per-printing quantity caps for bulk add-to-deck: a missing key means the
/// full available amount, an override never raises the quantity above what
/// is owned.
#[derive(Debug, Clone, Default)]
pub struct QuantityOverrides {
    overrides: HashMap<String, i64>,
}

impl QuantityOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, quantity: i64) {
        self.overrides.insert(key.to_string(), quantity.max(0));
    }

    /// Quantity to use for an entry: the override clamped to the available
    /// copies, or all copies when no override is present.
    pub fn quantity_for(&self, entry: &InventoryEntry) -> i64 {
        let available = entry.total_copies();
        match self.overrides.get(&entry.printing_key()) {
            Some(&wanted) => wanted.min(available),
            None => available,
        }
    }
}
