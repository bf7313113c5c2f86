//! Filter stage of the collection aggregation pipeline.
//!
//! Reduces the owned-card list to entries matching the active criteria.
//! Criteria are ANDed together; within one criterion, selected values are
//! ORed. An empty set or absent bound is a no-op, never an exclusion.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::inventory::InventoryEntry;
use crate::models::price::PriceIndex;

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// Active filter state. All fields default to "no constraint". Serializes
/// so the preference store can persist it across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring on the card name; empty matches everything.
    pub search: String,
    /// Lower-cased rarity values to keep.
    pub rarities: HashSet<String>,
    /// Lower-cased set codes to keep.
    pub sets: HashSet<String>,
    /// Mutually exclusive with `non_foil_only`.
    pub foil_only: bool,
    pub non_foil_only: bool,
    /// Inclusive unit-price bounds; `None` leaves the bound open.
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    /// Upper-cased color letters; `"C"` selects colorless entries.
    pub colors: HashSet<String>,
    /// Lower-cased type words matched as substrings of the type line.
    pub types: HashSet<String>,
}

impl FilterCriteria {
    /// True when no criterion constrains anything.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.rarities.is_empty()
            && self.sets.is_empty()
            && !self.foil_only
            && !self.non_foil_only
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.colors.is_empty()
            && self.types.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Filter stage
// ---------------------------------------------------------------------------

/// Apply `criteria` to `entries`, producing a new list. Entries are cloned,
/// never mutated; filtering twice with the same criteria is identity.
pub fn filter_entries(
    entries: &[InventoryEntry],
    criteria: &FilterCriteria,
    prices: &PriceIndex,
) -> Vec<InventoryEntry> {
    entries
        .iter()
        .filter(|entry| matches(entry, criteria, prices))
        .cloned()
        .collect()
}

fn matches(entry: &InventoryEntry, criteria: &FilterCriteria, prices: &PriceIndex) -> bool {
    if !criteria.search.is_empty() {
        let needle = criteria.search.to_lowercase();
        if !entry.card_name.to_lowercase().contains(&needle) {
            return false;
        }
    }

    if !criteria.rarities.is_empty() {
        match entry.rarity.as_deref() {
            Some(rarity) if criteria.rarities.contains(&rarity.to_lowercase()) => {}
            _ => return false,
        }
    }

    if !criteria.sets.is_empty() {
        match entry.set_code.as_deref() {
            Some(set) if criteria.sets.contains(&set.to_lowercase()) => {}
            _ => return false,
        }
    }

    if criteria.foil_only && entry.foil_quantity == 0 {
        return false;
    }
    if criteria.non_foil_only && entry.quantity == 0 {
        return false;
    }

    if criteria.price_min.is_some() || criteria.price_max.is_some() {
        let price = prices.unit_price_or_zero(&entry.printing_key());
        if let Some(min) = criteria.price_min {
            if price < min {
                return false;
            }
        }
        if let Some(max) = criteria.price_max {
            if price > max {
                return false;
            }
        }
    }

    if !criteria.colors.is_empty() && !matches_colors(entry, &criteria.colors) {
        return false;
    }

    if !criteria.types.is_empty() {
        let type_line = match entry.type_line.as_deref() {
            Some(line) if !line.is_empty() => line.to_lowercase(),
            _ => return false,
        };
        if !criteria
            .types
            .iter()
            .any(|wanted| type_line.contains(&wanted.to_lowercase()))
        {
            return false;
        }
    }

    true
}

/// Colorless entries match only when `"C"` is selected; otherwise any
/// overlap between the entry's colors and the selection keeps the entry.
fn matches_colors(entry: &InventoryEntry, selected: &HashSet<String>) -> bool {
    if entry.colors.is_empty() {
        return selected.iter().any(|color| color.eq_ignore_ascii_case("C"));
    }
    entry.colors.iter().any(|color| {
        let upper = color.to_uppercase();
        selected.iter().any(|s| s.to_uppercase() == upper)
    })
}
