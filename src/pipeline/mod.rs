//! Collection aggregation pipeline: filter → group → sort.
//!
//! Pure, synchronous recomputation over an in-memory inventory list. Each
//! stage produces a new collection; no stage mutates a prior stage's
//! output. Rebuilt whenever the input list, criteria, price index, or sort
//! selection changes — never persisted.

pub mod filter;
pub mod group;
pub mod sort;

pub use filter::{filter_entries, FilterCriteria};
pub use group::group_entries;
pub use sort::{sort_groups, sort_printings, SortField, SortOrder};

use crate::models::grouped::GroupedCard;
use crate::models::inventory::InventoryEntry;
use crate::models::price::PriceIndex;

/// Run the full pipeline: filter the inventory, group by card name, sort
/// the groups, and order each group's printings with the same selection.
pub fn aggregate(
    entries: &[InventoryEntry],
    criteria: &FilterCriteria,
    prices: &PriceIndex,
    field: SortField,
    order: SortOrder,
) -> Vec<GroupedCard> {
    let filtered = filter_entries(entries, criteria, prices);
    let mut groups = group_entries(&filtered, prices);
    sort_groups(&mut groups, field, order);
    for group in &mut groups {
        sort_printings(&mut group.printings, field, order, prices);
    }
    groups
}
