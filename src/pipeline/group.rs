//! Group stage of the collection aggregation pipeline.
//!
//! Collapses filtered entries into one [`GroupedCard`] per distinct card
//! name, accumulating quantities and prices across printings. The first
//! occurrence of a name creates its group and donates the display metadata;
//! group order is first-encounter order over the input.

use std::collections::HashMap;

use crate::models::grouped::GroupedCard;
use crate::models::inventory::InventoryEntry;
use crate::models::price::PriceIndex;

/// Group `entries` by card name.
///
/// Invariant: the sum of `total_quantity + total_foil_quantity` over all
/// groups equals the sum of `quantity + foil_quantity` over the input — no
/// unit is dropped or double-counted.
pub fn group_entries(entries: &[InventoryEntry], prices: &PriceIndex) -> Vec<GroupedCard> {
    let mut groups: Vec<GroupedCard> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let unit_price = prices.unit_price_or_zero(&entry.printing_key());
        let holding_price = unit_price * entry.total_copies() as f64;

        match index_by_name.get(&entry.card_name) {
            Some(&i) => {
                let group = &mut groups[i];
                group.total_quantity += entry.quantity;
                group.total_foil_quantity += entry.foil_quantity;
                group.total_price += holding_price;
                group.max_card_price = group.max_card_price.max(unit_price);
                group.printings.push(entry.clone());
                group.has_multiple_printings = true;
            }
            None => {
                index_by_name.insert(entry.card_name.clone(), groups.len());
                groups.push(GroupedCard {
                    card_name: entry.card_name.clone(),
                    total_quantity: entry.quantity,
                    total_foil_quantity: entry.foil_quantity,
                    total_price: holding_price,
                    max_card_price: unit_price,
                    printings: vec![entry.clone()],
                    has_multiple_printings: false,
                    rarity: entry.rarity.clone(),
                    cmc: entry.cmc,
                    type_line: entry.type_line.clone(),
                    colors: entry.colors.clone(),
                    win_rate: entry.win_rate,
                    tier: entry.tier.clone(),
                    draft_pick: entry.draft_pick,
                    added_at: entry.added_at.clone(),
                    set_code: entry.set_code.clone(),
                });
            }
        }
    }

    groups
}
