//! Sort stage of the collection aggregation pipeline.
//!
//! Orders grouped cards by a selected field and direction, and orders the
//! printings inside each group. Ties between groups always break by
//! ascending case-insensitive card name, and that secondary key is never
//! flipped by the direction. Null gameplay stats (win rate, tier, draft
//! pick) are pinned after all non-null values in both directions.

use std::cmp::Ordering;

use crate::models::grouped::GroupedCard;
use crate::models::inventory::InventoryEntry;
use crate::models::price::PriceIndex;

// ---------------------------------------------------------------------------
// SortField / SortOrder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Quantity,
    DateAdded,
    SetCode,
    Price,
    Rarity,
    Cmc,
    Type,
    Color,
    WinRate,
    Tier,
    DraftPick,
}

impl SortField {
    /// Parse the field strings used on the wire; anything unrecognized
    /// behaves as a name sort.
    pub fn parse(field: &str) -> Self {
        match field {
            "name" => Self::Name,
            "quantity" => Self::Quantity,
            "dateAdded" => Self::DateAdded,
            "setCode" => Self::SetCode,
            "price" => Self::Price,
            "rarity" => Self::Rarity,
            "cmc" => Self::Cmc,
            "type" => Self::Type,
            "color" => Self::Color,
            "winRate" => Self::WinRate,
            "tier" => Self::Tier,
            "draftPick" => Self::DraftPick,
            _ => Self::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse the order strings used on the wire; anything unrecognized
    /// behaves as ascending.
    pub fn parse(order: &str) -> Self {
        match order {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rank maps
// ---------------------------------------------------------------------------

fn rarity_rank(rarity: Option<&str>) -> i32 {
    match rarity.map(|r| r.to_lowercase()).as_deref() {
        Some("mythic") => 4,
        Some("rare") => 3,
        Some("uncommon") => 2,
        Some("common") => 1,
        _ => 0,
    }
}

fn tier_rank(tier: &str) -> i32 {
    match tier.to_uppercase().as_str() {
        "S" => 6,
        "A" => 5,
        "B" => 4,
        "C" => 3,
        "D" => 2,
        "F" => 1,
        _ => 0,
    }
}

/// Colorless sorts last (rank 7), multicolor just before it (6), monocolor
/// by WUBRG position, unknown single colors alongside multicolor.
fn color_rank(colors: &[String]) -> i32 {
    if colors.is_empty() {
        return 7;
    }
    if colors.len() > 1 {
        return 6;
    }
    match colors[0].to_uppercase().as_str() {
        "W" => 1,
        "U" => 2,
        "B" => 3,
        "R" => 4,
        "G" => 5,
        _ => 6,
    }
}

// ---------------------------------------------------------------------------
// Group-level sort
// ---------------------------------------------------------------------------

/// Sort groups in place by `field` and `order`.
pub fn sort_groups(groups: &mut [GroupedCard], field: SortField, order: SortOrder) {
    groups.sort_by(|a, b| compare_groups(a, b, field, order));
}

fn compare_groups(a: &GroupedCard, b: &GroupedCard, field: SortField, order: SortOrder) -> Ordering {
    primary_ordering(a, b, field, order).then_with(|| name_ascending(a, b))
}

/// Secondary key: ascending case-insensitive card name, independent of the
/// requested direction.
fn name_ascending(a: &GroupedCard, b: &GroupedCard) -> Ordering {
    a.card_name.to_lowercase().cmp(&b.card_name.to_lowercase())
}

fn primary_ordering(a: &GroupedCard, b: &GroupedCard, field: SortField, order: SortOrder) -> Ordering {
    match field {
        SortField::Name => order.apply(name_ascending(a, b)),
        SortField::Quantity => order.apply(a.total_copies().cmp(&b.total_copies())),
        SortField::DateAdded => order.apply(a.added_at.cmp(&b.added_at)),
        SortField::SetCode => order.apply(
            a.set_code
                .as_deref()
                .unwrap_or("")
                .cmp(b.set_code.as_deref().unwrap_or("")),
        ),
        SortField::Price => order.apply(a.total_price.total_cmp(&b.total_price)),
        SortField::Rarity => order.apply(
            rarity_rank(a.rarity.as_deref()).cmp(&rarity_rank(b.rarity.as_deref())),
        ),
        SortField::Cmc => order.apply(a.cmc.total_cmp(&b.cmc)),
        SortField::Type => order.apply(
            a.type_line
                .as_deref()
                .unwrap_or("")
                .cmp(b.type_line.as_deref().unwrap_or("")),
        ),
        SortField::Color => order.apply(color_rank(&a.colors).cmp(&color_rank(&b.colors))),
        SortField::WinRate => nullable_f64(a.win_rate, b.win_rate, order),
        SortField::Tier => nullable_rank(
            a.tier.as_deref().map(tier_rank),
            b.tier.as_deref().map(tier_rank),
            order,
        ),
        SortField::DraftPick => nullable_f64(a.draft_pick, b.draft_pick, order),
    }
}

/// Null-last comparison: the pinning happens before the direction is
/// applied, so nulls land at the end under both `asc` and `desc`.
fn nullable_f64(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => order.apply(x.total_cmp(&y)),
    }
}

fn nullable_rank(a: Option<i32>, b: Option<i32>, order: SortOrder) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => order.apply(x.cmp(&y)),
    }
}

// ---------------------------------------------------------------------------
// Within-group printing sort
// ---------------------------------------------------------------------------

/// Sort a group's printings in place.
///
/// Only quantity, date added, set code, and price honor the field and
/// direction; every other field uses a fixed ordering (descending combined
/// quantity, then ascending set code) since per-printing metadata like
/// rarity or mana value does not vary within most groups.
pub fn sort_printings(
    printings: &mut [InventoryEntry],
    field: SortField,
    order: SortOrder,
    prices: &PriceIndex,
) {
    match field {
        SortField::Quantity => {
            printings.sort_by(|a, b| order.apply(a.total_copies().cmp(&b.total_copies())));
        }
        SortField::DateAdded => {
            printings.sort_by(|a, b| order.apply(a.added_at.cmp(&b.added_at)));
        }
        SortField::SetCode => {
            printings.sort_by(|a, b| {
                order.apply(
                    a.set_code
                        .as_deref()
                        .unwrap_or("")
                        .cmp(b.set_code.as_deref().unwrap_or("")),
                )
            });
        }
        SortField::Price => {
            printings.sort_by(|a, b| {
                let pa = prices.unit_price_or_zero(&a.printing_key());
                let pb = prices.unit_price_or_zero(&b.printing_key());
                order.apply(pa.total_cmp(&pb))
            });
        }
        _ => {
            printings.sort_by(|a, b| {
                b.total_copies().cmp(&a.total_copies()).then_with(|| {
                    a.set_code
                        .as_deref()
                        .unwrap_or("")
                        .cmp(b.set_code.as_deref().unwrap_or(""))
                })
            });
        }
    }
}
