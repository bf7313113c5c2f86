use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PrintingKey
// ---------------------------------------------------------------------------

/// Build the composite identity used for price lookup and selection-set
/// membership: `name` alone when the printing is unknown, otherwise
/// `name|SETCODE|collector_number` with the set code uppercased.
///
/// Both `set_code` and `collector_number` must be present for the composite
/// form; a half-specified printing falls back to the name key so the same
/// entry always maps to the same bucket regardless of input casing.
pub fn printing_key(name: &str, set_code: Option<&str>, collector_number: Option<&str>) -> String {
    match (set_code, collector_number) {
        (Some(set), Some(number)) => {
            format!("{}|{}|{}", name, set.to_uppercase(), number)
        }
        _ => name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// PricedCard — one row of the sidecar's priced-card list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedCard {
    pub card_name: String,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
    /// `None` means the market has no price for this printing, not zero.
    pub price: Option<f64>,
}

// ---------------------------------------------------------------------------
// PriceIndex
// ---------------------------------------------------------------------------

/// Unit prices keyed by [`printing_key`]. Built once per priced-card fetch;
/// printings without a known price are omitted so that absence stays
/// distinguishable from a zero price.
#[derive(Debug, Clone, Default)]
pub struct PriceIndex {
    prices: HashMap<String, f64>,
}

impl PriceIndex {
    /// Build an index from the sidecar's priced-card list.
    pub fn build(cards: &[PricedCard]) -> Self {
        let mut prices = HashMap::new();
        for card in cards {
            if let Some(price) = card.price {
                let key = printing_key(
                    &card.card_name,
                    card.set_code.as_deref(),
                    card.collector_number.as_deref(),
                );
                prices.insert(key, price);
            }
        }
        Self { prices }
    }

    /// Unit price for a printing key, if known.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.prices.get(key).copied()
    }

    /// Unit price defaulting to zero for aggregation sums and range filters.
    pub fn unit_price_or_zero(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_uses_name_alone_without_printing_identity() {
        assert_eq!(printing_key("Sol Ring", None, None), "Sol Ring");
        assert_eq!(printing_key("Sol Ring", Some("c21"), None), "Sol Ring");
        assert_eq!(printing_key("Sol Ring", None, Some("263")), "Sol Ring");
    }

    #[test]
    fn key_uppercases_set_code() {
        assert_eq!(
            printing_key("Sol Ring", Some("c21"), Some("263")),
            "Sol Ring|C21|263"
        );
        assert_eq!(
            printing_key("Sol Ring", Some("C21"), Some("263")),
            "Sol Ring|C21|263"
        );
    }

    #[test]
    fn build_omits_unpriced_rows() {
        let index = PriceIndex::build(&[
            PricedCard {
                card_name: "Sol Ring".into(),
                set_code: Some("CMR".into()),
                collector_number: Some("350".into()),
                price: Some(5.0),
            },
            PricedCard {
                card_name: "Island".into(),
                set_code: Some("CMR".into()),
                collector_number: Some("680".into()),
                price: None,
            },
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("Sol Ring|CMR|350"), Some(5.0));
        assert_eq!(index.get("Island|CMR|680"), None);
        assert_eq!(index.unit_price_or_zero("Island|CMR|680"), 0.0);
    }
}
