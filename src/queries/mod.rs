//! Query interfaces over the sidecar bridge.
//!
//! Each module provides a query struct that borrows the [`Bridge`](crate::client::Bridge)
//! and exposes the operations of one endpoint group (collection, decks,
//! card search, suggestions, sets, setup) as typed `Result<T>` methods.

pub mod cards;
pub mod collection;
pub mod decks;
pub mod sets;
pub mod setup;
pub mod suggestions;

pub use cards::{CardQuery, CardSearchParams};
pub use collection::CollectionQuery;
pub use decks::DeckQuery;
pub use sets::SetQuery;
pub use setup::{SetupProgress, SetupQuery};
pub use suggestions::SuggestionQuery;

// ---------------------------------------------------------------------------
// BatchOutcome
// ---------------------------------------------------------------------------

/// Result of a bulk operation that issues one sidecar call per entry.
///
/// Calls are awaited independently and there is no rollback: effects of
/// entries that succeeded before a failure remain applied. The batch is
/// summarized in a single status string rather than per-item results.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub attempted: usize,
    pub succeeded: usize,
    /// `(printing key, error message)` for each failed entry.
    pub failures: Vec<(String, String)>,
    pub status: String,
}

impl BatchOutcome {
    pub(crate) fn summarize(verb: &str, attempted: usize, succeeded: usize, failures: Vec<(String, String)>) -> Self {
        let status = if failures.is_empty() {
            format!("{} {} card(s)", verb, succeeded)
        } else {
            format!(
                "{} {} of {} card(s); {} failed: {}",
                verb,
                succeeded,
                attempted,
                failures.len(),
                failures[0].1
            )
        };
        Self {
            attempted,
            succeeded,
            failures,
            status,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
