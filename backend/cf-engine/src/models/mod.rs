mod preference_store;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub use preference_store::PreferenceStore;

/// One raw `(user, item, score)` record as read by the evaluation loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user: String,
    pub item: String,
    pub score: f64,
}

impl Rating {
    pub fn new(user: impl Into<String>, item: impl Into<String>, score: f64) -> Self {
        Self {
            user: user.into(),
            item: item.into(),
            score,
        }
    }
}

/// A predicted score for an item the querying user has not rated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry<I> {
    pub score: f64,
    pub item: I,
}

impl<I: Ord> RankingEntry<I> {
    /// Order used for recommendation lists: score descending, then item
    /// descending so equal scores always come out in the same order.
    pub fn ranking_order(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.item.cmp(&self.item))
    }
}
