use super::Similarity;
use crate::models::PreferenceStore;
use std::hash::Hash;

/// Distance-based similarity: `1 / (1 + sqrt(sum of squared differences))`
/// over the shared items.
///
/// Always in `(0, 1]` when the users overlap, `1` only when they agree on
/// every shared item.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistance;

impl<U, I> Similarity<U, I> for EuclideanDistance
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    fn similarity(&self, store: &PreferenceStore<U, I>, a: &U, b: &U) -> f64 {
        let shared = store.shared_scores(a, b);
        if shared.is_empty() {
            return 0.0;
        }

        let sum_of_squares: f64 = shared.iter().map(|(sa, sb)| (sa - sb).powi(2)).sum();

        1.0 / (1.0 + sum_of_squares.sqrt())
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}
