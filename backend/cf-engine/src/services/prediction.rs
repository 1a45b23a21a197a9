use super::similarity::Similarity;
use crate::models::PreferenceStore;
use std::hash::Hash;
use tracing::trace;

/// Estimate `person`'s score for `item` as the similarity-weighted mean of
/// the scores other users gave it.
///
/// - unknown `person` -> `0.0`
/// - `person` already rated `item` -> that score, unchanged
/// - neighbours with similarity `<= 0` contribute nothing
/// - no qualifying neighbour rated `item` -> `0.0`
pub fn predict<U, I, S>(store: &PreferenceStore<U, I>, person: &U, item: &I, similarity: &S) -> f64
where
    U: Eq + Hash,
    I: Eq + Hash,
    S: Similarity<U, I> + ?Sized,
{
    let Some(own_ratings) = store.ratings(person) else {
        return 0.0;
    };

    if let Some(&score) = own_ratings.get(item) {
        return score;
    }

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut neighbours = 0usize;

    for (other, ratings) in store.iter() {
        if other == person {
            continue;
        }

        let Some(&rating) = ratings.get(item) else {
            continue;
        };

        let sim = similarity.similarity(store, person, other);
        if sim.is_nan() || sim <= 0.0 {
            continue;
        }

        weighted_sum += sim * rating;
        weight_total += sim;
        neighbours += 1;
    }

    trace!(
        neighbours = neighbours,
        weight_total = weight_total,
        similarity = similarity.name(),
        "prediction aggregated"
    );

    if weight_total == 0.0 {
        return 0.0;
    }

    weighted_sum / weight_total
}
