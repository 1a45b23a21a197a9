use super::similarity::Similarity;
use crate::models::{PreferenceStore, RankingEntry};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    weighted_sum: f64,
    weight_total: f64,
}

/// Rank every item `person` has not rated by predicted score.
///
/// One pass over the other users: each neighbour's similarity is computed
/// once and spread over all of that neighbour's items the person has not
/// seen. Neighbours with similarity `<= 0` are skipped. The result is sorted
/// by score descending, ties by item descending.
///
/// The score of each entry equals what [`predict`](super::predict) returns
/// for the same item.
pub fn recommend<U, I, S>(
    store: &PreferenceStore<U, I>,
    person: &U,
    similarity: &S,
) -> Vec<RankingEntry<I>>
where
    U: Eq + Hash,
    I: Eq + Hash + Ord + Clone,
    S: Similarity<U, I> + ?Sized,
{
    let own_ratings = store.ratings(person);
    let mut accumulators: HashMap<&I, Accumulator> = HashMap::new();
    let mut neighbours = 0usize;

    for (other, ratings) in store.iter() {
        if other == person {
            continue;
        }

        let sim = similarity.similarity(store, person, other);
        if sim.is_nan() || sim <= 0.0 {
            continue;
        }
        neighbours += 1;

        for (item, &rating) in ratings {
            if own_ratings.is_some_and(|own| own.contains_key(item)) {
                continue;
            }

            let acc = accumulators.entry(item).or_default();
            acc.weighted_sum += sim * rating;
            acc.weight_total += sim;
        }
    }

    // Items only enter the map through a positive-similarity contribution,
    // so every weight_total here is > 0.
    let mut rankings: Vec<RankingEntry<I>> = accumulators
        .into_iter()
        .map(|(item, acc)| RankingEntry {
            score: acc.weighted_sum / acc.weight_total,
            item: item.clone(),
        })
        .collect();

    rankings.sort_by(RankingEntry::ranking_order);

    debug!(
        neighbours = neighbours,
        candidates = rankings.len(),
        similarity = similarity.name(),
        "recommendations ranked"
    );

    rankings
}

/// The first `n` entries of [`recommend`].
pub fn recommend_top_n<U, I, S>(
    store: &PreferenceStore<U, I>,
    person: &U,
    similarity: &S,
    n: usize,
) -> Vec<RankingEntry<I>>
where
    U: Eq + Hash,
    I: Eq + Hash + Ord + Clone,
    S: Similarity<U, I> + ?Sized,
{
    let mut rankings = recommend(store, person, similarity);
    rankings.truncate(n);
    rankings
}
