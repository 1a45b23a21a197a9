pub mod prediction;
pub mod recommendation;
pub mod similarity;

pub use prediction::predict;
pub use recommendation::{recommend, recommend_top_n};
pub use similarity::{
    CosineSimilarity, EuclideanDistance, PearsonCorrelation, Similarity, SimilarityMetric,
};

use crate::models::{PreferenceStore, RankingEntry};
use std::hash::Hash;

/// User-based collaborative filter over a borrowed store with one chosen
/// similarity strategy.
pub struct UserCfEngine<'a, U, I, S> {
    store: &'a PreferenceStore<U, I>,
    similarity: S,
}

impl<'a, U, I, S> UserCfEngine<'a, U, I, S>
where
    U: Eq + Hash,
    I: Eq + Hash + Ord + Clone,
    S: Similarity<U, I>,
{
    pub fn new(store: &'a PreferenceStore<U, I>, similarity: S) -> Self {
        Self { store, similarity }
    }

    pub fn store(&self) -> &'a PreferenceStore<U, I> {
        self.store
    }

    pub fn similarity_name(&self) -> &'static str {
        self.similarity.name()
    }

    pub fn similarity(&self, a: &U, b: &U) -> f64 {
        self.similarity.similarity(self.store, a, b)
    }

    pub fn predict(&self, person: &U, item: &I) -> f64 {
        predict(self.store, person, item, &self.similarity)
    }

    pub fn recommend(&self, person: &U) -> Vec<RankingEntry<I>> {
        recommend(self.store, person, &self.similarity)
    }

    pub fn recommend_top_n(&self, person: &U, n: usize) -> Vec<RankingEntry<I>> {
        recommend_top_n(self.store, person, &self.similarity, n)
    }
}
