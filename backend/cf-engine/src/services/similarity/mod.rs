//! User-user similarity strategies.
//!
//! Every strategy looks only at the items both users rated. Two users with
//! no item in common get `0.0`, which the engines read as "no signal" and
//! drop from weighting.

mod cosine;
mod euclidean;
mod pearson;

pub use cosine::CosineSimilarity;
pub use euclidean::EuclideanDistance;
pub use pearson::PearsonCorrelation;

use crate::models::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A symmetric closeness score between two users of a store.
pub trait Similarity<U, I> {
    fn similarity(&self, store: &PreferenceStore<U, I>, a: &U, b: &U) -> f64;

    fn name(&self) -> &'static str;
}

impl<U, I, S> Similarity<U, I> for &S
where
    S: Similarity<U, I> + ?Sized,
{
    fn similarity(&self, store: &PreferenceStore<U, I>, a: &U, b: &U) -> f64 {
        (**self).similarity(store, a, b)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Strategy selector, so a similarity can come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    #[serde(alias = "distance")]
    Euclidean,
    Pearson,
    Cosine,
}

impl SimilarityMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMetric::Euclidean => "euclidean",
            SimilarityMetric::Pearson => "pearson",
            SimilarityMetric::Cosine => "cosine",
        }
    }
}

impl<U, I> Similarity<U, I> for SimilarityMetric
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    fn similarity(&self, store: &PreferenceStore<U, I>, a: &U, b: &U) -> f64 {
        match self {
            SimilarityMetric::Euclidean => EuclideanDistance.similarity(store, a, b),
            SimilarityMetric::Pearson => PearsonCorrelation.similarity(store, a, b),
            SimilarityMetric::Cosine => CosineSimilarity.similarity(store, a, b),
        }
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "distance" => Ok(SimilarityMetric::Euclidean),
            "pearson" => Ok(SimilarityMetric::Pearson),
            "cosine" => Ok(SimilarityMetric::Cosine),
            other => Err(format!("unknown similarity metric: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: [SimilarityMetric; 3] = [
        SimilarityMetric::Euclidean,
        SimilarityMetric::Pearson,
        SimilarityMetric::Cosine,
    ];

    fn store() -> PreferenceStore<&'static str, &'static str> {
        [
            ("a", "x", 5.0),
            ("a", "y", 3.0),
            ("a", "w", 1.0),
            ("b", "x", 4.0),
            ("b", "y", 3.0),
            ("b", "w", 2.5),
            ("b", "z", 5.0),
            ("c", "y", 1.0),
            ("c", "z", 2.0),
            ("d", "q", 4.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_metrics_are_symmetric() {
        let store = store();
        let users = ["a", "b", "c", "d"];

        for metric in METRICS {
            for a in users {
                for b in users {
                    let ab = metric.similarity(&store, &a, &b);
                    let ba = metric.similarity(&store, &b, &a);
                    assert!(
                        (ab - ba).abs() < 1e-9,
                        "{} not symmetric for ({}, {}): {} vs {}",
                        metric,
                        a,
                        b,
                        ab,
                        ba
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_overlap_is_zero_for_every_metric() {
        let store = store();

        for metric in METRICS {
            assert_eq!(metric.similarity(&store, &"a", &"d"), 0.0);
            assert_eq!(metric.similarity(&store, &"a", &"nobody"), 0.0);
        }
    }

    #[test]
    fn test_metric_matches_strategy_struct() {
        let store = store();

        assert_eq!(
            SimilarityMetric::Euclidean.similarity(&store, &"a", &"b"),
            EuclideanDistance.similarity(&store, &"a", &"b")
        );
        assert_eq!(
            SimilarityMetric::Pearson.similarity(&store, &"a", &"b"),
            PearsonCorrelation.similarity(&store, &"a", &"b")
        );
        assert_eq!(
            SimilarityMetric::Cosine.similarity(&store, &"a", &"b"),
            CosineSimilarity.similarity(&store, &"a", &"b")
        );
    }

    #[test]
    fn test_dyn_strategy_through_reference() {
        let store = store();
        let strategy: &dyn Similarity<&str, &str> = &PearsonCorrelation;

        assert_eq!(strategy.name(), "pearson");
        assert_eq!(
            (&strategy).similarity(&store, &"a", &"b"),
            PearsonCorrelation.similarity(&store, &"a", &"b")
        );
    }

    #[test]
    fn test_parse_metric() {
        assert_eq!(
            "distance".parse::<SimilarityMetric>(),
            Ok(SimilarityMetric::Euclidean)
        );
        assert_eq!(
            " Pearson ".parse::<SimilarityMetric>(),
            Ok(SimilarityMetric::Pearson)
        );
        assert_eq!(
            "cosine".parse::<SimilarityMetric>(),
            Ok(SimilarityMetric::Cosine)
        );
        assert!("jaccard".parse::<SimilarityMetric>().is_err());
    }

    #[test]
    fn test_metric_deserialize() {
        let metric: SimilarityMetric = serde_json::from_str("\"distance\"").unwrap();
        assert_eq!(metric, SimilarityMetric::Euclidean);
        assert_eq!(SimilarityMetric::Cosine.to_string(), "cosine");
    }
}
