use super::Similarity;
use crate::models::PreferenceStore;
use std::hash::Hash;

/// Cosine of the two users' score vectors restricted to their shared items.
///
/// A restricted vector with zero norm (every shared score is `0.0`) has no
/// direction, so the result is `0` rather than `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineSimilarity;

impl<U, I> Similarity<U, I> for CosineSimilarity
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    fn similarity(&self, store: &PreferenceStore<U, I>, a: &U, b: &U) -> f64 {
        let shared = store.shared_scores(a, b);
        if shared.is_empty() {
            return 0.0;
        }

        let (mut dot, mut norm_a, mut norm_b) = (0.0, 0.0, 0.0);
        for &(sa, sb) in &shared {
            dot += sa * sb;
            norm_a += sa * sa;
            norm_b += sb * sb;
        }

        let denominator = norm_a.sqrt() * norm_b.sqrt();
        if denominator == 0.0 {
            return 0.0;
        }

        dot / denominator
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        let store: PreferenceStore<&str, &str> = [
            ("a", "x", 1.0),
            ("a", "y", 0.0),
            ("b", "x", 1.0),
            ("b", "y", 1.0),
        ]
        .into_iter()
        .collect();

        // dot = 1, |a| = 1, |b| = sqrt(2)
        let sim = CosineSimilarity.similarity(&store, &"a", &"b");
        assert!((sim - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_restricted_to_shared_items() {
        // b's extra rating on z must not change the result.
        let store: PreferenceStore<&str, &str> = [
            ("a", "x", 2.0),
            ("a", "y", 4.0),
            ("b", "x", 1.0),
            ("b", "y", 2.0),
            ("b", "z", 5.0),
        ]
        .into_iter()
        .collect();

        let sim = CosineSimilarity.similarity(&store, &"a", &"b");
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_self_similarity() {
        let store: PreferenceStore<&str, &str> = [("a", "x", 3.0), ("a", "y", 4.0)]
            .into_iter()
            .collect();

        let sim = CosineSimilarity.similarity(&store, &"a", &"a");
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_norm_is_zero() {
        let store: PreferenceStore<&str, &str> = [
            ("a", "x", 0.0),
            ("a", "y", 0.0),
            ("b", "x", 1.0),
            ("b", "y", 1.0),
        ]
        .into_iter()
        .collect();

        let sim = CosineSimilarity.similarity(&store, &"a", &"b");
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());
    }
}
