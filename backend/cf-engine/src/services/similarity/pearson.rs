use super::Similarity;
use crate::models::PreferenceStore;
use std::hash::Hash;

/// Pearson correlation of two users' scores over their shared items.
///
/// Falls in `[-1, 1]`. Returns `0` when there is no overlap or when either
/// user has zero variance over the shared items (including a single shared
/// item), since the coefficient is undefined there.
#[derive(Debug, Clone, Copy, Default)]
pub struct PearsonCorrelation;

impl<U, I> Similarity<U, I> for PearsonCorrelation
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    fn similarity(&self, store: &PreferenceStore<U, I>, a: &U, b: &U) -> f64 {
        let shared = store.shared_scores(a, b);
        if shared.is_empty() {
            return 0.0;
        }

        let n = shared.len() as f64;

        let (mut sum1, mut sum2) = (0.0, 0.0);
        let (mut sum1_sq, mut sum2_sq) = (0.0, 0.0);
        let mut p_sum = 0.0;
        for &(sa, sb) in &shared {
            sum1 += sa;
            sum2 += sb;
            sum1_sq += sa * sa;
            sum2_sq += sb * sb;
            p_sum += sa * sb;
        }

        let numerator = p_sum - (sum1 * sum2 / n);
        let variance_product = (sum1_sq - sum1 * sum1 / n) * (sum2_sq - sum2 * sum2 / n);

        // Cancellation can leave a tiny negative product for constant scores.
        if !variance_product.is_finite() || variance_product <= 0.0 {
            return 0.0;
        }

        numerator / variance_product.sqrt()
    }

    fn name(&self) -> &'static str {
        "pearson"
    }
}
