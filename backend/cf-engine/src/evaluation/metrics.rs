use crate::error::{EvaluationError, Result};

/// Area under the ROC curve of `scores` against binary `labels`.
///
/// Computed from the rank-sum (Mann-Whitney U) statistic, giving tied scores
/// their average rank, so a tie between a positive and a negative counts as
/// half a correct ordering. Undefined when only one class is present.
pub fn roc_auc(labels: &[bool], scores: &[f64]) -> Result<f64> {
    if labels.len() != scores.len() {
        return Err(EvaluationError::Validation(format!(
            "labels and scores differ in length: {} vs {}",
            labels.len(),
            scores.len()
        )));
    }

    let positives = labels.iter().filter(|&&label| label).count();
    let negatives = labels.len() - positives;
    if positives == 0 || negatives == 0 {
        return Err(EvaluationError::UndefinedMetric(
            "ROC AUC needs both positive and negative labels".to_string(),
        ));
    }

    let n = scores.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && scores[order[end + 1]].total_cmp(&scores[order[start]]).is_eq() {
            end += 1;
        }

        // 1-based average rank of the tied block
        let average_rank = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = average_rank;
        }

        start = end + 1;
    }

    let positive_rank_sum: f64 = ranks
        .iter()
        .zip(labels)
        .filter(|(_, &label)| label)
        .map(|(rank, _)| rank)
        .sum();

    let p = positives as f64;
    let q = negatives as f64;

    Ok((positive_rank_sum - p * (p + 1.0) / 2.0) / (p * q))
}
