use super::{roc_auc, to_store, train_test_split};
use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::models::Rating;
use crate::services::UserCfEngine;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Outcome of one train/test run.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub seed: u64,
    pub similarity: String,
    pub train_size: usize,
    pub test_size: usize,
    pub train_users: usize,
    pub auc: f64,
    /// Share of held-out pairs that got a nonzero prediction.
    pub coverage: f64,
    pub elapsed_ms: u128,
}

/// Split with `seed`, build a store from the train part and predict every
/// held-out `(user, item)` pair.
pub fn run_experiment(
    ratings: &[Rating],
    config: &ExperimentConfig,
    seed: u64,
) -> Result<ExperimentReport> {
    let started = Instant::now();

    let (train, test) = train_test_split(ratings.to_vec(), config.train_ratio, seed)?;
    let store = to_store(&train);
    let engine = UserCfEngine::new(&store, config.similarity);

    let mut labels = Vec::with_capacity(test.len());
    let mut predictions = Vec::with_capacity(test.len());
    for rating in &test {
        labels.push(rating.score >= config.positive_threshold);
        predictions.push(engine.predict(&rating.user, &rating.item));
    }

    let auc = roc_auc(&labels, &predictions)?;

    let covered = predictions.iter().filter(|p| **p != 0.0).count();
    let coverage = if predictions.is_empty() {
        0.0
    } else {
        covered as f64 / predictions.len() as f64
    };

    let report = ExperimentReport {
        seed,
        similarity: engine.similarity_name().to_string(),
        train_size: train.len(),
        test_size: test.len(),
        train_users: store.user_count(),
        auc,
        coverage,
        elapsed_ms: started.elapsed().as_millis(),
    };

    info!(
        seed = report.seed,
        similarity = %report.similarity,
        auc = report.auc,
        coverage = report.coverage,
        elapsed_ms = report.elapsed_ms as u64,
        "Experiment finished"
    );

    Ok(report)
}

/// Run one experiment per configured seed on the blocking pool.
///
/// Reports come back in seed order; the first failure aborts the batch.
pub async fn run_experiments(
    ratings: Arc<Vec<Rating>>,
    config: &ExperimentConfig,
) -> Result<Vec<ExperimentReport>> {
    let handles: Vec<_> = config
        .seeds
        .iter()
        .map(|&seed| {
            let ratings = Arc::clone(&ratings);
            let config = config.clone();
            tokio::task::spawn_blocking(move || run_experiment(&ratings, &config, seed))
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await??);
    }

    Ok(reports)
}
