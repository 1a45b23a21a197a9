use anyhow::{Context, Result};
use cf_engine::evaluation::{load_ratings, run_experiments};
use cf_engine::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .init();

    config
        .validate()
        .context("Configuration validation failed")?;

    info!(
        ratings_path = %config.data.ratings_path,
        similarity = %config.experiment.similarity,
        train_ratio = config.experiment.train_ratio,
        seeds = ?config.experiment.seeds,
        "Starting cf-simulation"
    );

    let ratings = load_ratings(&config.data.ratings_path, &config.data)
        .with_context(|| format!("Failed to load ratings from {}", config.data.ratings_path))?;

    let reports = run_experiments(Arc::new(ratings), &config.experiment)
        .await
        .context("Experiment run failed")?;

    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }

    let mean_auc = reports.iter().map(|r| r.auc).sum::<f64>() / reports.len() as f64;
    info!(runs = reports.len(), mean_auc = mean_auc, "All experiments finished");

    Ok(())
}
