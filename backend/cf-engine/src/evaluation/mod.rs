//! Offline evaluation around the engines: load a ratings file, split it,
//! predict the held-out pairs and score the predictions.

pub mod experiment;
pub mod loader;
pub mod metrics;
pub mod split;

pub use experiment::{run_experiment, run_experiments, ExperimentReport};
pub use loader::{load_ratings, parse_ratings, to_store};
pub use metrics::roc_auc;
pub use split::train_test_split;
