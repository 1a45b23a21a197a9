pub mod config;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{EvaluationError, Result};
pub use models::{PreferenceStore, RankingEntry, Rating};
pub use services::{
    predict, recommend, recommend_top_n, CosineSimilarity, EuclideanDistance, PearsonCorrelation,
    Similarity, SimilarityMetric, UserCfEngine,
};
