use crate::error::{EvaluationError, Result};
use crate::services::SimilarityMetric;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub experiment: ExperimentConfig,
    pub log_level: String,
}

/// Where the ratings come from and how raw ratings become scores.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub ratings_path: String,
    /// `tab`, `comma`, or a single literal character.
    pub delimiter: String,
    pub has_header: bool,
    /// Map raw ratings to 0/1 (`raw < binarize_threshold` -> 0).
    pub binarize: bool,
    pub binarize_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperimentConfig {
    pub train_ratio: f64,
    #[serde(deserialize_with = "deserialize_seeds")]
    pub seeds: Vec<u64>,
    pub similarity: SimilarityMetric,
    /// Held-out scores at or above this count as positive labels for AUC.
    pub positive_threshold: f64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            ratings_path: "data/product/ratings.csv".to_string(),
            delimiter: "tab".to_string(),
            has_header: true,
            binarize: true,
            binarize_threshold: 3.0,
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            seeds: vec![1, 999, 345, 124, 3345],
            similarity: SimilarityMetric::Euclidean,
            positive_threshold: 0.5,
        }
    }
}

impl DataConfig {
    pub fn delimiter_char(&self) -> Result<char> {
        match self.delimiter.as_str() {
            "tab" | "\\t" => Ok('\t'),
            "comma" => Ok(','),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(EvaluationError::Configuration(format!(
                        "delimiter must be 'tab', 'comma' or a single character, got '{}'",
                        other
                    ))),
                }
            }
        }
    }
}

impl Config {
    /// Load from `.env` and the process environment, nested keys separated
    /// by `__` (e.g. `EXPERIMENT__SIMILARITY=pearson`).
    pub fn from_env() -> std::result::Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let data = DataConfig::default();
        let experiment = ExperimentConfig::default();
        let seeds = experiment
            .seeds
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let config = config::Config::builder()
            .set_default("data.ratings_path", data.ratings_path)?
            .set_default("data.delimiter", data.delimiter)?
            .set_default("data.has_header", data.has_header)?
            .set_default("data.binarize", data.binarize)?
            .set_default("data.binarize_threshold", data.binarize_threshold)?
            .set_default("experiment.train_ratio", experiment.train_ratio)?
            .set_default("experiment.seeds", seeds)?
            .set_default("experiment.similarity", experiment.similarity.as_str())?
            .set_default("experiment.positive_threshold", experiment.positive_threshold)?
            .set_default("log_level", "info")?
            .add_source(config::Environment::default().separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.data.ratings_path.trim().is_empty() {
            return Err(anyhow::anyhow!("Ratings path is required"));
        }

        self.data.delimiter_char()?;

        if !self.data.binarize_threshold.is_finite() {
            return Err(anyhow::anyhow!("Binarize threshold must be finite"));
        }

        if !(self.experiment.train_ratio > 0.0 && self.experiment.train_ratio < 1.0) {
            return Err(anyhow::anyhow!(
                "Train ratio must be strictly between 0 and 1 so both partitions are non-empty"
            ));
        }

        if self.experiment.seeds.is_empty() {
            return Err(anyhow::anyhow!("At least one seed is required"));
        }

        if !self.experiment.positive_threshold.is_finite() {
            return Err(anyhow::anyhow!("Positive threshold must be finite"));
        }

        Ok(())
    }
}

/// Seeds come either as a list or as a comma-separated string (env vars).
fn deserialize_seeds<'de, D>(deserializer: D) -> std::result::Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seeds {
        List(Vec<u64>),
        Csv(String),
    }

    match Seeds::deserialize(deserializer)? {
        Seeds::List(seeds) => Ok(seeds),
        Seeds::Csv(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u64>().map_err(serde::de::Error::custom))
            .collect(),
    }
}
