use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvaluationError>;

/// Failures of the evaluation harness. The engines themselves never fail.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Undefined metric: {0}")]
    UndefinedMetric(String),

    #[error("Task error: {0}")]
    Task(String),
}

impl From<config::ConfigError> for EvaluationError {
    fn from(err: config::ConfigError) -> Self {
        EvaluationError::Configuration(err.to_string())
    }
}

impl From<csv::Error> for EvaluationError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, |p| p.line() as usize);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => EvaluationError::Io(io),
            _ => EvaluationError::Parse { line, message },
        }
    }
}

impl From<tokio::task::JoinError> for EvaluationError {
    fn from(err: tokio::task::JoinError) -> Self {
        EvaluationError::Task(err.to_string())
    }
}
