use crate::model::{evaluation::EvaluationError, routing::RoutingError, zone::ZoneError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error(transparent)]
    ZoneError(#[from] ZoneError),
    #[error(transparent)]
    RoutingError(#[from] RoutingError),
    #[error(transparent)]
    EvaluationError(#[from] EvaluationError),
    #[error("failure serializing output: {0}")]
    SerializeError(#[from] serde_json::Error),
}
