use super::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no usable route geometry from {0} to {1}")]
    NoUsableGeometry(String, String),
}
