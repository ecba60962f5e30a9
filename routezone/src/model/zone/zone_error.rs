use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("zone catalog contains duplicate zone id '{0}'")]
    DuplicateZoneId(String),
    #[error("zone '{0}' has invalid radius {1}, must be a positive number of meters")]
    InvalidRadius(String, f64),
    #[error("zone '{0}' has congestion multiplier {1} outside of [0, 1]")]
    InvalidMultiplier(String, f64),
    #[error("zone '{0}' has an invalid center: {1}")]
    InvalidCenter(String, routezone_core::CoreError),
    #[error("failure reading zone catalog {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure decoding zone catalog {0}: {1}")]
    DecodeError(String, String),
    #[error("unsupported zone catalog file type: {0}")]
    UnsupportedFileType(String),
}
