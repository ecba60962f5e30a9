use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("latitude {0} must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} must be between -180 and 180")]
    LongitudeOutOfRange(f64),
    #[error("unable to parse coordinate '{0}', expected 'latitude,longitude'")]
    InvalidCoordinate(String),
    #[error("unable to parse time of day '{0}', expected HH:MM")]
    InvalidTimeOfDay(String),
    #[error("unknown day of week '{0}'")]
    InvalidDay(String),
}
