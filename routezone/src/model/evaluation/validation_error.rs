use routezone_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("start location is required")]
    MissingStart,
    #[error("end location is required")]
    MissingEnd,
    #[error("invalid start location: {0}")]
    InvalidStart(CoreError),
    #[error("invalid end location: {0}")]
    InvalidEnd(CoreError),
    #[error("invalid waypoint at position {0}: {1}")]
    InvalidWaypoint(usize, CoreError),
    #[error("invalid departure time: {0}")]
    InvalidDepartureTime(CoreError),
    #[error("invalid day of week: {0}")]
    InvalidDay(CoreError),
}
