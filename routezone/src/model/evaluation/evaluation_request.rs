use super::ValidationError;
use routezone_core::{Coordinate, Day, TimeOfDay};
use serde::{Deserialize, Serialize};

/// a route evaluation request as submitted by a caller
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EvaluationRequest {
    pub start: Option<Coordinate>,
    pub end: Option<Coordinate>,
    #[serde(default)]
    pub waypoints: Vec<Coordinate>,
    /// "HH:MM", defaults to the current local time
    pub departure_time: Option<String>,
    /// weekday name, defaults to the current local day
    pub day_of_week: Option<String>,
}

/// a request that passed validation, with defaults filled in
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedRequest {
    pub start: Coordinate,
    pub end: Coordinate,
    pub waypoints: Vec<Coordinate>,
    pub departure_time: TimeOfDay,
    pub day_of_week: Day,
}

impl EvaluationRequest {
    pub fn new(start: Coordinate, end: Coordinate) -> EvaluationRequest {
        EvaluationRequest {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    /// checks the request and resolves its defaults. a start or end of
    /// exactly (0, 0) is treated as absent.
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        let start = match self.start {
            Some(c) if !c.is_unset() => c,
            _ => return Err(ValidationError::MissingStart),
        };
        let end = match self.end {
            Some(c) if !c.is_unset() => c,
            _ => return Err(ValidationError::MissingEnd),
        };
        start.validate().map_err(ValidationError::InvalidStart)?;
        end.validate().map_err(ValidationError::InvalidEnd)?;
        for (idx, waypoint) in self.waypoints.iter().enumerate() {
            waypoint
                .validate()
                .map_err(|e| ValidationError::InvalidWaypoint(idx, e))?;
        }
        let departure_time = match &self.departure_time {
            Some(s) => s.parse().map_err(ValidationError::InvalidDepartureTime)?,
            None => TimeOfDay::now(),
        };
        let day_of_week = match &self.day_of_week {
            Some(s) => s.parse().map_err(ValidationError::InvalidDay)?,
            None => Day::today(),
        };
        Ok(ValidatedRequest {
            start,
            end,
            waypoints: self.waypoints.clone(),
            departure_time,
            day_of_week,
        })
    }
}
