use super::{TimeWindowPattern, ZoneType};
use routezone_core::{util::geo_utils, Coordinate};
use serde::{Deserialize, Serialize};

/// a circular area with scheduled congestion behavior, such as a school
/// catchment or a shopping district.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    pub center: Coordinate,
    /// radius in meters
    pub radius: f64,
    /// patterns are ordered; see [`super::resolve_congestion`]
    #[serde(default)]
    pub peak_patterns: Vec<TimeWindowPattern>,
}

impl Zone {
    /// true if the point lies within this zone's radius of its center
    pub fn contains(&self, point: &Coordinate) -> bool {
        geo_utils::distance(point, &self.center) <= self.radius
    }
}
