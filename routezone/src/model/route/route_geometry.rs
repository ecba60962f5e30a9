use routezone_core::{util::geo_utils, Coordinate};
use serde::Serialize;

/// travel speed assumed for the straight-line fallback, in meters per second
pub const FALLBACK_SPEED_MPS: f64 = 15.0;

/// a candidate path in travel order with its totals
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RouteGeometry {
    pub coordinates: Vec<Coordinate>,
    /// meters
    pub distance_m: f64,
    /// seconds
    pub duration_s: f64,
    /// false when this geometry was not produced by the routing service
    pub success: bool,
}

impl RouteGeometry {
    /// two-point geometry from `start` to `end`, with duration estimated at
    /// [`FALLBACK_SPEED_MPS`]. marked as unsuccessful.
    pub fn straight_line(start: &Coordinate, end: &Coordinate) -> RouteGeometry {
        let distance_m = geo_utils::distance(start, end);
        RouteGeometry {
            coordinates: vec![*start, *end],
            distance_m,
            duration_s: distance_m / FALLBACK_SPEED_MPS,
            success: false,
        }
    }

    /// a geometry is usable when it has at least two points and finite totals
    pub fn is_usable(&self) -> bool {
        self.coordinates.len() >= 2 && self.distance_m.is_finite() && self.duration_s.is_finite()
    }
}
