use crate::model::{route::CandidateSummary, traffic::TrafficSummary};
use routezone_core::{Day, TimeOfDay};
use serde::Serialize;

/// average traffic on the best route below which traffic avoidance counts as
/// successful
pub const TRAFFIC_AVOIDANCE_LEVEL: f64 = 0.6;

/// the complete result of one evaluation
#[derive(Serialize, Clone, Debug)]
pub struct EvaluationResponse {
    pub routes: Vec<CandidateSummary>,
    pub best_route_index: usize,
    /// score of the best route
    pub confidence: f64,
    /// duration of the best route, seconds
    pub estimated_time_s: f64,
    /// distance of the best route, meters
    pub distance_m: f64,
    pub departure_time: TimeOfDay,
    pub day_of_week: Day,
    pub traffic_analysis: TrafficAnalysis,
    pub recommendations: Recommendations,
}

#[derive(Serialize, Clone, Debug)]
pub struct TrafficAnalysis {
    #[serde(flatten)]
    pub summary: TrafficSummary,
    pub zone_analysis: ZoneAnalysis,
}

/// zone outlook of the best route
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ZoneAnalysis {
    pub total_zones_detected: usize,
    pub high_traffic_zones: usize,
    pub zone_warnings: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Recommendations {
    pub recommended_route_index: usize,
    pub confidence_score: f64,
    pub alternative_routes_available: usize,
    pub traffic_avoidance_success: bool,
    pub suggested_departure_time: TimeOfDay,
    pub zone_warnings: Vec<String>,
    pub avoid_high_traffic_zones: bool,
}

impl EvaluationResponse {
    pub fn best_route(&self) -> Option<&CandidateSummary> {
        self.routes.get(self.best_route_index)
    }
}
