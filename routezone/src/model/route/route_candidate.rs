use super::{score, CandidateKind, RouteGeometry};
use crate::model::{
    traffic::{count_high_traffic, mean_traffic_level, TrafficSegment},
    zone::ZonePrediction,
};
use serde::Serialize;

/// one route option moving through the evaluation pipeline. the score is
/// derived on demand from the geometry totals and the segment traffic.
#[derive(Clone, Debug)]
pub struct RouteCandidate {
    pub kind: CandidateKind,
    pub geometry: RouteGeometry,
    pub segments: Vec<TrafficSegment>,
    pub zone_prediction: ZonePrediction,
}

/// reported form of a scored candidate
#[derive(Serialize, Clone, Debug)]
pub struct CandidateSummary {
    pub kind: CandidateKind,
    pub distance_m: f64,
    pub duration_s: f64,
    pub success: bool,
    pub coordinates: Vec<routezone_core::Coordinate>,
    pub score: f64,
    pub avg_traffic_level: f64,
    pub high_traffic_segments: usize,
    pub estimated_delay_s: f64,
    pub recommendation: String,
    pub segments: Vec<TrafficSegment>,
    pub zone_prediction: ZonePrediction,
}

impl RouteCandidate {
    pub fn avg_traffic_level(&self) -> f64 {
        mean_traffic_level(&self.segments)
    }

    pub fn score(&self) -> f64 {
        score(
            self.geometry.distance_m,
            self.geometry.duration_s,
            self.avg_traffic_level(),
        )
    }

    /// expected delay in seconds: `avg_traffic * duration * delay_factor`
    pub fn estimated_delay_s(&self) -> f64 {
        self.avg_traffic_level() * self.geometry.duration_s * self.kind.delay_factor()
    }

    pub fn summary(&self) -> CandidateSummary {
        CandidateSummary {
            kind: self.kind,
            distance_m: self.geometry.distance_m,
            duration_s: self.geometry.duration_s,
            success: self.geometry.success,
            coordinates: self.geometry.coordinates.clone(),
            score: self.score(),
            avg_traffic_level: self.avg_traffic_level(),
            high_traffic_segments: count_high_traffic(&self.segments),
            estimated_delay_s: self.estimated_delay_s(),
            recommendation: self.kind.recommendation(self.geometry.success),
            segments: self.segments.clone(),
            zone_prediction: self.zone_prediction.clone(),
        }
    }
}
