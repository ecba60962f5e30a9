use super::{
    evaluation_response::TRAFFIC_AVOIDANCE_LEVEL, EvaluationConfig, EvaluationError,
    EvaluationRequest, EvaluationResponse, Recommendations, TrafficAnalysis, ValidatedRequest,
    ZoneAnalysis,
};
use crate::model::{
    route::{CandidateKind, RouteCandidate, RouteGeometry},
    routing::{ProviderRoute, RouteProvider, RoutingError},
    traffic::{
        apply_zone_congestion, segments_from_geometry, segments_from_straight_line,
        TrafficSummary,
    },
    zone::{predict_zone_traffic, ZoneRegistry},
};
use rand::Rng;
use routezone_core::Coordinate;
use std::sync::Arc;

/// evaluates candidate routes between two locations against a shared zone
/// registry and a routing service.
///
/// the registry is read only and may be shared across concurrent
/// evaluations. each call to [`RouteEvaluator::evaluate`] owns its candidates;
/// dropping the returned future before it completes cancels any in-flight
/// routing requests and yields no result.
pub struct RouteEvaluator<P: RouteProvider> {
    registry: Arc<ZoneRegistry>,
    provider: P,
    config: EvaluationConfig,
}

impl<P: RouteProvider> RouteEvaluator<P> {
    pub fn new(registry: Arc<ZoneRegistry>, provider: P, config: EvaluationConfig) -> Self {
        Self {
            registry,
            provider,
            config,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// validates `request` and evaluates it. every pseudo-random draw comes
    /// from `rng`, so a seeded generator reproduces the same response.
    pub async fn evaluate<R: Rng>(
        &self,
        request: &EvaluationRequest,
        rng: &mut R,
    ) -> Result<EvaluationResponse, EvaluationError> {
        let request = request.validate().inspect_err(|e| {
            log::warn!("rejecting evaluation request: {e}");
        })?;
        self.evaluate_validated(&request, rng).await
    }

    /// runs the candidate pipeline for an already validated request.
    ///
    /// the direct and synthetic alternative routes are requested
    /// concurrently. candidates are ordered direct, synthetic alternative,
    /// then routing service alternatives, regardless of which request
    /// finished first. a failed or empty routing response is replaced by a
    /// straight line between start and end.
    pub async fn evaluate_validated<R: Rng>(
        &self,
        request: &ValidatedRequest,
        rng: &mut R,
    ) -> Result<EvaluationResponse, EvaluationError> {
        let ValidatedRequest {
            start,
            end,
            waypoints,
            departure_time,
            day_of_week,
        } = request;

        let via = [synthetic_waypoint(
            start,
            end,
            self.config.alternative_offset_degrees,
            rng,
        )];
        let (direct, synthetic) = futures::join!(
            self.provider.route(start, end, waypoints),
            self.provider.route(start, end, &via),
        );

        let (direct, provider_alternatives) = self.resolve_geometry(direct, start, end, "direct");
        let (synthetic, _) = self.resolve_geometry(synthetic, start, end, "alternative");

        let mut geometries = vec![
            (CandidateKind::Direct, direct),
            (CandidateKind::SyntheticAlternative, synthetic),
        ];
        geometries.extend(
            provider_alternatives
                .into_iter()
                .filter(RouteGeometry::is_usable)
                .take(self.config.max_provider_alternatives)
                .enumerate()
                .map(|(idx, g)| (CandidateKind::ProviderAlternative(idx + 1), g)),
        );

        let candidates: Vec<RouteCandidate> = geometries
            .into_iter()
            .filter(|(_, g)| g.is_usable())
            .map(|(kind, geometry)| self.build_candidate(kind, geometry, request, rng))
            .collect();

        let scores: Vec<f64> = candidates.iter().map(RouteCandidate::score).collect();
        let best_idx = select_best(&scores)
            .ok_or_else(|| EvaluationError::NoUsableGeometry(start.to_string(), end.to_string()))?;
        let best = &candidates[best_idx];

        let summary = TrafficSummary::from_segments(candidates.iter().flat_map(|c| c.segments.iter()));
        let prediction = &best.zone_prediction;
        let zone_analysis = ZoneAnalysis {
            total_zones_detected: prediction.zones_detected,
            high_traffic_zones: prediction.high_traffic_zones.len(),
            zone_warnings: prediction.warnings.clone(),
        };
        let recommendations = Recommendations {
            recommended_route_index: best_idx,
            confidence_score: scores[best_idx],
            alternative_routes_available: candidates.len() - 1,
            traffic_avoidance_success: best.avg_traffic_level() < TRAFFIC_AVOIDANCE_LEVEL,
            suggested_departure_time: *departure_time,
            zone_warnings: prediction.warnings.clone(),
            avoid_high_traffic_zones: !prediction.high_traffic_zones.is_empty(),
        };

        log::info!(
            "evaluated {} routes, best route index {} with score {:.3}, {} zones detected",
            candidates.len(),
            best_idx,
            scores[best_idx],
            prediction.zones_detected
        );

        Ok(EvaluationResponse {
            best_route_index: best_idx,
            confidence: scores[best_idx],
            estimated_time_s: best.geometry.duration_s,
            distance_m: best.geometry.distance_m,
            departure_time: *departure_time,
            day_of_week: *day_of_week,
            traffic_analysis: TrafficAnalysis {
                summary,
                zone_analysis,
            },
            recommendations,
            routes: candidates.iter().map(RouteCandidate::summary).collect(),
        })
    }

    /// takes the geometry from a routing response, substituting the
    /// straight-line fallback when the call failed or produced nothing usable.
    fn resolve_geometry(
        &self,
        response: Result<ProviderRoute, RoutingError>,
        start: &Coordinate,
        end: &Coordinate,
        label: &str,
    ) -> (RouteGeometry, Vec<RouteGeometry>) {
        match response {
            Ok(route) if route.geometry.is_usable() => (route.geometry, route.alternatives),
            Ok(_) => {
                log::warn!("{label} route from {start} to {end} has no usable geometry, using straight line");
                (RouteGeometry::straight_line(start, end), vec![])
            }
            Err(e) => {
                log::warn!("{label} route from {start} to {end} failed, using straight line: {e}");
                (RouteGeometry::straight_line(start, end), vec![])
            }
        }
    }

    /// runs segmentation, zone prediction and zone adjustment for one geometry.
    ///
    /// a two-point straight-line fallback carries no road shape, so its
    /// segments are interpolated along the line and zones are detected at
    /// those interpolated points. routed geometries always use geometry mode.
    fn build_candidate<R: Rng>(
        &self,
        kind: CandidateKind,
        geometry: RouteGeometry,
        request: &ValidatedRequest,
        rng: &mut R,
    ) -> RouteCandidate {
        let coordinates = &geometry.coordinates;
        let (mut segments, zone_prediction) = match coordinates.as_slice() {
            [first, last] if !geometry.success => {
                let segments = segments_from_straight_line(first, last, self.config.segment_count, rng);
                let points: Vec<Coordinate> = segments.iter().filter_map(|s| s.coordinate).collect();
                let prediction = predict_zone_traffic(
                    &self.registry,
                    &points,
                    &request.departure_time,
                    &request.day_of_week,
                );
                (segments, prediction)
            }
            _ => {
                let segments = segments_from_geometry(coordinates, self.config.segment_count, rng);
                let prediction = predict_zone_traffic(
                    &self.registry,
                    coordinates,
                    &request.departure_time,
                    &request.day_of_week,
                );
                (segments, prediction)
            }
        };
        let affected = apply_zone_congestion(&mut segments, &zone_prediction);
        log::debug!(
            "{:?} candidate: {} segments, {} zone affected",
            kind,
            segments.len(),
            affected
        );
        RouteCandidate {
            kind,
            geometry,
            segments,
            zone_prediction,
        }
    }
}

/// the midpoint of `start` and `end` shifted by a uniform random offset in
/// `[-max_offset, max_offset]` degrees along each axis
pub fn synthetic_waypoint<R: Rng>(
    start: &Coordinate,
    end: &Coordinate,
    max_offset: f64,
    rng: &mut R,
) -> Coordinate {
    let max_offset = if max_offset.is_finite() { max_offset.abs() } else { 0.0 };
    let delta_latitude = rng.random_range(-max_offset..=max_offset);
    let delta_longitude = rng.random_range(-max_offset..=max_offset);
    start.midpoint(end).offset(delta_latitude, delta_longitude)
}

/// index of the strictly highest score. ties keep the earliest index.
pub fn select_best(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if *score <= best_score => {}
            _ => best = Some((idx, *score)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_select_best_first_wins_ties() {
        assert_eq!(select_best(&[0.5, 0.7, 0.7, 0.2]), Some(1));
        assert_eq!(select_best(&[0.4, 0.4]), Some(0));
        assert_eq!(select_best(&[0.1]), Some(0));
        assert_eq!(select_best(&[]), None);
    }

    #[test]
    fn test_synthetic_waypoint_within_offset() {
        let start = Coordinate::new(19.0760, 72.8777);
        let end = Coordinate::new(18.5204, 73.8567);
        let mid = start.midpoint(&end);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let waypoint = synthetic_waypoint(&start, &end, 0.02, &mut rng);
            assert!((waypoint.latitude - mid.latitude).abs() <= 0.02 + 1e-12);
            assert!((waypoint.longitude - mid.longitude).abs() <= 0.02 + 1e-12);
        }
    }

    #[test]
    fn test_synthetic_waypoint_zero_offset_is_midpoint() {
        let start = Coordinate::new(12.0, 77.0);
        let end = Coordinate::new(13.0, 78.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            synthetic_waypoint(&start, &end, 0.0, &mut rng),
            start.midpoint(&end)
        );
    }
}
