use super::{segments_from_straight_line, TrafficSegment};
use rand::Rng;
use routezone_core::Coordinate;
use serde::Serialize;

/// number of segments in a live traffic sample
pub const LIVE_TRAFFIC_SEGMENTS: usize = 4;

/// degrees added to both axes of the sample center to form the sample line
const LIVE_TRAFFIC_SPAN_DEGREES: f64 = 0.01;

#[derive(Serialize, Clone, Debug)]
pub struct LiveTraffic {
    pub location: Coordinate,
    pub radius: f64,
    pub segments: Vec<TrafficSegment>,
    pub timestamp: String,
}

/// simulated traffic around a location: straight-line segments from the
/// location toward a point 0.01 degrees north-east of it.
pub fn live_traffic<R: Rng>(location: &Coordinate, radius: f64, rng: &mut R) -> LiveTraffic {
    let end = location.offset(LIVE_TRAFFIC_SPAN_DEGREES, LIVE_TRAFFIC_SPAN_DEGREES);
    let segments = segments_from_straight_line(location, &end, LIVE_TRAFFIC_SEGMENTS, rng);
    LiveTraffic {
        location: *location,
        radius,
        segments,
        timestamp: chrono::Local::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_live_sample() {
        let mut rng = StdRng::seed_from_u64(5);
        let location = Coordinate::new(12.97, 77.59);
        let sample = live_traffic(&location, 1000.0, &mut rng);
        assert_eq!(sample.segments.len(), LIVE_TRAFFIC_SEGMENTS);
        assert_eq!(sample.segments[0].coordinate, Some(location));
        assert!(sample.segments.iter().all(|s| !s.zone_affected()));
    }
}
