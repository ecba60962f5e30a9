use super::{CongestionClass, SegmentTraffic, TrafficSegment};
use rand::Rng;
use routezone_core::Coordinate;
use std::ops::Range;

/// segments requested per route geometry unless configured otherwise
pub const DEFAULT_SEGMENT_COUNT: usize = 8;

/// traffic band for segments sampled from a routed geometry
const GEOMETRY_TRAFFIC_BAND: Range<f64> = 0.1..0.8;

/// traffic band for segments interpolated along a straight line
const STRAIGHT_LINE_TRAFFIC_BAND: Range<f64> = 0.1..0.9;

/// samples evenly spaced points from a route geometry and synthesizes a
/// traffic segment at each one.
///
/// `k = min(segment_count, n / 2)` points are taken at indices
/// `i * n / max(1, k - 1)`, clamped to the last point. traffic is drawn
/// uniformly from [0.1, 0.8). if the geometry has fewer than two points,
/// contains non-finite values, or `k` is zero, a single
/// [`fallback_segment`] is returned.
///
/// # Arguments
///
/// * `coordinates`   - route geometry in travel order
/// * `segment_count` - requested number of segments
/// * `rng`           - source of the simulated traffic levels
///
/// # Returns
///
/// * at least one traffic segment
pub fn segments_from_geometry<R: Rng>(
    coordinates: &[Coordinate],
    segment_count: usize,
    rng: &mut R,
) -> Vec<TrafficSegment> {
    let n = coordinates.len();
    let k = segment_count.min(n / 2);
    if n < 2 || k == 0 || !coordinates.iter().all(is_finite) {
        log::error!(
            "unable to sample {segment_count} traffic segments from a geometry with {n} points, using fallback segment"
        );
        return vec![fallback_segment(coordinates.first().copied())];
    }
    let divisor = (k - 1).max(1);
    (0..k)
        .map(|i| {
            let idx = (i * n / divisor).min(n - 1);
            let level = rng.random_range(GEOMETRY_TRAFFIC_BAND);
            TrafficSegment::new(i, coordinates[idx], SegmentTraffic::simulated(level))
        })
        .collect()
}

/// interpolates `segment_count` points between `start` and `end` and
/// synthesizes a traffic segment at each. traffic is drawn uniformly from
/// [0.1, 0.9). used when no routed geometry is available.
pub fn segments_from_straight_line<R: Rng>(
    start: &Coordinate,
    end: &Coordinate,
    segment_count: usize,
    rng: &mut R,
) -> Vec<TrafficSegment> {
    if segment_count == 0 || !is_finite(start) || !is_finite(end) {
        log::error!("unable to interpolate {segment_count} traffic segments from {start} to {end}, using fallback segment");
        return vec![fallback_segment(Some(*start))];
    }
    let divisor = (segment_count - 1).max(1) as f64;
    (0..segment_count)
        .map(|i| {
            let progress = i as f64 / divisor;
            let point = start.interpolate(end, progress);
            let level = rng.random_range(STRAIGHT_LINE_TRAFFIC_BAND);
            TrafficSegment::new(i, point, SegmentTraffic::simulated(level))
        })
        .collect()
}

/// the segment reported when synthesis cannot proceed: light traffic at
/// level 0.3 moving at 50 km/h.
pub fn fallback_segment(coordinate: Option<Coordinate>) -> TrafficSegment {
    TrafficSegment {
        segment_id: String::from("segment_0"),
        coordinate,
        simulated: SegmentTraffic {
            traffic_level: 0.3,
            speed_kmh: 50.0,
            congestion_class: CongestionClass::Light,
        },
        zone_adjustment: None,
    }
}

fn is_finite(coordinate: &Coordinate) -> bool {
    coordinate.latitude.is_finite() && coordinate.longitude.is_finite()
}
