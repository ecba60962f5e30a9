use super::{CongestionClass, SegmentTraffic, TrafficSegment, ZoneAdjustment, MIN_SPEED_KMH};
use crate::model::zone::ZonePrediction;
use routezone_core::util::geo_utils;

/// segments within this many meters of a high-traffic zone center are adjusted
pub const ZONE_INFLUENCE_METERS: f64 = 1000.0;

const ZONE_TRAFFIC_FACTOR: f64 = 1.4;
const MAX_ZONE_TRAFFIC_LEVEL: f64 = 0.95;
const ZONE_SPEED_FACTOR: f64 = 0.6;

/// overlays high-traffic zone predictions onto simulated segments.
///
/// each segment is compared against the prediction's high-traffic zones in
/// order. the first zone whose center lies within [`ZONE_INFLUENCE_METERS`]
/// adjusts the segment and no further zones are checked for it. segments
/// without a coordinate are skipped.
///
/// adjusted traffic is `min(0.95, level * 1.4)`, classified severe above 0.8
/// and heavy otherwise, with speed `max(10, speed * 0.6)`.
///
/// # Returns
///
/// * number of segments that were adjusted
pub fn apply_zone_congestion(segments: &mut [TrafficSegment], prediction: &ZonePrediction) -> usize {
    let mut affected = 0;
    for segment in segments.iter_mut() {
        let Some(coordinate) = segment.coordinate else {
            continue;
        };
        let nearby_zone = prediction
            .high_traffic_zones
            .iter()
            .find(|z| geo_utils::distance(&coordinate, &z.center) <= ZONE_INFLUENCE_METERS);
        if let Some(zone) = nearby_zone {
            let adjusted = adjust(segment.current());
            segment.zone_adjustment = Some(ZoneAdjustment {
                zone_id: zone.zone_id.clone(),
                traffic: adjusted,
            });
            affected += 1;
        }
    }
    log::debug!("zone congestion applied to {affected} of {} segments", segments.len());
    affected
}

fn adjust(traffic: &SegmentTraffic) -> SegmentTraffic {
    let traffic_level = (traffic.traffic_level * ZONE_TRAFFIC_FACTOR)
        .min(MAX_ZONE_TRAFFIC_LEVEL)
        .clamp(0.0, 1.0);
    let congestion_class = if traffic_level > 0.8 {
        CongestionClass::Severe
    } else {
        CongestionClass::Heavy
    };
    SegmentTraffic {
        traffic_level,
        speed_kmh: (traffic.speed_kmh * ZONE_SPEED_FACTOR).max(MIN_SPEED_KMH),
        congestion_class,
    }
}
