use super::CongestionClass;
use routezone_core::Coordinate;
use serde::Serialize;

/// free-flow speed that traffic reduces from
pub const BASE_SPEED_KMH: f64 = 60.0;

/// no segment is ever reported slower than this
pub const MIN_SPEED_KMH: f64 = 10.0;

/// traffic conditions on a segment for one layer of the model
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SegmentTraffic {
    pub traffic_level: f64,
    pub speed_kmh: f64,
    pub congestion_class: CongestionClass,
}

impl SegmentTraffic {
    /// derives speed and class from a traffic level:
    /// `speed = 60 * (1 - level * 0.6)`.
    pub fn simulated(traffic_level: f64) -> SegmentTraffic {
        let traffic_level = traffic_level.clamp(0.0, 1.0);
        SegmentTraffic {
            traffic_level,
            speed_kmh: (BASE_SPEED_KMH * (1.0 - traffic_level * 0.6)).max(MIN_SPEED_KMH),
            congestion_class: CongestionClass::from_traffic_level(traffic_level),
        }
    }
}

/// traffic after a nearby high-traffic zone has been applied
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ZoneAdjustment {
    pub zone_id: String,
    pub traffic: SegmentTraffic,
}

/// a sample point along a route annotated with traffic.
///
/// the pseudo-random `simulated` layer and the schedule-derived
/// `zone_adjustment` layer are held separately; accessors report the
/// adjusted values when an adjustment exists.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficSegment {
    pub segment_id: String,
    pub coordinate: Option<Coordinate>,
    pub simulated: SegmentTraffic,
    pub zone_adjustment: Option<ZoneAdjustment>,
}

impl TrafficSegment {
    pub fn new(index: usize, coordinate: Coordinate, simulated: SegmentTraffic) -> TrafficSegment {
        TrafficSegment {
            segment_id: format!("segment_{index}"),
            coordinate: Some(coordinate),
            simulated,
            zone_adjustment: None,
        }
    }

    pub fn current(&self) -> &SegmentTraffic {
        match &self.zone_adjustment {
            Some(adj) => &adj.traffic,
            None => &self.simulated,
        }
    }

    pub fn traffic_level(&self) -> f64 {
        self.current().traffic_level
    }

    pub fn speed_kmh(&self) -> f64 {
        self.current().speed_kmh
    }

    pub fn congestion_class(&self) -> CongestionClass {
        self.current().congestion_class
    }

    pub fn zone_affected(&self) -> bool {
        self.zone_adjustment.is_some()
    }
}

/// merged, flat view written to output
#[derive(Serialize)]
struct TrafficSegmentRow<'a> {
    segment_id: &'a str,
    traffic_level: f64,
    speed_kmh: f64,
    congestion_level: CongestionClass,
    coordinate: Option<Coordinate>,
    zone_affected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone_id: Option<&'a str>,
    simulated_traffic_level: f64,
}

impl Serialize for TrafficSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let row = TrafficSegmentRow {
            segment_id: &self.segment_id,
            traffic_level: self.traffic_level(),
            speed_kmh: self.speed_kmh(),
            congestion_level: self.congestion_class(),
            coordinate: self.coordinate,
            zone_affected: self.zone_affected(),
            zone_id: self.zone_adjustment.as_ref().map(|a| a.zone_id.as_str()),
            simulated_traffic_level: self.simulated.traffic_level,
        };
        row.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_speed() {
        let traffic = SegmentTraffic::simulated(0.5);
        assert!((traffic.speed_kmh - 42.0).abs() < 1e-9);
        assert_eq!(traffic.congestion_class, CongestionClass::Moderate);
    }

    #[test]
    fn test_simulated_clamps_level() {
        let traffic = SegmentTraffic::simulated(1.4);
        assert_eq!(traffic.traffic_level, 1.0);
        assert!(traffic.speed_kmh >= MIN_SPEED_KMH);
    }

    #[test]
    fn test_serialized_view_uses_adjusted_layer() {
        let mut segment = TrafficSegment::new(
            3,
            Coordinate::new(1.0, 2.0),
            SegmentTraffic::simulated(0.5),
        );
        segment.zone_adjustment = Some(ZoneAdjustment {
            zone_id: String::from("Z001"),
            traffic: SegmentTraffic {
                traffic_level: 0.7,
                speed_kmh: 25.2,
                congestion_class: CongestionClass::Heavy,
            },
        });
        let json = serde_json::to_value(&segment).expect("should serialize");
        assert_eq!(json["segment_id"], "segment_3");
        assert_eq!(json["traffic_level"], 0.7);
        assert_eq!(json["congestion_level"], "heavy");
        assert_eq!(json["zone_affected"], true);
        assert_eq!(json["zone_id"], "Z001");
        assert_eq!(json["simulated_traffic_level"], 0.5);
    }
}
