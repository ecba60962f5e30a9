mod congestion_class;
mod live_traffic;
mod traffic_segment;
mod traffic_segmenter;
mod traffic_summary;
mod zone_traffic_merger;

pub use congestion_class::CongestionClass;
pub use live_traffic::{live_traffic, LiveTraffic, LIVE_TRAFFIC_SEGMENTS};
pub use traffic_segment::{SegmentTraffic, TrafficSegment, ZoneAdjustment, MIN_SPEED_KMH};
pub use traffic_segmenter::{
    fallback_segment, segments_from_geometry, segments_from_straight_line,
    DEFAULT_SEGMENT_COUNT,
};
pub use traffic_summary::{
    count_high_traffic, mean_traffic_level, TrafficSummary, HIGH_TRAFFIC_LEVEL,
    HOTSPOT_TRAFFIC_LEVEL,
};
pub use zone_traffic_merger::{apply_zone_congestion, ZONE_INFLUENCE_METERS};
