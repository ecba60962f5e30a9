mod congestion_resolver;
mod time_window_pattern;
mod zone;
mod zone_detector;
mod zone_error;
mod zone_prediction;
mod zone_registry;
mod zone_type;

pub use congestion_resolver::{resolve_congestion, BASELINE_CONGESTION};
pub use time_window_pattern::TimeWindowPattern;
pub use zone::Zone;
pub use zone_detector::{detect_zones, sample_stride, MAX_ZONE_SAMPLES};
pub use zone_error::ZoneError;
pub use zone_prediction::{predict_zone_traffic, HighTrafficZone, ZonePrediction, HIGH_TRAFFIC_THRESHOLD};
pub use zone_registry::{NearbyZone, ZoneCatalog, ZoneRegistry, ZoneSummary};
pub use zone_type::ZoneType;
