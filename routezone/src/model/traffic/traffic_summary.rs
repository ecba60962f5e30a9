use super::TrafficSegment;
use serde::Serialize;

/// segments above this level count as high traffic
pub const HIGH_TRAFFIC_LEVEL: f64 = 0.7;

/// segments above this level are reported as hotspots
pub const HOTSPOT_TRAFFIC_LEVEL: f64 = 0.8;

/// mean traffic level, or 0 for an empty collection
pub fn mean_traffic_level<'a, I>(segments: I) -> f64
where
    I: IntoIterator<Item = &'a TrafficSegment>,
{
    let (sum, n) = segments
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), s| (sum + s.traffic_level(), n + 1));
    sum / n.max(1) as f64
}

pub fn count_high_traffic<'a, I>(segments: I) -> usize
where
    I: IntoIterator<Item = &'a TrafficSegment>,
{
    segments
        .into_iter()
        .filter(|s| s.traffic_level() > HIGH_TRAFFIC_LEVEL)
        .count()
}

/// traffic statistics pooled over every candidate's segments
#[derive(Serialize, Clone, Debug, Default)]
pub struct TrafficSummary {
    pub total_segments: usize,
    pub high_traffic_segments: usize,
    pub average_traffic_level: f64,
    pub traffic_hotspots: Vec<TrafficSegment>,
}

impl TrafficSummary {
    pub fn from_segments<'a, I>(segments: I) -> TrafficSummary
    where
        I: IntoIterator<Item = &'a TrafficSegment>,
    {
        let all: Vec<&TrafficSegment> = segments.into_iter().collect();
        TrafficSummary {
            total_segments: all.len(),
            high_traffic_segments: count_high_traffic(all.iter().copied()),
            average_traffic_level: mean_traffic_level(all.iter().copied()),
            traffic_hotspots: all
                .iter()
                .filter(|s| s.traffic_level() > HOTSPOT_TRAFFIC_LEVEL)
                .map(|s| (*s).clone())
                .collect(),
        }
    }
}
