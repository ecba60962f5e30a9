use super::{detect_zones, resolve_congestion, ZoneRegistry, ZoneType, BASELINE_CONGESTION};
use routezone_core::{Coordinate, Day, TimeOfDay};
use serde::Serialize;

/// resolved congestion at or above this level marks a zone as high traffic
pub const HIGH_TRAFFIC_THRESHOLD: f64 = 0.6;

/// a detected zone whose congestion at departure meets [`HIGH_TRAFFIC_THRESHOLD`]
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HighTrafficZone {
    pub zone_id: String,
    pub zone_name: String,
    pub zone_type: ZoneType,
    pub congestion_level: f64,
    pub center: Coordinate,
    pub radius: f64,
}

/// schedule-derived congestion outlook for one route geometry
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ZonePrediction {
    pub zones_detected: usize,
    pub detected_zone_ids: Vec<String>,
    pub high_traffic_zones: Vec<HighTrafficZone>,
    pub warnings: Vec<String>,
    pub avg_zone_congestion: f64,
    pub departure_time: TimeOfDay,
    pub day_of_week: Day,
}

/// detects the zones along a route and resolves how congested each one is
/// at the departure time. `avg_zone_congestion` is the mean over all detected
/// zones, or [`BASELINE_CONGESTION`] when none were detected.
pub fn predict_zone_traffic(
    registry: &ZoneRegistry,
    coordinates: &[Coordinate],
    departure_time: &TimeOfDay,
    day_of_week: &Day,
) -> ZonePrediction {
    let zones = detect_zones(registry, coordinates);
    let levels: Vec<f64> = zones
        .iter()
        .map(|z| resolve_congestion(z, departure_time, day_of_week))
        .collect();

    let mut high_traffic_zones = vec![];
    let mut warnings = vec![];
    for (zone, level) in zones.iter().zip(levels.iter()) {
        if *level >= HIGH_TRAFFIC_THRESHOLD {
            high_traffic_zones.push(HighTrafficZone {
                zone_id: zone.id.clone(),
                zone_name: zone.name.clone(),
                zone_type: zone.zone_type,
                congestion_level: *level,
                center: zone.center,
                radius: zone.radius,
            });
            warnings.push(format!(
                "High traffic expected near {} ({}) at {}",
                zone.name, zone.zone_type, departure_time
            ));
        }
    }

    let avg_zone_congestion = if levels.is_empty() {
        BASELINE_CONGESTION
    } else {
        levels.iter().sum::<f64>() / levels.len() as f64
    };

    ZonePrediction {
        zones_detected: zones.len(),
        detected_zone_ids: zones.iter().map(|z| z.id.clone()).collect(),
        high_traffic_zones,
        warnings,
        avg_zone_congestion,
        departure_time: *departure_time,
        day_of_week: *day_of_week,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().expect("test invariant failed: bad time literal")
    }

    fn builtin() -> ZoneRegistry {
        ZoneRegistry::builtin().expect("builtin catalog should be valid")
    }

    #[test]
    fn test_school_zone_at_morning_peak() {
        let registry = builtin();
        let route = vec![Coordinate::new(12.9716, 77.5946), Coordinate::new(12.9720, 77.5950)];
        let prediction = predict_zone_traffic(&registry, &route, &t("08:30"), &Day::Monday);
        let school = prediction
            .high_traffic_zones
            .iter()
            .find(|z| z.zone_id == "Z001")
            .expect("school zone should be high traffic");
        assert_eq!(school.congestion_level, 0.8);
        assert!(prediction
            .warnings
            .iter()
            .any(|w| w == "High traffic expected near School Zone - Example School (school) at 08:30"));
        assert_eq!(prediction.day_of_week, Day::Monday);
    }

    #[test]
    fn test_no_zones_uses_baseline_average() {
        let registry = builtin();
        let route = vec![Coordinate::new(0.1, 0.1), Coordinate::new(0.2, 0.2)];
        let prediction = predict_zone_traffic(&registry, &route, &t("08:30"), &Day::Monday);
        assert_eq!(prediction.zones_detected, 0);
        assert!(prediction.high_traffic_zones.is_empty());
        assert_eq!(prediction.avg_zone_congestion, BASELINE_CONGESTION);
    }

    #[test]
    fn test_off_peak_zone_is_detected_but_not_high() {
        let registry = builtin();
        let route = vec![Coordinate::new(12.9716, 77.5946), Coordinate::new(12.9716, 77.5947)];
        let prediction = predict_zone_traffic(&registry, &route, &t("03:00"), &Day::Sunday);
        assert!(prediction.zones_detected >= 1);
        assert!(prediction.high_traffic_zones.is_empty());
        assert_eq!(prediction.avg_zone_congestion, BASELINE_CONGESTION);
    }
}
