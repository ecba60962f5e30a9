use crate::model::Coordinate;

/// mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// meters per degree of latitude used by the planar fallback
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_000.0;

/// meters per degree of longitude used by the planar fallback. only
/// reasonable at low latitudes.
pub const METERS_PER_DEGREE_LONGITUDE: f64 = 85_000.0;

/// great-circle distance between two coordinates in meters.
///
/// the haversine formula is used when it produces a usable value. if the
/// intermediate terms leave the domain of `asin` (floating-point drift past 1)
/// or otherwise go non-finite, the planar approximation from
/// [`planar_distance`] is returned instead. this function never panics.
///
/// # Arguments
///
/// * `a` - first coordinate
/// * `b` - second coordinate
///
/// # Returns
///
/// * distance in meters
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    match haversine_distance(a, b) {
        Some(meters) => meters,
        None => {
            log::error!("haversine distance failed between {a} and {b}, using planar estimate");
            planar_distance(a, b)
        }
    }
}

/// haversine great-circle distance, or None when the computation leaves the
/// valid numeric domain.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> Option<f64> {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    if !(0.0..=1.0).contains(&h) {
        return None;
    }
    let c = 2.0 * h.sqrt().asin();
    let meters = c * EARTH_RADIUS_METERS;
    meters.is_finite().then_some(meters)
}

/// flat-earth approximation: `sqrt((Δlat·111000)² + (Δlon·85000)²)`.
pub fn planar_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_diff = (b.latitude - a.latitude).abs() * METERS_PER_DEGREE_LATITUDE;
    let lon_diff = (b.longitude - a.longitude).abs() * METERS_PER_DEGREE_LONGITUDE;
    (lat_diff.powi(2) + lon_diff.powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Haversine, Point};

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Coordinate::new(12.9716, 77.5946);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(19.0760, 72.8777), Coordinate::new(18.5204, 73.8567)),
            (Coordinate::new(-33.8688, 151.2093), Coordinate::new(51.5074, -0.1278)),
            (Coordinate::new(89.9, 179.9), Coordinate::new(-89.9, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(&a, &b), distance(&b, &a));
        }
    }

    #[test]
    fn test_mumbai_pune_distance() {
        let mumbai = Coordinate::new(19.0760, 72.8777);
        let pune = Coordinate::new(18.5204, 73.8567);
        let meters = distance(&mumbai, &pune);
        // published great-circle distance is roughly 120 km
        assert!((118_000.0..122_000.0).contains(&meters), "got {meters}");
    }

    #[test]
    fn test_agrees_with_geo_haversine() {
        let a = Coordinate::new(12.9716, 77.5946);
        let b = Coordinate::new(12.9650, 77.6000);
        let ours = distance(&a, &b);
        let theirs = Haversine.distance(Point::from(a), Point::from(b));
        let relative = (ours - theirs).abs() / theirs;
        assert!(relative < 1e-5, "ours={ours}, geo={theirs}");
    }

    #[test]
    fn test_planar_estimate() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.003, 0.004);
        let expected = ((0.003_f64 * 111_000.0).powi(2) + (0.004_f64 * 85_000.0).powi(2)).sqrt();
        assert!((planar_distance(&a, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_input_falls_back_without_panic() {
        let a = Coordinate::new(f64::NAN, 0.0);
        let b = Coordinate::new(1.0, 1.0);
        assert!(haversine_distance(&a, &b).is_none());
        // fallback never panics, even if the result is not meaningful
        let _ = distance(&a, &b);
    }
}
