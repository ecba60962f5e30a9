use super::{Zone, ZoneRegistry};
use routezone_core::Coordinate;

/// target number of route points tested against the zone catalog
pub const MAX_ZONE_SAMPLES: usize = 20;

/// stride between sampled route points: `max(1, n / 20)`.
pub fn sample_stride(n_points: usize) -> usize {
    (n_points / MAX_ZONE_SAMPLES).max(1)
}

/// finds the distinct zones a route passes through.
///
/// only every `sample_stride(n)`-th coordinate is tested so the cost stays
/// bounded on long routes. a zone small enough to fall entirely between two
/// sampled points will not be reported.
///
/// # Arguments
///
/// * `registry`    - zone catalog
/// * `coordinates` - route geometry in travel order
///
/// # Returns
///
/// * each matched zone once, in the order it was first encountered
pub fn detect_zones<'a>(registry: &'a ZoneRegistry, coordinates: &[Coordinate]) -> Vec<&'a Zone> {
    let mut found: Vec<&'a Zone> = Vec::new();
    let stride = sample_stride(coordinates.len());
    for point in coordinates.iter().step_by(stride) {
        for zone in registry.zones() {
            if zone.contains(point) && !found.iter().any(|z| z.id == zone.id) {
                found.push(zone);
            }
        }
    }
    log::info!("found {} zones along route", found.len());
    found
}
