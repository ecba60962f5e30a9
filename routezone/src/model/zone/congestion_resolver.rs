use super::Zone;
use routezone_core::{Day, TimeOfDay};

/// congestion reported for a zone when none of its patterns apply
pub const BASELINE_CONGESTION: f64 = 0.2;

/// finds the congestion multiplier for a zone at a departure time.
///
/// patterns are scanned in their declared order and the first one whose day
/// set contains `day` and whose window contains `time` wins, even when later
/// patterns also overlap. when nothing matches, [`BASELINE_CONGESTION`] is
/// returned. a multiplier that is not a finite number is treated as
/// unmatched; finite values are clamped to [0, 1].
///
/// # Arguments
///
/// * `zone` - zone to inspect
/// * `time` - local departure time
/// * `day`  - local day of the week
///
/// # Returns
///
/// * congestion multiplier in [0, 1]
pub fn resolve_congestion(zone: &Zone, time: &TimeOfDay, day: &Day) -> f64 {
    let matched = zone
        .peak_patterns
        .iter()
        .find(|pattern| pattern.applies(time, day));
    match matched {
        Some(pattern) if pattern.congestion_multiplier.is_finite() => {
            pattern.congestion_multiplier.clamp(0.0, 1.0)
        }
        Some(pattern) => {
            log::error!(
                "zone '{}' has non-numeric congestion multiplier {}, using baseline",
                zone.id,
                pattern.congestion_multiplier
            );
            BASELINE_CONGESTION
        }
        None => BASELINE_CONGESTION,
    }
}
