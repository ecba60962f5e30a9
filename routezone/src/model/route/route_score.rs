/// score reported when the inputs cannot be scored
pub const NEUTRAL_SCORE: f64 = 0.5;

const DISTANCE_WEIGHT: f64 = 0.3;
const TIME_WEIGHT: f64 = 0.4;
const TRAFFIC_WEIGHT: f64 = 0.3;

/// distance at which the distance term falls to one half, in meters
const DISTANCE_SCALE_M: f64 = 100_000.0;

/// duration at which the time term falls to one half, in seconds
const DURATION_SCALE_S: f64 = 10_800.0;

/// desirability of a route in [0, 1], higher is better.
///
/// ```text
/// distance_score = 1 / (1 + distance_m / 100000)
/// time_score     = 1 / (1 + duration_s / 10800)
/// traffic_score  = 1 - avg_traffic
/// score = clamp(0.3 * distance_score + 0.4 * time_score + 0.3 * traffic_score, 0, 1)
/// ```
///
/// returns [`NEUTRAL_SCORE`] instead of failing when the result is not a
/// finite number.
pub fn score(distance_m: f64, duration_s: f64, avg_traffic: f64) -> f64 {
    let distance_score = 1.0 / (1.0 + distance_m / DISTANCE_SCALE_M);
    let time_score = 1.0 / (1.0 + duration_s / DURATION_SCALE_S);
    let traffic_score = 1.0 - avg_traffic;
    let raw =
        DISTANCE_WEIGHT * distance_score + TIME_WEIGHT * time_score + TRAFFIC_WEIGHT * traffic_score;
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        log::error!(
            "unable to score route with distance={distance_m}, duration={duration_s}, traffic={avg_traffic}, using neutral score"
        );
        NEUTRAL_SCORE
    }
}
