use routezone_core::{Day, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// a scheduled congestion level for a zone. the window is inclusive on both
/// ends and wraps midnight when `start_time` is later than `end_time`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimeWindowPattern {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// expected congestion in [0, 1] while the window is active
    pub congestion_multiplier: f64,
    #[serde(alias = "days")]
    pub applicable_days: BTreeSet<Day>,
}

impl TimeWindowPattern {
    pub fn new(
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        congestion_multiplier: f64,
        applicable_days: &[Day],
    ) -> TimeWindowPattern {
        TimeWindowPattern {
            start_time,
            end_time,
            congestion_multiplier,
            applicable_days: applicable_days.iter().copied().collect(),
        }
    }

    /// true if this pattern is in effect on `day` at `time`
    pub fn applies(&self, time: &TimeOfDay, day: &Day) -> bool {
        self.applicable_days.contains(day) && time.within(&self.start_time, &self.end_time)
    }
}
