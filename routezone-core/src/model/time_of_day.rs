use super::CoreError;
use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// wall-clock format used for departure times and zone schedules
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// local wall-clock time at minute resolution, read and written as "HH:MM".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<TimeOfDay> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }

    /// the current local time, truncated to the minute
    pub fn now() -> TimeOfDay {
        TimeOfDay::from(chrono::Local::now().time())
    }

    /// tests whether this time falls in the window [start, end], bounds
    /// inclusive. when start is later than end the window wraps midnight.
    pub fn within(&self, start: &TimeOfDay, end: &TimeOfDay) -> bool {
        if start <= end {
            start <= self && self <= end
        } else {
            self >= start || self <= end
        }
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        TimeOfDay(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(value: NaiveTime) -> Self {
        TimeOfDay::new(value.hour(), value.minute()).unwrap_or_default()
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIME_OF_DAY_FORMAT))
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), TIME_OF_DAY_FORMAT)
            .map(TimeOfDay)
            .map_err(|_| CoreError::InvalidTimeOfDay(String::from(s)))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<TimeOfDay>().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeOfDay;

    fn t(s: &str) -> TimeOfDay {
        s.parse().expect("test invariant failed: bad time literal")
    }

    #[test]
    fn test_within_inclusive_bounds() {
        assert!(t("07:00").within(&t("07:00"), &t("09:00")));
        assert!(t("09:00").within(&t("07:00"), &t("09:00")));
        assert!(t("08:30").within(&t("07:00"), &t("09:00")));
        assert!(!t("09:01").within(&t("07:00"), &t("09:00")));
        assert!(!t("06:59").within(&t("07:00"), &t("09:00")));
    }

    #[test]
    fn test_within_wraps_midnight() {
        let (start, end) = (t("22:00"), t("02:00"));
        assert!(t("23:59").within(&start, &end));
        assert!(t("00:00").within(&start, &end));
        assert!(t("02:00").within(&start, &end));
        assert!(!t("12:00").within(&start, &end));
    }

    #[test]
    fn test_from_naive_time_drops_seconds() {
        let time = chrono::NaiveTime::from_hms_opt(17, 45, 59).expect("test invariant failed");
        assert_eq!(TimeOfDay::from(time), t("17:45"));
        assert!(TimeOfDay::now().within(&t("00:00"), &t("23:59")));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(t("08:30").to_string(), "08:30");
        assert!("8:3x".parse::<TimeOfDay>().is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
    }
}
