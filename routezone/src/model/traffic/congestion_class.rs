use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CongestionClass {
    Light,
    Moderate,
    Heavy,
    Severe,
}

impl CongestionClass {
    /// light below 0.3, moderate below 0.6, heavy below 0.8, severe otherwise
    pub fn from_traffic_level(traffic_level: f64) -> CongestionClass {
        if traffic_level < 0.3 {
            CongestionClass::Light
        } else if traffic_level < 0.6 {
            CongestionClass::Moderate
        } else if traffic_level < 0.8 {
            CongestionClass::Heavy
        } else {
            CongestionClass::Severe
        }
    }
}

impl Display for CongestionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CongestionClass::Light => "light",
            CongestionClass::Moderate => "moderate",
            CongestionClass::Heavy => "heavy",
            CongestionClass::Severe => "severe",
        };
        write!(f, "{s}")
    }
}
