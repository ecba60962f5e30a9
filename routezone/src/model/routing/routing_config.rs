use serde::{Deserialize, Serialize};

/// connection settings for the OSRM routing service
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RoutingConfig {
    /// service root, without a trailing slash
    pub base_url: String,
    /// OSRM profile name, such as "driving"
    pub profile: String,
    /// whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://router.project-osrm.org"),
            profile: String::from("driving"),
            timeout_secs: 15,
        }
    }
}
