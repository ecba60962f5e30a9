use crate::model::traffic::DEFAULT_SEGMENT_COUNT;
use serde::{Deserialize, Serialize};

/// tuning for the candidate pipeline
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EvaluationConfig {
    /// traffic segments sampled per candidate geometry
    pub segment_count: usize,
    /// largest offset in degrees applied to the synthetic alternative
    /// waypoint, in each axis
    pub alternative_offset_degrees: f64,
    /// routing service alternatives kept from the direct request
    pub max_provider_alternatives: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            alternative_offset_degrees: 0.02,
            max_provider_alternatives: 1,
        }
    }
}
