use serde::Serialize;

/// how a candidate geometry was obtained
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type", content = "index")]
pub enum CandidateKind {
    /// start to end through the caller's waypoints
    Direct,
    /// routed through a randomly offset midpoint
    SyntheticAlternative,
    /// an alternative reported by the routing service for the direct request,
    /// numbered from 1
    ProviderAlternative(usize),
}

impl CandidateKind {
    /// share of the route duration reported as expected delay per unit of traffic
    pub fn delay_factor(&self) -> f64 {
        match self {
            CandidateKind::Direct => 0.2,
            CandidateKind::SyntheticAlternative => 0.25,
            CandidateKind::ProviderAlternative(_) => 0.3,
        }
    }

    pub fn recommendation(&self, success: bool) -> String {
        let source = if success { "(Real API)" } else { "(Fallback)" };
        match self {
            CandidateKind::Direct => format!("Direct route following roads {source}"),
            CandidateKind::SyntheticAlternative => {
                format!("Alternative route via waypoint {source}")
            }
            CandidateKind::ProviderAlternative(n) => format!("Provider alternative route {n}"),
        }
    }
}
