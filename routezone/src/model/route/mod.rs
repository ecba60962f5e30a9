mod candidate_kind;
mod route_candidate;
mod route_geometry;
mod route_score;

pub use candidate_kind::CandidateKind;
pub use route_candidate::{CandidateSummary, RouteCandidate};
pub use route_geometry::{RouteGeometry, FALLBACK_SPEED_MPS};
pub use route_score::{score, NEUTRAL_SCORE};
