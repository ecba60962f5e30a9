mod evaluation_config;
mod evaluation_error;
mod evaluation_request;
mod evaluation_response;
mod route_evaluator;
mod validation_error;

pub use evaluation_config::EvaluationConfig;
pub use evaluation_error::EvaluationError;
pub use evaluation_request::{EvaluationRequest, ValidatedRequest};
pub use evaluation_response::{EvaluationResponse, Recommendations, TrafficAnalysis, ZoneAnalysis};
pub use route_evaluator::{select_best, synthetic_waypoint, RouteEvaluator};
pub use validation_error::ValidationError;
