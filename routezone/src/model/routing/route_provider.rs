use super::{ProviderRoute, RoutingError};
use routezone_core::Coordinate;
use std::future::Future;

/// a road routing service. implementations report failures as errors; the
/// evaluator substitutes a straight-line geometry whenever a call fails.
pub trait RouteProvider {
    /// requests a road-following route from `start` to `end` visiting
    /// `waypoints` in order.
    fn route(
        &self,
        start: &Coordinate,
        end: &Coordinate,
        waypoints: &[Coordinate],
    ) -> impl Future<Output = Result<ProviderRoute, RoutingError>> + Send;
}
