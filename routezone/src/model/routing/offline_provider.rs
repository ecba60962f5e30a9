use super::{ProviderRoute, RouteProvider, RoutingError};
use routezone_core::Coordinate;

/// a provider that never reaches a routing service. every evaluation using it
/// runs on straight-line geometries.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineProvider;

impl RouteProvider for OfflineProvider {
    async fn route(
        &self,
        _start: &Coordinate,
        _end: &Coordinate,
        _waypoints: &[Coordinate],
    ) -> Result<ProviderRoute, RoutingError> {
        Err(RoutingError::Unavailable(String::from("offline mode")))
    }
}
