mod offline_provider;
mod osrm_client;
mod provider_route;
mod route_provider;
mod routing_config;
mod routing_error;

pub use offline_provider::OfflineProvider;
pub use osrm_client::{parse_osrm_response, OsrmClient};
pub use provider_route::ProviderRoute;
pub use route_provider::RouteProvider;
pub use routing_config::RoutingConfig;
pub use routing_error::RoutingError;
