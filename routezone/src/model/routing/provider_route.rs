use crate::model::route::RouteGeometry;

/// geometry returned by a routing service for one request, along with any
/// alternatives it reported, in the order the service listed them.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderRoute {
    pub geometry: RouteGeometry,
    pub alternatives: Vec<RouteGeometry>,
}
