use super::{ProviderRoute, RouteProvider, RoutingConfig, RoutingError};
use crate::model::route::RouteGeometry;
use itertools::Itertools;
use routezone_core::Coordinate;
use serde::Deserialize;
use std::time::Duration;

/// client for the OSRM `route` service
#[derive(Clone, Debug)]
pub struct OsrmClient {
    client: reqwest::Client,
    base_url: String,
    profile: String,
}

#[derive(Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    distance: f64,
    duration: f64,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    /// GeoJSON positions, longitude first
    coordinates: Vec<[f64; 2]>,
}

impl OsrmClient {
    pub fn new(config: &RoutingConfig) -> Result<OsrmClient, RoutingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("routezone/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RoutingError::ClientBuildError)?;
        Ok(OsrmClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            profile: config.profile.clone(),
        })
    }

    /// builds the request URL for a route through `start`, each waypoint and
    /// `end`. OSRM expects `lon,lat` pairs separated by `;`.
    pub fn route_url(&self, start: &Coordinate, end: &Coordinate, waypoints: &[Coordinate]) -> String {
        let path = std::iter::once(start)
            .chain(waypoints.iter())
            .chain(std::iter::once(end))
            .map(|c| format!("{},{}", c.longitude, c.latitude))
            .join(";");
        format!("{}/route/v1/{}/{}", self.base_url, self.profile, path)
    }
}

impl RouteProvider for OsrmClient {
    async fn route(
        &self,
        start: &Coordinate,
        end: &Coordinate,
        waypoints: &[Coordinate],
    ) -> Result<ProviderRoute, RoutingError> {
        let url = self.route_url(start, end, waypoints);
        log::debug!("requesting route {url}");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("overview", "full"),
                ("geometries", "geojson"),
                ("steps", "false"),
                ("alternatives", "true"),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RoutingError::StatusError(status.as_u16()));
        }
        let body = response.text().await?;
        parse_osrm_response(&body)
    }
}

/// decodes an OSRM route response. the first route becomes the primary
/// geometry and any further routes are alternatives, in response order.
pub fn parse_osrm_response(body: &str) -> Result<ProviderRoute, RoutingError> {
    let response: OsrmResponse =
        serde_json::from_str(body).map_err(|e| RoutingError::DecodeError(e.to_string()))?;
    if response.code != "Ok" {
        return Err(RoutingError::ServiceError(response.code));
    }
    let mut geometries = response.routes.into_iter().map(|route| RouteGeometry {
        coordinates: route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| Coordinate::from_lon_lat(lon, lat))
            .collect(),
        distance_m: route.distance,
        duration_s: route.duration,
        success: true,
    });
    let geometry = geometries.next().ok_or(RoutingError::NoRoutes)?;
    Ok(ProviderRoute {
        geometry,
        alternatives: geometries.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROUTES: &str = r#"{
        "code": "Ok",
        "routes": [
            {
                "geometry": {"type": "LineString", "coordinates": [[72.8777, 19.076], [73.2, 18.8], [73.8567, 18.5204]]},
                "distance": 148500.2,
                "duration": 10240.7,
                "weight": 10240.7,
                "legs": []
            },
            {
                "geometry": {"type": "LineString", "coordinates": [[72.8777, 19.076], [73.8567, 18.5204]]},
                "distance": 155010.0,
                "duration": 11002.1,
                "weight": 11002.1,
                "legs": []
            }
        ],
        "waypoints": []
    }"#;

    #[test]
    fn test_parse_primary_and_alternatives() {
        let route = parse_osrm_response(TWO_ROUTES).expect("test invariant failed");
        assert!(route.geometry.success);
        assert_eq!(route.geometry.coordinates.len(), 3);
        assert_eq!(route.geometry.coordinates[0], Coordinate::new(19.076, 72.8777));
        assert_eq!(route.geometry.distance_m, 148500.2);
        assert_eq!(route.geometry.duration_s, 10240.7);
        assert_eq!(route.alternatives.len(), 1);
        assert_eq!(route.alternatives[0].distance_m, 155010.0);
    }

    #[test]
    fn test_parse_error_code() {
        let body = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        match parse_osrm_response(body) {
            Err(RoutingError::ServiceError(code)) => assert_eq!(code, "NoRoute"),
            other => panic!("expected service error, found {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_routes() {
        let result = parse_osrm_response(r#"{"code": "Ok", "routes": []}"#);
        assert!(matches!(result, Err(RoutingError::NoRoutes)));
    }

    #[test]
    fn test_parse_malformed_body() {
        let result = parse_osrm_response("<html>bad gateway</html>");
        assert!(matches!(result, Err(RoutingError::DecodeError(_))));
    }

    #[test]
    fn test_route_url_orders_lon_lat() {
        let client = OsrmClient::new(&RoutingConfig {
            base_url: String::from("http://localhost:5000/"),
            ..Default::default()
        })
        .expect("test invariant failed");
        let url = client.route_url(
            &Coordinate::new(19.0, 72.0),
            &Coordinate::new(18.0, 73.0),
            &[Coordinate::new(18.5, 72.5)],
        );
        assert_eq!(
            url,
            "http://localhost:5000/route/v1/driving/72,19;72.5,18.5;73,18"
        );
    }
}
