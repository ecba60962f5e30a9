use super::{AppConfig, AppError};
use crate::model::{
    evaluation::{EvaluationRequest, RouteEvaluator},
    routing::{OfflineProvider, OsrmClient, RouteProvider},
    traffic::live_traffic,
    zone::ZoneRegistry,
};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use routezone_core::Coordinate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// command line tool for evaluating routes against zone-based traffic
/// predictions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RouteZoneCliArguments {
    /// TOML or JSON configuration file. ROUTEZONE__* environment variables
    /// override its values.
    #[arg(short, long, global = true)]
    pub config_file: Option<String>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: RouteZoneOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum RouteZoneOperation {
    /// evaluates candidate routes between two locations and selects the best
    Evaluate {
        /// start location as "latitude,longitude"
        #[arg(long, allow_hyphen_values = true)]
        start: Coordinate,
        /// end location as "latitude,longitude"
        #[arg(long, allow_hyphen_values = true)]
        end: Coordinate,
        /// intermediate location as "latitude,longitude", repeatable
        #[arg(short, long = "waypoint", allow_hyphen_values = true)]
        waypoints: Vec<Coordinate>,
        /// departure time as HH:MM. defaults to now.
        #[arg(short, long)]
        departure_time: Option<String>,
        /// day of week, such as "monday". defaults to today.
        #[arg(long)]
        day: Option<String>,
        /// seed for the traffic simulation
        #[arg(long)]
        seed: Option<u64>,
        /// skip the routing service and evaluate straight-line routes
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
    /// lists the zones of the active catalog
    Zones,
    /// lists zones whose center lies within a radius of a location
    Nearby {
        /// location as "latitude,longitude"
        #[arg(long, allow_hyphen_values = true)]
        location: Coordinate,
        /// search radius in meters
        #[arg(short, long, default_value_t = 2000.0)]
        radius: f64,
    },
    /// simulates current traffic around a location
    LiveTraffic {
        /// location as "latitude,longitude"
        #[arg(long, allow_hyphen_values = true)]
        location: Coordinate,
        /// radius in meters, reported with the sample
        #[arg(short, long, default_value_t = 1000.0)]
        radius: f64,
        /// seed for the traffic simulation
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl RouteZoneOperation {
    /// runs the operation, returning its JSON output
    pub async fn run(&self, config: &AppConfig) -> Result<serde_json::Value, AppError> {
        match self {
            RouteZoneOperation::Evaluate {
                start,
                end,
                waypoints,
                departure_time,
                day,
                seed,
                offline,
            } => {
                let registry = Arc::new(config.zone_registry()?);
                let request = EvaluationRequest {
                    start: Some(*start),
                    end: Some(*end),
                    waypoints: waypoints.clone(),
                    departure_time: departure_time.clone(),
                    day_of_week: day.clone(),
                };
                let mut rng = seeded_rng(*seed);
                if *offline {
                    evaluate(registry, OfflineProvider, config, &request, &mut rng).await
                } else {
                    let client = OsrmClient::new(&config.routing)?;
                    evaluate(registry, client, config, &request, &mut rng).await
                }
            }
            RouteZoneOperation::Zones => {
                let registry = config.zone_registry()?;
                Ok(json!({
                    "zones": registry.summaries(),
                    "total_zones": registry.len(),
                }))
            }
            RouteZoneOperation::Nearby { location, radius } => {
                let registry = config.zone_registry()?;
                let nearby = registry.nearby(location, *radius);
                Ok(json!({
                    "location": location,
                    "search_radius": radius,
                    "total_found": nearby.len(),
                    "nearby_zones": nearby,
                }))
            }
            RouteZoneOperation::LiveTraffic {
                location,
                radius,
                seed,
            } => {
                let mut rng = seeded_rng(*seed);
                let sample = live_traffic(location, *radius, &mut rng);
                Ok(serde_json::to_value(sample)?)
            }
        }
    }
}

async fn evaluate<P: RouteProvider>(
    registry: Arc<ZoneRegistry>,
    provider: P,
    config: &AppConfig,
    request: &EvaluationRequest,
    rng: &mut StdRng,
) -> Result<serde_json::Value, AppError> {
    let evaluator = RouteEvaluator::new(registry, provider, config.evaluation.clone());
    let response = evaluator.evaluate(request, rng).await?;
    Ok(serde_json::to_value(response)?)
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_evaluate_arguments() {
        let args = RouteZoneCliArguments::try_parse_from([
            "routezone",
            "evaluate",
            "--start",
            "19.0760,72.8777",
            "--end",
            "18.5204,73.8567",
            "--waypoint",
            "18.8,73.2",
            "--departure-time",
            "08:30",
            "--seed",
            "42",
            "--offline",
        ])
        .expect("test invariant failed");
        match args.op {
            RouteZoneOperation::Evaluate {
                start,
                waypoints,
                departure_time,
                seed,
                offline,
                ..
            } => {
                assert_eq!(start, Coordinate::new(19.0760, 72.8777));
                assert_eq!(waypoints, vec![Coordinate::new(18.8, 73.2)]);
                assert_eq!(departure_time.as_deref(), Some("08:30"));
                assert_eq!(seed, Some(42));
                assert!(offline);
            }
            other => panic!("expected evaluate, found {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let args = RouteZoneCliArguments::try_parse_from([
            "routezone",
            "nearby",
            "--location",
            "-33.8688,151.2093",
        ])
        .expect("test invariant failed");
        match args.op {
            RouteZoneOperation::Nearby { location, radius } => {
                assert_eq!(location, Coordinate::new(-33.8688, 151.2093));
                assert_eq!(radius, 2000.0);
            }
            other => panic!("expected nearby, found {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_offline_evaluate_output() {
        let op = RouteZoneOperation::Evaluate {
            start: Coordinate::new(12.9716, 77.5946),
            end: Coordinate::new(12.9650, 77.6000),
            waypoints: vec![],
            departure_time: Some(String::from("08:30")),
            day: Some(String::from("monday")),
            seed: Some(3),
            offline: true,
        };
        let output = op
            .run(&AppConfig::default())
            .await
            .expect("test invariant failed");
        let routes = output["routes"].as_array().expect("test invariant failed");
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| r["success"] == json!(false)));
        assert_eq!(output["day_of_week"], json!("monday"));
        assert_eq!(output["departure_time"], json!("08:30"));
    }

    #[tokio::test]
    async fn test_nearby_output_sorted() {
        let op = RouteZoneOperation::Nearby {
            location: Coordinate::new(12.9716, 77.5946),
            radius: 2000.0,
        };
        let output = op
            .run(&AppConfig::default())
            .await
            .expect("test invariant failed");
        let zones = output["nearby_zones"].as_array().expect("test invariant failed");
        assert_eq!(zones[0]["zone_id"], json!("Z001"));
        assert_eq!(output["total_found"], json!(zones.len()));
    }
}
