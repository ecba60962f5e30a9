use super::{Zone, ZoneError, ZoneType};
use routezone_core::{util::geo_utils, Coordinate};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

const BUILTIN_CATALOG: &str = include_str!("default_zones.toml");

/// file representation of a zone catalog
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ZoneCatalog {
    pub zones: Vec<Zone>,
}

/// validated, read-only collection of zones. built once at startup and
/// shared behind an `Arc` by all evaluations.
#[derive(Clone, Debug)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
}

/// zone listing entry
#[derive(Serialize, Clone, Debug)]
pub struct ZoneSummary {
    pub zone_id: String,
    pub zone_name: String,
    pub zone_type: ZoneType,
    pub center: Coordinate,
    pub radius: f64,
    pub peak_patterns_count: usize,
}

/// zone found by a proximity search
#[derive(Serialize, Clone, Debug)]
pub struct NearbyZone {
    pub zone_id: String,
    pub zone_name: String,
    pub zone_type: ZoneType,
    pub center: Coordinate,
    pub radius: f64,
    pub distance_meters: f64,
}

impl ZoneRegistry {
    /// validates and wraps a list of zones. zone order is preserved.
    pub fn new(zones: Vec<Zone>) -> Result<ZoneRegistry, ZoneError> {
        let mut ids: HashSet<&str> = HashSet::new();
        for zone in zones.iter() {
            if !ids.insert(zone.id.as_str()) {
                return Err(ZoneError::DuplicateZoneId(zone.id.clone()));
            }
            if !(zone.radius.is_finite() && zone.radius > 0.0) {
                return Err(ZoneError::InvalidRadius(zone.id.clone(), zone.radius));
            }
            zone.center
                .validate()
                .map_err(|e| ZoneError::InvalidCenter(zone.id.clone(), e))?;
            let bad_multiplier = zone
                .peak_patterns
                .iter()
                .map(|p| p.congestion_multiplier)
                .find(|m| !(0.0..=1.0).contains(m));
            if let Some(m) = bad_multiplier {
                return Err(ZoneError::InvalidMultiplier(zone.id.clone(), m));
            }
        }
        Ok(ZoneRegistry { zones })
    }

    /// the catalog bundled with this crate
    pub fn builtin() -> Result<ZoneRegistry, ZoneError> {
        let catalog: ZoneCatalog = toml::from_str(BUILTIN_CATALOG).map_err(|e| {
            ZoneError::DecodeError(String::from("builtin catalog"), e.to_string())
        })?;
        ZoneRegistry::new(catalog.zones)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    pub fn summaries(&self) -> Vec<ZoneSummary> {
        self.zones
            .iter()
            .map(|z| ZoneSummary {
                zone_id: z.id.clone(),
                zone_name: z.name.clone(),
                zone_type: z.zone_type,
                center: z.center,
                radius: z.radius,
                peak_patterns_count: z.peak_patterns.len(),
            })
            .collect()
    }

    /// zones whose center lies within `radius` meters of `point`, nearest first.
    pub fn nearby(&self, point: &Coordinate, radius: f64) -> Vec<NearbyZone> {
        let mut result: Vec<NearbyZone> = self
            .zones
            .iter()
            .filter_map(|z| {
                let distance_meters = geo_utils::distance(point, &z.center);
                (distance_meters <= radius).then(|| NearbyZone {
                    zone_id: z.id.clone(),
                    zone_name: z.name.clone(),
                    zone_type: z.zone_type,
                    center: z.center,
                    radius: z.radius,
                    distance_meters,
                })
            })
            .collect();
        result.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
        result
    }
}

impl TryFrom<&Path> for ZoneRegistry {
    type Error = ZoneError;

    /// reads a zone catalog from a .toml or .json file
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let f = path.to_string_lossy().to_string();
        let read = || std::fs::read_to_string(path).map_err(|e| ZoneError::ReadError(f.clone(), e));
        let catalog: ZoneCatalog = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::from_str(&read()?).map_err(|e| ZoneError::DecodeError(f.clone(), e.to_string()))?
            }
            Some("json") => serde_json::from_str(&read()?)
                .map_err(|e| ZoneError::DecodeError(f.clone(), e.to_string()))?,
            _ => return Err(ZoneError::UnsupportedFileType(f)),
        };
        log::info!("read {} zones from {f}", catalog.zones.len());
        ZoneRegistry::new(catalog.zones)
    }
}
