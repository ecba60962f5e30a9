use super::AppError;
use crate::model::{evaluation::EvaluationConfig, routing::RoutingConfig, zone::ZoneRegistry};
use config::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// prefix of environment variables overriding file settings, such as
/// `ROUTEZONE__ROUTING__BASE_URL`
pub const ENV_PREFIX: &str = "ROUTEZONE";

/// application settings. every field has a default so an empty or absent
/// configuration file is valid.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub routing: RoutingConfig,
    pub evaluation: EvaluationConfig,
    /// zone catalog file (.toml or .json). the built-in catalog is used when
    /// absent.
    pub zones_file: Option<PathBuf>,
}

impl AppConfig {
    /// reads settings from an optional TOML or JSON file, then applies
    /// `ROUTEZONE__` environment overrides.
    pub fn load(config_file: Option<&str>) -> Result<AppConfig, AppError> {
        let mut builder = Config::builder();
        if let Some(filepath) = config_file {
            builder = builder.add_source(config::File::from(Path::new(filepath)));
        }
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::ConfigReadError {
                msg: format!("failed reading configuration '{}'", config_file.unwrap_or("<env>")),
                source: e,
            })?;
        config
            .try_deserialize::<AppConfig>()
            .map_err(|e| AppError::ConfigReadError {
                msg: String::from("failed deserializing configuration"),
                source: e,
            })
    }

    /// loads the configured zone catalog, or the built-in one
    pub fn zone_registry(&self) -> Result<ZoneRegistry, AppError> {
        let registry = match &self.zones_file {
            Some(path) => ZoneRegistry::try_from(path.as_path())?,
            None => ZoneRegistry::builtin()?,
        };
        log::debug!("loaded {} zones", registry.len());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.routing.base_url, "http://router.project-osrm.org");
        assert_eq!(config.routing.profile, "driving");
        assert_eq!(config.routing.timeout_secs, 15);
        assert_eq!(config.evaluation.segment_count, 8);
        assert_eq!(config.evaluation.alternative_offset_degrees, 0.02);
        assert_eq!(config.evaluation.max_provider_alternatives, 1);
        assert!(config.zones_file.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let filepath = std::env::temp_dir().join("routezone_test_partial_config.toml");
        std::fs::write(
            &filepath,
            "[routing]\nbase_url = \"http://localhost:5000\"\n\n[evaluation]\nsegment_count = 4\n",
        )
        .expect("test invariant failed");
        let result = AppConfig::load(filepath.to_str());
        let _ = std::fs::remove_file(&filepath);
        let config = result.expect("test invariant failed");
        assert_eq!(config.routing.base_url, "http://localhost:5000");
        assert_eq!(config.routing.timeout_secs, 15);
        assert_eq!(config.evaluation.segment_count, 4);
        assert_eq!(config.evaluation.max_provider_alternatives, 1);
    }

    #[test]
    fn test_builtin_registry_without_zones_file() {
        let registry = AppConfig::default()
            .zone_registry()
            .expect("test invariant failed");
        assert_eq!(registry.len(), 4);
    }
}
