use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// land use category of a zone
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    School,
    Commercial,
    Hospital,
    Residential,
    Office,
    Industrial,
}

impl Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ZoneType::School => "school",
            ZoneType::Commercial => "commercial",
            ZoneType::Hospital => "hospital",
            ZoneType::Residential => "residential",
            ZoneType::Office => "office",
            ZoneType::Industrial => "industrial",
        };
        write!(f, "{s}")
    }
}
