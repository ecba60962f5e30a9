use super::CoreError;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// a WGS84 position in decimal degrees. always passed around by value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// builds a coordinate from the (lon, lat) ordering used by GeoJSON and
    /// most routing services.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// true when both components are exactly zero, which request payloads
    /// use to signal a missing coordinate.
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    /// confirms latitude is in [-90, 90] and longitude in [-180, 180].
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoreError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoreError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    /// shifts this coordinate by some number of degrees in each axis.
    pub fn offset(&self, delta_latitude: f64, delta_longitude: f64) -> Coordinate {
        Coordinate::new(
            self.latitude + delta_latitude,
            self.longitude + delta_longitude,
        )
    }

    /// linear interpolation in degree space. `progress` of 0 returns `self`,
    /// 1 returns `other`.
    pub fn interpolate(&self, other: &Coordinate, progress: f64) -> Coordinate {
        Coordinate::new(
            self.latitude + progress * (other.latitude - self.latitude),
            self.longitude + progress * (other.longitude - self.longitude),
        )
    }

    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        self.interpolate(other, 0.5)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        Coordinate::from_lon_lat(value.x(), value.y())
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// parses "latitude,longitude" as typed on the command line.
impl FromStr for Coordinate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidCoordinate(String::from(s));
        let (lat_str, lon_str) = s.split_once(',').ok_or_else(invalid)?;
        let latitude = lat_str.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = lon_str.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Coordinate::new(latitude, longitude))
    }
}
