// Location models for points on the map and the visible map region

use crate::utils::distance::haversine_meters;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point with optional human-readable labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Coordinate {
    /// Creates an unlabeled coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: None,
            name: None,
        }
    }

    /// Attaches a display name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches a street address
    pub fn with_address<S: Into<String>>(mut self, address: S) -> Self {
        self.address = Some(address.into());
        self
    }

    /// True when both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Converts to a geo point (x = longitude, y = latitude)
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Great-circle distance to another coordinate, in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_meters(self, other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Visible map area: a center plus the span shown in each direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Region centered on a coordinate with the given spans
    pub fn centered_on(center: &Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Checks whether a coordinate falls inside the visible region
    pub fn contains(&self, point: &Coordinate) -> bool {
        (point.latitude - self.latitude).abs() <= self.latitude_delta / 2.0
            && (point.longitude - self.longitude).abs() <= self.longitude_delta / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_four_decimals() {
        let loc = Coordinate::new(37.78826, -122.4324);
        assert_eq!(loc.to_string(), "37.7883, -122.4324");
    }

    #[test]
    fn test_labels_do_not_affect_position() {
        let plain = Coordinate::new(37.7849, -122.4294);
        let labeled = plain.clone().with_name("Test").with_address("1 Market St");

        assert_eq!(labeled.name.as_deref(), Some("Test"));
        assert_eq!(labeled.address.as_deref(), Some("1 Market St"));
        assert_eq!(plain.distance_to(&labeled), 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::new(0.0, 0.0).is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_region_contains() {
        let center = Coordinate::new(37.78825, -122.4324);
        let region = MapRegion::centered_on(&center, 0.0922, 0.0421);

        assert!(region.contains(&center));
        assert!(region.contains(&Coordinate::new(37.80, -122.42)));
        assert!(!region.contains(&Coordinate::new(37.90, -122.4324)));
    }
}
