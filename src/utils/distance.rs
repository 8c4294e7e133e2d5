// Distance calculation utilities

use crate::models::{Coordinate, Feet, Miles};
use geo::HaversineDistance;

pub const FEET_PER_MILE: f64 = 5280.0;
pub const METERS_PER_MILE: f64 = 1609.344;

/// Calculate the great-circle distance between two coordinates, in meters
pub fn haversine_meters(p1: &Coordinate, p2: &Coordinate) -> f64 {
    p1.to_point().haversine_distance(&p2.to_point())
}

/// Convert meters to miles
pub fn meters_to_miles(meters: f64) -> Miles {
    meters / METERS_PER_MILE
}

/// Convert feet to miles
pub fn feet_to_miles(feet: Feet) -> Miles {
    feet / FEET_PER_MILE
}

/// Human-readable distance for an instruction: feet under a tenth of a mile, miles above
pub fn format_feet(feet: Feet) -> String {
    if feet < FEET_PER_MILE / 10.0 {
        format!("{:.0} ft", feet)
    } else {
        format!("{:.1} mi", feet_to_miles(feet))
    }
}
