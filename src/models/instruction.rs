// Turn-by-turn instruction model

use crate::models::{Coordinate, Feet, Seconds};
use serde::{Deserialize, Serialize};

/// Kind of maneuver an instruction asks the driver to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Maneuver {
    TurnLeft,
    TurnRight,
    Straight,
    Merge,
    Exit,
}

/// A single step of a route, in travel order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Unique within the owning route
    pub id: String,

    /// Text shown to the driver
    pub text: String,

    /// Length of the step
    pub distance: Feet,

    /// Expected time to complete the step
    pub duration: Seconds,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub maneuver: Option<Maneuver>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
}

impl Instruction {
    /// Creates an instruction without maneuver or location
    pub fn new<I: Into<String>, T: Into<String>>(
        id: I,
        text: T,
        distance: Feet,
        duration: Seconds,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            distance: distance.max(0.0),
            duration: duration.max(0.0),
            maneuver: None,
            location: None,
        }
    }

    /// Sets the maneuver kind
    pub fn with_maneuver(mut self, maneuver: Maneuver) -> Self {
        self.maneuver = Some(maneuver);
        self
    }

    /// Placeholder shown when a route has no instruction at the current step
    pub fn placeholder() -> Self {
        Self::new("continue", "Continue", 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_measures_are_clamped() {
        let step = Instruction::new("i1", "Go", -5.0, -1.0);
        assert_eq!(step.distance, 0.0);
        assert_eq!(step.duration, 0.0);
    }

    #[test]
    fn test_maneuver_serializes_as_type() {
        let step = Instruction::new("i2", "Turn left onto 1st Ave", 880.0, 60.0)
            .with_maneuver(Maneuver::TurnLeft);
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["type"], "turn-left");
        assert!(json.get("location").is_none());
    }
}
