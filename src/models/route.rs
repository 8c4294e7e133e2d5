// Route models for representing candidate routes offered to the driver

use crate::models::{Confidence, Coordinate, Instruction, Miles, Minutes, RouteId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Optimization goal a route was computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Fastest,
    Efficient,
    Scenic,
}

impl RouteType {
    /// Every route type, in catalog order
    pub const ALL: [RouteType; 3] = [RouteType::Fastest, RouteType::Efficient, RouteType::Scenic];

    /// Display name of a route of this type
    pub fn display_name(&self) -> &'static str {
        match self {
            RouteType::Fastest => "Fastest Route",
            RouteType::Efficient => "Efficient Route",
            RouteType::Scenic => "Scenic Route",
        }
    }

    /// Short tag used when building route ids
    pub fn id_tag(&self) -> &'static str {
        match self {
            RouteType::Fastest => "fast",
            RouteType::Efficient => "eff",
            RouteType::Scenic => "scen",
        }
    }
}

/// Traffic level along a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traffic {
    Light,
    Moderate,
    Heavy,
}

impl Traffic {
    pub fn is_heavy(&self) -> bool {
        matches!(self, Traffic::Heavy)
    }
}

impl fmt::Display for Traffic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Traffic::Light => "light",
            Traffic::Moderate => "moderate",
            Traffic::Heavy => "heavy",
        };
        f.write_str(label)
    }
}

/// A complete candidate route between two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Unique per generation call
    pub id: RouteId,

    pub name: String,

    /// Travel endpoints, `[origin, destination]`
    pub coordinates: Vec<Coordinate>,

    /// Expected travel time
    pub duration: Minutes,

    /// Total length
    pub distance: Miles,

    /// Steps in travel order
    pub instructions: Vec<Instruction>,

    pub traffic: Traffic,

    /// Confidence score in [0, 100]
    pub ai_confidence: Confidence,

    #[serde(rename = "type")]
    pub route_type: RouteType,
}

impl Route {
    /// First coordinate of the route
    pub fn origin(&self) -> Option<&Coordinate> {
        self.coordinates.first()
    }

    /// Last coordinate of the route
    pub fn destination(&self) -> Option<&Coordinate> {
        self.coordinates.last()
    }

    /// Whether the route earns the "Recommended" badge
    pub fn is_recommended(&self, threshold: Confidence) -> bool {
        self.ai_confidence >= threshold
    }

    /// One-line description, e.g. "Fastest Route, 12 minutes, 3.2 miles"
    pub fn summary(&self) -> String {
        format!(
            "{}, {} minutes, {:.1} miles",
            self.name, self.duration, self.distance
        )
    }

    /// Orders routes by descending confidence; equal scores compare equal
    pub fn cmp_confidence(&self, other: &Route) -> Ordering {
        other.ai_confidence.cmp(&self.ai_confidence)
    }
}
