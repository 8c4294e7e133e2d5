use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::algorithms::RouteGenerator;
use crate::error::{NavError, Result};
use crate::models::{
    Confidence, Coordinate, Instruction, Maneuver, Miles, Minutes, Route, RouteType, Traffic,
};

/// Fixed measurements used for every route of one type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteProfile {
    pub route_type: RouteType,
    pub duration: Minutes,
    pub distance: Miles,
    pub traffic: Traffic,
    pub ai_confidence: Confidence,
}

impl RouteProfile {
    pub const fn new(
        route_type: RouteType,
        duration: Minutes,
        distance: Miles,
        traffic: Traffic,
        ai_confidence: Confidence,
    ) -> Self {
        Self {
            route_type,
            duration,
            distance,
            traffic,
            ai_confidence,
        }
    }
}

/// Profiles in catalog order: fastest, efficient, scenic
pub const DEFAULT_PROFILES: [RouteProfile; 3] = [
    RouteProfile::new(RouteType::Fastest, 12.0, 3.2, Traffic::Light, 94),
    RouteProfile::new(RouteType::Efficient, 14.0, 3.1, Traffic::Moderate, 91),
    RouteProfile::new(RouteType::Scenic, 18.0, 4.1, Traffic::Light, 87),
];

/// Mock route catalog generator.
///
/// Produces one route per [`RouteType`] running straight from origin to
/// destination. Measurements come from the profile table rather than the
/// geometry of the trip, so any finite pair of points is accepted, including
/// identical ones.
///
/// Route ids combine the route type, the wall clock, a per-generator random
/// nonce and a per-call sequence number, so two calls landing on the same
/// millisecond still produce distinct ids.
#[derive(Debug)]
pub struct MockCatalogGenerator {
    profiles: [RouteProfile; 3],
    nonce: u16,
    sequence: AtomicU64,
}

impl MockCatalogGenerator {
    /// Creates a generator with the default profile table
    pub fn new() -> Self {
        Self {
            profiles: DEFAULT_PROFILES,
            nonce: rand::thread_rng().gen(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Creates a generator with custom measurements.
    ///
    /// The table must list fastest, efficient and scenic in that order with
    /// positive durations and distances, confidences within 0..=100, and the
    /// fastest profile holding the highest confidence.
    pub fn with_profiles(profiles: [RouteProfile; 3]) -> Result<Self> {
        for (profile, expected) in profiles.iter().zip(RouteType::ALL.iter()) {
            if profile.route_type != *expected {
                return Err(NavError::InvalidCatalog(format!(
                    "profile for {:?} listed where {:?} belongs",
                    profile.route_type, expected
                )));
            }
            if !profile.duration.is_finite()
                || profile.duration <= 0.0
                || !profile.distance.is_finite()
                || profile.distance <= 0.0
            {
                return Err(NavError::InvalidCatalog(format!(
                    "{:?} profile needs positive duration and distance",
                    profile.route_type
                )));
            }
            if profile.ai_confidence > 100 {
                return Err(NavError::InvalidCatalog(format!(
                    "{:?} confidence {} is above 100",
                    profile.route_type, profile.ai_confidence
                )));
            }
        }

        let fastest = profiles[0].ai_confidence;
        if profiles[1..].iter().any(|p| p.ai_confidence > fastest) {
            return Err(NavError::InvalidCatalog(
                "fastest profile must carry the highest confidence".to_string(),
            ));
        }

        Ok(Self {
            profiles,
            ..Self::new()
        })
    }

    pub fn profiles(&self) -> &[RouteProfile; 3] {
        &self.profiles
    }

    fn instructions() -> Vec<Instruction> {
        vec![
            Instruction::new(
                "i1",
                "Continue straight on Market Street for 0.5 mi",
                2640.0,
                180.0,
            )
            .with_maneuver(Maneuver::Straight),
            Instruction::new("i2", "Turn left onto 1st Ave", 880.0, 60.0)
                .with_maneuver(Maneuver::TurnLeft),
            Instruction::new("i3", "Arrive at destination", 0.0, 0.0),
        ]
    }
}

impl Default for MockCatalogGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGenerator for MockCatalogGenerator {
    fn generate(&self, origin: &Coordinate, destination: &Coordinate) -> Vec<Route> {
        let stamp = Utc::now().timestamp_millis();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);

        let routes: Vec<Route> = self
            .profiles
            .iter()
            .map(|profile| Route {
                id: format!(
                    "r-{}-{}-{:04x}-{}",
                    profile.route_type.id_tag(),
                    stamp,
                    self.nonce,
                    seq
                ),
                name: profile.route_type.display_name().to_string(),
                coordinates: vec![origin.clone(), destination.clone()],
                duration: profile.duration,
                distance: profile.distance,
                instructions: Self::instructions(),
                traffic: profile.traffic,
                ai_confidence: profile.ai_confidence,
                route_type: profile.route_type,
            })
            .collect();

        debug!(
            "Generated {} routes from ({}) to ({}), sequence {}",
            routes.len(),
            origin,
            destination,
            seq
        );

        routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn endpoints() -> (Coordinate, Coordinate) {
        (
            Coordinate::new(37.7749, -122.4194),
            Coordinate::new(37.7849, -122.4294),
        )
    }

    #[test]
    fn test_catalog_order_and_measurements() {
        let (origin, destination) = endpoints();
        let routes = MockCatalogGenerator::new().generate(&origin, &destination);

        assert_eq!(routes.len(), 3);
        assert_eq!(routes[0].route_type, RouteType::Fastest);
        assert_eq!(routes[1].route_type, RouteType::Efficient);
        assert_eq!(routes[2].route_type, RouteType::Scenic);

        assert_eq!(routes[1].traffic, Traffic::Moderate);
        assert_eq!(routes[2].duration, 18.0);
        assert_eq!(routes[0].distance, 3.2);
    }

    #[test]
    fn test_coordinates_are_the_endpoints() {
        let (origin, destination) = endpoints();
        let routes = MockCatalogGenerator::new().generate(&origin, &destination);

        for route in &routes {
            assert_eq!(route.coordinates, vec![origin.clone(), destination.clone()]);
            assert_eq!(route.origin(), Some(&origin));
            assert_eq!(route.destination(), Some(&destination));
        }
    }

    #[test]
    fn test_instruction_ids_unique_within_route() {
        let (origin, destination) = endpoints();
        let routes = MockCatalogGenerator::new().generate(&origin, &destination);

        for route in &routes {
            let ids: HashSet<&str> = route.instructions.iter().map(|i| i.id.as_str()).collect();
            assert_eq!(ids.len(), route.instructions.len());
            assert_eq!(
                route.instructions.last().map(|i| i.text.as_str()),
                Some("Arrive at destination")
            );
        }
    }

    #[test]
    fn test_back_to_back_calls_have_distinct_ids() {
        let (origin, destination) = endpoints();
        let generator = MockCatalogGenerator::new();

        let first = generator.generate(&origin, &destination);
        let second = generator.generate(&origin, &destination);

        let ids: HashSet<String> = first
            .iter()
            .chain(second.iter())
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_custom_profiles() {
        let mut profiles = DEFAULT_PROFILES;
        profiles[2].ai_confidence = 94;
        let generator = MockCatalogGenerator::with_profiles(profiles).unwrap();
        assert_eq!(generator.profiles()[2].ai_confidence, 94);
        assert_eq!(MockCatalogGenerator::new().profiles(), &DEFAULT_PROFILES);

        let (origin, destination) = endpoints();
        let routes = generator.generate(&origin, &destination);
        assert_eq!(routes[2].ai_confidence, 94);
    }

    #[test]
    fn test_custom_profiles_rejected() {
        let mut outranked = DEFAULT_PROFILES;
        outranked[1].ai_confidence = 95;
        assert!(MockCatalogGenerator::with_profiles(outranked).is_err());

        let mut swapped = DEFAULT_PROFILES;
        swapped.swap(0, 2);
        assert!(MockCatalogGenerator::with_profiles(swapped).is_err());

        let mut zero = DEFAULT_PROFILES;
        zero[0].duration = 0.0;
        assert!(MockCatalogGenerator::with_profiles(zero).is_err());

        let mut overflow = DEFAULT_PROFILES;
        overflow[0].ai_confidence = 101;
        assert!(MockCatalogGenerator::with_profiles(overflow).is_err());
    }
}
