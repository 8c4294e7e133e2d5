pub mod mock_catalog;

// Common algorithm traits
use crate::error::{NavError, Result};
use crate::models::{Coordinate, Route, RouteType};
use std::collections::HashSet;

/// Trait for route catalog generators
pub trait RouteGenerator: Send + Sync {
    /// Produce the candidate routes between two points, in catalog order
    fn generate(&self, origin: &Coordinate, destination: &Coordinate) -> Vec<Route>;
}

/// Highest-confidence route of a catalog; the earliest entry wins ties
pub fn recommended(routes: &[Route]) -> Option<&Route> {
    routes.iter().fold(None, |best: Option<&Route>, route| match best {
        Some(b) if b.ai_confidence >= route.ai_confidence => Some(b),
        _ => Some(route),
    })
}

/// Checks that a route list is a well-formed catalog: one route of each type
/// in catalog order, valid measurements, distinct ids, and the fastest route
/// holding the highest confidence
pub fn check_catalog(routes: &[Route]) -> Result<()> {
    if routes.len() != RouteType::ALL.len() {
        return Err(NavError::InvalidCatalog(format!(
            "expected {} routes, got {}",
            RouteType::ALL.len(),
            routes.len()
        )));
    }

    for (route, expected) in routes.iter().zip(RouteType::ALL.iter()) {
        if route.route_type != *expected {
            return Err(NavError::InvalidCatalog(format!(
                "route {} has type {:?}, expected {:?}",
                route.id, route.route_type, expected
            )));
        }
        check_route(route)?;
    }

    let mut seen = HashSet::new();
    for route in routes {
        if !seen.insert(route.id.as_str()) {
            return Err(NavError::InvalidCatalog(format!(
                "duplicate route id {}",
                route.id
            )));
        }
    }

    let fastest = &routes[0];
    if let Some(better) = routes[1..]
        .iter()
        .find(|r| r.ai_confidence > fastest.ai_confidence)
    {
        return Err(NavError::InvalidCatalog(format!(
            "{} confidence {} exceeds fastest route confidence {}",
            better.name, better.ai_confidence, fastest.ai_confidence
        )));
    }

    Ok(())
}

fn check_route(route: &Route) -> Result<()> {
    let problem = if !route.duration.is_finite() || route.duration <= 0.0 {
        Some("duration must be positive")
    } else if !route.distance.is_finite() || route.distance <= 0.0 {
        Some("distance must be positive")
    } else if route.ai_confidence > 100 {
        Some("confidence must be within 0..=100")
    } else if route.coordinates.len() != 2 {
        Some("coordinates must be exactly [origin, destination]")
    } else if route.instructions.is_empty() {
        Some("instructions must not be empty")
    } else {
        None
    };

    match problem {
        Some(msg) => Err(NavError::InvalidCatalog(format!("route {}: {}", route.id, msg))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::mock_catalog::MockCatalogGenerator;
    use super::*;

    fn catalog() -> Vec<Route> {
        MockCatalogGenerator::new().generate(
            &Coordinate::new(37.7749, -122.4194),
            &Coordinate::new(37.7849, -122.4294),
        )
    }

    #[test]
    fn test_generated_catalog_passes_check() {
        assert!(check_catalog(&catalog()).is_ok());
    }

    #[test]
    fn test_check_rejects_wrong_cardinality() {
        let mut routes = catalog();
        routes.pop();
        assert!(matches!(check_catalog(&routes), Err(NavError::InvalidCatalog(_))));
        assert!(check_catalog(&[]).is_err());
    }

    #[test]
    fn test_check_rejects_outranked_fastest() {
        let mut routes = catalog();
        routes[2].ai_confidence = 99;
        assert!(check_catalog(&routes).is_err());
    }

    #[test]
    fn test_check_rejects_duplicate_ids() {
        let mut routes = catalog();
        routes[1].id = routes[0].id.clone();
        assert!(check_catalog(&routes).is_err());
    }

    #[test]
    fn test_check_rejects_bad_fields() {
        let mut routes = catalog();
        routes[1].instructions.clear();
        assert!(check_catalog(&routes).is_err());

        let mut routes = catalog();
        routes[0].duration = 0.0;
        assert!(check_catalog(&routes).is_err());

        let mut routes = catalog();
        routes[0].distance = f64::NAN;
        assert!(check_catalog(&routes).is_err());
    }

    #[test]
    fn test_recommended_prefers_earliest_on_tie() {
        let mut routes = catalog();
        routes[1].ai_confidence = routes[0].ai_confidence;

        let best = recommended(&routes).unwrap();
        assert_eq!(best.route_type, RouteType::Fastest);
        assert!(recommended(&[]).is_none());
    }
}
