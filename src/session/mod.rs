// Navigation session state and its store

mod store;

pub use self::store::{NavigationSessionStore, SessionSubscriber};

use crate::models::{Coordinate, Route};
use serde::Serialize;

/// Whether turn-by-turn guidance is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationPhase {
    Idle,
    Navigating,
}

/// Current origin, destination, offered routes, selection and navigating flag
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSession {
    pub origin: Option<Coordinate>,
    pub destination: Option<Coordinate>,
    pub available_routes: Vec<Route>,
    pub selected_route: Option<Route>,
    pub is_navigating: bool,
}

impl NavigationSession {
    pub fn phase(&self) -> NavigationPhase {
        if self.is_navigating {
            NavigationPhase::Navigating
        } else {
            NavigationPhase::Idle
        }
    }

    /// True when the selected route is one of the offered routes
    pub fn selection_in_catalog(&self) -> bool {
        match &self.selected_route {
            Some(selected) => self.available_routes.iter().any(|r| r.id == selected.id),
            None => false,
        }
    }

    /// Session endpoints, falling back to the given defaults where unset
    pub fn trip_endpoints(
        &self,
        default_origin: &Coordinate,
        default_destination: &Coordinate,
    ) -> (Coordinate, Coordinate) {
        (
            self.origin.clone().unwrap_or_else(|| default_origin.clone()),
            self.destination
                .clone()
                .unwrap_or_else(|| default_destination.clone()),
        )
    }
}
