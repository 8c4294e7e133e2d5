// Screen flow: home, route selection, navigation and back home.
//
// RoutePlanner holds the logic of each screen with the UI stripped out.
// It reads and writes the session only through NavigationSessionStore.

use std::sync::Arc;

use tracing::{info, warn};

use crate::algorithms::{check_catalog, recommended, RouteGenerator};
use crate::config::NavigatorConfig;
use crate::guidance::GuidanceSimulator;
use crate::location::{LocationService, PositionSource};
use crate::models::{Coordinate, MapRegion, Route, RouteId};
use crate::session::NavigationSessionStore;

/// Outcome of locating the user on the home screen
#[derive(Debug, Clone, PartialEq)]
pub enum HomeState {
    Ready { origin: Coordinate, region: MapRegion },
    LocationRequired,
}

/// Routes offered on the selection screen and the one currently highlighted
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptions {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub routes: Vec<Route>,
    pub highlighted: Option<RouteId>,
}

impl RouteOptions {
    /// Highlight a route by id; unknown ids are ignored
    pub fn highlight(&mut self, id: &str) -> bool {
        if self.routes.iter().any(|r| r.id == id) {
            self.highlighted = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn highlighted_route(&self) -> Option<&Route> {
        let id = self.highlighted.as_deref()?;
        self.routes.iter().find(|r| r.id == id)
    }

    /// The highest-confidence route
    pub fn recommended(&self) -> Option<&Route> {
        recommended(&self.routes)
    }
}

pub struct RoutePlanner {
    store: NavigationSessionStore,
    generator: Arc<dyn RouteGenerator>,
    config: NavigatorConfig,
}

impl RoutePlanner {
    pub fn new(
        store: NavigationSessionStore,
        generator: Arc<dyn RouteGenerator>,
        config: NavigatorConfig,
    ) -> Self {
        Self {
            store,
            generator,
            config,
        }
    }

    pub fn store(&self) -> &NavigationSessionStore {
        &self.store
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Home screen: find the user and center the map on them
    pub fn locate<S: PositionSource>(&self, location: &LocationService<S>) -> HomeState {
        match location.get_current_location() {
            Some(origin) => {
                info!("Located user at {}", origin);
                self.store.set_origin(Some(origin.clone()));
                let region = MapRegion::centered_on(
                    &origin,
                    self.config.map.latitude_delta,
                    self.config.map.longitude_delta,
                );
                HomeState::Ready { origin, region }
            }
            None => {
                warn!("Location unavailable, prompting for settings");
                HomeState::LocationRequired
            }
        }
    }

    /// Route selection screen: build the catalog for the session's endpoints,
    /// or the configured defaults where unset. The first route starts
    /// highlighted. The session itself is not changed.
    pub fn plan_routes(&self) -> RouteOptions {
        let (origin, destination) = self.store.snapshot().trip_endpoints(
            &self.config.planning.default_origin,
            &self.config.planning.default_destination,
        );

        let routes = self.generator.generate(&origin, &destination);
        if let Err(e) = check_catalog(&routes) {
            warn!("Route generator returned a malformed catalog: {}", e);
        }
        info!("Offering {} routes from {} to {}", routes.len(), origin, destination);

        let highlighted = routes.first().map(|r| r.id.clone());
        RouteOptions {
            origin,
            destination,
            routes,
            highlighted,
        }
    }

    /// Pick a route card and go straight to navigation, bypassing the catalog
    pub fn quick_start(&self, options: &mut RouteOptions, route: &Route) {
        options.highlight(&route.id);
        self.store.select_route(Some(route.clone()));
        info!("Quick start on {}", route.name);
    }

    /// Confirm the highlighted route: publish the catalog and start navigating.
    /// Returns `None` if nothing is highlighted.
    pub fn confirm(&self, options: &RouteOptions) -> Option<Route> {
        let selected = options.highlighted_route()?.clone();
        self.store.set_routes(options.routes.clone());
        self.store.start_navigation_with(selected.clone());
        info!("Confirmed {}", selected.summary());
        Some(selected)
    }

    /// Navigation screen mounted: mark navigation started and build guidance
    /// for the selected route. `None` means there is no active route.
    pub fn begin_guidance(&self) -> Option<GuidanceSimulator> {
        self.store.start_navigation();
        match self.store.selected_route() {
            Some(route) => Some(GuidanceSimulator::new(route, &self.config.guidance)),
            None => {
                warn!("Navigation started without a selected route");
                None
            }
        }
    }

    /// End navigation and return home
    pub fn end_navigation(&self) {
        self.store.stop_navigation();
        info!("Navigation ended");
    }
}
