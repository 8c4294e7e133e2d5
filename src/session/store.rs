// Navigation session store

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use super::{NavigationPhase, NavigationSession};
use crate::models::{Coordinate, Route};

/// Receives a snapshot of the session after every completed write.
/// Subscribers may read the store but must not write to it.
pub trait SessionSubscriber: Send + Sync {
    fn on_session_changed(&self, session: &NavigationSession);
}

/// Shared, lock-guarded navigation session.
///
/// Cloning the store yields another handle to the same session, so the
/// screens of one app instance can be handed the same store while separate
/// instances (and tests) stay isolated. Every operation is total: each one
/// takes the write lock, applies its change in full and releases it, so a
/// reader always observes the last completed write. Writes and their
/// notifications are serialized, so subscribers receive snapshots in write
/// order.
#[derive(Clone, Default)]
pub struct NavigationSessionStore {
    state: Arc<RwLock<NavigationSession>>,
    write_order: Arc<Mutex<()>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn SessionSubscriber>>>>,
}

impl NavigationSessionStore {
    /// Create a store holding an idle, empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the origin
    pub fn set_origin(&self, origin: Option<Coordinate>) {
        self.update("set_origin", |s| s.origin = origin);
    }

    /// Replace the destination
    pub fn set_destination(&self, destination: Option<Coordinate>) {
        self.update("set_destination", |s| s.destination = destination);
    }

    /// Replace the offered routes wholesale; the selection is left alone
    pub fn set_routes(&self, routes: Vec<Route>) {
        self.update("set_routes", |s| s.available_routes = routes);
    }

    /// Replace the selected route. Membership in the offered routes is not
    /// checked, so a route can be picked straight from a card.
    pub fn select_route(&self, route: Option<Route>) {
        self.update("select_route", |s| s.selected_route = route);
    }

    /// Enter the navigating phase without touching any other field
    pub fn start_navigation(&self) {
        self.update("start_navigation", |s| s.is_navigating = true);
    }

    /// Select a route and enter the navigating phase in a single write
    pub fn start_navigation_with(&self, route: Route) {
        self.update("start_navigation_with", |s| {
            s.selected_route = Some(route);
            s.is_navigating = true;
        });
    }

    /// Leave the navigating phase and drop the route data.
    /// Origin and destination are kept.
    pub fn stop_navigation(&self) {
        self.update("stop_navigation", |s| {
            s.is_navigating = false;
            s.selected_route = None;
            s.available_routes.clear();
        });
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> NavigationSession {
        self.state.read().clone()
    }

    pub fn phase(&self) -> NavigationPhase {
        self.state.read().phase()
    }

    pub fn is_navigating(&self) -> bool {
        self.state.read().is_navigating
    }

    pub fn origin(&self) -> Option<Coordinate> {
        self.state.read().origin.clone()
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.state.read().destination.clone()
    }

    pub fn selected_route(&self) -> Option<Route> {
        self.state.read().selected_route.clone()
    }

    pub fn available_routes(&self) -> Vec<Route> {
        self.state.read().available_routes.clone()
    }

    /// Register a subscriber; it is dropped automatically once its last
    /// strong reference goes away
    pub fn add_subscriber(&self, subscriber: Arc<dyn SessionSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    fn update<F>(&self, op: &str, apply: F)
    where
        F: FnOnce(&mut NavigationSession),
    {
        let _ordered = self.write_order.lock();
        let snapshot = {
            let mut state = self.state.write();
            apply(&mut *state);
            debug!(
                "{}: phase={:?} routes={} selected={:?}",
                op,
                state.phase(),
                state.available_routes.len(),
                state.selected_route.as_ref().map(|r| r.id.as_str())
            );
            state.clone()
        };

        self.notify_subscribers(&snapshot);
    }

    fn notify_subscribers(&self, session: &NavigationSession) {
        let live: Vec<Arc<dyn SessionSubscriber>> = {
            let mut subscribers = self.subscribers.write();
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_session_changed(session);
        }
    }
}
