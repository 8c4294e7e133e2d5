// Location service: permission checks, single fixes and watches

use tracing::{error, info, warn};

use crate::location::{LocationWatch, PermissionStatus, PositionSource};
use crate::models::Coordinate;

/// Wraps a platform position source behind a failure-free interface
pub struct LocationService<S: PositionSource> {
    source: S,
    distance_interval_m: f64,
    watch: Option<LocationWatch>,
}

impl<S: PositionSource> LocationService<S> {
    pub fn new(source: S, distance_interval_m: f64) -> Self {
        Self {
            source,
            distance_interval_m,
            watch: None,
        }
    }

    /// True only when the platform reports the permission as granted
    pub fn request_permissions(&self) -> bool {
        match self.source.request_permission() {
            Ok(PermissionStatus::Granted) => true,
            Ok(status) => {
                info!("Location permission not granted: {:?}", status);
                false
            }
            Err(e) => {
                error!("Error requesting location permission: {}", e);
                false
            }
        }
    }

    /// High-accuracy fix, or `None` if permission is missing or the fix fails
    pub fn get_current_location(&self) -> Option<Coordinate> {
        if !self.request_permissions() {
            return None;
        }

        match self.source.current_position() {
            Ok(position) => Some(position),
            Err(e) => {
                error!("Error getting location: {}", e);
                None
            }
        }
    }

    /// Start forwarding position updates to `callback`. Returns false (and
    /// installs nothing) when permission is missing. Any previous watch is
    /// replaced.
    pub fn watch_location<F>(&mut self, callback: F) -> bool
    where
        F: FnMut(&Coordinate) + Send + 'static,
    {
        if !self.request_permissions() {
            return false;
        }

        if self.watch.is_some() {
            warn!("Replacing active location watch");
        }
        self.watch = Some(LocationWatch::new(self.distance_interval_m, callback));
        true
    }

    /// Feed a platform position update to the active watch, if any
    pub fn deliver(&mut self, position: &Coordinate) -> bool {
        match self.watch.as_mut() {
            Some(watch) => watch.offer(position),
            None => false,
        }
    }

    pub fn stop_watching(&mut self) {
        self.watch = None;
    }

    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NavError, Result};
    use crate::location::SimulatedPositionSource;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct BrokenSource;

    impl PositionSource for BrokenSource {
        fn request_permission(&self) -> Result<PermissionStatus> {
            Err(NavError::PositionUnavailable("platform unavailable".to_string()))
        }

        fn current_position(&self) -> Result<Coordinate> {
            panic!("position must not be requested without permission");
        }
    }

    struct UndecidedSource;

    impl PositionSource for UndecidedSource {
        fn request_permission(&self) -> Result<PermissionStatus> {
            Ok(PermissionStatus::Undetermined)
        }

        fn current_position(&self) -> Result<Coordinate> {
            panic!("position must not be requested without permission");
        }
    }

    #[test]
    fn test_granted_returns_fix() {
        let here = Coordinate::new(37.7749, -122.4194);
        let service = LocationService::new(SimulatedPositionSource::granted(here.clone()), 10.0);

        assert!(service.request_permissions());
        assert_eq!(service.get_current_location(), Some(here));
    }

    #[test]
    fn test_failures_collapse_to_none() {
        let denied = LocationService::new(SimulatedPositionSource::denied(), 10.0);
        assert!(!denied.request_permissions());
        assert!(denied.get_current_location().is_none());

        let no_fix = LocationService::new(SimulatedPositionSource::without_fix(), 10.0);
        assert!(no_fix.request_permissions());
        assert!(no_fix.get_current_location().is_none());

        let broken = LocationService::new(BrokenSource, 10.0);
        assert!(!broken.request_permissions());
        assert!(broken.get_current_location().is_none());

        let undecided = LocationService::new(UndecidedSource, 10.0);
        assert!(undecided.get_current_location().is_none());
    }

    #[test]
    fn test_watch_requires_permission() {
        let mut service = LocationService::new(SimulatedPositionSource::denied(), 10.0);
        assert!(!service.watch_location(|_| {}));
        assert!(!service.is_watching());
        assert!(!service.deliver(&Coordinate::new(0.0, 0.0)));
    }

    #[test]
    fn test_watch_lifecycle() {
        let here = Coordinate::new(37.7749, -122.4194);
        let mut service = LocationService::new(SimulatedPositionSource::granted(here.clone()), 10.0);
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();

        assert!(service.watch_location(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert!(service.deliver(&here));
        assert!(!service.deliver(&here));
        assert!(service.deliver(&Coordinate::new(37.7849, -122.4194)));
        assert_eq!(count.load(Ordering::SeqCst), 2);

        service.stop_watching();
        service.stop_watching();
        assert!(!service.is_watching());
        assert!(!service.deliver(&Coordinate::new(0.0, 0.0)));
    }
}
