// Location collaborator boundary
//
// The platform supplies permissions and position fixes through
// `PositionSource`. `LocationService` wraps a source and collapses every
// failure (denied permission, platform error, timeout) into `None`, which is
// all the screens need to show the "location required" prompt.

mod service;
mod simulated;
mod watch;

pub use self::service::LocationService;
pub use self::simulated::SimulatedPositionSource;
pub use self::watch::LocationWatch;

use crate::error::Result;
use crate::models::Coordinate;

/// Foreground location permission state reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// Platform access to location permissions and position fixes
pub trait PositionSource: Send + Sync {
    /// Ask for foreground location permission
    fn request_permission(&self) -> Result<PermissionStatus>;

    /// Take a single high-accuracy position fix
    fn current_position(&self) -> Result<Coordinate>;
}
