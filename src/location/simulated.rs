// In-process position source for demos and tests

use crate::error::{NavError, Result};
use crate::location::{PermissionStatus, PositionSource};
use crate::models::Coordinate;

/// Position source that reports a fixed permission answer and position
#[derive(Debug, Clone)]
pub struct SimulatedPositionSource {
    permission: PermissionStatus,
    position: Option<Coordinate>,
}

impl SimulatedPositionSource {
    /// Permission granted, always reporting `position`
    pub fn granted(position: Coordinate) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: Some(position),
        }
    }

    /// Permission denied
    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            position: None,
        }
    }

    /// Permission granted but every fix fails
    pub fn without_fix() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: None,
        }
    }
}

impl PositionSource for SimulatedPositionSource {
    fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(self.permission)
    }

    fn current_position(&self) -> Result<Coordinate> {
        if self.permission != PermissionStatus::Granted {
            return Err(NavError::PermissionDenied);
        }
        self.position
            .clone()
            .ok_or_else(|| NavError::PositionUnavailable("no fix available".to_string()))
    }
}
