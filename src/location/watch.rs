// Distance-filtered stream of position updates

use crate::models::Coordinate;

/// Forwards position updates to a callback, skipping any that lie closer than
/// the distance interval to the last forwarded position
pub struct LocationWatch {
    distance_interval_m: f64,
    last_forwarded: Option<Coordinate>,
    callback: Box<dyn FnMut(&Coordinate) + Send>,
}

impl LocationWatch {
    pub fn new<F>(distance_interval_m: f64, callback: F) -> Self
    where
        F: FnMut(&Coordinate) + Send + 'static,
    {
        Self {
            distance_interval_m: distance_interval_m.max(0.0),
            last_forwarded: None,
            callback: Box::new(callback),
        }
    }

    /// Offer a new fix; returns true if it was forwarded
    pub fn offer(&mut self, position: &Coordinate) -> bool {
        if !position.is_finite() {
            return false;
        }

        let moved_enough = match &self.last_forwarded {
            Some(last) => last.distance_to(position) >= self.distance_interval_m,
            None => true,
        };

        if moved_enough {
            (self.callback)(position);
            self.last_forwarded = Some(position.clone());
        }
        moved_enough
    }

    pub fn last_forwarded(&self) -> Option<&Coordinate> {
        self.last_forwarded.as_ref()
    }
}
