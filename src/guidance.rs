// Simulated turn-by-turn guidance.
//
// Guidance is driven by elapsed time, not by position: the active
// instruction advances once per interval until it reaches the last step, and
// a progress fraction fills over the route duration, clamped to the
// configured bounds. The caller owns the clock and feeds elapsed time in.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::GuidanceConfig;
use crate::models::{Instruction, Miles, Minutes, Route};

/// Something the driver should be alerted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceEvent {
    InstructionAdvanced { index: usize },
    ProgressComplete,
}

/// Values shown in the stats bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripStats {
    pub eta_minutes: Minutes,
    pub remaining_miles: Miles,
    pub speed_mph: u32,
}

impl fmt::Display for TripStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ETA: {} min  Remaining: {:.1} mi  Speed: {} mph",
            self.eta_minutes, self.remaining_miles, self.speed_mph
        )
    }
}

pub struct GuidanceSimulator {
    route: Route,
    instruction_interval: Duration,
    progress_duration: Duration,
    speed_mph: u32,
    elapsed: Duration,
    instruction_index: usize,
    complete: bool,
    placeholder: Instruction,
}

impl GuidanceSimulator {
    pub fn new(route: Route, config: &GuidanceConfig) -> Self {
        let progress_duration = progress_duration(&route, config);
        Self {
            route,
            instruction_interval: Duration::from_millis(config.instruction_interval_ms.max(1)),
            progress_duration,
            speed_mph: config.cruise_speed_mph,
            elapsed: Duration::ZERO,
            instruction_index: 0,
            complete: false,
            placeholder: Instruction::placeholder(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Length of the progress animation
    pub fn progress_duration(&self) -> Duration {
        self.progress_duration
    }

    /// Move the clock forward to `elapsed` since guidance began. Earlier
    /// times than the current one are ignored.
    pub fn advance_to(&mut self, elapsed: Duration) -> Vec<GuidanceEvent> {
        let mut events = Vec::new();
        if elapsed < self.elapsed {
            return events;
        }
        self.elapsed = elapsed;

        let last = self.route.instructions.len().saturating_sub(1);
        let steps = usize::try_from(elapsed.as_millis() / self.instruction_interval.as_millis())
            .unwrap_or(usize::MAX);
        let index = steps.min(last);
        if index != self.instruction_index {
            self.instruction_index = index;
            events.push(GuidanceEvent::InstructionAdvanced { index });
        }

        if !self.complete && self.progress() >= 1.0 {
            self.complete = true;
            events.push(GuidanceEvent::ProgressComplete);
        }

        events
    }

    pub fn advance_by(&mut self, delta: Duration) -> Vec<GuidanceEvent> {
        self.advance_to(self.elapsed.saturating_add(delta))
    }

    pub fn instruction_index(&self) -> usize {
        self.instruction_index
    }

    /// Active instruction; a "Continue" placeholder if the route has none
    pub fn current_instruction(&self) -> &Instruction {
        self.route
            .instructions
            .get(self.instruction_index)
            .unwrap_or(&self.placeholder)
    }

    /// Fraction of the progress bar filled, in [0, 1]
    pub fn progress(&self) -> f64 {
        let total = self.progress_duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / total).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn stats(&self) -> TripStats {
        TripStats {
            eta_minutes: self.route.duration,
            remaining_miles: self.route.distance,
            speed_mph: self.speed_mph,
        }
    }

    /// Expected arrival if the trip started at `started`; `None` when the
    /// route duration runs past the representable calendar
    pub fn arrival_time(&self, started: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if !self.route.duration.is_finite() {
            return None;
        }
        let millis = (self.route.duration.max(0.0) * 60_000.0) as i64;
        started.checked_add_signed(chrono::Duration::try_milliseconds(millis)?)
    }
}

fn progress_duration(route: &Route, config: &GuidanceConfig) -> Duration {
    let min = config.min_progress_ms;
    let max = config.max_progress_ms.max(min);
    let route_ms = if route.duration.is_finite() && route.duration > 0.0 {
        (route.duration * 60_000.0) as u64
    } else {
        min
    };
    Duration::from_millis(route_ms.clamp(min, max))
}
