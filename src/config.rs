// Configuration loading for the navigator

use crate::error::{NavError, Result};
use crate::models::{Confidence, Coordinate};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NavigatorConfig {
    #[serde(default)]
    pub planning: PlanningConfig,
    #[serde(default)]
    pub guidance: GuidanceConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub map: MapConfig,
}

/// Route selection settings
#[derive(Clone, Debug, Deserialize)]
pub struct PlanningConfig {
    /// Simulated "Calculating routes..." delay in milliseconds (default: 1200)
    #[serde(default = "default_calculating_delay")]
    pub calculating_delay_ms: u64,

    /// Origin used when the session has none
    #[serde(default = "default_origin")]
    pub default_origin: Coordinate,

    /// Destination used when the session has none
    #[serde(default = "default_destination")]
    pub default_destination: Coordinate,

    /// Confidence at or above which a route is badged "Recommended" (default: 92)
    #[serde(default = "default_recommend_threshold")]
    pub recommend_threshold: Confidence,
}

/// Simulated turn-by-turn settings
#[derive(Clone, Debug, Deserialize)]
pub struct GuidanceConfig {
    /// Time between instruction advances (default: 5000)
    #[serde(default = "default_instruction_interval")]
    pub instruction_interval_ms: u64,

    /// Shortest progress animation (default: 5000)
    #[serde(default = "default_min_progress")]
    pub min_progress_ms: u64,

    /// Longest progress animation (default: 5 minutes)
    #[serde(default = "default_max_progress")]
    pub max_progress_ms: u64,

    /// Speed shown in the stats bar (default: 35)
    #[serde(default = "default_cruise_speed")]
    pub cruise_speed_mph: u32,
}

/// Location watch settings
#[derive(Clone, Debug, Deserialize)]
pub struct LocationConfig {
    /// Minimum movement between forwarded updates, in meters (default: 10)
    #[serde(default = "default_distance_interval")]
    pub distance_interval_m: f64,
}

/// Map viewport settings
#[derive(Clone, Debug, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_latitude_delta")]
    pub latitude_delta: f64,

    #[serde(default = "default_longitude_delta")]
    pub longitude_delta: f64,
}

fn default_calculating_delay() -> u64 {
    1200
}
fn default_origin() -> Coordinate {
    Coordinate::new(37.78825, -122.4324)
}
fn default_destination() -> Coordinate {
    Coordinate::new(37.781, -122.411)
}
fn default_recommend_threshold() -> Confidence {
    92
}
fn default_instruction_interval() -> u64 {
    5000
}
fn default_min_progress() -> u64 {
    5000
}
fn default_max_progress() -> u64 {
    5 * 60 * 1000
}
fn default_cruise_speed() -> u32 {
    35
}
fn default_distance_interval() -> f64 {
    10.0
}
fn default_latitude_delta() -> f64 {
    0.0922
}
fn default_longitude_delta() -> f64 {
    0.0421
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            calculating_delay_ms: default_calculating_delay(),
            default_origin: default_origin(),
            default_destination: default_destination(),
            recommend_threshold: default_recommend_threshold(),
        }
    }
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            instruction_interval_ms: default_instruction_interval(),
            min_progress_ms: default_min_progress(),
            max_progress_ms: default_max_progress(),
            cruise_speed_mph: default_cruise_speed(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            distance_interval_m: default_distance_interval(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            latitude_delta: default_latitude_delta(),
            longitude_delta: default_longitude_delta(),
        }
    }
}

impl PlanningConfig {
    pub fn calculating_delay(&self) -> Duration {
        Duration::from_millis(self.calculating_delay_ms)
    }
}

impl NavigatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: NavigatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.guidance.instruction_interval_ms == 0 {
            return Err(NavError::Config(
                "guidance.instruction_interval_ms must be positive".to_string(),
            ));
        }
        if self.guidance.min_progress_ms > self.guidance.max_progress_ms {
            return Err(NavError::Config(format!(
                "guidance.min_progress_ms ({}) exceeds max_progress_ms ({})",
                self.guidance.min_progress_ms, self.guidance.max_progress_ms
            )));
        }
        if !self.planning.default_origin.is_finite()
            || !self.planning.default_destination.is_finite()
        {
            return Err(NavError::Config(
                "planning default endpoints must be finite".to_string(),
            ));
        }
        if self.planning.recommend_threshold > 100 {
            return Err(NavError::Config(
                "planning.recommend_threshold must be within 0..=100".to_string(),
            ));
        }
        Ok(())
    }
}
