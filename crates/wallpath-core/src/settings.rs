//! Planner settings and engine configuration
//!
//! `PlannerSettings` are the per-request knobs a caller chooses for one
//! trajectory. `EngineConfig` carries the limits the hosting application
//! imposes on every planning call.

use crate::constants::{
    DEFAULT_CLEARANCE_M, DEFAULT_MAX_POINTS, DEFAULT_RESOLUTION_M, DEFAULT_SPACING_M,
    DEFAULT_SPEED_MPS, MAX_CLEARANCE_M, MAX_RESOLUTION_M, MAX_SPACING_M, MAX_SPEED_MPS,
};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coverage pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoveragePattern {
    /// Row-by-row serpentine scan (boustrophedon)
    Zigzag,
    /// Concentric rectangles from the perimeter inward
    Spiral,
}

impl Default for CoveragePattern {
    fn default() -> Self {
        Self::Zigzag
    }
}

impl fmt::Display for CoveragePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zigzag => write!(f, "zigzag"),
            Self::Spiral => write!(f, "spiral"),
        }
    }
}

impl FromStr for CoveragePattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zigzag" | "boustrophedon" | "raster" => Ok(Self::Zigzag),
            "spiral" | "perimeter" => Ok(Self::Spiral),
            _ => Err(format!(
                "Unknown pattern: {}. Must be 'zigzag' or 'spiral'",
                s
            )),
        }
    }
}

/// Settings for a single planning request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Coverage pattern to use
    pub pattern: CoveragePattern,
    /// Distance between passes in meters, in (0, 1]
    pub spacing: f64,
    /// Tool speed in meters per second, in (0, 2]
    pub speed: f64,
    /// Clearance kept from obstacles in meters, in [0, 0.5]
    pub clearance: f64,
    /// Distance between waypoints along a pass in meters, in (0, 0.1]
    pub resolution: f64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            pattern: CoveragePattern::default(),
            spacing: DEFAULT_SPACING_M,
            speed: DEFAULT_SPEED_MPS,
            clearance: DEFAULT_CLEARANCE_M,
            resolution: DEFAULT_RESOLUTION_M,
        }
    }
}

impl PlannerSettings {
    /// Create settings with defaults for the given pattern
    pub fn with_pattern(pattern: CoveragePattern) -> Self {
        Self {
            pattern,
            ..Self::default()
        }
    }

    /// Check every field against its accepted range
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_open_closed("spacing", self.spacing, MAX_SPACING_M)?;
        check_open_closed("speed", self.speed, MAX_SPEED_MPS)?;
        check_open_closed("resolution", self.resolution, MAX_RESOLUTION_M)?;

        if !(self.clearance.is_finite() && (0.0..=MAX_CLEARANCE_M).contains(&self.clearance)) {
            return Err(ConfigurationError::out_of_range(
                "clearance",
                self.clearance,
                format!("[0, {}]", MAX_CLEARANCE_M),
            ));
        }

        Ok(())
    }

    /// Whether waypoints along a pass are at most as far apart as the passes
    pub fn resolution_within_spacing(&self) -> bool {
        self.resolution <= self.spacing
    }
}

fn check_open_closed(name: &str, value: f64, max: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 && value <= max {
        Ok(())
    } else {
        Err(ConfigurationError::out_of_range(
            name,
            value,
            format!("(0, {}]", max),
        ))
    }
}

/// Limits applied to every planning call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of waypoints a trajectory may contain
    pub max_points: usize,
    /// Collinear compression tolerance in meters; `None` keeps every waypoint
    pub compress_tolerance: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            compress_tolerance: None,
        }
    }
}

impl EngineConfig {
    /// Create a config with the given point limit and no compression
    pub fn with_max_points(max_points: usize) -> Self {
        Self {
            max_points,
            ..Self::default()
        }
    }

    /// Validate limits
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.max_points == 0 {
            return Err(ConfigurationError::InvalidEngineConfig {
                reason: "max_points must be > 0".to_string(),
            });
        }

        if let Some(tolerance) = self.compress_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ConfigurationError::InvalidEngineConfig {
                    reason: format!("compress_tolerance must be >= 0, got {}", tolerance),
                });
            }
        }

        Ok(())
    }
}
