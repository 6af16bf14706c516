//! Error handling for Wallpath
//!
//! Provides the error taxonomy of a planning call:
//! - Configuration errors (invalid wall, obstacle, or settings input)
//! - Planning errors (valid input without any reachable free area)
//! - Limit errors (trajectory larger than the configured maximum)
//! - Internal invariant violations (the validator caught a planner defect)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::data::Point;
use thiserror::Error;

/// Invalid geometry or settings supplied by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Wall dimensions are zero, negative, or not finite
    #[error("Wall dimensions must be positive: {width}x{height}m")]
    InvalidWall {
        /// The supplied wall width.
        width: f64,
        /// The supplied wall height.
        height: f64,
    },

    /// Obstacle has a zero, negative, or non-finite size
    #[error("Obstacle {index} has invalid dimensions: {width}x{height}m")]
    InvalidObstacle {
        /// Position of the obstacle in the input list.
        index: usize,
        /// The supplied obstacle width.
        width: f64,
        /// The supplied obstacle height.
        height: f64,
    },

    /// Obstacle is larger than the wall in at least one dimension
    #[error(
        "Obstacle {index} ({width}x{height}m) is larger than wall ({wall_width}x{wall_height}m)"
    )]
    ObstacleLargerThanWall {
        /// Position of the obstacle in the input list.
        index: usize,
        /// The obstacle width.
        width: f64,
        /// The obstacle height.
        height: f64,
        /// The wall width.
        wall_width: f64,
        /// The wall height.
        wall_height: f64,
    },

    /// Obstacle is not fully contained in the wall
    #[error("Obstacle {index} is outside the wall: {reason}")]
    ObstacleOutOfBounds {
        /// Position of the obstacle in the input list.
        index: usize,
        /// Which bound was violated.
        reason: String,
    },

    /// A planner setting is outside its accepted range
    #[error("Setting '{name}' out of range: {value} (valid: {range})")]
    SettingOutOfRange {
        /// The setting name.
        name: String,
        /// The rejected value.
        value: f64,
        /// Human readable accepted range.
        range: String,
    },

    /// Engine configuration is unusable
    #[error("Invalid engine configuration: {reason}")]
    InvalidEngineConfig {
        /// Why the configuration was rejected.
        reason: String,
    },
}

impl ConfigurationError {
    /// Create an out-of-range error for a named setting
    pub fn out_of_range(name: impl Into<String>, value: f64, range: impl Into<String>) -> Self {
        ConfigurationError::SettingOutOfRange {
            name: name.into(),
            value,
            range: range.into(),
        }
    }
}

/// A safety property the validator found broken in a generated path.
///
/// These can only come from a planner defect, never from caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// Waypoint lies inside an expanded obstacle
    #[error("Waypoint {index} at {point} lies inside expanded obstacle {obstacle}")]
    PointInsideObstacle {
        /// Waypoint position in the path.
        index: usize,
        /// The offending waypoint.
        point: Point,
        /// Index of the expanded obstacle.
        obstacle: usize,
    },

    /// Waypoint lies outside the wall
    #[error("Waypoint {index} at {point} lies outside the wall")]
    PointOutsideWall {
        /// Waypoint position in the path.
        index: usize,
        /// The offending waypoint.
        point: Point,
    },

    /// Connected segment passes through an expanded obstacle
    #[error("Segment {from} -> {to} after waypoint {index} crosses expanded obstacle {obstacle}")]
    SegmentCrossesObstacle {
        /// Position of the segment's first waypoint in the path.
        index: usize,
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Index of the expanded obstacle.
        obstacle: usize,
    },

    /// Waypoint has a NaN or infinite coordinate
    #[error("Waypoint {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Waypoint position in the path.
        index: usize,
    },

    /// Path reached validation without any waypoint
    #[error("Validated path is empty")]
    EmptyPath,

    /// Path reached validation with more waypoints than allowed
    #[error("Validated path has {count} waypoints, limit is {limit}")]
    PointCountExceeded {
        /// Number of waypoints in the path.
        count: usize,
        /// The configured maximum.
        limit: usize,
    },
}

/// Main error type for a planning call
///
/// A planning call is atomic: it yields a complete validated trajectory or
/// exactly one of these errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Invalid wall, obstacle, or settings input
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Input is valid but leaves nothing to cover
    #[error("No valid coverage path could be generated: {reason}")]
    Planning {
        /// Why no waypoint survived.
        reason: String,
    },

    /// Trajectory would exceed the configured point limit
    #[error(
        "Trajectory too large ({generated} points, limit {limit}). Try increasing spacing or resolution"
    )]
    LimitExceeded {
        /// Number of points generated when the limit tripped.
        generated: usize,
        /// The configured maximum.
        limit: usize,
    },

    /// Validator found an unsafe path
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(#[from] InvariantViolation),
}

impl PlanError {
    /// Create a planning error from a message
    pub fn planning(reason: impl Into<String>) -> Self {
        PlanError::Planning {
            reason: reason.into(),
        }
    }

    /// Check if the caller can fix this error by changing the input
    pub fn is_input_error(&self) -> bool {
        !self.is_internal()
    }

    /// Check if this error indicates a planner defect
    pub fn is_internal(&self) -> bool {
        matches!(self, PlanError::InternalInvariant(_))
    }

    /// HTTP-style status a request handler should report for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PlanError::InternalInvariant(_) => 500,
            PlanError::Configuration(_)
            | PlanError::Planning { .. }
            | PlanError::LimitExceeded { .. } => 400,
        }
    }
}

/// Result type using PlanError
pub type PlanResult<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::InvalidWall {
            width: 0.0,
            height: 5.0,
        };
        assert_eq!(err.to_string(), "Wall dimensions must be positive: 0x5m");

        let err = ConfigurationError::out_of_range("spacing", 1.5, "(0, 1]");
        assert_eq!(
            err.to_string(),
            "Setting 'spacing' out of range: 1.5 (valid: (0, 1])"
        );

        let err = ConfigurationError::ObstacleOutOfBounds {
            index: 2,
            reason: "x + width = 5.4 exceeds wall width 5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Obstacle 2 is outside the wall: x + width = 5.4 exceeds wall width 5"
        );
    }

    #[test]
    fn test_plan_error_display() {
        let err = PlanError::LimitExceeded {
            generated: 50_001,
            limit: 50_000,
        };
        assert_eq!(
            err.to_string(),
            "Trajectory too large (50001 points, limit 50000). Try increasing spacing or resolution"
        );

        let err = PlanError::planning("wall is fully blocked");
        assert_eq!(
            err.to_string(),
            "No valid coverage path could be generated: wall is fully blocked"
        );

        let err: PlanError = InvariantViolation::EmptyPath.into();
        assert_eq!(
            err.to_string(),
            "Internal invariant violated: Validated path is empty"
        );
    }

    #[test]
    fn test_configuration_error_is_transparent() {
        let inner = ConfigurationError::InvalidObstacle {
            index: 0,
            width: -1.0,
            height: 1.0,
        };
        let err: PlanError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert!(matches!(err, PlanError::Configuration(_)));
    }

    #[test]
    fn test_status_codes() {
        let config: PlanError = ConfigurationError::InvalidWall {
            width: -1.0,
            height: 1.0,
        }
        .into();
        assert_eq!(config.status_code(), 400);
        assert!(config.is_input_error());

        assert_eq!(PlanError::planning("blocked").status_code(), 400);
        assert_eq!(
            PlanError::LimitExceeded {
                generated: 2,
                limit: 1
            }
            .status_code(),
            400
        );

        let internal: PlanError = InvariantViolation::PointOutsideWall {
            index: 3,
            point: Point::new(6.0, 1.0),
        }
        .into();
        assert_eq!(internal.status_code(), 500);
        assert!(internal.is_internal());
        assert!(!internal.is_input_error());
    }
}
