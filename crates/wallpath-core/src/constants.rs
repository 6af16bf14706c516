//! Default values and accepted ranges for planner inputs.
//!
//! All lengths are meters, speeds are meters per second.

/// Default distance between adjacent coverage passes
pub const DEFAULT_SPACING_M: f64 = 0.05;

/// Default tool speed used for duration estimates
pub const DEFAULT_SPEED_MPS: f64 = 0.1;

/// Default clearance kept around every obstacle
pub const DEFAULT_CLEARANCE_M: f64 = 0.02;

/// Default waypoint spacing along a pass
pub const DEFAULT_RESOLUTION_M: f64 = 0.01;

/// Default upper bound on the number of waypoints in one trajectory
pub const DEFAULT_MAX_POINTS: usize = 50_000;

/// Upper bound for `spacing` (exclusive lower bound is zero)
pub const MAX_SPACING_M: f64 = 1.0;

/// Upper bound for `speed` (exclusive lower bound is zero)
pub const MAX_SPEED_MPS: f64 = 2.0;

/// Upper bound for `clearance` (inclusive lower bound is zero)
pub const MAX_CLEARANCE_M: f64 = 0.5;

/// Upper bound for `resolution` (exclusive lower bound is zero)
pub const MAX_RESOLUTION_M: f64 = 0.1;

/// Tolerance for floating point comparisons on coordinates
pub const GEOMETRY_EPSILON: f64 = 1e-9;
