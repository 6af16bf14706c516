//! # Wallpath Core
//!
//! Core types and error definitions for Wallpath.
//! Provides the data model shared by the planning engine, the settings
//! layer, and the command-line front end: walls, obstacles, planner
//! settings, trajectories, and the planning error taxonomy.

pub mod constants;
pub mod data;
pub mod error;
pub mod settings;
pub mod trajectory;

pub use data::{ObstacleSpec, Point, WallSpec};

pub use error::{ConfigurationError, InvariantViolation, PlanError, PlanResult};

pub use settings::{CoveragePattern, EngineConfig, PlannerSettings};

pub use trajectory::{CoverageStats, Trajectory};
