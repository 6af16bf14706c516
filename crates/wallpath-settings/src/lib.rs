//! Wallpath Settings Crate
//!
//! Handles application configuration, planning job files, and trajectory
//! records.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, LogFormat, LoggingConfig, OutputConfig, PlannerConfig};
pub use error::{ConfigError, PersistenceError, PersistenceResult, SettingsError, SettingsResult};
pub use persistence::{PlanJob, TrajectoryRecord};
