//! # Wallpath
//!
//! Coverage path planning for wall finishing tools. Plans a trajectory that
//! covers a rectangular wall while keeping a clearance around rectangular
//! obstacles such as windows and sockets.
//!
//! ## Architecture
//!
//! Wallpath is organized as a workspace with multiple crates:
//!
//! 1. **wallpath-core** - Data model, planner settings, error taxonomy
//! 2. **wallpath-planner** - Obstacle expansion, zigzag and spiral planners, validation, metrics
//! 3. **wallpath-settings** - Configuration files, job files, trajectory records
//! 4. **wallpath** - Logging setup, planning service, command-line front end

pub mod service;

pub use wallpath_core::{
    ConfigurationError, CoveragePattern, CoverageStats, EngineConfig, InvariantViolation,
    ObstacleSpec, PlanError, PlanResult, PlannerSettings, Point, Trajectory, WallSpec,
};
pub use wallpath_planner::{CoverageEngine, CoveragePlanner, PlanningContext};
pub use wallpath_settings::{Config, LogFormat, LoggingConfig, PlanJob, TrajectoryRecord};

pub use service::{PlannerStats, PlanningService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("WALLPATH_BUILD_DATE");

/// Initialize logging from the logging section of the configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so trajectory JSON on stdout stays clean
/// - Pretty or JSON formatting per `config.format`
/// - RUST_LOG environment variable support, overriding `config.level`
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.to_lowercase()))?;

    match config.format {
        LogFormat::Text => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
