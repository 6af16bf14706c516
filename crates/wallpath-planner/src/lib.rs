//! # Wallpath Planner
//!
//! Coverage path planning over a rectangular wall with rectangular
//! obstacles. The tool never comes closer to an obstacle than the
//! configured clearance.
//!
//! ## Pipeline
//!
//! - **Geometry**: closed point-in-rectangle and segment-rectangle tests
//! - **Obstacles**: validation, clearance expansion, overlap merging
//! - **Free segments**: obstacle-free intervals along a scan line
//! - **Zigzag**: serpentine row-by-row coverage
//! - **Spiral**: concentric rectangles from the perimeter inward
//! - **Validator**: point, segment and aggregate re-verification
//! - **Metrics**: length, duration, optional collinear compression
//!
//! ## Example
//!
//! ```
//! use wallpath_planner::{CoverageEngine, CoveragePlanner};
//! use wallpath_core::{ObstacleSpec, PlannerSettings, WallSpec};
//!
//! let settings = PlannerSettings {
//!     spacing: 0.25,
//!     resolution: 0.05,
//!     ..PlannerSettings::default()
//! };
//! let trajectory = CoverageEngine::default()
//!     .plan(
//!         &WallSpec::new(2.0, 1.0),
//!         &[ObstacleSpec::new(0.5, 0.3, 0.2, 0.2)],
//!         &settings,
//!     )
//!     .unwrap();
//! assert!(trajectory.point_count() > 0);
//! ```

pub mod context;
pub mod engine;
pub mod free_segments;
pub mod geometry;
pub mod metrics;
pub mod obstacles;
pub mod path;
pub mod spiral;
pub mod validator;
pub mod zigzag;

pub use context::PlanningContext;
pub use engine::{CoverageEngine, CoveragePlanner};
pub use free_segments::{free_segments, FreeSegment};
pub use geometry::{point_in_rect, segment_intersects_rect, Rect};
pub use metrics::{build_trajectory, compress_collinear, path_length};
pub use obstacles::{merge_overlapping, validate_geometry, ObstacleExpander};
pub use path::{PathBuilder, RawPath};
pub use spiral::{spiral_layers, SpiralLayer, SpiralPlanner};
pub use validator::PathValidator;
pub use zigzag::{row_scans, RowScan, ScanDirection, ZigzagPlanner};
