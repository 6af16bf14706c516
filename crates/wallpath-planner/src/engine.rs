//! Strategy dispatch and the end-to-end planning pipeline.

use crate::context::PlanningContext;
use crate::metrics::build_trajectory;
use crate::path::{PathBuilder, RawPath};
use crate::spiral::SpiralPlanner;
use crate::validator::PathValidator;
use crate::zigzag::ZigzagPlanner;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use wallpath_core::{
    CoveragePattern, EngineConfig, ObstacleSpec, PlanError, PlanResult, PlannerSettings,
    Trajectory, WallSpec,
};

/// Capability shared by everything that turns a wall into a trajectory.
pub trait CoveragePlanner {
    /// Plan a complete, validated trajectory.
    ///
    /// The call is atomic: it returns either a trajectory or exactly one
    /// error, never a partial result.
    fn plan(
        &self,
        wall: &WallSpec,
        obstacles: &[ObstacleSpec],
        settings: &PlannerSettings,
    ) -> PlanResult<Trajectory>;
}

/// Coverage engine dispatching on [`CoveragePattern`].
///
/// Holds only immutable limits, so one engine can serve any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageEngine {
    config: EngineConfig,
}

impl CoverageEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Expand obstacles and validate inputs without generating a path.
    pub fn prepare(
        &self,
        wall: &WallSpec,
        obstacles: &[ObstacleSpec],
        settings: &PlannerSettings,
    ) -> PlanResult<PlanningContext> {
        self.config.validate()?;
        let ctx = PlanningContext::new(wall, obstacles, settings)?;

        if !settings.resolution_within_spacing() {
            warn!(
                "Resolution {} exceeds spacing {}; waypoints along a pass are sparser than the passes",
                settings.resolution, settings.spacing
            );
        }

        Ok(ctx)
    }

    /// Run the selected pattern and return the raw stroke set.
    pub fn generate(&self, ctx: &PlanningContext) -> PlanResult<RawPath> {
        let mut builder = PathBuilder::new(ctx, self.config.max_points);

        match ctx.settings().pattern {
            CoveragePattern::Zigzag => ZigzagPlanner.generate(ctx, &mut builder)?,
            CoveragePattern::Spiral => SpiralPlanner.generate(ctx, &mut builder)?,
        }

        Ok(builder.finish())
    }
}

impl CoveragePlanner for CoverageEngine {
    fn plan(
        &self,
        wall: &WallSpec,
        obstacles: &[ObstacleSpec],
        settings: &PlannerSettings,
    ) -> PlanResult<Trajectory> {
        let start = Instant::now();
        let ctx = self.prepare(wall, obstacles, settings)?;

        debug!(
            "Planning {} coverage on {}x{} m wall with {} obstacles ({} after expansion)",
            settings.pattern,
            wall.width,
            wall.height,
            obstacles.len(),
            ctx.obstacles().len()
        );

        let mut path = self.generate(&ctx)?;
        if path.is_empty() {
            return Err(PlanError::planning(
                "no waypoint lies outside the expanded obstacles",
            ));
        }

        if let Some(tolerance) = self.config.compress_tolerance {
            let before = path.point_count();
            path = path.compressed(tolerance, settings.spacing);
            debug!(
                "Compressed {} waypoints to {}",
                before,
                path.point_count()
            );
        }

        PathValidator::new(&ctx, self.config.max_points)
            .validate(&path)
            .map_err(|violation| {
                error!("Path validation failed: {}", violation);
                PlanError::InternalInvariant(violation)
            })?;

        let strokes = path.stroke_count();
        let trajectory = build_trajectory(path.into_points(), settings.speed);

        info!(
            "Planned {} trajectory: {} waypoints in {} strokes, {:.2} m, {:.1} s ({} ms)",
            settings.pattern,
            trajectory.point_count(),
            strokes,
            trajectory.length_m(),
            trajectory.duration_s(),
            start.elapsed().as_millis()
        );

        Ok(trajectory)
    }
}
