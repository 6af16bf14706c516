//! Validated inputs of a single planning call.

use crate::geometry::{segment_intersects_rect, Rect};
use crate::obstacles::{validate_geometry, ObstacleExpander};
use wallpath_core::constants::GEOMETRY_EPSILON;
use wallpath_core::{ConfigurationError, ObstacleSpec, PlannerSettings, Point, WallSpec};

/// Wall, normalized expanded obstacles, and settings for one planning call.
///
/// Constructing a context performs all input validation, so every planner
/// working from one can assume well-formed geometry.
#[derive(Debug, Clone)]
pub struct PlanningContext {
    wall: Rect,
    obstacles: Vec<Rect>,
    settings: PlannerSettings,
}

impl PlanningContext {
    /// Validate inputs and expand obstacles by the configured clearance.
    pub fn new(
        wall: &WallSpec,
        obstacles: &[ObstacleSpec],
        settings: &PlannerSettings,
    ) -> Result<Self, ConfigurationError> {
        validate_geometry(wall, obstacles)?;
        settings.validate()?;

        let expanded = ObstacleExpander::new(wall, settings.clearance).expand(obstacles);

        Ok(Self {
            wall: Rect::from(wall),
            obstacles: expanded,
            settings: *settings,
        })
    }

    pub fn wall(&self) -> &Rect {
        &self.wall
    }

    /// Expanded, pairwise-disjoint obstacles.
    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// A waypoint is usable when it lies on the wall and clear of every
    /// expanded obstacle. Points within floating point noise of an
    /// obstacle boundary are rejected as well.
    pub fn is_point_valid(&self, p: &Point) -> bool {
        self.wall.contains_point(p)
            && !self
                .obstacles
                .iter()
                .any(|obs| obs.contains_point_within(p, GEOMETRY_EPSILON))
    }

    /// Index of the first expanded obstacle the segment touches, if any.
    pub fn blocking_obstacle(&self, from: &Point, to: &Point) -> Option<usize> {
        let resolution = self.settings.resolution;
        self.obstacles
            .iter()
            .position(|obs| segment_intersects_rect(from, to, obs, resolution))
    }

    pub fn segment_is_clear(&self, from: &Point, to: &Point) -> bool {
        self.blocking_obstacle(from, to).is_none()
    }
}
