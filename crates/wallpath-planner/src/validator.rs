//! Post-generation safety checks.
//!
//! The planners only emit waypoints that already passed validation, so
//! nothing here should ever fail. A failure means a planner defect and is
//! reported as an [`InvariantViolation`].

use crate::context::PlanningContext;
use crate::geometry::{point_in_rect, segment_intersects_rect};
use crate::path::RawPath;
use wallpath_core::InvariantViolation;

/// Re-verifies a generated path against the expanded obstacles and wall.
pub struct PathValidator<'a> {
    ctx: &'a PlanningContext,
    max_points: usize,
}

impl<'a> PathValidator<'a> {
    pub fn new(ctx: &'a PlanningContext, max_points: usize) -> Self {
        Self { ctx, max_points }
    }

    /// Run all three passes. The first violation found is returned.
    pub fn validate(&self, path: &RawPath) -> Result<(), InvariantViolation> {
        self.check_aggregate(path)?;
        self.check_points(path)?;
        self.check_segments(path)
    }

    /// Non-empty, finite, and within the point limit.
    pub fn check_aggregate(&self, path: &RawPath) -> Result<(), InvariantViolation> {
        if path.is_empty() {
            return Err(InvariantViolation::EmptyPath);
        }

        let count = path.point_count();
        if count > self.max_points {
            return Err(InvariantViolation::PointCountExceeded {
                count,
                limit: self.max_points,
            });
        }

        match path.points().position(|p| !p.is_finite()) {
            Some(index) => Err(InvariantViolation::NonFinitePoint { index }),
            None => Ok(()),
        }
    }

    /// Every waypoint is on the wall and outside every expanded obstacle.
    pub fn check_points(&self, path: &RawPath) -> Result<(), InvariantViolation> {
        let wall = self.ctx.wall();

        for (index, point) in path.points().enumerate() {
            if !point_in_rect(point, wall) {
                return Err(InvariantViolation::PointOutsideWall {
                    index,
                    point: *point,
                });
            }

            if let Some(obstacle) = self
                .ctx
                .obstacles()
                .iter()
                .position(|obs| point_in_rect(point, obs))
            {
                return Err(InvariantViolation::PointInsideObstacle {
                    index,
                    point: *point,
                    obstacle,
                });
            }
        }

        Ok(())
    }

    /// No segment inside a stroke touches an expanded obstacle.
    ///
    /// Jumps between strokes are transitions and are not checked.
    pub fn check_segments(&self, path: &RawPath) -> Result<(), InvariantViolation> {
        let resolution = self.ctx.settings().resolution;
        let mut base = 0;

        for stroke in path.strokes() {
            for (offset, pair) in stroke.windows(2).enumerate() {
                let (from, to) = (&pair[0], &pair[1]);
                if let Some(obstacle) = self
                    .ctx
                    .obstacles()
                    .iter()
                    .position(|obs| segment_intersects_rect(from, to, obs, resolution))
                {
                    return Err(InvariantViolation::SegmentCrossesObstacle {
                        index: base + offset,
                        from: *from,
                        to: *to,
                        obstacle,
                    });
                }
            }
            base += stroke.len();
        }

        Ok(())
    }
}
