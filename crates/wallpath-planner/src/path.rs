//! Incremental path assembly.
//!
//! Planners append waypoints one at a time. A waypoint that cannot be
//! reached from the previous one without crossing an expanded obstacle
//! opens a new stroke; the gap between strokes is a transition the tool
//! makes off the surface. Strokes exist only inside the engine: the final
//! trajectory is the flat concatenation.

use crate::context::PlanningContext;
use crate::metrics::compress_collinear;
use wallpath_core::{PlanError, PlanResult, Point};

/// A generated path split into obstacle-free strokes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPath {
    strokes: Vec<Vec<Point>>,
}

impl RawPath {
    pub fn from_strokes(strokes: Vec<Vec<Point>>) -> Self {
        Self { strokes }
    }

    pub fn strokes(&self) -> &[Vec<Point>] {
        &self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(Vec::is_empty)
    }

    /// All waypoints in execution order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.strokes.iter().flatten()
    }

    /// Drop collinear interior waypoints within each stroke, keeping
    /// consecutive waypoints at most `max_gap` apart.
    pub fn compressed(self, tolerance: f64, max_gap: f64) -> RawPath {
        RawPath {
            strokes: self
                .strokes
                .iter()
                .map(|stroke| compress_collinear(stroke, tolerance, max_gap))
                .collect(),
        }
    }

    pub fn into_points(self) -> Vec<Point> {
        self.strokes.into_iter().flatten().collect()
    }
}

/// Builds a [`RawPath`] while enforcing the waypoint limit.
pub struct PathBuilder<'a> {
    ctx: &'a PlanningContext,
    strokes: Vec<Vec<Point>>,
    count: usize,
    limit: usize,
}

impl<'a> PathBuilder<'a> {
    pub fn new(ctx: &'a PlanningContext, limit: usize) -> Self {
        Self {
            ctx,
            strokes: Vec::new(),
            count: 0,
            limit,
        }
    }

    /// Append a waypoint, opening a new stroke if the connecting segment
    /// would cross an expanded obstacle.
    ///
    /// Fails with [`PlanError::LimitExceeded`] as soon as the waypoint
    /// count would pass the limit, so pathological settings stop early.
    pub fn push(&mut self, point: Point) -> PlanResult<()> {
        if self.count >= self.limit {
            return Err(PlanError::LimitExceeded {
                generated: self.count + 1,
                limit: self.limit,
            });
        }

        let connected = self
            .last_point()
            .is_some_and(|last| self.ctx.segment_is_clear(last, &point));

        match self.strokes.last_mut() {
            Some(stroke) if connected => stroke.push(point),
            _ => self.strokes.push(vec![point]),
        }
        self.count += 1;

        Ok(())
    }

    pub fn last_point(&self) -> Option<&Point> {
        self.strokes.last().and_then(|stroke| stroke.last())
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn finish(self) -> RawPath {
        RawPath {
            strokes: self.strokes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallpath_core::{ObstacleSpec, PlannerSettings, WallSpec};

    fn context() -> PlanningContext {
        let settings = PlannerSettings {
            clearance: 0.0,
            ..PlannerSettings::default()
        };
        PlanningContext::new(
            &WallSpec::new(5.0, 5.0),
            &[ObstacleSpec::new(2.0, 2.0, 1.0, 1.0)],
            &settings,
        )
        .unwrap()
    }

    #[test]
    fn test_connected_points_share_stroke() {
        let ctx = context();
        let mut builder = PathBuilder::new(&ctx, 100);
        builder.push(Point::new(0.0, 1.0)).unwrap();
        builder.push(Point::new(1.0, 1.0)).unwrap();
        builder.push(Point::new(5.0, 1.0)).unwrap();

        let path = builder.finish();
        assert_eq!(path.stroke_count(), 1);
        assert_eq!(path.point_count(), 3);
    }

    #[test]
    fn test_blocked_segment_starts_new_stroke() {
        let ctx = context();
        let mut builder = PathBuilder::new(&ctx, 100);
        builder.push(Point::new(1.0, 2.5)).unwrap();
        builder.push(Point::new(4.0, 2.5)).unwrap();
        builder.push(Point::new(4.5, 2.5)).unwrap();

        let path = builder.finish();
        assert_eq!(path.stroke_count(), 2);
        assert_eq!(path.strokes()[0].len(), 1);
        assert_eq!(path.strokes()[1].len(), 2);
        assert_eq!(path.into_points().len(), 3);
    }

    #[test]
    fn test_limit_is_enforced() {
        let ctx = context();
        let mut builder = PathBuilder::new(&ctx, 2);
        builder.push(Point::new(0.0, 0.0)).unwrap();
        builder.push(Point::new(0.1, 0.0)).unwrap();

        let err = builder.push(Point::new(0.2, 0.0)).unwrap_err();
        assert_eq!(
            err,
            PlanError::LimitExceeded {
                generated: 3,
                limit: 2
            }
        );
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn test_empty_path() {
        let ctx = context();
        let builder = PathBuilder::new(&ctx, 10);
        assert!(builder.is_empty());
        let path = builder.finish();
        assert!(path.is_empty());
        assert_eq!(path.points().count(), 0);
    }
}
