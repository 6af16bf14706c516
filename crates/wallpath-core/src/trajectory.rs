//! Planning results: the trajectory and coverage statistics.

use crate::data::{ObstacleSpec, Point, WallSpec};
use serde::{Deserialize, Serialize};

/// An ordered sequence of waypoints in execution order, with derived metrics.
///
/// Fields are private so a trajectory cannot drift out of sync with its
/// metrics once produced. Deserialization re-checks `point_count` and
/// `length_m` against the points and rejects records that disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredTrajectory")]
pub struct Trajectory {
    points: Vec<Point>,
    length_m: f64,
    duration_s: f64,
    point_count: usize,
}

impl Trajectory {
    /// Assemble a trajectory from waypoints and their precomputed length.
    ///
    /// `speed` must be positive; the duration is `length_m / speed`.
    pub fn from_parts(points: Vec<Point>, length_m: f64, speed: f64) -> Self {
        let point_count = points.len();
        Self {
            points,
            length_m,
            duration_s: length_m / speed,
            point_count,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Total travelled distance in meters, including transitions
    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// Estimated execution time in seconds
    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Relative tolerance when comparing a stored length with the recomputed one
const STORED_LENGTH_TOLERANCE: f64 = 1e-9;

#[derive(Deserialize)]
struct StoredTrajectory {
    points: Vec<Point>,
    length_m: f64,
    duration_s: f64,
    point_count: usize,
}

impl TryFrom<StoredTrajectory> for Trajectory {
    type Error = String;

    fn try_from(stored: StoredTrajectory) -> Result<Self, Self::Error> {
        if stored.point_count != stored.points.len() {
            return Err(format!(
                "point_count {} does not match {} stored points",
                stored.point_count,
                stored.points.len()
            ));
        }

        let length_m: f64 = stored
            .points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum();
        if (length_m - stored.length_m).abs() > STORED_LENGTH_TOLERANCE * length_m.max(1.0) {
            return Err(format!(
                "length_m {} does not match the {} m spanned by the points",
                stored.length_m, length_m
            ));
        }

        if !(stored.duration_s.is_finite() && stored.duration_s >= 0.0) {
            return Err(format!("invalid duration_s {}", stored.duration_s));
        }

        Ok(Self {
            points: stored.points,
            length_m,
            duration_s: stored.duration_s,
            point_count: stored.point_count,
        })
    }
}

/// Area accounting for a wall and its raw obstacles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    pub wall_area_m2: f64,
    pub obstacle_area_m2: f64,
    pub accessible_area_m2: f64,
    /// Accessible area as a percentage of the wall area
    pub coverage_efficiency_pct: f64,
}

impl CoverageStats {
    /// Compute area statistics from the wall and the raw (unexpanded) obstacles.
    ///
    /// Obstacle areas are summed as given, overlaps are not subtracted.
    pub fn compute(wall: &WallSpec, obstacles: &[ObstacleSpec]) -> Self {
        let wall_area_m2 = wall.area();
        let obstacle_area_m2: f64 = obstacles.iter().map(ObstacleSpec::area).sum();
        let accessible_area_m2 = (wall_area_m2 - obstacle_area_m2).max(0.0);
        let coverage_efficiency_pct = if wall_area_m2 > 0.0 {
            accessible_area_m2 / wall_area_m2 * 100.0
        } else {
            0.0
        };

        Self {
            wall_area_m2,
            obstacle_area_m2,
            accessible_area_m2,
            coverage_efficiency_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_from_parts() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let trajectory = Trajectory::from_parts(points, 1.0, 0.1);

        assert_eq!(trajectory.point_count(), 2);
        assert_eq!(trajectory.points().len(), 2);
        assert_eq!(trajectory.length_m(), 1.0);
        assert!((trajectory.duration_s() - 10.0).abs() < 1e-12);
        assert_eq!(trajectory.first(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(trajectory.last(), Some(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_coverage_stats() {
        let wall = WallSpec::new(5.0, 5.0);
        let obstacles = [ObstacleSpec::new(2.0, 2.0, 0.25, 0.25)];
        let stats = CoverageStats::compute(&wall, &obstacles);

        assert_eq!(stats.wall_area_m2, 25.0);
        assert_eq!(stats.obstacle_area_m2, 0.0625);
        assert!((stats.accessible_area_m2 - 24.9375).abs() < 1e-12);
        assert!((stats.coverage_efficiency_pct - 99.75).abs() < 1e-9);
    }

    #[test]
    fn test_coverage_stats_saturates() {
        let wall = WallSpec::new(1.0, 1.0);
        let obstacles = [
            ObstacleSpec::new(0.0, 0.0, 1.0, 1.0),
            ObstacleSpec::new(0.0, 0.0, 1.0, 1.0),
        ];
        let stats = CoverageStats::compute(&wall, &obstacles);
        assert_eq!(stats.accessible_area_m2, 0.0);
        assert_eq!(stats.coverage_efficiency_pct, 0.0);
    }
}
