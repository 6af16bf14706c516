//! Obstacle validation and clearance expansion.
//!
//! Raw obstacles are checked against the wall, inflated by the clearance,
//! clamped to the wall, and finally merged until no two expanded
//! rectangles touch. Merging uses the bounding box of the pair, which may
//! block some free space around L-shaped arrangements but never reports
//! less blocked area than the true union.

use crate::geometry::Rect;
use tracing::debug;
use wallpath_core::constants::GEOMETRY_EPSILON;
use wallpath_core::{ConfigurationError, ObstacleSpec, WallSpec};

/// Validate wall dimensions and that every obstacle fits inside the wall.
pub fn validate_geometry(
    wall: &WallSpec,
    obstacles: &[ObstacleSpec],
) -> Result<(), ConfigurationError> {
    if !(wall.width.is_finite() && wall.height.is_finite() && wall.width > 0.0 && wall.height > 0.0)
    {
        return Err(ConfigurationError::InvalidWall {
            width: wall.width,
            height: wall.height,
        });
    }

    for (index, obs) in obstacles.iter().enumerate() {
        validate_obstacle(index, obs, wall)?;
    }

    Ok(())
}

fn validate_obstacle(
    index: usize,
    obs: &ObstacleSpec,
    wall: &WallSpec,
) -> Result<(), ConfigurationError> {
    if !(obs.width.is_finite() && obs.height.is_finite() && obs.width > 0.0 && obs.height > 0.0) {
        return Err(ConfigurationError::InvalidObstacle {
            index,
            width: obs.width,
            height: obs.height,
        });
    }

    if obs.width > wall.width || obs.height > wall.height {
        return Err(ConfigurationError::ObstacleLargerThanWall {
            index,
            width: obs.width,
            height: obs.height,
            wall_width: wall.width,
            wall_height: wall.height,
        });
    }

    if !(obs.x.is_finite() && obs.y.is_finite()) || obs.x < 0.0 || obs.y < 0.0 {
        return Err(ConfigurationError::ObstacleOutOfBounds {
            index,
            reason: format!("position ({}, {}) must be non-negative", obs.x, obs.y),
        });
    }

    if obs.x + obs.width > wall.width + GEOMETRY_EPSILON {
        return Err(ConfigurationError::ObstacleOutOfBounds {
            index,
            reason: format!(
                "x + width = {} exceeds wall width {}",
                obs.x + obs.width,
                wall.width
            ),
        });
    }

    if obs.y + obs.height > wall.height + GEOMETRY_EPSILON {
        return Err(ConfigurationError::ObstacleOutOfBounds {
            index,
            reason: format!(
                "y + height = {} exceeds wall height {}",
                obs.y + obs.height,
                wall.height
            ),
        });
    }

    Ok(())
}

/// Grows obstacles by a clearance margin inside a wall.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleExpander {
    wall: Rect,
    clearance: f64,
}

impl ObstacleExpander {
    pub fn new(wall: &WallSpec, clearance: f64) -> Self {
        Self {
            wall: Rect::from(wall),
            clearance,
        }
    }

    /// Inflate one obstacle by the clearance and clamp it to the wall.
    pub fn inflate(&self, obstacle: &ObstacleSpec) -> Rect {
        let c = self.clearance;
        Rect::from_corners(
            (obstacle.x - c).max(self.wall.x),
            (obstacle.y - c).max(self.wall.y),
            (obstacle.x + obstacle.width + c).min(self.wall.x2()),
            (obstacle.y + obstacle.height + c).min(self.wall.y2()),
        )
    }

    /// Inflate every obstacle and merge the results into disjoint regions.
    pub fn expand(&self, obstacles: &[ObstacleSpec]) -> Vec<Rect> {
        let inflated: Vec<Rect> = obstacles.iter().map(|o| self.inflate(o)).collect();
        let merged = merge_overlapping(inflated);

        if merged.len() != obstacles.len() {
            debug!(
                "Merged {} expanded obstacles into {} disjoint regions",
                obstacles.len(),
                merged.len()
            );
        }

        merged
    }
}

/// Repeatedly replace any two touching rectangles with their bounding box
/// until the set is pairwise disjoint. Order of first appearance is kept.
pub fn merge_overlapping(mut rects: Vec<Rect>) -> Vec<Rect> {
    while let Some((i, j)) = find_overlapping_pair(&rects) {
        let other = rects.remove(j);
        rects[i] = rects[i].union(&other);
    }
    rects
}

fn find_overlapping_pair(rects: &[Rect]) -> Option<(usize, usize)> {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].intersects(&rects[j]) {
                return Some((i, j));
            }
        }
    }
    None
}
