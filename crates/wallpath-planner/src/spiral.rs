//! Perimeter-inward (spiral) coverage.
//!
//! The tool traces concentric rectangles, starting `spacing / 2` inside the
//! wall edge and stepping `spacing` inward per layer. Waypoints that fall
//! inside an expanded obstacle are dropped; the path builder splits the
//! layer into separate strokes wherever an obstacle sits between two kept
//! waypoints.
//!
//! When the first offset already reaches half the shorter wall side, no
//! layer is produced at all and the planning call fails for lack of free
//! area.

use crate::context::PlanningContext;
use crate::geometry::{sample_range, Rect};
use crate::path::PathBuilder;
use tracing::debug;
use wallpath_core::{PlanResult, Point};

/// One concentric rectangle of the spiral pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralLayer {
    pub index: usize,
    pub offset: f64,
    pub rect: Rect,
}

impl SpiralLayer {
    /// Waypoints along the layer perimeter.
    ///
    /// Order: top edge left to right, right edge downward, bottom edge right
    /// to left, left edge back up. Corners shared by two edges are emitted
    /// once, and the left edge stops short of the starting corner.
    pub fn perimeter(&self, resolution: f64) -> impl Iterator<Item = Point> {
        let Rect { x: x0, y: y0, .. } = self.rect;
        let x1 = self.rect.x2();
        let y1 = self.rect.y2();

        let left = sample_range(y1, y0, resolution);
        let left_len = left.len();

        sample_range(x0, x1, resolution)
            .map(move |x| Point::new(x, y0))
            .chain(
                sample_range(y0, y1, resolution)
                    .skip(1)
                    .map(move |y| Point::new(x1, y)),
            )
            .chain(
                sample_range(x1, x0, resolution)
                    .skip(1)
                    .map(move |x| Point::new(x, y1)),
            )
            .chain(
                left.take(left_len.saturating_sub(1))
                    .skip(1)
                    .map(move |y| Point::new(x0, y)),
            )
    }
}

/// Layers for a wall, innermost last.
///
/// `offset_j = spacing / 2 + j * spacing` while `offset_j < min(W, H) / 2`.
/// Generation stops at the first layer whose width or height is at most
/// `resolution`. Layers are produced on demand.
pub fn spiral_layers(
    wall: &Rect,
    spacing: f64,
    resolution: f64,
) -> impl Iterator<Item = SpiralLayer> {
    let wall = *wall;
    let limit = wall.width.min(wall.height) / 2.0;
    let half = spacing / 2.0;

    (0..)
        .map(move |index| (index, half + index as f64 * spacing))
        .take_while(move |&(_, offset)| offset < limit)
        .map(move |(index, offset)| SpiralLayer {
            index,
            offset,
            rect: Rect::from_corners(
                wall.x + offset,
                wall.y + offset,
                wall.x2() - offset,
                wall.y2() - offset,
            ),
        })
        .take_while(move |layer| layer.rect.width > resolution && layer.rect.height > resolution)
}

/// Concentric-rectangle planner working from the perimeter inward.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralPlanner;

impl SpiralPlanner {
    pub fn generate(&self, ctx: &PlanningContext, builder: &mut PathBuilder<'_>) -> PlanResult<()> {
        let settings = ctx.settings();
        let mut layer_count = 0usize;
        let mut skipped = 0usize;

        for layer in spiral_layers(ctx.wall(), settings.spacing, settings.resolution) {
            layer_count += 1;
            for point in layer.perimeter(settings.resolution) {
                if ctx.is_point_valid(&point) {
                    builder.push(point)?;
                } else {
                    skipped += 1;
                }
            }
        }

        debug!(
            "Spiral: {} layers, {} waypoints, {} blocked candidates skipped",
            layer_count,
            builder.len(),
            skipped
        );

        Ok(())
    }
}
