//! Row-scan (boustrophedon) coverage.
//!
//! Rows are horizontal scan lines `spacing / 2` apart from the wall edges
//! and `spacing` apart from each other. Each row is split into free
//! segments, and the scan direction alternates with the row index so the
//! tool sweeps back and forth.

use crate::context::PlanningContext;
use crate::free_segments::{free_segments, FreeSegment};
use crate::geometry::sample_range;
use crate::path::PathBuilder;
use tracing::debug;
use wallpath_core::{PlanResult, Point};

/// Horizontal scan direction of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    LeftToRight,
    RightToLeft,
}

impl ScanDirection {
    /// Direction for row `index`; even rows scan left to right.
    pub fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            Self::LeftToRight
        } else {
            Self::RightToLeft
        }
    }
}

/// One scan line of the row-scan pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowScan {
    pub index: usize,
    pub y: f64,
    pub direction: ScanDirection,
}

/// Rows covering a wall of the given height.
///
/// `y_k = spacing / 2 + k * spacing` for every `k` with `y_k < height`.
/// Rows are produced on demand.
pub fn row_scans(height: f64, spacing: f64) -> impl Iterator<Item = RowScan> {
    let half = spacing / 2.0;
    (0..)
        .map(move |index| RowScan {
            index,
            y: half + index as f64 * spacing,
            direction: ScanDirection::for_row(index),
        })
        .take_while(move |row| row.y < height)
}

/// Serpentine row-by-row planner.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZigzagPlanner;

impl ZigzagPlanner {
    pub fn generate(&self, ctx: &PlanningContext, builder: &mut PathBuilder<'_>) -> PlanResult<()> {
        let wall = ctx.wall();
        let settings = ctx.settings();
        let mut row_count = 0usize;
        let mut empty_rows = 0usize;

        for row in row_scans(wall.height, settings.spacing) {
            row_count += 1;
            let segments = free_segments(row.y, wall.width, ctx.obstacles());
            if segments.is_empty() {
                empty_rows += 1;
                continue;
            }
            self.scan_row(ctx, &row, &segments, builder)?;
        }

        debug!(
            "Zigzag: {} rows, {} fully blocked, {} waypoints",
            row_count,
            empty_rows,
            builder.len()
        );

        Ok(())
    }

    fn scan_row(
        &self,
        ctx: &PlanningContext,
        row: &RowScan,
        segments: &[FreeSegment],
        builder: &mut PathBuilder<'_>,
    ) -> PlanResult<()> {
        let resolution = ctx.settings().resolution;

        let mut ordered: Vec<&FreeSegment> = segments.iter().collect();
        if row.direction == ScanDirection::RightToLeft {
            ordered.reverse();
        }

        for segment in ordered {
            let (from, to) = match row.direction {
                ScanDirection::LeftToRight => (segment.start, segment.end),
                ScanDirection::RightToLeft => (segment.end, segment.start),
            };

            for x in sample_range(from, to, resolution) {
                let point = Point::new(x, row.y);
                if ctx.is_point_valid(&point) {
                    builder.push(point)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallpath_core::{ObstacleSpec, PlannerSettings, WallSpec};

    #[test]
    fn test_row_coordinates() {
        let rows: Vec<RowScan> = row_scans(5.0, 0.2).collect();
        assert_eq!(rows.len(), 25);
        assert!((rows[0].y - 0.1).abs() < 1e-12);
        assert!((rows[24].y - 4.9).abs() < 1e-9);
        for (k, row) in rows.iter().enumerate() {
            assert_eq!(row.index, k);
            assert_eq!(row.y, 0.1 + k as f64 * 0.2);
        }
    }

    #[test]
    fn test_direction_alternates() {
        let rows: Vec<RowScan> = row_scans(1.0, 0.1).take(3).collect();
        assert_eq!(rows[0].direction, ScanDirection::LeftToRight);
        assert_eq!(rows[1].direction, ScanDirection::RightToLeft);
        assert_eq!(rows[2].direction, ScanDirection::LeftToRight);
    }

    #[test]
    fn test_spacing_larger_than_height() {
        assert_eq!(row_scans(0.6, 1.0).count(), 1);
        assert_eq!(row_scans(0.5, 1.0).count(), 0);
    }

    #[test]
    fn test_generate_around_obstacle() {
        let settings = PlannerSettings {
            spacing: 0.5,
            resolution: 0.1,
            clearance: 0.0,
            ..PlannerSettings::default()
        };
        let ctx = PlanningContext::new(
            &WallSpec::new(2.0, 1.0),
            &[ObstacleSpec::new(0.8, 0.0, 0.4, 1.0)],
            &settings,
        )
        .unwrap();

        let mut builder = PathBuilder::new(&ctx, 1000);
        ZigzagPlanner.generate(&ctx, &mut builder).unwrap();
        let path = builder.finish();

        // The right halves of both rows join at the wall edge
        assert_eq!(path.stroke_count(), 3);
        let points = path.into_points();
        assert!(points.iter().all(|p| ctx.is_point_valid(p)));
        assert_eq!(points[0], Point::new(0.0, 0.25));
        assert_eq!(points.last().map(|p| p.x), Some(0.0));
    }
}
