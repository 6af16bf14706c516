//! Obstacle-free intervals along a horizontal scan line.

use crate::geometry::Rect;

/// A closed horizontal interval `[start, end]` at some scan height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeSegment {
    pub start: f64,
    pub end: f64,
}

impl FreeSegment {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Remove `[cut_start, cut_end]`, leaving up to two non-degenerate parts.
    fn subtract(&self, cut_start: f64, cut_end: f64, out: &mut Vec<FreeSegment>) {
        if cut_end < self.start || cut_start > self.end {
            out.push(*self);
            return;
        }
        if cut_start > self.start {
            out.push(FreeSegment::new(self.start, cut_start));
        }
        if cut_end < self.end {
            out.push(FreeSegment::new(cut_end, self.end));
        }
    }
}

/// Compute the free intervals of `[0, wall_width]` at height `y`.
///
/// Every obstacle whose closed vertical extent contains `y` has its
/// horizontal extent subtracted. Segment endpoints touch the obstacles
/// they border, so the endpoints themselves are blocked positions.
/// The result is ordered left to right.
pub fn free_segments(y: f64, wall_width: f64, obstacles: &[Rect]) -> Vec<FreeSegment> {
    let mut segments = vec![FreeSegment::new(0.0, wall_width)];
    let mut next = Vec::with_capacity(2);

    for obs in obstacles.iter().filter(|o| o.spans_y(y)) {
        next.clear();
        for segment in &segments {
            segment.subtract(obs.x, obs.x2(), &mut next);
        }
        std::mem::swap(&mut segments, &mut next);
        if segments.is_empty() {
            break;
        }
    }

    segments.sort_by(|a, b| a.start.total_cmp(&b.start));
    segments
}
