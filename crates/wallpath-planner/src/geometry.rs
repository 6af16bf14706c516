//! Geometry primitives for axis-aligned rectangles.
//!
//! All containment and intersection tests are closed: a point on a
//! rectangle's boundary counts as inside, so boundaries are treated as
//! blocked.

use wallpath_core::constants::GEOMETRY_EPSILON;
use wallpath_core::{ObstacleSpec, Point, WallSpec};

/// Minimum number of samples used for non-axis-aligned segment checks.
pub const MIN_SEGMENT_SAMPLES: usize = 10;

/// Axis-aligned rectangle anchored at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its minimum and maximum corners.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    pub fn x2(&self) -> f64 {
        self.x + self.width
    }

    pub fn y2(&self) -> f64 {
        self.y + self.height
    }

    /// Closed containment test.
    pub fn contains_point(&self, p: &Point) -> bool {
        self.x <= p.x && p.x <= self.x2() && self.y <= p.y && p.y <= self.y2()
    }

    /// Containment test against this rectangle grown by `margin` on all sides.
    pub fn contains_point_within(&self, p: &Point, margin: f64) -> bool {
        self.x - margin <= p.x
            && p.x <= self.x2() + margin
            && self.y - margin <= p.y
            && p.y <= self.y2() + margin
    }

    /// Closed overlap test; rectangles that only touch intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x2() < other.x || self.x > other.x2() || self.y2() < other.y || self.y > other.y2())
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(
            self.x.min(other.x),
            self.y.min(other.y),
            self.x2().max(other.x2()),
            self.y2().max(other.y2()),
        )
    }

    /// Whether the closed vertical extent contains `y`.
    pub fn spans_y(&self, y: f64) -> bool {
        self.y <= y && y <= self.y2()
    }

    fn intersects_horizontal(&self, x1: f64, x2: f64, y: f64) -> bool {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        self.spans_y(y) && !(hi < self.x || lo > self.x2())
    }

    fn intersects_vertical(&self, x: f64, y1: f64, y2: f64) -> bool {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        self.x <= x && x <= self.x2() && !(hi < self.y || lo > self.y2())
    }
}

impl From<&WallSpec> for Rect {
    fn from(wall: &WallSpec) -> Self {
        Rect::new(0.0, 0.0, wall.width, wall.height)
    }
}

impl From<&ObstacleSpec> for Rect {
    fn from(obstacle: &ObstacleSpec) -> Self {
        Rect::new(obstacle.x, obstacle.y, obstacle.width, obstacle.height)
    }
}

/// True iff `p` lies in the closed rectangle `r`.
pub fn point_in_rect(p: &Point, r: &Rect) -> bool {
    r.contains_point(p)
}

/// Check whether the segment `p1 -> p2` touches the closed rectangle `r`.
///
/// Horizontal and vertical segments use an exact interval-overlap test.
/// Any other segment is sampled at `max(10, floor(length / resolution))`
/// evenly spaced parameters (both endpoints included), so a rectangle
/// thinner than `resolution` can slip between two samples. Keep
/// `resolution` below the smallest expanded obstacle dimension for the
/// diagonal check to be reliable.
pub fn segment_intersects_rect(p1: &Point, p2: &Point, r: &Rect, resolution: f64) -> bool {
    if (p1.y - p2.y).abs() < GEOMETRY_EPSILON {
        return r.intersects_horizontal(p1.x, p2.x, p1.y);
    }
    if (p1.x - p2.x).abs() < GEOMETRY_EPSILON {
        return r.intersects_vertical(p1.x, p1.y, p2.y);
    }

    let samples = sample_count(p1.distance_to(p2), resolution);
    (0..=samples).any(|i| {
        let t = i as f64 / samples as f64;
        let p = Point::new(p1.x + t * (p2.x - p1.x), p1.y + t * (p2.y - p1.y));
        r.contains_point(&p)
    })
}

fn sample_count(length: f64, resolution: f64) -> usize {
    if resolution > 0.0 && length.is_finite() {
        ((length / resolution).floor() as usize).max(MIN_SEGMENT_SAMPLES)
    } else {
        MIN_SEGMENT_SAMPLES
    }
}

/// Coordinates from `from` to `to` (either direction) at `step` increments.
///
/// Both ends are always included, the final interval may be shorter than
/// `step`. Values are computed by multiplication so long runs do not
/// accumulate rounding drift. The sequence is lazy, so a tiny `step` costs
/// nothing until values are pulled.
pub fn sample_range(from: f64, to: f64, step: f64) -> SampleRange {
    let span = to - from;
    let steps = (span.abs() / step + GEOMETRY_EPSILON).floor() as usize;

    let mut range = SampleRange {
        from,
        to,
        step,
        forward: span >= 0.0,
        steps,
        next: 0,
        len: steps.saturating_add(1),
    };
    if (to - range.value_at(steps)).abs() > GEOMETRY_EPSILON {
        range.len = range.len.saturating_add(1);
    }
    range
}

/// Lazy sequence returned by [`sample_range`].
#[derive(Debug, Clone)]
pub struct SampleRange {
    from: f64,
    to: f64,
    step: f64,
    forward: bool,
    steps: usize,
    next: usize,
    len: usize,
}

impl SampleRange {
    fn value_at(&self, i: usize) -> f64 {
        if i > self.steps {
            return self.to;
        }
        let offset = self.step * i as f64;
        if self.forward {
            (self.from + offset).min(self.to)
        } else {
            (self.from - offset).max(self.to)
        }
    }
}

impl Iterator for SampleRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.len {
            return None;
        }
        let value = self.value_at(self.next);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleRange {}
