//! Path metrics and optional waypoint compression.

use wallpath_core::{Point, Trajectory};

/// Sum of Euclidean distances between consecutive points, jumps included.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Wrap finished waypoints into a [`Trajectory`] with derived metrics.
pub fn build_trajectory(points: Vec<Point>, speed: f64) -> Trajectory {
    let length_m = path_length(&points);
    Trajectory::from_parts(points, length_m, speed)
}

/// Drop interior points that lie on the segment between their neighbours.
///
/// A point is dropped when its distance from the segment joining the last
/// kept point and the following point is within `tolerance`, its
/// projection falls between them, and that segment is no longer than
/// `max_gap`. The first and last points are always kept.
///
/// `max_gap` keeps coverage passes made of short steps, so consumers can
/// still tell passes from jumps by step length.
pub fn compress_collinear(points: &[Point], tolerance: f64, max_gap: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut kept = Vec::with_capacity(points.len());
    kept.push(points[0]);

    for window in points.windows(2).skip(1) {
        let (current, next) = (&window[0], &window[1]);
        let anchor = kept[kept.len() - 1];
        if anchor.distance_to(next) > max_gap || !lies_between(&anchor, current, next, tolerance) {
            kept.push(*current);
        }
    }

    kept.push(points[points.len() - 1]);
    kept
}

fn lies_between(a: &Point, p: &Point, b: &Point, tolerance: f64) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return a.distance_to(p) <= tolerance;
    }

    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }

    let cross = (p.x - a.x) * dy - (p.y - a.y) * dx;
    cross.abs() / len_sq.sqrt() <= tolerance
}
