use wallpath_core::{CoveragePattern, ObstacleSpec, PlannerSettings, Point, WallSpec};
use wallpath_planner::{
    row_scans, spiral_layers, CoverageEngine, CoveragePlanner, PlanningContext, Rect,
    ScanDirection,
};

fn settings(pattern: CoveragePattern) -> PlannerSettings {
    PlannerSettings {
        pattern,
        spacing: 0.2,
        resolution: 0.05,
        clearance: 0.0,
        ..PlannerSettings::default()
    }
}

#[test]
fn test_blocked_row_still_flips_direction() {
    let wall = WallSpec::new(2.0, 1.0);
    // Full-width band covering row 1 (y = 0.3) only
    let obstacles = [ObstacleSpec::new(0.0, 0.25, 2.0, 0.1)];

    let trajectory = CoverageEngine::default()
        .plan(&wall, &obstacles, &settings(CoveragePattern::Zigzag))
        .unwrap();
    let points = trajectory.points();

    let first_at = |y: f64| points.iter().find(|p| (p.y - y).abs() < 1e-9).copied();

    assert_eq!(first_at(0.1).map(|p| p.x), Some(0.0));
    assert_eq!(first_at(0.3), None);
    assert_eq!(first_at(0.5).map(|p| p.x), Some(0.0));
    assert_eq!(first_at(0.7).map(|p| p.x), Some(2.0));
    assert_eq!(first_at(0.9).map(|p| p.x), Some(0.0));
}

#[test]
fn test_row_directions_follow_parity() {
    for row in row_scans(3.0, 0.15) {
        let expected = if row.index % 2 == 0 {
            ScanDirection::LeftToRight
        } else {
            ScanDirection::RightToLeft
        };
        assert_eq!(row.direction, expected);
    }
}

#[test]
fn test_zigzag_row_with_obstacle_reverses_segments() {
    let wall = WallSpec::new(3.0, 0.4);
    let obstacles = [ObstacleSpec::new(1.0, 0.0, 0.5, 0.4)];

    let trajectory = CoverageEngine::default()
        .plan(&wall, &obstacles, &settings(CoveragePattern::Zigzag))
        .unwrap();
    let points = trajectory.points();

    // Row 0 left to right, row 1 right to left starting at the far wall edge
    assert_eq!(points[0], Point::new(0.0, 0.1));
    let row1: Vec<&Point> = points.iter().filter(|p| (p.y - 0.3).abs() < 1e-9).collect();
    assert_eq!(row1[0].x, 3.0);
    assert_eq!(row1[row1.len() - 1].x, 0.0);
    assert!(row1.windows(2).all(|w| w[1].x < w[0].x));
}

#[test]
fn test_spiral_starts_on_outer_layer() {
    let wall = WallSpec::new(2.0, 1.0);
    let trajectory = CoverageEngine::default()
        .plan(&wall, &[], &settings(CoveragePattern::Spiral))
        .unwrap();

    let layers: Vec<_> = spiral_layers(&Rect::from(&wall), 0.2, 0.05).collect();
    assert_eq!(layers.len(), 2);
    assert_eq!(trajectory.first(), Some(&Point::new(0.1, 0.1)));

    let on_some_layer = |p: &Point| {
        layers.iter().any(|layer| {
            let r = &layer.rect;
            let on_x_edge = (p.x - r.x).abs() < 1e-9 || (p.x - r.x2()).abs() < 1e-9;
            let on_y_edge = (p.y - r.y).abs() < 1e-9 || (p.y - r.y2()).abs() < 1e-9;
            r.contains_point(p) && (on_x_edge || on_y_edge)
        })
    };
    assert!(trajectory.points().iter().all(on_some_layer));

    let per_layer: usize = layers.iter().map(|l| l.perimeter(0.05).count()).sum();
    assert_eq!(trajectory.point_count(), per_layer);
}

#[test]
fn test_spiral_offsets_increase_by_spacing() {
    let layers: Vec<_> = spiral_layers(&Rect::new(0.0, 0.0, 4.0, 3.0), 0.3, 0.01).collect();
    assert!(!layers.is_empty());
    for pair in layers.windows(2) {
        assert!((pair[1].offset - pair[0].offset - 0.3).abs() < 1e-9);
    }
    let innermost = layers[layers.len() - 1];
    assert!(innermost.offset < 1.5);
    assert!(innermost.rect.height > 0.01);
}

#[test]
fn test_spiral_avoids_expanded_obstacle() {
    let plan_settings = PlannerSettings {
        clearance: 0.05,
        ..settings(CoveragePattern::Spiral)
    };
    let wall = WallSpec::new(2.0, 2.0);
    let obstacles = [ObstacleSpec::new(0.0, 0.8, 0.4, 0.4)];

    let ctx = PlanningContext::new(&wall, &obstacles, &plan_settings).unwrap();
    let trajectory = CoverageEngine::default()
        .plan(&wall, &obstacles, &plan_settings)
        .unwrap();

    assert!(trajectory.points().iter().all(|p| ctx.is_point_valid(p)));
    assert!(!trajectory
        .points()
        .iter()
        .any(|p| p.x <= 0.45 && p.y >= 0.75 && p.y <= 1.25));
}
