use phikit_geometry::{bezier_point_at, bezier_tangent_at, tangent_angle, BezierSegment, Point2D};
use proptest::prelude::*;
use std::f64::consts::FRAC_PI_2;

fn arch() -> [Point2D; 4] {
    [
        Point2D::new(0.0, 0.0),
        Point2D::new(10.0, 30.0),
        Point2D::new(40.0, 30.0),
        Point2D::new(50.0, 0.0),
    ]
}

#[test]
fn test_endpoints_are_interpolated() {
    let [p0, p1, p2, p3] = arch();
    assert_eq!(bezier_point_at(p0, p1, p2, p3, 0.0).unwrap(), p0);
    assert_eq!(bezier_point_at(p0, p1, p2, p3, 1.0).unwrap(), p3);
}

#[test]
fn test_endpoint_tangents_follow_control_legs() {
    let [p0, p1, p2, p3] = arch();
    assert_eq!(bezier_tangent_at(p0, p1, p2, p3, 0.0).unwrap(), (p1 - p0) * 3.0);
    assert_eq!(bezier_tangent_at(p0, p1, p2, p3, 1.0).unwrap(), (p3 - p2) * 3.0);
}

#[test]
fn test_symmetric_arch_peaks_horizontally() {
    let [p0, p1, p2, p3] = arch();
    let mid = bezier_point_at(p0, p1, p2, p3, 0.5).unwrap();
    assert!(mid.approx_eq(&Point2D::new(25.0, 22.5), 1e-12));

    let tangent = bezier_tangent_at(p0, p1, p2, p3, 0.5).unwrap();
    assert!(tangent.y.abs() < 1e-12);
    assert!(tangent_angle(tangent).abs() < 1e-12);
}

#[test]
fn test_straight_segment_has_constant_direction() {
    let segment = BezierSegment::new(
        Point2D::new(0.0, 0.0),
        Point2D::new(0.0, 1.0),
        Point2D::new(0.0, 2.0),
        Point2D::new(0.0, 3.0),
    );
    for i in 0..=8 {
        let t = i as f64 / 8.0;
        assert!((segment.angle_at(t).unwrap() - FRAC_PI_2).abs() < 1e-12);
        assert!((segment.point_at(t).unwrap().y - 3.0 * t).abs() < 1e-12);
    }
}

#[test]
fn test_parameter_outside_unit_interval_is_rejected() {
    let [p0, p1, p2, p3] = arch();
    for t in [-0.001, 1.001, -5.0, f64::NAN, f64::INFINITY] {
        let err = bezier_point_at(p0, p1, p2, p3, t).unwrap_err();
        assert!(err.is_invalid_parameter(), "t = {} accepted", t);
        assert!(bezier_tangent_at(p0, p1, p2, p3, t).is_err());
    }
}

#[test]
fn test_mirrored_curve_reflects_points() {
    let [p0, p1, p2, p3] = arch();
    let segment = BezierSegment::new(p0, p1, p2, p3);
    let mirrored = segment.mirrored_x(25.0);
    for i in 0..=4 {
        let t = i as f64 / 4.0;
        let expected = segment.point_at(t).unwrap().reflect_x(25.0);
        assert!(mirrored.point_at(t).unwrap().approx_eq(&expected, 1e-9));
    }
}

fn point() -> impl Strategy<Value = Point2D> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Point2D::new(x, y))
}

proptest! {
    #[test]
    fn prop_curve_stays_in_control_hull_box(
        p0 in point(),
        p1 in point(),
        p2 in point(),
        p3 in point(),
        t in 0.0..=1.0f64,
    ) {
        let p = bezier_point_at(p0, p1, p2, p3, t).unwrap();
        let xs = [p0.x, p1.x, p2.x, p3.x];
        let ys = [p0.y, p1.y, p2.y, p3.y];
        let min_x = xs.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min_y = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(p.x >= min_x - 1e-9 && p.x <= max_x + 1e-9);
        prop_assert!(p.y >= min_y - 1e-9 && p.y <= max_y + 1e-9);
    }

    #[test]
    fn prop_reversed_curve_runs_backwards(
        p0 in point(),
        p1 in point(),
        p2 in point(),
        p3 in point(),
        t in 0.0..=1.0f64,
    ) {
        let segment = BezierSegment::new(p0, p1, p2, p3);
        let forward = segment.point_at(t).unwrap();
        let backward = segment.reversed().point_at(1.0 - t).unwrap();
        prop_assert!(forward.approx_eq(&backward, 1e-6));
    }
}
