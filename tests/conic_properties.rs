#![allow(clippy::unwrap_used)]

mod common;

use std::f64::consts::{PI, TAU};

use approx::{assert_abs_diff_eq, assert_relative_eq, AbsDiffEq};
use geokern::geometry::{Circle, Curve, Ellipse, Plane};
use geokern::math::{Point3, Tolerance, Vector3};
use geokern::operations::PlaneIntersection;
use geokern::GeometryError;

/// Finds the parameter of a point on the circle from the frame spanned by
/// `P(0)` and `P(pi/2)`.
fn circle_parameter(c: &Circle, p: &Point3) -> f64 {
    let u = (c.evaluate(0.0) - c.center()).normalize();
    let v = (c.evaluate(PI / 2.0) - c.center()).normalize();
    let d = p - c.center();
    d.dot(&v).atan2(d.dot(&u))
}

#[test]
fn circumcircle_passes_through_its_points() {
    common::init_tracing();
    let tol = Tolerance::default();
    let triples = [
        (Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0), Point3::new(-1.0, 0.0, 0.0)),
        (Point3::new(2.0, -1.0, 3.0), Point3::new(4.5, 0.5, 1.0), Point3::new(-0.5, 2.0, 2.0)),
        (Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.1, 0.0), Point3::new(5.0, 5.0, 5.0)),
    ];
    for (p1, p2, p3) in triples {
        let c = Circle::from_three_points(p1, p2, p3, tol).unwrap();
        for p in [p1, p2, p3] {
            assert_relative_eq!((p - c.center()).norm(), c.radius(), epsilon = 1e-9);
            let t = circle_parameter(&c, &p);
            assert_relative_eq!(c.evaluate(t), p, epsilon = 1e-9);
        }
    }
}

#[test]
fn collinear_points_are_rejected() {
    common::init_tracing();
    let err = Circle::from_three_points(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(3.0, 3.0, 3.0),
        Tolerance::default(),
    )
    .unwrap_err();
    assert!(matches!(err, geokern::GeokernError::Geometry(GeometryError::DegenerateInput(_))));
}

#[test]
fn conics_are_periodic_and_restartable() {
    let circle = Circle::new(Point3::new(1.0, -2.0, 0.5), 1.5, Vector3::new(0.2, 1.0, -0.4));
    let ellipse = Ellipse::new(
        Point3::new(-3.0, 0.0, 1.0),
        Vector3::new(0.0, 4.0, 0.0),
        Vector3::new(0.0, 0.0, 1.5),
        Tolerance::default(),
    )
    .unwrap();

    for t in [-2.0, 0.0, 0.3, 1.7, 5.5] {
        assert_relative_eq!(circle.evaluate(t + TAU), circle.evaluate(t), epsilon = 1e-9);
        assert_relative_eq!(ellipse.evaluate(t + TAU), ellipse.evaluate(t), epsilon = 1e-9);
    }
    assert!(circle.is_closed() && ellipse.is_closed());

    let first: Vec<_> = ellipse.samples(12).collect();
    let second: Vec<_> = ellipse.samples(12).collect();
    assert_eq!(first, second);
}

#[test]
fn circle_plane_intersection_cases() {
    common::init_tracing();
    let tol = Tolerance::default();
    let c = Circle::new(Point3::new(0.0, 0.0, 2.0), 3.0, Vector3::z());

    // Coplanar.
    let plane = Plane::from_normal(Point3::new(7.0, 1.0, 2.0), Vector3::z()).unwrap();
    match c.intersection_with_plane(&plane, tol) {
        Some(PlaneIntersection::Coincident(found)) => assert!(found.abs_diff_eq(&c, tol)),
        other => panic!("expected Coincident, got {other:?}"),
    }

    // Parallel and offset.
    let plane = Plane::from_normal(Point3::new(0.0, 0.0, 5.0), Vector3::z()).unwrap();
    assert!(c.intersection_with_plane(&plane, tol).is_none());

    // Tangent at distance exactly R.
    let plane = Plane::from_normal(Point3::new(0.0, 3.0, 0.0), Vector3::y()).unwrap();
    match c.intersection_with_plane(&plane, tol) {
        Some(PlaneIntersection::Point(p)) => assert_relative_eq!(p, Point3::new(0.0, 3.0, 2.0), epsilon = 1e-9),
        other => panic!("expected Point, got {other:?}"),
    }

    // Closer than R.
    let plane = Plane::from_normal(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 1.0, 0.5)).unwrap();
    match c.intersection_with_plane(&plane, tol) {
        Some(PlaneIntersection::Segment(s)) => {
            let loose = Tolerance::new(1e-9).unwrap();
            for end in [s.start(), s.end()] {
                assert!(c.contains_point(&end, loose));
                assert!(plane.contains_point(&end, loose));
            }
        }
        other => panic!("expected Segment, got {other:?}"),
    }
}

#[test]
fn ellipse_equality() {
    let tol = Tolerance::default();
    let center = Point3::new(1.0, 1.0, 0.0);

    let round_a = Ellipse::new(center, Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0), tol).unwrap();
    let s = 2.0 / 2.0_f64.sqrt();
    let round_b = Ellipse::new(center, Vector3::new(s, s, 0.0), Vector3::new(-s, s, 0.0), tol).unwrap();
    assert_abs_diff_eq!(round_a, round_a, epsilon = tol);
    assert_abs_diff_eq!(round_a, round_b, epsilon = tol);
    assert_abs_diff_eq!(round_b, round_a, epsilon = tol);

    let flat_a = Ellipse::new(center, Vector3::new(3.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), tol).unwrap();
    let flat_b = Ellipse::new(center, Vector3::new(0.0, -1.0, 0.0), Vector3::new(-3.0, 0.0, 0.0), tol).unwrap();
    let flat_turned = Ellipse::new(center, Vector3::new(0.0, 3.0, 0.0), Vector3::new(1.0, 0.0, 0.0), tol).unwrap();
    assert_abs_diff_eq!(flat_a, flat_b, epsilon = tol);
    assert_abs_diff_eq!(flat_b, flat_a, epsilon = tol);
    assert!(!flat_a.abs_diff_eq(&flat_turned, tol));
    assert!(!flat_a.abs_diff_eq(&round_a, tol));
}

#[test]
fn non_orthogonal_semiaxes_are_rejected() {
    let err = Ellipse::new(
        Point3::origin(),
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
        Tolerance::default(),
    )
    .unwrap_err();
    assert!(matches!(err, geokern::GeokernError::Geometry(GeometryError::InvalidArgument(_))));
}
