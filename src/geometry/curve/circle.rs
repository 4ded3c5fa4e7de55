use std::f64::consts::{PI, TAU};
use std::fmt;

use approx::AbsDiffEq;
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::surface::Plane;
use crate::math::vector::{is_parallel, orthogonal_vector};
use crate::math::{format, LocalFrame, Point3, Tolerance, Vector3};
use crate::operations::intersect::{circle_plane, PlaneIntersection};

use super::{Curve, CurveDomain, Ellipse};

/// A full circle in 3D space.
///
/// Defined by a center, a radius and the normal of its supporting plane.
/// The normal is kept exactly as supplied; only its direction matters, so
/// callers that need a unit normal should normalize it themselves.
///
/// `P(t) = center + radius * cos(t) * u + radius * sin(t) * v`
/// where `u` is a fixed unit vector in the circle plane and
/// `v = unit(normal) x u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point3,
    radius: f64,
    normal: Vector3,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the circle
    /// * `radius` - Radius (non-negative, zero is allowed)
    /// * `normal` - Normal vector of the circle plane (must be non-zero)
    #[must_use]
    pub fn new(center: Point3, radius: f64, normal: Vector3) -> Self {
        debug_assert!(radius >= 0.0, "circle radius must be non-negative");
        Self {
            center,
            radius,
            normal,
        }
    }

    /// Creates the circle passing through three points.
    ///
    /// The normal is `(p2 - p1) x (p3 - p1)`, not normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateInput`] if the points are collinear
    /// (or coincide), since no unique circle passes through them.
    pub fn from_three_points(p1: Point3, p2: Point3, p3: Point3, tol: Tolerance) -> Result<Self> {
        let chord1 = p2 - p1;
        let chord2 = p3 - p1;
        let normal = chord1.cross(&chord2);
        if tol.is_zero(normal.norm()) {
            debug!(?p1, ?p2, ?p3, "rejecting collinear points for circumcircle");
            return Err(GeometryError::DegenerateInput(
                "points are collinear, no unique circle".into(),
            )
            .into());
        }

        // All three points lie in the frame's xy-plane.
        let frame = LocalFrame::new(p1, chord1, chord2, tol)?;
        let (x1, y1) = (0.0, 0.0);
        let b = frame.point_to_local(&p2);
        let c = frame.point_to_local(&p3);
        let (x2, y2) = (b.x, b.y);
        let (x3, y3) = (c.x, c.y);

        let d1 = x1 * x1 + y1 * y1;
        let d2 = x2 * x2 + y2 * y2;
        let d3 = x3 * x3 + y3 * y3;
        let f = 2.0 * (x1 * (y2 - y3) - y1 * (x2 - x3) + x2 * y3 - x3 * y2);
        let cx = (d1 * (y2 - y3) + d2 * (y3 - y1) + d3 * (y1 - y2)) / f;
        let cy = (d1 * (x3 - x2) + d2 * (x1 - x3) + d3 * (x2 - x1)) / f;

        let center = Point3::new(cx, cy, 0.0);
        let radius = (center - Point3::new(x1, y1, 0.0)).norm();

        Ok(Self {
            center: frame.point_to_global(&center),
            radius,
            normal,
        })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector as it was supplied.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Returns a copy with the center replaced.
    #[must_use]
    pub fn with_center(&self, center: Point3) -> Self {
        Self { center, ..*self }
    }

    /// Returns a copy with the radius replaced.
    #[must_use]
    pub fn with_radius(&self, radius: f64) -> Self {
        Self { radius, ..*self }
    }

    /// Returns a copy with the normal replaced.
    #[must_use]
    pub fn with_normal(&self, normal: Vector3) -> Self {
        Self { normal, ..*self }
    }

    /// Returns the enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Returns the circumference.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    /// Returns the supporting plane of the circle.
    #[must_use]
    pub fn plane(&self) -> Plane {
        Plane::through(self.center, self.normal.normalize())
    }

    /// Orthonormal in-plane basis `(u, v)` used by the parametrization.
    pub(crate) fn basis(&self) -> (Vector3, Vector3) {
        let n = self.normal.normalize();
        let u = orthogonal_vector(&n);
        (u, n.cross(&u))
    }

    /// Returns whether the point lies on the circle within tolerance.
    #[must_use]
    pub fn contains_point(&self, point: &Point3, tol: Tolerance) -> bool {
        self.plane().contains_point(point, tol) && tol.scalars_eq((point - self.center).norm(), self.radius)
    }

    /// Returns the circle as an ellipse with two equal semiaxes.
    #[must_use]
    pub fn to_ellipse(&self) -> Ellipse {
        let (u, v) = self.basis();
        Ellipse::from_axes(self.center, u * self.radius, v * self.radius)
    }

    /// Orthogonal projection of the circle onto a plane.
    ///
    /// The projection of a circle onto an oblique plane is an ellipse.
    #[must_use]
    pub fn projection_to(&self, plane: &Plane) -> Ellipse {
        self.to_ellipse().projection_to(plane)
    }

    /// Intersects the circle with a plane.
    ///
    /// Returns the circle itself when it lies in the plane, a point when the
    /// plane touches it, a segment (chord) when the plane cuts it, and
    /// `None` otherwise.
    #[must_use]
    pub fn intersection_with_plane(&self, plane: &Plane, tol: Tolerance) -> Option<PlaneIntersection<Circle>> {
        circle_plane::intersect(self, plane, tol)
    }

    /// Renders the circle with coordinates expressed in `frame`.
    #[must_use]
    pub fn describe_in(&self, frame: &LocalFrame) -> String {
        format!(
            "Circle:\n  Center: {}\n  Radius: {:>12}\n  Normal: {}\n",
            format::point(&frame.point_to_local(&self.center)),
            format::significant(self.radius, 5),
            format::vector(&frame.vector_to_local(&self.normal)),
        )
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Point3 {
        let (u, v) = self.basis();
        self.center + u * (self.radius * t.cos()) + v * (self.radius * t.sin())
    }

    fn tangent(&self, t: f64) -> Vector3 {
        let (u, v) = self.basis();
        u * (-self.radius * t.sin()) + v * (self.radius * t.cos())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// Circles are equal when centers and radii match and the normals are
/// parallel; the sign and length of the normal carry no identity.
impl AbsDiffEq for Circle {
    type Epsilon = Tolerance;

    fn default_epsilon() -> Tolerance {
        Tolerance::default()
    }

    fn abs_diff_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.points_eq(&self.center, &other.center)
            && tol.scalars_eq(self.radius, other.radius)
            && is_parallel(&self.normal, &other.normal, tol)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe_in(&LocalFrame::global()))
    }
}
