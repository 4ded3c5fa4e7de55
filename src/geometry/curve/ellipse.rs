use std::f64::consts::{PI, TAU};
use std::fmt;

use approx::AbsDiffEq;

use crate::error::{GeometryError, Result};
use crate::geometry::surface::Plane;
use crate::math::vector::is_parallel;
use crate::math::{format, LocalFrame, Point3, Tolerance, Vector3};
use crate::operations::intersect::{ellipse_plane, PlaneIntersection};
use crate::operations::project::project_ellipse;

use super::{Circle, Curve, CurveDomain};

/// A full ellipse in 3D space.
///
/// Defined by a center and two orthogonal semiaxis vectors. The longer one
/// is always stored as the major semiaxis `v1`, the shorter as `v2`.
///
/// `P(t) = center + v1 * cos(t) + v2 * sin(t)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point3,
    v1: Vector3,
    v2: Vector3,
}

impl Ellipse {
    /// Creates a new ellipse from its center and two semiaxis vectors.
    ///
    /// The semiaxes may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns an error if a semiaxis is zero-length or the semiaxes are not
    /// orthogonal within tolerance.
    pub fn new(center: Point3, v1: Vector3, v2: Vector3, tol: Tolerance) -> Result<Self> {
        let (l1, l2) = (v1.norm(), v2.norm());
        if tol.is_zero(l1) || tol.is_zero(l2) {
            return Err(GeometryError::ZeroVector.into());
        }
        if !tol.is_zero(v1.dot(&v2) / (l1 * l2)) {
            return Err(GeometryError::InvalidArgument("semiaxes not orthogonal".into()).into());
        }
        Ok(Self::from_axes(center, v1, v2))
    }

    /// Builds an ellipse from semiaxes already known to be orthogonal,
    /// ordering them major first.
    pub(crate) fn from_axes(center: Point3, v1: Vector3, v2: Vector3) -> Self {
        if v2.norm_squared() > v1.norm_squared() {
            Self { center, v1: v2, v2: v1 }
        } else {
            Self { center, v1, v2 }
        }
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Returns the major semiaxis vector.
    #[must_use]
    pub fn major_semiaxis(&self) -> Vector3 {
        self.v1
    }

    /// Returns the minor semiaxis vector.
    #[must_use]
    pub fn minor_semiaxis(&self) -> Vector3 {
        self.v2
    }

    /// Returns the semi-major axis length `A`.
    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.v1.norm()
    }

    /// Returns the semi-minor axis length `B`.
    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.v2.norm()
    }

    /// Returns the normal `v1 x v2`.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.v1.cross(&self.v2)
    }

    /// Returns the linear eccentricity `F = sqrt(A^2 - B^2)`.
    #[must_use]
    pub fn linear_eccentricity(&self) -> f64 {
        (self.v1.norm_squared() - self.v2.norm_squared()).max(0.0).sqrt()
    }

    /// Returns the two foci, on the major axis at `center +- F * unit(v1)`.
    #[must_use]
    pub fn foci(&self) -> (Point3, Point3) {
        match self.v1.try_normalize(0.0) {
            Some(dir) => {
                let offset = dir * self.linear_eccentricity();
                (self.center + offset, self.center - offset)
            }
            None => (self.center, self.center),
        }
    }

    /// Returns the eccentricity `sqrt(1 - B^2 / A^2)`.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        let a2 = self.v1.norm_squared();
        if a2 == 0.0 {
            return 0.0;
        }
        (1.0 - self.v2.norm_squared() / a2).max(0.0).sqrt()
    }

    /// Returns the enclosed area `pi * A * B`.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.semi_major() * self.semi_minor()
    }

    /// Returns the perimeter using Ramanujan's approximation.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let (a, b) = (self.semi_major(), self.semi_minor());
        PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }

    /// Returns whether both semiaxes have the same length within tolerance.
    #[must_use]
    pub fn is_circular(&self, tol: Tolerance) -> bool {
        tol.scalars_eq(self.semi_major(), self.semi_minor())
    }

    /// Returns the supporting plane of the ellipse.
    #[must_use]
    pub fn plane(&self) -> Plane {
        Plane::through(self.center, self.normal().normalize())
    }

    /// Orthogonal projection of the ellipse onto a plane.
    ///
    /// The projected conjugate semiaxes are rotated into principal axes, so
    /// the result is again a well-formed ellipse. A plane perpendicular to
    /// the ellipse yields a flat ellipse with a zero minor semiaxis.
    #[must_use]
    pub fn projection_to(&self, plane: &Plane) -> Ellipse {
        project_ellipse(self, plane)
    }

    /// Intersects the ellipse with a plane.
    ///
    /// Returns the ellipse itself when it lies in the plane, a point when the
    /// plane touches it, a segment (chord) when the plane cuts it, and
    /// `None` otherwise.
    #[must_use]
    pub fn intersection_with_plane(&self, plane: &Plane, tol: Tolerance) -> Option<PlaneIntersection<Ellipse>> {
        ellipse_plane::intersect(self, plane, tol)
    }

    /// Renders the ellipse with coordinates expressed in `frame`.
    #[must_use]
    pub fn describe_in(&self, frame: &LocalFrame) -> String {
        format!(
            "Ellipse:\n  Center:     {}\n  Semiaxis A: {}\n  Semiaxis B: {}\n  Normal:     {}\n",
            format::point(&frame.point_to_local(&self.center)),
            format::vector(&frame.vector_to_local(&self.v1)),
            format::vector(&frame.vector_to_local(&self.v2)),
            format::vector(&frame.vector_to_local(&self.normal())),
        )
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Point3 {
        self.center + self.v1 * t.cos() + self.v2 * t.sin()
    }

    fn tangent(&self, t: f64) -> Vector3 {
        self.v2 * t.cos() - self.v1 * t.sin()
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// Circular ellipses compare as circles, so their axis orientation within
/// the plane is irrelevant. Otherwise both the major and the minor axes must
/// be parallel.
impl AbsDiffEq for Ellipse {
    type Epsilon = Tolerance;

    fn default_epsilon() -> Tolerance {
        Tolerance::default()
    }

    fn abs_diff_eq(&self, other: &Self, tol: Tolerance) -> bool {
        if self.is_circular(tol) && other.is_circular(tol) {
            let a = Circle::new(self.center, self.semi_major(), self.normal());
            let b = Circle::new(other.center, other.semi_major(), other.normal());
            return a.abs_diff_eq(&b, tol);
        }
        tol.points_eq(&self.center, &other.center)
            && tol.scalars_eq(self.semi_major(), other.semi_major())
            && tol.scalars_eq(self.semi_minor(), other.semi_minor())
            && is_parallel(&self.v1, &other.v1, tol)
            && is_parallel(&self.v2, &other.v2, tol)
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe_in(&LocalFrame::global()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn xy_ellipse(a: f64, b: f64) -> Ellipse {
        Ellipse::new(
            Point3::origin(),
            Vector3::new(a, 0.0, 0.0),
            Vector3::new(0.0, b, 0.0),
            Tolerance::default(),
        )
        .unwrap()
    }

    #[test]
    fn evaluate_at_zero() {
        let e = xy_ellipse(3.0, 2.0);
        assert_relative_eq!(e.evaluate(0.0), Point3::new(3.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn evaluate_at_pi_over_2() {
        let e = xy_ellipse(3.0, 2.0);
        assert_relative_eq!(e.evaluate(FRAC_PI_2), Point3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn tangent_at_zero() {
        let e = xy_ellipse(3.0, 2.0);
        // At t=0: dx = 0, dy = b => tangent is +Y
        assert_relative_eq!(e.tangent(0.0), Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn longer_semiaxis_becomes_major() {
        let e = xy_ellipse(1.0, 4.0);
        assert_relative_eq!(e.major_semiaxis(), Vector3::new(0.0, 4.0, 0.0));
        assert_relative_eq!(e.minor_semiaxis(), Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(e.semi_major(), 4.0);
        assert_relative_eq!(e.semi_minor(), 1.0);
    }

    #[test]
    fn non_orthogonal_semiaxes_rejected() {
        let r = Ellipse::new(
            Point3::origin(),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Tolerance::default(),
        );
        assert!(matches!(
            r,
            Err(crate::GeokernError::Geometry(GeometryError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn derived_quantities() {
        let e = xy_ellipse(5.0, 3.0);
        assert_relative_eq!(e.linear_eccentricity(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(e.eccentricity(), 0.8, epsilon = 1e-12);
        assert_relative_eq!(e.area(), 15.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(e.normal(), Vector3::new(0.0, 0.0, 15.0), epsilon = 1e-12);
        let (f1, f2) = e.foci();
        assert_relative_eq!(f1, Point3::new(4.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(f2, Point3::new(-4.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn focal_distance_sum_is_major_axis() {
        let e = xy_ellipse(5.0, 3.0);
        let (f1, f2) = e.foci();
        for p in e.samples(12) {
            assert_relative_eq!((p - f1).norm() + (p - f2).norm(), 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn ramanujan_perimeter() {
        // Circle: exact.
        assert_relative_eq!(xy_ellipse(2.0, 2.0).perimeter(), 4.0 * PI, epsilon = 1e-12);
        // a=5, b=3: reference value 25.526998863398...
        assert_relative_eq!(xy_ellipse(5.0, 3.0).perimeter(), 25.527, epsilon = 1e-3);
    }

    #[test]
    fn circle_is_special_case() {
        let e = xy_ellipse(2.0, 2.0);
        assert!(e.is_circular(Tolerance::default()));
        assert_relative_eq!(e.eccentricity(), 0.0);
        let (f1, f2) = e.foci();
        assert_relative_eq!(f1, f2);
    }

    #[test]
    fn equality_requires_axis_orientation() {
        let tol = Tolerance::default();
        let a = xy_ellipse(3.0, 2.0);
        let flipped = Ellipse::new(
            Point3::origin(),
            Vector3::new(-3.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            tol,
        )
        .unwrap();
        let turned = Ellipse::new(
            Point3::origin(),
            Vector3::new(0.0, 3.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            tol,
        )
        .unwrap();
        assert_abs_diff_eq!(a, a, epsilon = tol);
        assert_abs_diff_eq!(a, flipped, epsilon = tol);
        assert_abs_diff_eq!(flipped, a, epsilon = tol);
        assert!(!a.abs_diff_eq(&turned, tol));
        assert!(!turned.abs_diff_eq(&a, tol));
    }

    #[test]
    fn circular_equality_ignores_orientation() {
        let tol = Tolerance::default();
        let a = xy_ellipse(2.0, 2.0);
        let s = std::f64::consts::FRAC_1_SQRT_2 * 2.0;
        let b = Ellipse::new(
            Point3::origin(),
            Vector3::new(s, s, 0.0),
            Vector3::new(-s, s, 0.0),
            tol,
        )
        .unwrap();
        assert_abs_diff_eq!(a, b, epsilon = tol);
        assert_abs_diff_eq!(b, a, epsilon = tol);
    }

    #[test]
    fn display_layout() {
        let s = xy_ellipse(3.0, 2.0).to_string();
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Ellipse:");
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["Semiaxis", "A:", "3", "0", "0"]);
    }
}
