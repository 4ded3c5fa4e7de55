use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::{plane_plane_intersect, PlanePairRelation};
use crate::math::vector::orthogonal_vector;
use crate::math::{Point3, Tolerance, Vector3, TOLERANCE};

/// An infinite plane in 3D space.
///
/// Defined by an origin point, and two orthogonal unit direction vectors
/// (`u_dir`, `v_dir`). The normal is `u_dir x v_dir`.
///
/// Parametric form: `P(u, v) = origin + u * u_dir + v * v_dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a new plane from an origin and two direction vectors.
    ///
    /// `v_dir` is orthogonalized against `u_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vectors are zero-length
    /// or parallel (degenerate plane).
    pub fn new(origin: Point3, u_dir: Vector3, v_dir: Vector3) -> Result<Self> {
        let u_len = u_dir.norm();
        if u_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        if v_dir.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let u_dir = u_dir / u_len;

        let normal = u_dir.cross(&v_dir);
        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(
                GeometryError::DegenerateInput("plane directions are parallel".into()).into(),
            );
        }
        let normal = normal / normal_len;

        Ok(Self {
            origin,
            u_dir,
            v_dir: normal.cross(&u_dir),
            normal,
        })
    }

    /// Creates a plane from an origin and a normal vector.
    ///
    /// The U and V directions are computed automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::through(origin, normal / len))
    }

    /// Creates the plane through three points.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are collinear.
    pub fn from_points(p1: Point3, p2: Point3, p3: Point3) -> Result<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        if normal.norm() < TOLERANCE {
            return Err(GeometryError::DegenerateInput(
                "points are collinear, no unique plane".into(),
            )
            .into());
        }
        Self::from_normal(p1, normal)
    }

    /// Plane through `origin` with an already normalized `normal`.
    pub(crate) fn through(origin: Point3, normal: Vector3) -> Self {
        let u_dir = orthogonal_vector(&normal);
        let v_dir = normal.cross(&u_dir);
        Self {
            origin,
            u_dir,
            v_dir,
            normal,
        }
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> Vector3 {
        self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> Vector3 {
        self.v_dir
    }

    /// Returns the unit normal vector of the plane.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Evaluates the plane at parameters `(u, v)`.
    #[must_use]
    pub fn evaluate(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.u_dir * u + self.v_dir * v
    }

    /// Signed distance from a point to the plane.
    /// Positive = on the normal side, negative = opposite.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&(point - self.origin))
    }

    /// Orthogonal projection of a point onto the plane.
    #[must_use]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Returns whether the point lies on the plane within tolerance.
    #[must_use]
    pub fn contains_point(&self, point: &Point3, tol: Tolerance) -> bool {
        tol.is_zero(self.signed_distance(point))
    }

    /// Intersects this plane with another.
    #[must_use]
    pub fn intersection_with_plane(&self, other: &Plane, tol: Tolerance) -> PlanePairRelation {
        plane_plane_intersect(self, other, tol)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn basis_is_orthonormal() {
        let plane = Plane::new(
            Point3::origin(),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(plane.u_dir(), Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(plane.v_dir(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(plane.normal(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn from_normal_builds_tangent_basis() {
        let plane = Plane::from_normal(Point3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 2.0, 2.0)).unwrap();
        let n = plane.normal();
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert!(plane.u_dir().dot(&n).abs() < 1e-12);
        assert!(plane.v_dir().dot(&n).abs() < 1e-12);
        assert!(plane.u_dir().dot(&plane.v_dir()).abs() < 1e-12);
    }

    #[test]
    fn from_points_rejects_collinear() {
        let r = Plane::from_points(
            Point3::origin(),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert!(r.is_err());
    }

    #[test]
    fn projection_lands_on_plane() {
        let plane = Plane::from_points(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        let q = plane.project_point(&Point3::new(4.0, -2.0, 9.0));
        assert!(plane.contains_point(&q, Tolerance::default()));
        assert!(!plane.contains_point(&Point3::origin(), Tolerance::default()));
    }

    #[test]
    fn zero_normal_rejected() {
        assert!(Plane::from_normal(Point3::origin(), Vector3::zeros()).is_err());
    }
}
