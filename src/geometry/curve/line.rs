use crate::error::{GeometryError, Result};
use crate::math::{Point3, Tolerance, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// An infinite line defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::through(origin, direction / len))
    }

    /// Line through `origin` along an already normalized `direction`.
    pub(crate) fn through(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Orthogonal projection of a point onto the line.
    #[must_use]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        self.origin + self.direction * self.direction.dot(&(point - self.origin))
    }

    /// Returns whether the point lies on the line within tolerance.
    #[must_use]
    pub fn contains_point(&self, point: &Point3, tol: Tolerance) -> bool {
        tol.points_eq(&self.project_point(point), point)
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    fn tangent(&self, _t: f64) -> Vector3 {
        self.direction
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }
}
