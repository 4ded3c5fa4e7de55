use approx::AbsDiffEq;

use crate::math::{Point3, Tolerance, Vector3};

use super::{Curve, CurveDomain};

/// A bounded straight segment between two points.
///
/// Parametrized over `[0, 1]`: `P(t) = start + t * (end - start)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point3,
    end: Point3,
}

impl Segment {
    /// Creates a segment. Coincident endpoints are allowed.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point3 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point3 {
        self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.end - self.start
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        nalgebra::center(&self.start, &self.end)
    }
}

/// Two segments are equal when they join the same two points, in either
/// order.
impl AbsDiffEq for Segment {
    type Epsilon = Tolerance;

    fn default_epsilon() -> Tolerance {
        Tolerance::default()
    }

    fn abs_diff_eq(&self, other: &Self, tol: Tolerance) -> bool {
        (tol.points_eq(&self.start, &other.start) && tol.points_eq(&self.end, &other.end))
            || (tol.points_eq(&self.start, &other.end) && tol.points_eq(&self.end, &other.start))
    }
}

impl Curve for Segment {
    fn evaluate(&self, t: f64) -> Point3 {
        self.start + self.direction() * t
    }

    fn tangent(&self, _t: f64) -> Vector3 {
        self.direction()
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        false
    }
}
