pub mod curve;
pub mod surface;

pub use curve::{Circle, Curve, CurveDomain, Ellipse, Line, Segment};
pub use surface::Plane;

use crate::math::vector::{is_orthogonal, is_parallel};
use crate::math::{Tolerance, Vector3};

/// How a flat object sits in space.
///
/// Linear objects carry a direction; planar objects (planes and the planar
/// conics) carry a normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attitude {
    /// Direction of a line or segment.
    Direction(Vector3),
    /// Normal of a plane, circle or ellipse.
    Normal(Vector3),
}

/// Parallelism and orthogonality between linear and planar objects.
pub trait Oriented {
    /// Returns the direction or normal that fixes the object's attitude.
    fn attitude(&self) -> Attitude;

    /// Returns whether `self` is parallel to `other`.
    ///
    /// A line is parallel to a plane when it is orthogonal to the plane's
    /// normal; two planar objects are parallel when their normals are.
    fn is_parallel_to<O: Oriented + ?Sized>(&self, other: &O, tol: Tolerance) -> bool {
        match (self.attitude(), other.attitude()) {
            (Attitude::Direction(a), Attitude::Direction(b))
            | (Attitude::Normal(a), Attitude::Normal(b)) => is_parallel(&a, &b, tol),
            (Attitude::Direction(d), Attitude::Normal(n))
            | (Attitude::Normal(n), Attitude::Direction(d)) => is_orthogonal(&d, &n, tol),
        }
    }

    /// Returns whether `self` is orthogonal to `other`.
    fn is_orthogonal_to<O: Oriented + ?Sized>(&self, other: &O, tol: Tolerance) -> bool {
        match (self.attitude(), other.attitude()) {
            (Attitude::Direction(a), Attitude::Direction(b))
            | (Attitude::Normal(a), Attitude::Normal(b)) => is_orthogonal(&a, &b, tol),
            (Attitude::Direction(d), Attitude::Normal(n))
            | (Attitude::Normal(n), Attitude::Direction(d)) => is_parallel(&d, &n, tol),
        }
    }
}

impl Oriented for Line {
    fn attitude(&self) -> Attitude {
        Attitude::Direction(self.direction())
    }
}

impl Oriented for Segment {
    fn attitude(&self) -> Attitude {
        Attitude::Direction(self.direction())
    }
}

impl Oriented for Plane {
    fn attitude(&self) -> Attitude {
        Attitude::Normal(self.normal())
    }
}

impl Oriented for Circle {
    fn attitude(&self) -> Attitude {
        Attitude::Normal(self.normal())
    }
}

impl Oriented for Ellipse {
    fn attitude(&self) -> Attitude {
        Attitude::Normal(self.normal())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn circle_against_line_and_plane() {
        let tol = Tolerance::default();
        let c = Circle::new(Point3::origin(), 2.0, Vector3::new(0.0, 0.0, 3.0));
        let x_line = Line::new(Point3::new(0.0, 0.0, 5.0), Vector3::x()).unwrap();
        let z_line = Line::new(Point3::origin(), Vector3::z()).unwrap();
        let xy = Plane::from_normal(Point3::new(0.0, 0.0, -1.0), Vector3::z()).unwrap();
        let xz = Plane::from_normal(Point3::origin(), Vector3::y()).unwrap();

        assert!(c.is_parallel_to(&x_line, tol));
        assert!(!c.is_parallel_to(&z_line, tol));
        assert!(c.is_orthogonal_to(&z_line, tol));
        assert!(c.is_parallel_to(&xy, tol));
        assert!(c.is_orthogonal_to(&xz, tol));
        assert!(!c.is_orthogonal_to(&xy, tol));
    }

    #[test]
    fn ellipse_against_segment() {
        let tol = Tolerance::default();
        let e = Ellipse::new(
            Point3::origin(),
            Vector3::new(3.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            tol,
        )
        .unwrap();
        let s = Segment::new(Point3::origin(), Point3::new(0.0, 0.0, -4.0));
        assert!(e.is_orthogonal_to(&s, tol));
        assert!(s.is_orthogonal_to(&e, tol));
        assert!(!e.is_parallel_to(&s, tol));
    }
}
