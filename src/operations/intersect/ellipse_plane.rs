use tracing::{debug, trace};

use crate::geometry::curve::{Ellipse, Segment};
use crate::geometry::surface::Plane;
use crate::math::{LocalFrame, Point3, Tolerance, Vector3};

use super::{ChordCase, PlaneCase, PlaneIntersection};

/// Slope beyond which the intersection line is treated as near-vertical in
/// the ellipse frame and the frame axes are swapped.
///
/// This is a numerical conditioning threshold with no geometric meaning;
/// any value that keeps `|m|` moderate works.
pub const STEEP_SLOPE_RATIO: f64 = 100.0;

/// Orientation of the ellipse frame used for the line-ellipse solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeCase {
    /// x along the major axis, y along the minor axis.
    Shallow,
    /// Axes swapped so that the line's slope stays bounded.
    Steep,
}

impl SlopeCase {
    /// Classifies a line direction `v` given in the major/minor frame.
    #[must_use]
    pub fn classify(v: &Vector3) -> Self {
        if v.y.abs() > STEEP_SLOPE_RATIO * v.x.abs() {
            Self::Steep
        } else {
            Self::Shallow
        }
    }
}

/// Intersects an ellipse with a plane.
///
/// In the transversal case the intersection line is written as
/// `y = m x + c` in the ellipse's principal frame and substituted into
/// `x^2/a^2 + y^2/b^2 = 1`. With `amb = a^2 m^2 + b^2`, the discriminant
/// `det = amb - c^2` decides between a miss, a tangent point and a chord.
#[must_use]
pub fn intersect(ellipse: &Ellipse, plane: &Plane, tol: Tolerance) -> Option<PlaneIntersection<Ellipse>> {
    let line = match PlaneCase::classify(&ellipse.plane(), plane, tol) {
        PlaneCase::Coplanar => return Some(PlaneIntersection::Coincident(*ellipse)),
        PlaneCase::Parallel => return None,
        PlaneCase::Transversal(line) => line,
    };

    let major = ellipse.major_semiaxis().normalize();
    let minor = ellipse.minor_semiaxis().normalize();
    let frame = LocalFrame::from_orthonormal(ellipse.center(), major, minor);
    let v = frame.vector_to_local(&line.direction());

    let slope_case = SlopeCase::classify(&v);
    let (frame, a, b) = match slope_case {
        SlopeCase::Shallow => (frame, ellipse.semi_major(), ellipse.semi_minor()),
        SlopeCase::Steep => {
            trace!("swapping ellipse frame axes for a steep line");
            (
                LocalFrame::from_orthonormal(ellipse.center(), minor, major),
                ellipse.semi_minor(),
                ellipse.semi_major(),
            )
        }
    };
    let v = frame.vector_to_local(&line.direction());
    let p = frame.point_to_local(&line.origin());

    let m = v.y / v.x;
    let c = p.y - m * p.x;
    let (a2, b2) = (a * a, b * b);
    let amb = a2 * m * m + b2;
    let det = amb - c * c;

    let case = ChordCase::classify(-det, tol);
    debug!(slope = m, intercept = c, det, ?slope_case, ?case, "ellipse-plane chord");
    match case {
        ChordCase::Miss => None,
        ChordCase::Tangent => {
            let touch = Point3::new(-a2 * m * c / amb, b2 * c / amb, 0.0);
            Some(PlaneIntersection::Point(frame.point_to_global(&touch)))
        }
        ChordCase::Secant => {
            let root = a * b * det.sqrt();
            let start = Point3::new((-a2 * m * c - root) / amb, (b2 * c - root * m) / amb, 0.0);
            let end = Point3::new((-a2 * m * c + root) / amb, (b2 * c + root * m) / amb, 0.0);
            Some(PlaneIntersection::Segment(Segment::new(
                frame.point_to_global(&start),
                frame.point_to_global(&end),
            )))
        }
    }
}
