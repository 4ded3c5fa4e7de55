use tracing::debug;

use crate::geometry::curve::{Circle, Segment};
use crate::geometry::surface::Plane;
use crate::math::{LocalFrame, Point3, Tolerance};

use super::{ChordCase, PlaneCase, PlaneIntersection};

/// Intersects a circle with a plane.
///
/// In the transversal case the circle is viewed in a frame centered on it
/// whose x axis runs along the planes' intersection line. That line is then
/// horizontal at height `y = p.y`, and comparing `|p.y|` with the radius
/// decides between a miss, a tangent point and a chord.
#[must_use]
pub fn intersect(circle: &Circle, plane: &Plane, tol: Tolerance) -> Option<PlaneIntersection<Circle>> {
    let line = match PlaneCase::classify(&circle.plane(), plane, tol) {
        PlaneCase::Coplanar => return Some(PlaneIntersection::Coincident(*circle)),
        PlaneCase::Parallel => return None,
        PlaneCase::Transversal(line) => line,
    };

    let normal = circle.normal().normalize();
    let dir = line.direction();
    let frame = LocalFrame::from_orthonormal(circle.center(), dir, normal.cross(&dir));
    let p = frame.point_to_local(&line.origin());
    let r = circle.radius();

    let case = ChordCase::classify(p.y.abs() - r, tol);
    debug!(offset = p.y, radius = r, ?case, "circle-plane chord");
    match case {
        ChordCase::Miss => None,
        ChordCase::Tangent => {
            let touch = Point3::new(0.0, r.copysign(p.y), 0.0);
            Some(PlaneIntersection::Point(frame.point_to_global(&touch)))
        }
        ChordCase::Secant => {
            let d = (r * r - p.y * p.y).sqrt();
            let start = frame.point_to_global(&Point3::new(-d, p.y, 0.0));
            let end = frame.point_to_global(&Point3::new(d, p.y, 0.0));
            Some(PlaneIntersection::Segment(Segment::new(start, end)))
        }
    }
}
