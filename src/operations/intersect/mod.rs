//! Conic-plane intersection.
//!
//! Both conics share the same outer decision: is the conic's own plane
//! coincident with, parallel to, or crossing the cutting plane
//! ([`PlaneCase`]). In the crossing case the cut reduces to a planar line
//! meeting the conic, which misses, touches or cuts it ([`ChordCase`]).

pub mod circle_plane;
pub mod ellipse_plane;

use approx::AbsDiffEq;
use tracing::trace;

use crate::geometry::curve::{Line, Segment};
use crate::geometry::surface::Plane;
use crate::math::intersect_3d::{plane_plane_intersect, PlanePairRelation};
use crate::math::{Point3, Tolerance};

/// Result of intersecting a planar conic `C` with a plane.
///
/// "No intersection" is expressed as `None` around this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneIntersection<C> {
    /// The conic lies in the plane.
    Coincident(C),
    /// The plane touches the conic at a single point.
    Point(Point3),
    /// The plane cuts the conic along a chord.
    Segment(Segment),
}

/// Results are only equal when they are the same kind of answer.
impl<C: AbsDiffEq<Epsilon = Tolerance>> AbsDiffEq for PlaneIntersection<C> {
    type Epsilon = Tolerance;

    fn default_epsilon() -> Tolerance {
        Tolerance::default()
    }

    fn abs_diff_eq(&self, other: &Self, tol: Tolerance) -> bool {
        match (self, other) {
            (Self::Coincident(a), Self::Coincident(b)) => a.abs_diff_eq(b, tol),
            (Self::Point(a), Self::Point(b)) => tol.points_eq(a, b),
            (Self::Segment(a), Self::Segment(b)) => a.abs_diff_eq(b, tol),
            _ => false,
        }
    }
}

/// How a conic's supporting plane relates to the cutting plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneCase {
    /// Same plane: the conic itself is the intersection.
    Coplanar,
    /// Parallel, distinct planes: nothing is shared.
    Parallel,
    /// The planes cross along this line.
    Transversal(Line),
}

impl PlaneCase {
    /// Classifies the cutting plane against the conic's supporting plane.
    #[must_use]
    pub fn classify(support: &Plane, cutting: &Plane, tol: Tolerance) -> Self {
        let case = match plane_plane_intersect(support, cutting, tol) {
            PlanePairRelation::Coincident => Self::Coplanar,
            PlanePairRelation::Parallel { .. } => Self::Parallel,
            PlanePairRelation::IntersectionLine(line) => Self::Transversal(line),
        };
        trace!(?case, "classified conic plane");
        case
    }
}

/// How a line in the conic's plane meets the conic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordCase {
    /// The line passes outside the conic.
    Miss,
    /// The line touches the conic at one point.
    Tangent,
    /// The line crosses the conic at two points.
    Secant,
}

impl ChordCase {
    /// Classifies by `gap`, the signed amount by which the line clears the
    /// conic: positive outside, zero when tangent, negative inside.
    ///
    /// Tangency is decided against the tolerance, never by exact equality.
    #[must_use]
    pub fn classify(gap: f64, tol: Tolerance) -> Self {
        if tol.is_zero(gap) {
            Self::Tangent
        } else if gap > 0.0 {
            Self::Miss
        } else {
            Self::Secant
        }
    }
}
