use crate::geometry::curve::Line;
use crate::geometry::surface::Plane;

use super::Tolerance;

/// Relationship between two planes.
#[derive(Debug, Clone)]
pub enum PlanePairRelation {
    /// Planes intersect along a line.
    IntersectionLine(Line),
    /// Planes are parallel but not coincident.
    Parallel { distance: f64 },
    /// Planes are the same (coincident).
    Coincident,
}

/// Computes the intersection of two planes.
///
/// Returns an [`IntersectionLine`](PlanePairRelation::IntersectionLine) when
/// the planes cross, [`Parallel`](PlanePairRelation::Parallel) when they
/// don't, or [`Coincident`](PlanePairRelation::Coincident) when they overlap.
#[must_use]
pub fn plane_plane_intersect(a: &Plane, b: &Plane, tol: Tolerance) -> PlanePairRelation {
    let na = a.normal();
    let nb = b.normal();

    let dir = na.cross(&nb);
    let dir_len = dir.norm();

    if tol.is_zero(dir_len) {
        // Normals are (anti-)parallel: planes are parallel or coincident.
        let dist = b.signed_distance(&a.origin()).abs();
        if tol.is_zero(dist) {
            PlanePairRelation::Coincident
        } else {
            PlanePairRelation::Parallel { distance: dist }
        }
    } else {
        // The point of the line nearest `oa` is `oa + d (dir x na) / |dir|^2`
        // with `d = nb.(ob - oa)`. `|dir|^2` equals `1 - (na.nb)^2` but keeps
        // its precision when the normals are nearly parallel.
        let d = nb.dot(&(b.origin() - a.origin()));
        let origin = a.origin() + dir.cross(&na) * (d / (dir_len * dir_len));
        let dir = dir / dir_len;

        PlanePairRelation::IntersectionLine(Line::through(origin, dir))
    }
}
