//! Direction helpers on top of `nalgebra` vectors.

use super::{Tolerance, Vector3};

/// Returns a unit vector orthogonal to `v`.
///
/// The companion is built by crossing `v` with whichever world axis is
/// furthest from it, so the result is well conditioned for any non-zero
/// input.
#[must_use]
pub fn orthogonal_vector(v: &Vector3) -> Vector3 {
    let reference = if v.x.abs() < 0.9 * v.norm() {
        Vector3::x()
    } else {
        Vector3::y()
    };
    v.cross(&reference).normalize()
}

/// Returns whether two directions are parallel (or anti-parallel).
///
/// Zero-length inputs have no direction and are never parallel to anything.
#[must_use]
pub fn is_parallel(a: &Vector3, b: &Vector3, tol: Tolerance) -> bool {
    let (la, lb) = (a.norm(), b.norm());
    if tol.is_zero(la) || tol.is_zero(lb) {
        return false;
    }
    tol.is_zero(a.cross(b).norm() / (la * lb))
}

/// Returns whether two directions are orthogonal.
#[must_use]
pub fn is_orthogonal(a: &Vector3, b: &Vector3, tol: Tolerance) -> bool {
    let (la, lb) = (a.norm(), b.norm());
    if tol.is_zero(la) || tol.is_zero(lb) {
        return false;
    }
    tol.is_zero(a.dot(b) / (la * lb))
}
