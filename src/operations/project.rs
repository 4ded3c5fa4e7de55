//! Orthogonal projection of conics onto planes.

use std::f64::consts::FRAC_PI_2;

use crate::geometry::curve::Ellipse;
use crate::geometry::surface::Plane;

/// Projects an ellipse orthogonally onto a plane.
///
/// The semiaxes project to a pair of conjugate semi-diameters `f1`, `f2` of
/// the image ellipse, which are generally not orthogonal. The image is
/// `f1 cos t + f2 sin t`; its squared radius is extremal at
/// `t0 = atan2(2 f1.f2, f1.f1 - f2.f2) / 2`, and the semi-diameters at `t0`
/// and `t0 + pi/2` are the principal semiaxes.
#[must_use]
pub fn project_ellipse(ellipse: &Ellipse, plane: &Plane) -> Ellipse {
    let center = plane.project_point(&ellipse.center());
    let f1 = plane.project_point(&(ellipse.center() + ellipse.major_semiaxis())) - center;
    let f2 = plane.project_point(&(ellipse.center() + ellipse.minor_semiaxis())) - center;

    let t0 = 0.5 * (2.0 * f1.dot(&f2)).atan2(f1.dot(&f1) - f2.dot(&f2));
    let t1 = t0 + FRAC_PI_2;
    let v1 = f1 * t0.cos() + f2 * t0.sin();
    let v2 = f1 * t1.cos() + f2 * t1.sin();

    Ellipse::from_axes(center, v1, v2)
}
