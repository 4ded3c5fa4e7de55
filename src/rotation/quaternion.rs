use std::fmt;
use std::ops::{Mul, Neg};

use approx::AbsDiffEq;
use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Tolerance, Vector3, TOLERANCE};

use super::{unit_axis, AxisAngle, RotationMatrix};

/// Dot products above this are interpolated linearly in [`Quaternion::slerp`].
const SLERP_LINEAR_THRESHOLD: f64 = 1.0 - 1e-6;

/// A unit quaternion `w + xi + yj + zk` encoding a rotation.
///
/// `q` and `-q` encode the same rotation; see [`Quaternion::is_equivalent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    w: f64,
    x: f64,
    y: f64,
    z: f64,
}

/// Which component a matrix-to-quaternion extraction solves for first.
///
/// A positive trace selects `W`, since then `|w| > 1/2`. Otherwise the
/// largest diagonal entry selects `X`, `Y` or `Z`, whose component is then at
/// least `1/2` in magnitude. That component is recovered from a square root
/// and divides the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionBranch {
    /// Positive trace.
    W,
    /// Non-positive trace, `m[0][0]` is the largest diagonal entry.
    X,
    /// Non-positive trace, `m[1][1]` is the largest diagonal entry.
    Y,
    /// Non-positive trace, `m[2][2]` is the largest diagonal entry.
    Z,
}

impl ExtractionBranch {
    /// Selects the branch for a rotation matrix.
    #[must_use]
    pub fn classify(m: &Matrix3) -> Self {
        let (m00, m11, m22) = (m[(0, 0)], m[(1, 1)], m[(2, 2)]);
        if m00 + m11 + m22 > 0.0 {
            Self::W
        } else if m00 >= m11 && m00 >= m22 {
            Self::X
        } else if m11 >= m22 {
            Self::Y
        } else {
            Self::Z
        }
    }
}

impl Quaternion {
    /// Creates a quaternion from its components, normalizing to unit length.
    ///
    /// # Errors
    ///
    /// Returns an error if a component is not finite or all components are
    /// (near) zero.
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Result<Self> {
        if ![w, x, y, z].iter().all(|c| c.is_finite()) {
            return Err(GeometryError::InvalidArgument(format!(
                "quaternion components must be finite, got ({w}, {x}, {y}, {z})"
            ))
            .into());
        }
        let norm = (w * w + x * x + y * y + z * z).sqrt();
        if norm < TOLERANCE {
            return Err(GeometryError::InvalidArgument("quaternion must be non-zero".into()).into());
        }
        Ok(Self::from_components_unchecked(w / norm, x / norm, y / norm, z / norm))
    }

    fn from_components_unchecked(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Returns the identity rotation `(1, 0, 0, 0)`.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_components_unchecked(1.0, 0.0, 0.0, 0.0)
    }

    /// Builds the rotation by `angle` radians about `axis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is zero-length or any input is not
    /// finite.
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Result<Self> {
        Ok(Self::from_unit_axis_angle(&unit_axis(axis, angle)?, angle))
    }

    pub(crate) fn from_unit_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let (s, c) = (0.5 * angle).sin_cos();
        Self::from_components_unchecked(c, axis.x * s, axis.y * s, axis.z * s)
    }

    /// Extracts the quaternion of a rotation matrix.
    ///
    /// Uses the branch-on-trace scheme of [`ExtractionBranch`] so that no
    /// branch divides by a small number.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_rotation_matrix(rotation: &RotationMatrix) -> Self {
        let m = rotation.matrix();
        let branch = ExtractionBranch::classify(&m);
        trace!(?branch, "extracting quaternion from matrix");

        let (w, x, y, z) = match branch {
            ExtractionBranch::W => {
                let s = 2.0 * (1.0 + m[(0, 0)] + m[(1, 1)] + m[(2, 2)]).sqrt();
                (
                    0.25 * s,
                    (m[(2, 1)] - m[(1, 2)]) / s,
                    (m[(0, 2)] - m[(2, 0)]) / s,
                    (m[(1, 0)] - m[(0, 1)]) / s,
                )
            }
            ExtractionBranch::X => {
                let s = 2.0 * (1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt();
                (
                    (m[(2, 1)] - m[(1, 2)]) / s,
                    0.25 * s,
                    (m[(0, 1)] + m[(1, 0)]) / s,
                    (m[(0, 2)] + m[(2, 0)]) / s,
                )
            }
            ExtractionBranch::Y => {
                let s = 2.0 * (1.0 - m[(0, 0)] + m[(1, 1)] - m[(2, 2)]).sqrt();
                (
                    (m[(0, 2)] - m[(2, 0)]) / s,
                    (m[(0, 1)] + m[(1, 0)]) / s,
                    0.25 * s,
                    (m[(1, 2)] + m[(2, 1)]) / s,
                )
            }
            ExtractionBranch::Z => {
                let s = 2.0 * (1.0 - m[(0, 0)] - m[(1, 1)] + m[(2, 2)]).sqrt();
                (
                    (m[(1, 0)] - m[(0, 1)]) / s,
                    (m[(0, 2)] + m[(2, 0)]) / s,
                    (m[(1, 2)] + m[(2, 1)]) / s,
                    0.25 * s,
                )
            }
        };
        Self::from_components_unchecked(w, x, y, z).renormalized()
    }

    #[must_use]
    pub fn w(&self) -> f64 {
        self.w
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns the vector part `(x, y, z)`.
    #[must_use]
    pub fn vector_part(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns `(w, -x, -y, -z)`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::from_components_unchecked(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns `-q`, which encodes the same rotation.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_components_unchecked(-self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the inverse rotation. For a unit quaternion this is the
    /// conjugate.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.conjugate()
    }

    /// Four-dimensional dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Rotates a vector: `q v q*`.
    #[must_use]
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        // v' = v + 2w (u x v) + 2 u x (u x v), with u the vector part.
        let u = self.vector_part();
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(&t)
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other` (or `-other`).
    #[must_use]
    pub fn slerp(&self, other: &Self, t: f64) -> Self {
        let mut dot = self.dot(other);
        let other = if dot < 0.0 {
            dot = -dot;
            other.negated()
        } else {
            *other
        };

        let (a, b) = if dot > SLERP_LINEAR_THRESHOLD {
            (1.0 - t, t)
        } else {
            let theta = dot.acos();
            let sin_theta = theta.sin();
            (((1.0 - t) * theta).sin() / sin_theta, (t * theta).sin() / sin_theta)
        };
        Self::from_components_unchecked(
            self.w * a + other.w * b,
            self.x * a + other.x * b,
            self.y * a + other.y * b,
            self.z * a + other.z * b,
        )
        .renormalized()
    }

    /// Converts to a rotation matrix.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_matrix(&self) -> RotationMatrix {
        let Self { w, x, y, z } = *self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        #[rustfmt::skip]
        let m = Matrix3::new(
            1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz),       2.0 * (xz + wy),
            2.0 * (xy + wz),       1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx),
            2.0 * (xz - wy),       2.0 * (yz + wx),       1.0 - 2.0 * (xx + yy),
        );
        RotationMatrix::from_matrix_unchecked(m)
    }

    /// Converts to axis-angle form with the angle in `[0, pi]`.
    ///
    /// The identity maps to the z axis with angle zero.
    #[must_use]
    pub fn to_axis_angle(&self) -> AxisAngle {
        let q = if self.w < 0.0 { self.negated() } else { *self };
        let v = q.vector_part();
        let sin_half = v.norm();
        if sin_half < TOLERANCE {
            return AxisAngle::identity();
        }
        let angle = 2.0 * sin_half.atan2(q.w);
        AxisAngle::from_unit_axis_angle(v / sin_half, angle)
    }

    /// Returns whether both quaternions encode the same rotation, i.e.
    /// `self ~ other` or `self ~ -other` component-wise.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self, tol: Tolerance) -> bool {
        self.abs_diff_eq(other, tol) || self.abs_diff_eq(&other.negated(), tol)
    }

    fn renormalized(self) -> Self {
        let norm = self.dot(&self).sqrt();
        Self::from_components_unchecked(self.w / norm, self.x / norm, self.y / norm, self.z / norm)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

/// Hamilton product: `(a * b)` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        let (a, b) = (self, rhs);
        Self::from_components_unchecked(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
        .renormalized()
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        self.negated()
    }
}

/// Component-wise comparison. `q` and `-q` are not approximately equal.
impl AbsDiffEq for Quaternion {
    type Epsilon = Tolerance;

    fn default_epsilon() -> Tolerance {
        Tolerance::default()
    }

    fn abs_diff_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.scalars_eq(self.w, other.w) && tol.scalars_eq(self.x, other.x) && tol.scalars_eq(self.y, other.y) && tol.scalars_eq(self.z, other.z)
    }
}

impl From<RotationMatrix> for Quaternion {
    fn from(value: RotationMatrix) -> Self {
        Self::from_rotation_matrix(&value)
    }
}

impl From<AxisAngle> for Quaternion {
    fn from(value: AxisAngle) -> Self {
        value.to_quaternion()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn tol() -> Tolerance {
        Tolerance::new(1e-12).unwrap()
    }

    #[test]
    fn new_normalizes_and_rejects_zero() {
        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0).unwrap();
        assert!(q.abs_diff_eq(&Quaternion::identity(), tol()));
        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(q.w(), 0.5);
        assert!(Quaternion::new(0.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn non_finite_input_rejected() {
        assert!(Quaternion::new(f64::NAN, 0.0, 0.0, 1.0).is_err());
        assert!(Quaternion::new(1.0, f64::INFINITY, 0.0, 0.0).is_err());
        assert!(Quaternion::from_axis_angle(&Vector3::z(), f64::NAN).is_err());
    }

    #[test]
    fn rotates_like_its_matrix() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 2.0, -0.5), 1.1).unwrap();
        let v = Vector3::new(0.3, -4.0, 2.5);
        assert_relative_eq!(q.rotate_vector(&v), q.to_matrix().transform_vector(&v), epsilon = 1e-12);
    }

    #[test]
    fn hamilton_product_composes_rotations() {
        let a = Quaternion::from_axis_angle(&Vector3::x(), 0.7).unwrap();
        let b = Quaternion::from_axis_angle(&Vector3::y(), -0.4).unwrap();
        let lhs = (a * b).to_matrix();
        let rhs = a.to_matrix() * b.to_matrix();
        assert_abs_diff_eq!(lhs, rhs, epsilon = tol());
        assert!((a * a.inverse()).is_equivalent(&Quaternion::identity(), tol()));
    }

    #[test]
    fn branch_selection() {
        let cases = [
            (Quaternion::identity(), ExtractionBranch::W),
            (Quaternion::from_axis_angle(&Vector3::x(), PI).unwrap(), ExtractionBranch::X),
            (Quaternion::from_axis_angle(&Vector3::y(), PI).unwrap(), ExtractionBranch::Y),
            (Quaternion::from_axis_angle(&Vector3::z(), PI).unwrap(), ExtractionBranch::Z),
            // Trace is still positive although m[0][0] = 1 exceeds it.
            (Quaternion::from_axis_angle(&Vector3::x(), 2.0).unwrap(), ExtractionBranch::W),
        ];
        for (q, expected) in cases {
            assert_eq!(ExtractionBranch::classify(&q.to_matrix().matrix()), expected);
        }
    }

    #[test]
    fn matrix_round_trip_up_to_sign() {
        let quaternions = [
            Quaternion::identity(),
            Quaternion::new(0.1, 0.9, -0.3, 0.2).unwrap(),
            Quaternion::new(-0.2, 0.1, 0.95, 0.3).unwrap(),
            Quaternion::new(0.05, -0.2, 0.3, -0.9).unwrap(),
            Quaternion::new(0.7, 0.2, -0.5, 0.4).unwrap(),
            Quaternion::new(-0.6, -0.4, 0.3, 0.6).unwrap(),
        ];
        for q in quaternions {
            let back = Quaternion::from_rotation_matrix(&q.to_matrix());
            assert!(back.is_equivalent(&q, Tolerance::new(1e-10).unwrap()), "{q} -> {back}");
        }
    }

    #[test]
    fn equivalence_accepts_negation_only() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 1.0, 0.0), 0.5).unwrap();
        assert!(q.is_equivalent(&-q, tol()));
        assert!(!q.abs_diff_eq(&-q, tol()));
        assert!(!q.is_equivalent(&q.conjugate(), tol()));
    }

    #[test]
    fn axis_angle_extraction() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, -3.0), 0.8).unwrap();
        let aa = q.to_axis_angle();
        assert_relative_eq!(aa.angle(), 0.8, epsilon = 1e-12);
        assert_relative_eq!(aa.axis(), -Vector3::z(), epsilon = 1e-12);

        let id = Quaternion::identity().to_axis_angle();
        assert_relative_eq!(id.angle(), 0.0);
        assert_relative_eq!(id.axis(), Vector3::z());
    }

    #[test]
    fn slerp_endpoints_and_midpoint() {
        let a = Quaternion::identity();
        let b = Quaternion::from_axis_angle(&Vector3::z(), FRAC_PI_2).unwrap();
        assert!(a.slerp(&b, 0.0).abs_diff_eq(&a, tol()));
        assert!(a.slerp(&b, 1.0).abs_diff_eq(&b, tol()));
        let mid = Quaternion::from_axis_angle(&Vector3::z(), FRAC_PI_4).unwrap();
        assert!(a.slerp(&b, 0.5).abs_diff_eq(&mid, tol()));
    }

    #[test]
    fn slerp_takes_short_arc() {
        let a = Quaternion::identity();
        let b = -Quaternion::from_axis_angle(&Vector3::x(), 0.2).unwrap();
        let mid = a.slerp(&b, 0.5);
        let expected = Quaternion::from_axis_angle(&Vector3::x(), 0.1).unwrap();
        assert!(mid.is_equivalent(&expected, tol()));
    }
}
