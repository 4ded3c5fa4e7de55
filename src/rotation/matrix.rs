use std::ops::Mul;

use approx::AbsDiffEq;

use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Point3, Tolerance, Vector3};

use super::{unit_axis, AxisAngle, Quaternion};

/// A rotation stored as a 3x3 orthonormal matrix with determinant +1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    m: Matrix3,
}

impl RotationMatrix {
    /// Wraps a matrix, checking that it is a proper rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if `m` is not orthonormal or its determinant is not
    /// +1 within tolerance.
    pub fn new(m: Matrix3, tol: Tolerance) -> Result<Self> {
        let deviation = (m.transpose() * m - Matrix3::identity()).amax();
        if !tol.is_zero(deviation) {
            return Err(GeometryError::InvalidArgument(format!(
                "matrix is not orthonormal (deviation {deviation:e})"
            ))
            .into());
        }
        let det = m.determinant();
        if !tol.scalars_eq(det, 1.0) {
            return Err(GeometryError::InvalidArgument(format!(
                "rotation matrix must have determinant +1, got {det}"
            ))
            .into());
        }
        Ok(Self { m })
    }

    /// Wraps a matrix already known to be a rotation.
    pub(crate) fn from_matrix_unchecked(m: Matrix3) -> Self {
        Self { m }
    }

    /// Returns the identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
        }
    }

    /// Builds the rotation by `angle` radians about `axis` (right-hand rule).
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is zero-length or any input is not
    /// finite.
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Result<Self> {
        Ok(Self::from_unit_axis_angle(&unit_axis(axis, angle)?, angle))
    }

    /// Rodrigues' formula for a unit `axis`.
    #[allow(clippy::many_single_char_names, clippy::suspicious_operation_groupings)]
    pub(crate) fn from_unit_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        #[rustfmt::skip]
        let m = Matrix3::new(
            t * x * x + c,     t * x * y - s * z, t * x * z + s * y,
            t * x * y + s * z, t * y * y + c,     t * y * z - s * x,
            t * x * z - s * y, t * y * z + s * x, t * z * z + c,
        );
        Self { m }
    }

    /// Returns a copy of the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> Matrix3 {
        self.m
    }

    /// Returns the determinant (+1 up to rounding).
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.m.determinant()
    }

    /// Returns the transposed matrix, which for a rotation is its inverse.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            m: self.m.transpose(),
        }
    }

    /// Returns the inverse rotation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.transpose()
    }

    /// Rotates a vector.
    #[must_use]
    pub fn transform_vector(&self, v: &Vector3) -> Vector3 {
        self.m * v
    }

    /// Rotates a point about the origin.
    #[must_use]
    pub fn transform_point(&self, p: &Point3) -> Point3 {
        self.m * p
    }

    /// Converts to a unit quaternion.
    #[must_use]
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_rotation_matrix(self)
    }

    /// Converts to axis-angle form with the angle in `[0, pi]`.
    #[must_use]
    pub fn to_axis_angle(&self) -> AxisAngle {
        self.to_quaternion().to_axis_angle()
    }

    /// Returns whether both matrices describe the same rotation.
    ///
    /// Matrices are unique, so this is element-wise comparison.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self, tol: Tolerance) -> bool {
        self.abs_diff_eq(other, tol)
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// Composition: `(a * b)` applies `b` first, then `a`.
impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        Self { m: self.m * rhs.m }
    }
}

impl Mul<Vector3> for RotationMatrix {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform_vector(&rhs)
    }
}

impl AbsDiffEq for RotationMatrix {
    type Epsilon = Tolerance;

    fn default_epsilon() -> Tolerance {
        Tolerance::default()
    }

    fn abs_diff_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.is_zero((self.m - other.m).amax())
    }
}

impl From<AxisAngle> for RotationMatrix {
    fn from(value: AxisAngle) -> Self {
        value.to_matrix()
    }
}

impl From<Quaternion> for RotationMatrix {
    fn from(value: Quaternion) -> Self {
        value.to_matrix()
    }
}
