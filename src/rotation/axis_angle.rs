use std::f64::consts::{PI, TAU};
use std::fmt;

use approx::AbsDiffEq;

use crate::error::Result;
use crate::math::{Tolerance, Vector3};

use super::{unit_axis, Quaternion, RotationMatrix};

/// A rotation by `angle` radians about a unit `axis` (right-hand rule).
///
/// The angle is kept in `(-pi, pi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    axis: Vector3,
    angle: f64,
}

/// Wraps an angle into `(-pi, pi]`.
fn wrap_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

impl AxisAngle {
    /// Creates an axis-angle rotation. The axis is normalized and the angle
    /// wrapped into `(-pi, pi]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is zero-length or any input is not
    /// finite.
    pub fn new(axis: Vector3, angle: f64) -> Result<Self> {
        Ok(Self::from_unit_axis_angle(unit_axis(&axis, angle)?, angle))
    }

    pub(crate) fn from_unit_axis_angle(axis: Vector3, angle: f64) -> Self {
        Self {
            axis,
            angle: wrap_angle(angle),
        }
    }

    /// The identity rotation: zero angle about the z axis.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            axis: Vector3::z(),
            angle: 0.0,
        }
    }

    #[must_use]
    pub fn axis(&self) -> Vector3 {
        self.axis
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn to_matrix(&self) -> RotationMatrix {
        RotationMatrix::from_unit_axis_angle(&self.axis, self.angle)
    }

    #[must_use]
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_unit_axis_angle(&self.axis, self.angle)
    }

    /// Returns the opposite rotation about the same axis.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::from_unit_axis_angle(self.axis, -self.angle)
    }

    /// Returns whether both encode the same physical rotation.
    ///
    /// Unlike [`AbsDiffEq::abs_diff_eq`], this accepts `(v, t) ~ (-v, -t)` and,
    /// at a half-turn, `(v, pi) ~ (-v, pi)`.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self, tol: Tolerance) -> bool {
        self.to_matrix().abs_diff_eq(&other.to_matrix(), tol)
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::identity()
    }
}

/// Same axis and same angle.
impl AbsDiffEq for AxisAngle {
    type Epsilon = Tolerance;

    fn default_epsilon() -> Tolerance {
        Tolerance::default()
    }

    fn abs_diff_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.vectors_eq(&self.axis, &other.axis) && tol.scalars_eq(self.angle, other.angle)
    }
}

impl From<RotationMatrix> for AxisAngle {
    fn from(value: RotationMatrix) -> Self {
        value.to_axis_angle()
    }
}

impl From<Quaternion> for AxisAngle {
    fn from(value: Quaternion) -> Self {
        value.to_axis_angle()
    }
}

impl fmt::Display for AxisAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rad about ({}, {}, {})",
            self.angle, self.axis.x, self.axis.y, self.axis.z
        )
    }
}
