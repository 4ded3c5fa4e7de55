//! Rotation representations.
//!
//! A rotation of 3D space can be encoded as an orthonormal matrix, an
//! axis-angle pair or a unit quaternion. The matrix is unique; the other two
//! are not. `(v, t)` and `(-v, -t)` describe the same rotation, as do `q`
//! and `-q`. At a half-turn `(v, pi)` and `(-v, pi)` coincide as well, so a
//! quaternion and its conjugate both encode it.
//!
//! Conversions always round-trip up to this equivalence, never necessarily
//! to the identical encoding. Use `is_equivalent` to compare rotations and
//! `approx::AbsDiffEq` to compare encodings.

mod axis_angle;
mod matrix;
mod quaternion;

pub use axis_angle::AxisAngle;
pub use matrix::RotationMatrix;
pub use quaternion::{ExtractionBranch, Quaternion};

use crate::error::{GeometryError, Result};
use crate::math::{Vector3, TOLERANCE};

/// Validates an axis-angle pair and returns the normalized axis.
fn unit_axis(axis: &Vector3, angle: f64) -> Result<Vector3> {
    if !axis.iter().all(|c| c.is_finite()) {
        return Err(GeometryError::InvalidArgument(format!(
            "rotation axis must be finite, got {axis:?}"
        ))
        .into());
    }
    if !angle.is_finite() {
        return Err(GeometryError::InvalidArgument(format!(
            "rotation angle must be finite, got {angle}"
        ))
        .into());
    }
    let len = axis.norm();
    if len < TOLERANCE {
        return Err(
            GeometryError::InvalidArgument("rotation axis must be non-zero".into()).into(),
        );
    }
    Ok(axis / len)
}
