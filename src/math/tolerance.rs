use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// Absolute tolerance shared by every approximate comparison.
///
/// Values below it count as zero, and two scalars closer than it count as
/// equal. It is passed explicitly to each query so that comparisons never
/// depend on hidden state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not a positive finite number.
    pub fn new(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(GeometryError::InvalidArgument(format!(
                "tolerance must be positive and finite, got {eps}"
            ))
            .into());
        }
        Ok(Self(eps))
    }

    /// Returns the raw epsilon.
    #[must_use]
    pub fn eps(self) -> f64 {
        self.0
    }

    /// Returns whether `value` is within tolerance of zero.
    #[must_use]
    pub fn is_zero(self, value: f64) -> bool {
        value.abs() <= self.0
    }

    /// Returns whether two scalars are within tolerance of each other.
    #[must_use]
    pub fn scalars_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }

    /// Returns whether two points coincide within tolerance.
    #[must_use]
    pub fn points_eq(self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() <= self.0
    }

    /// Returns whether two vectors are component-wise equal within tolerance.
    #[must_use]
    pub fn vectors_eq(self, a: &Vector3, b: &Vector3) -> bool {
        (a - b).norm() <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(TOLERANCE)
    }
}
