use nalgebra::{IsometryMatrix3, Rotation3, Translation3};

use crate::error::{GeometryError, Result};

use super::{Point3, Tolerance, Vector3};

/// A right-handed orthonormal coordinate system placed in global space.
///
/// Local coordinates are expressed along the frame's `x`, `y` and `z` axes,
/// measured from its origin. Conics use short-lived frames to reduce a 3D
/// problem to a planar one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    local_to_global: IsometryMatrix3<f64>,
}

impl LocalFrame {
    /// Creates a frame from an origin, an x direction and a vector spanning
    /// the xy-plane together with it.
    ///
    /// `xy_vector` need not be orthogonal to `x_axis`; only its component
    /// perpendicular to `x_axis` is used. The z axis completes a right-handed
    /// basis.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_axis` is zero-length or `xy_vector` is parallel
    /// to it.
    pub fn new(origin: Point3, x_axis: Vector3, xy_vector: Vector3, tol: Tolerance) -> Result<Self> {
        let x_len = x_axis.norm();
        if tol.is_zero(x_len) {
            return Err(GeometryError::ZeroVector.into());
        }
        let x = x_axis / x_len;

        let y = xy_vector - x * x.dot(&xy_vector);
        let y_len = y.norm();
        if tol.is_zero(y_len) {
            return Err(GeometryError::DegenerateInput(
                "frame axes are parallel".into(),
            )
            .into());
        }
        Ok(Self::from_orthonormal(origin, x, y / y_len))
    }

    /// Frame from unit, mutually orthogonal `x` and `y` axes.
    pub(crate) fn from_orthonormal(origin: Point3, x: Vector3, y: Vector3) -> Self {
        let rotation = Rotation3::from_basis_unchecked(&[x, y, x.cross(&y)]);
        Self {
            local_to_global: IsometryMatrix3::from_parts(Translation3::from(origin.coords), rotation),
        }
    }

    /// Returns the global frame.
    #[must_use]
    pub fn global() -> Self {
        Self {
            local_to_global: IsometryMatrix3::identity(),
        }
    }

    /// Returns the frame origin in global coordinates.
    #[must_use]
    pub fn origin(&self) -> Point3 {
        Point3::from(self.local_to_global.translation.vector)
    }

    /// Returns the unit x axis in global coordinates.
    #[must_use]
    pub fn x_axis(&self) -> Vector3 {
        self.local_to_global.rotation.matrix().column(0).into_owned()
    }

    /// Returns the unit y axis in global coordinates.
    #[must_use]
    pub fn y_axis(&self) -> Vector3 {
        self.local_to_global.rotation.matrix().column(1).into_owned()
    }

    /// Returns the unit z axis in global coordinates.
    #[must_use]
    pub fn z_axis(&self) -> Vector3 {
        self.local_to_global.rotation.matrix().column(2).into_owned()
    }

    /// Expresses a global point in this frame.
    #[must_use]
    pub fn point_to_local(&self, p: &Point3) -> Point3 {
        self.local_to_global.inverse_transform_point(p)
    }

    /// Maps a point given in this frame back to global coordinates.
    #[must_use]
    pub fn point_to_global(&self, p: &Point3) -> Point3 {
        self.local_to_global.transform_point(p)
    }

    /// Expresses a global vector in this frame.
    #[must_use]
    pub fn vector_to_local(&self, v: &Vector3) -> Vector3 {
        self.local_to_global.inverse_transform_vector(v)
    }

    /// Maps a vector given in this frame back to global coordinates.
    #[must_use]
    pub fn vector_to_global(&self, v: &Vector3) -> Vector3 {
        self.local_to_global.transform_vector(v)
    }
}

impl Default for LocalFrame {
    fn default() -> Self {
        Self::global()
    }
}
