//! Rigid transforms: translation, rotation and reflection.
//!
//! Every transform returns a new value. Composite shapes transform each of
//! their defining points and vectors independently; lengths are preserved,
//! so radii and semiaxis lengths carry over unchanged.

use crate::geometry::curve::{Circle, Ellipse, Line, Segment};
use crate::geometry::surface::Plane;
use crate::math::{Point3, Vector3};
use crate::rotation::RotationMatrix;

/// Values that can be moved by a rigid motion or mirrored.
pub trait RigidTransform: Sized {
    /// Translates by `offset`.
    #[must_use]
    fn translate(&self, offset: &Vector3) -> Self;

    /// Rotates about `pivot`.
    #[must_use]
    fn rotate_about(&self, rotation: &RotationMatrix, pivot: &Point3) -> Self;

    /// Mirrors through a point.
    #[must_use]
    fn reflect_in_point(&self, center: &Point3) -> Self;

    /// Mirrors across a line (a half-turn about it).
    #[must_use]
    fn reflect_in_line(&self, line: &Line) -> Self;

    /// Mirrors across a plane.
    #[must_use]
    fn reflect_in_plane(&self, plane: &Plane) -> Self;

    /// Rotates about the global origin.
    #[must_use]
    fn rotate(&self, rotation: &RotationMatrix) -> Self {
        self.rotate_about(rotation, &Point3::origin())
    }
}

impl RigidTransform for Point3 {
    fn translate(&self, offset: &Vector3) -> Self {
        self + offset
    }

    fn rotate_about(&self, rotation: &RotationMatrix, pivot: &Point3) -> Self {
        pivot + rotation.transform_vector(&(self - pivot))
    }

    fn reflect_in_point(&self, center: &Point3) -> Self {
        center + (center - self)
    }

    fn reflect_in_line(&self, line: &Line) -> Self {
        let foot = line.project_point(self);
        foot + (foot - self)
    }

    fn reflect_in_plane(&self, plane: &Plane) -> Self {
        self - plane.normal() * (2.0 * plane.signed_distance(self))
    }
}

/// Vectors are free: translation and the pivot leave them unchanged.
impl RigidTransform for Vector3 {
    fn translate(&self, _offset: &Vector3) -> Self {
        *self
    }

    fn rotate_about(&self, rotation: &RotationMatrix, _pivot: &Point3) -> Self {
        rotation.transform_vector(self)
    }

    fn reflect_in_point(&self, _center: &Point3) -> Self {
        -self
    }

    fn reflect_in_line(&self, line: &Line) -> Self {
        let d = line.direction();
        d * (2.0 * d.dot(self)) - self
    }

    fn reflect_in_plane(&self, plane: &Plane) -> Self {
        let n = plane.normal();
        self - n * (2.0 * n.dot(self))
    }
}

impl RigidTransform for Line {
    fn translate(&self, offset: &Vector3) -> Self {
        Line::through(self.origin().translate(offset), self.direction())
    }

    fn rotate_about(&self, rotation: &RotationMatrix, pivot: &Point3) -> Self {
        Line::through(
            self.origin().rotate_about(rotation, pivot),
            self.direction().rotate_about(rotation, pivot),
        )
    }

    fn reflect_in_point(&self, center: &Point3) -> Self {
        Line::through(self.origin().reflect_in_point(center), -self.direction())
    }

    fn reflect_in_line(&self, line: &Line) -> Self {
        Line::through(self.origin().reflect_in_line(line), self.direction().reflect_in_line(line))
    }

    fn reflect_in_plane(&self, plane: &Plane) -> Self {
        Line::through(self.origin().reflect_in_plane(plane), self.direction().reflect_in_plane(plane))
    }
}

impl RigidTransform for Segment {
    fn translate(&self, offset: &Vector3) -> Self {
        Segment::new(self.start().translate(offset), self.end().translate(offset))
    }

    fn rotate_about(&self, rotation: &RotationMatrix, pivot: &Point3) -> Self {
        Segment::new(
            self.start().rotate_about(rotation, pivot),
            self.end().rotate_about(rotation, pivot),
        )
    }

    fn reflect_in_point(&self, center: &Point3) -> Self {
        Segment::new(self.start().reflect_in_point(center), self.end().reflect_in_point(center))
    }

    fn reflect_in_line(&self, line: &Line) -> Self {
        Segment::new(self.start().reflect_in_line(line), self.end().reflect_in_line(line))
    }

    fn reflect_in_plane(&self, plane: &Plane) -> Self {
        Segment::new(self.start().reflect_in_plane(plane), self.end().reflect_in_plane(plane))
    }
}

impl RigidTransform for Plane {
    fn translate(&self, offset: &Vector3) -> Self {
        Plane::through(self.origin().translate(offset), self.normal())
    }

    fn rotate_about(&self, rotation: &RotationMatrix, pivot: &Point3) -> Self {
        Plane::through(
            self.origin().rotate_about(rotation, pivot),
            self.normal().rotate_about(rotation, pivot),
        )
    }

    fn reflect_in_point(&self, center: &Point3) -> Self {
        Plane::through(self.origin().reflect_in_point(center), -self.normal())
    }

    fn reflect_in_line(&self, line: &Line) -> Self {
        Plane::through(self.origin().reflect_in_line(line), self.normal().reflect_in_line(line))
    }

    fn reflect_in_plane(&self, plane: &Plane) -> Self {
        Plane::through(self.origin().reflect_in_plane(plane), self.normal().reflect_in_plane(plane))
    }
}

impl RigidTransform for Circle {
    fn translate(&self, offset: &Vector3) -> Self {
        self.with_center(self.center().translate(offset))
    }

    fn rotate_about(&self, rotation: &RotationMatrix, pivot: &Point3) -> Self {
        Circle::new(
            self.center().rotate_about(rotation, pivot),
            self.radius(),
            self.normal().rotate_about(rotation, pivot),
        )
    }

    fn reflect_in_point(&self, center: &Point3) -> Self {
        Circle::new(self.center().reflect_in_point(center), self.radius(), -self.normal())
    }

    fn reflect_in_line(&self, line: &Line) -> Self {
        Circle::new(
            self.center().reflect_in_line(line),
            self.radius(),
            self.normal().reflect_in_line(line),
        )
    }

    fn reflect_in_plane(&self, plane: &Plane) -> Self {
        Circle::new(
            self.center().reflect_in_plane(plane),
            self.radius(),
            self.normal().reflect_in_plane(plane),
        )
    }
}

impl RigidTransform for Ellipse {
    fn translate(&self, offset: &Vector3) -> Self {
        Ellipse::from_axes(self.center().translate(offset), self.major_semiaxis(), self.minor_semiaxis())
    }

    fn rotate_about(&self, rotation: &RotationMatrix, pivot: &Point3) -> Self {
        Ellipse::from_axes(
            self.center().rotate_about(rotation, pivot),
            self.major_semiaxis().rotate_about(rotation, pivot),
            self.minor_semiaxis().rotate_about(rotation, pivot),
        )
    }

    fn reflect_in_point(&self, center: &Point3) -> Self {
        Ellipse::from_axes(
            self.center().reflect_in_point(center),
            -self.major_semiaxis(),
            -self.minor_semiaxis(),
        )
    }

    fn reflect_in_line(&self, line: &Line) -> Self {
        Ellipse::from_axes(
            self.center().reflect_in_line(line),
            self.major_semiaxis().reflect_in_line(line),
            self.minor_semiaxis().reflect_in_line(line),
        )
    }

    fn reflect_in_plane(&self, plane: &Plane) -> Self {
        Ellipse::from_axes(
            self.center().reflect_in_plane(plane),
            self.major_semiaxis().reflect_in_plane(plane),
            self.minor_semiaxis().reflect_in_plane(plane),
        )
    }
}
