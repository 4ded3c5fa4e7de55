mod circle;
mod ellipse;
mod line;
mod segment;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use segment::Segment;

use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns the length of the parameter range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Returns whether both ends of the range are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.t_min.is_finite() && self.t_max.is_finite()
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Computes the derivative `dP/dt` at parameter `t`.
    fn tangent(&self, t: f64) -> Vector3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Lazily samples `count` evenly spaced points over the domain.
    ///
    /// Closed curves omit the end parameter, which would repeat the first
    /// point. Each call starts a fresh iterator. An unbounded domain has no
    /// even spacing, so such curves yield no samples.
    fn samples(&self, count: usize) -> Samples<'_, Self>
    where
        Self: Sized,
    {
        Samples {
            curve: self,
            index: 0,
            count: if self.domain().is_bounded() { count } else { 0 },
        }
    }
}

/// Iterator returned by [`Curve::samples`].
#[derive(Debug, Clone)]
pub struct Samples<'a, C> {
    curve: &'a C,
    index: usize,
    count: usize,
}

impl<C: Curve> Iterator for Samples<'_, C> {
    type Item = Point3;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<Point3> {
        if self.index >= self.count {
            return None;
        }
        let domain = self.curve.domain();
        let divisions = if self.curve.is_closed() || self.count == 1 {
            self.count
        } else {
            self.count - 1
        };
        let t = domain.t_min + domain.span() * self.index as f64 / divisions as f64;
        self.index += 1;
        Some(self.curve.evaluate(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<C: Curve> ExactSizeIterator for Samples<'_, C> {}
