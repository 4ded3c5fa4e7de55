pub mod format;
pub mod frame;
pub mod intersect_3d;
pub mod tolerance;
pub mod vector;

pub use frame::LocalFrame;
pub use tolerance::Tolerance;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Default geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
