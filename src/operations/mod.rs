pub mod intersect;
pub mod project;
pub mod transform;

pub use intersect::{ChordCase, PlaneCase, PlaneIntersection};
pub use transform::RigidTransform;
