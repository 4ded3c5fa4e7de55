pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod rotation;

pub use error::{GeokernError, GeometryError, Result};
