//! Geometric objects in the Euclidean plane.

mod object;
pub mod objects;
mod transformation;

pub use object::Object;
pub use transformation::Transformation;
